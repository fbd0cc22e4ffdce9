use super::game::Duel;
use crate::Probability;
use crate::mcts::Game;
use crate::mcts::Oracle;

/// captured-material share as a crude win probability for the mover.
/// concealed cards and favors in flight are ignored; an untouched board
/// or an even split reads as a coin flip.
pub struct Material;

impl Oracle<Duel> for Material {
    fn value(&self, state: &Duel) -> anyhow::Result<Probability> {
        let us = state.tally(state.turn()) as Probability;
        let them = state.tally(state.turn().flip()) as Probability;
        match us + them == 0. {
            true => Ok(0.5),
            false => Ok(us / (us + them)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::determinize::Scripted;
    use crate::mcts::Determinizer;

    #[test]
    fn fresh_boards_are_coin_flips() {
        let game = Scripted.resolve(Duel::scripted(1));
        let value = Material.value(&game).expect("oracle evaluates");
        assert!(value == 0.5);
    }

    #[test]
    fn values_stay_in_range() {
        let mut game = Scripted.resolve(Duel::scripted(2));
        for _ in 0..6 {
            let legal = game.legal();
            match legal.first() {
                None => break,
                Some(edge) => game.apply(*edge),
            }
            let value = Material.value(&game).expect("oracle evaluates");
            assert!((0. ..=1.).contains(&value));
        }
    }
}
