use super::action::Action;
use super::boon::Boon;
use super::card::Card;
use super::deck::Deck;
use super::seat::Seat;
use super::slot::Slot;
use crate::Arbitrary;
use crate::DUEL_ROW_SLOTS;
use crate::DUEL_TRIBUTE_POINTS;
use crate::mcts::Game;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// the duel state. the row is dealt once at setup with every odd slot
/// face down; those cards were fixed by the deal script even though
/// nobody has seen them yet. the reserve pools hold the undealt
/// remainder and are drawn from through the state's own rng, so draft
/// outcomes stay random inside simulations instead of being pinned ahead
/// of time.
#[derive(Debug, Clone)]
pub struct Duel {
    row: Vec<Slot>,
    script: Option<Vec<Card>>,
    commons: Vec<Card>,
    guilds: Vec<Card>,
    tally: [u8; 2],
    seat: Seat,
    owed: bool,
    rng: SmallRng,
}

impl Duel {
    /// deterministic deal for reproducible games and tests.
    pub fn scripted(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::deal(deck, rng)
    }

    /// deal a row: even slots face up, odd slots face down but fixed. the
    /// script remembers the whole layout for later resolution.
    fn deal(deck: Deck, rng: SmallRng) -> Self {
        let script = deck
            .cards()
            .iter()
            .copied()
            .take(DUEL_ROW_SLOTS)
            .collect::<Vec<_>>();
        let row = script
            .iter()
            .copied()
            .enumerate()
            .map(|(slot, card)| match slot % 2 {
                0 => Slot::Up(card),
                _ => Slot::Down(None),
            })
            .collect();
        Self {
            row,
            script: Some(script),
            commons: vec![],
            guilds: vec![],
            tally: [0, 0],
            seat: Seat::North,
            owed: false,
            rng,
        }
    }

    pub fn row(&self) -> &[Slot] {
        &self.row
    }
    pub fn tally(&self, seat: Seat) -> u8 {
        self.tally[seat.index()]
    }
    pub fn script(&self) -> Option<&[Card]> {
        self.script.as_deref()
    }
    pub fn commons(&self) -> &[Card] {
        &self.commons
    }
    pub fn guilds(&self) -> &[Card] {
        &self.guilds
    }

    /// consume the deal script, if any.
    pub(crate) fn unscript(&mut self) -> Option<Vec<Card>> {
        self.script.take()
    }
    /// bind a face-down slot to its scripted card.
    pub(crate) fn reveal(&mut self, slot: usize, card: Card) {
        if let Slot::Down(None) = self.row[slot] {
            self.row[slot] = Slot::Down(Some(card));
        }
    }
    /// install the reserve pools.
    pub(crate) fn pool(&mut self, commons: Vec<Card>, guilds: Vec<Card>) {
        self.commons = commons;
        self.guilds = guilds;
    }

    /// end-most occupied slots, left then right.
    fn ends(&self) -> Vec<usize> {
        let left = self.row.iter().position(|slot| slot.occupied());
        let right = self.row.iter().rposition(|slot| slot.occupied());
        match (left, right) {
            (Some(l), Some(r)) if l == r => vec![l],
            (Some(l), Some(r)) => vec![l, r],
            _ => vec![],
        }
    }
}

impl Game for Duel {
    type T = Seat;
    type E = Action;

    fn turn(&self) -> Seat {
        self.seat
    }

    fn legal(&self) -> Vec<Action> {
        match (self.over(), self.owed) {
            (true, _) => vec![],
            (_, true) => match self.commons.is_empty() {
                true => vec![Action::Favor(Boon::Tribute)],
                false => vec![Action::Favor(Boon::Tribute), Action::Favor(Boon::Draft)],
            },
            (_, false) => self.ends().into_iter().map(Action::Take).collect(),
        }
    }

    fn apply(&mut self, edge: Action) {
        match edge {
            Action::Take(slot) => {
                let card = match self.row[slot] {
                    Slot::Up(card) => card,
                    Slot::Down(Some(card)) => card,
                    Slot::Down(None) => unreachable!("concealed slot taken before resolution"),
                    Slot::Empty => unreachable!("empty slot taken"),
                };
                self.row[slot] = Slot::Empty;
                self.tally[self.seat.index()] += card.points();
                match card.is_guild() {
                    true => self.owed = true,
                    false => self.seat = self.seat.flip(),
                }
            }
            Action::Favor(Boon::Tribute) => {
                self.tally[self.seat.index()] += DUEL_TRIBUTE_POINTS;
                self.owed = false;
                self.seat = self.seat.flip();
            }
            Action::Favor(Boon::Draft) => {
                let draw = self.rng.random_range(0..self.commons.len());
                let card = self.commons.swap_remove(draw);
                self.tally[self.seat.index()] += card.points();
                self.owed = false;
                self.seat = self.seat.flip();
            }
        }
    }

    fn over(&self) -> bool {
        !self.owed && self.row.iter().all(|slot| !slot.occupied())
    }

    fn leader(&self) -> Option<Seat> {
        match self.over() {
            false => None,
            true => match self.tally[0].cmp(&self.tally[1]) {
                std::cmp::Ordering::Greater => Some(Seat::North),
                std::cmp::Ordering::Less => Some(Seat::South),
                std::cmp::Ordering::Equal => None,
            },
        }
    }
}

impl Arbitrary for Duel {
    /// a freshly dealt random duel.
    fn random() -> Self {
        let mut rng = SmallRng::from_rng(&mut rand::rng());
        let deck = Deck::shuffled(&mut rng);
        Self::deal(deck, rng)
    }
}

impl std::fmt::Display for Duel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.row {
            write!(f, "{}", slot)?;
        }
        writeln!(f)?;
        write!(
            f,
            "North {:>2} · South {:>2} · {} to move",
            self.tally[0], self.tally[1], self.seat
        )?;
        match self.owed {
            true => write!(f, " (favor owed)"),
            false => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::action::Favors;
    use crate::duel::determinize::Scripted;
    use crate::duel::oracle::Material;
    use crate::duel::suit::Suit;
    use crate::mcts::Determinizer;
    use crate::mcts::Edge;
    use crate::mcts::Engine;
    use crate::mcts::Settings;
    use crate::mcts::Uniform;

    fn fixture(row: Vec<Slot>, commons: Vec<Card>) -> Duel {
        Duel {
            row,
            script: None,
            commons,
            guilds: vec![],
            tally: [0, 0],
            seat: Seat::North,
            owed: false,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    #[test]
    fn takes_come_from_the_ends() {
        let game = fixture(
            vec![
                Slot::Up(Card::Common(Suit::Blades, 1)),
                Slot::Up(Card::Common(Suit::Blades, 2)),
                Slot::Up(Card::Common(Suit::Blades, 3)),
            ],
            vec![],
        );
        assert!(game.legal() == vec![Action::Take(0), Action::Take(2)]);
    }

    #[test]
    fn lone_slot_offers_one_take() {
        let game = fixture(
            vec![
                Slot::Empty,
                Slot::Up(Card::Common(Suit::Coins, 4)),
                Slot::Empty,
            ],
            vec![],
        );
        assert!(game.legal() == vec![Action::Take(1)]);
    }

    #[test]
    fn guild_capture_owes_a_favor() {
        let mut game = fixture(
            vec![Slot::Up(Card::Guild(0))],
            vec![Card::Common(Suit::Sigils, 4)],
        );
        game.apply(Action::Take(0));
        assert!(game.turn() == Seat::North);
        assert!(!game.over());
        assert!(
            game.legal() == vec![Action::Favor(Boon::Tribute), Action::Favor(Boon::Draft)]
        );
        game.apply(Action::Favor(Boon::Draft));
        assert!(game.tally(Seat::North) == 5 + 4);
        assert!(game.turn() == Seat::South);
        assert!(game.over());
        assert!(game.leader() == Some(Seat::North));
    }

    #[test]
    fn tribute_scores_flat_points() {
        let mut game = fixture(vec![Slot::Up(Card::Guild(3))], vec![]);
        game.apply(Action::Take(0));
        assert!(game.legal() == vec![Action::Favor(Boon::Tribute)]);
        game.apply(Action::Favor(Boon::Tribute));
        assert!(game.tally(Seat::North) == 5 + 2);
    }

    #[test]
    fn equal_tallies_tie() {
        let mut game = fixture(vec![Slot::Up(Card::Common(Suit::Blades, 2))], vec![]);
        game.tally = [0, 2];
        game.apply(Action::Take(0));
        assert!(game.over());
        assert!(game.leader().is_none());
    }

    #[test]
    fn keys_survive_independent_clones() {
        let truth = Scripted.resolve(Duel::scripted(5));
        let keys = |game: &Duel| {
            game.legal()
                .into_iter()
                .map(|edge| edge.key())
                .collect::<Vec<_>>()
        };
        let mut a = truth.clone();
        let mut b = truth.clone();
        assert!(keys(&a) == keys(&b));
        let edge = a.legal()[0];
        a.apply(edge);
        b.apply(edge);
        assert!(keys(&a) == keys(&b));
    }

    #[test]
    fn plays_itself_to_completion() {
        let truth = Scripted.resolve(Duel::scripted(11));
        let mut game = truth.clone();
        let mut engine = Engine::from((truth, Scripted, Uniform::seeded(11), Material, Favors));
        let settings = Settings {
            simulations: 64,
            horizon: Some(16),
            ..Settings::default()
        };
        for _ in 0..100 {
            if game.over() {
                break;
            }
            engine.run(&settings).expect("search completes");
            let edge = engine.advice().expect("searched root has rated children");
            assert!(game.legal().contains(&edge));
            game.apply(edge);
            engine.shrink(edge, game.clone());
        }
        assert!(game.over());
        assert!(game.tally(Seat::North) + game.tally(Seat::South) > 0);
    }
}
