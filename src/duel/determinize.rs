use super::card::Card;
use super::deck::Deck;
use super::game::Duel;
use crate::mcts::Determinizer;

/// binds every face-down slot to the card the deal script fixed for it,
/// then partitions the never-dealt remainder into the per-category
/// reserve pools, consistent with everything bound. draft randomness is
/// left to the state's own rng; nothing here guesses. already-resolved
/// states pass through untouched.
pub struct Scripted;

impl Determinizer<Duel> for Scripted {
    fn resolve(&self, mut state: Duel) -> Duel {
        let Some(script) = state.unscript() else {
            return state;
        };
        for (slot, card) in script.iter().copied().enumerate() {
            state.reveal(slot, card);
        }
        let (guilds, commons) = Deck::full()
            .into_cards()
            .into_iter()
            .filter(|card| !script.contains(card))
            .partition::<Vec<Card>, _>(|card| card.is_guild());
        state.pool(commons, guilds);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DUEL_ROW_SLOTS;
    use crate::duel::slot::Slot;

    #[test]
    fn binds_every_concealed_slot() {
        let dealt = Duel::scripted(7);
        assert!(dealt.script().is_some());
        assert!(
            dealt
                .row()
                .iter()
                .any(|slot| matches!(slot, Slot::Down(None)))
        );
        let resolved = Scripted.resolve(dealt);
        assert!(resolved.script().is_none());
        assert!(
            !resolved
                .row()
                .iter()
                .any(|slot| matches!(slot, Slot::Down(None)))
        );
    }

    #[test]
    fn pools_hold_the_undealt_remainder() {
        let resolved = Scripted.resolve(Duel::scripted(7));
        let pooled = resolved.commons().len() + resolved.guilds().len();
        assert!(pooled == Deck::full().cards().len() - DUEL_ROW_SLOTS);
        assert!(resolved.commons().iter().all(|card| !card.is_guild()));
        assert!(resolved.guilds().iter().all(|card| card.is_guild()));
        for slot in resolved.row() {
            if let Slot::Up(card) | Slot::Down(Some(card)) = slot {
                assert!(!resolved.commons().contains(card));
                assert!(!resolved.guilds().contains(card));
            }
        }
    }

    #[test]
    fn resolved_states_pass_through() {
        let resolved = Scripted.resolve(Duel::scripted(7));
        let row = resolved.row().to_vec();
        let again = Scripted.resolve(resolved);
        assert!(again.row().to_vec() == row);
    }
}
