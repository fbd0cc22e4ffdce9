use super::card::Card;
use super::suit::Suit;
use crate::Arbitrary;
use crate::DUEL_GUILD_CARDS;
use crate::DUEL_SUIT_RANKS;
use rand::Rng;
use rand::seq::SliceRandom;

/// the duel deck: every rank of every common suit plus the guild cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// all thirty cards in canonical order.
    pub fn full() -> Self {
        let mut cards = Suit::all()
            .into_iter()
            .flat_map(|suit| (1..=DUEL_SUIT_RANKS).map(move |rank| Card::Common(suit, rank)))
            .collect::<Vec<_>>();
        cards.extend((0..DUEL_GUILD_CARDS).map(Card::Guild));
        Self(cards)
    }
    /// a full deck in an order drawn from the given rng.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut deck = Self::full();
        deck.0.shuffle(rng);
        deck
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn into_cards(self) -> Vec<Card> {
        self.0
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        Self::shuffled(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn thirty_distinct_cards() {
        let deck = Deck::full();
        assert!(deck.cards().len() == 30);
        let distinct = deck.cards().iter().collect::<BTreeSet<_>>();
        assert!(distinct.len() == 30);
    }

    #[test]
    fn shuffling_is_a_permutation() {
        let full = Deck::full()
            .into_cards()
            .into_iter()
            .collect::<BTreeSet<_>>();
        let shuffled = Deck::random()
            .into_cards()
            .into_iter()
            .collect::<BTreeSet<_>>();
        assert!(full == shuffled);
    }
}
