use super::suit::Suit;
use crate::DUEL_GUILD_POINTS;

/// one card: a ranked common card in a suit, or a numbered guild card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Card {
    Common(Suit, u8),
    Guild(u8),
}

impl Card {
    /// points scored when captured.
    pub fn points(&self) -> u8 {
        match self {
            Self::Common(_, rank) => *rank,
            Self::Guild(_) => DUEL_GUILD_POINTS,
        }
    }
    pub fn is_guild(&self) -> bool {
        matches!(self, Self::Guild(_))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Common(suit, rank) => write!(f, "{}{}", suit, rank),
            Self::Guild(index) => write!(f, "G{}", index),
        }
    }
}
