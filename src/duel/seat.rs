use crate::mcts::Turn;

/// the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Seat {
    North,
    South,
}

impl Seat {
    pub fn flip(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }
    /// tally index.
    pub fn index(&self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
        }
    }
}

impl Turn for Seat {}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "North"),
            Self::South => write!(f, "South"),
        }
    }
}
