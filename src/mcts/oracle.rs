use super::game::Game;
use crate::Probability;

/// value estimation for positions a playout could not carry to completion.
/// the estimate is the win probability of the *state's own mover*; the
/// engine handles any perspective flip. consulted only on non-terminal,
/// depth-cutoff states. failures propagate unchanged out of the search loop.
pub trait Oracle<G: Game> {
    fn value(&self, state: &G) -> anyhow::Result<Probability>;
}

/// the indifferent oracle: every truncated position is a coin flip.
pub struct Agnostic;

impl<G: Game> Oracle<G> for Agnostic {
    fn value(&self, _: &G) -> anyhow::Result<Probability> {
        Ok(0.5)
    }
}
