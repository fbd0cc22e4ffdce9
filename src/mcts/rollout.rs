use super::game::Game;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// move selection inside a playout. the default is uniform random; callers
/// plug in learned or heuristic policies here. failures propagate unchanged
/// out of the search loop.
pub trait Rollout<G: Game> {
    fn choose(&mut self, state: &G, legal: &[G::E]) -> anyhow::Result<G::E>;
}

/// uniform-random playouts from a seedable rng.
pub struct Uniform {
    rng: SmallRng,
}

impl Uniform {
    /// deterministic playout stream for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl<G: Game> Rollout<G> for Uniform {
    fn choose(&mut self, _: &G, legal: &[G::E]) -> anyhow::Result<G::E> {
        anyhow::ensure!(!legal.is_empty(), "no legal moves to sample");
        Ok(legal[self.rng.random_range(0..legal.len())])
    }
}
