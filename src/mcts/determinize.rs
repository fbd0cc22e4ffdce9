use super::game::Game;

/// resolves hidden-but-already-fixed information at the root: every slot
/// whose identity was sealed by an earlier deal gets bound to its true
/// value, and whatever remains genuinely undrawn is left to the rules
/// engine's own randomization, never fabricated here. runs exactly once,
/// at engine construction or full rebuild, never mid-search.
pub trait Determinizer<G: Game> {
    fn resolve(&self, state: G) -> G;
}

/// pass-through for games whose states are already fully known.
pub struct Known;

impl<G: Game> Determinizer<G> for Known {
    fn resolve(&self, state: G) -> G {
        state
    }
}
