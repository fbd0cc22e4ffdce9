use crate::SEARCH_EXPLORATION;
use crate::SEARCH_PLAYOUTS;
use crate::SEARCH_SIMULATION_BUDGET;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// run-time budgets and tuning knobs for one call to Engine::run. every
/// field is independently overridable: start from default() and use struct
/// update syntax for the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// exploration coefficient in the selection score
    /// rate + exploration * sqrt(parent visits) / (child visits + 1).
    pub exploration: f32,
    /// independent playouts averaged per selected leaf. the average always
    /// propagates with unit weight, so raising this sharpens the leaf
    /// estimate without inflating visit counts; retune exploration with
    /// that in mind.
    pub playouts: usize,
    /// move-count cutoff per playout. None runs every playout to
    /// termination; Some(n) hands the truncated state to the oracle.
    pub horizon: Option<usize>,
    /// iteration budget, checked once per completed iteration.
    pub simulations: usize,
    /// wall-clock budget, checked once per completed iteration. a slow
    /// collaborator is never preempted mid-iteration, and even a zero
    /// budget completes one iteration.
    pub budget: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exploration: SEARCH_EXPLORATION,
            playouts: SEARCH_PLAYOUTS,
            horizon: None,
            simulations: SEARCH_SIMULATION_BUDGET,
            budget: None,
        }
    }
}
