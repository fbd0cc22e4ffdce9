use thiserror::Error;

/// failures the search loop can surface. statistics from iterations that
/// completed before the failure always remain intact and queryable; the
/// caller decides whether to call run() again.
#[derive(Debug, Error)]
pub enum SearchError {
    /// the rules engine reported a state with no legal moves that it
    /// refuses to call terminal. legality and termination have drifted
    /// apart and the search cannot proceed.
    #[error("rules contract violated: non-terminal state reports no legal moves")]
    RulesContract,
    /// a collaborator (rollout policy or oracle) failed. propagated
    /// unchanged, with no suppression or retry.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}
