use super::edge::Edge;
use crate::Probability;
use crate::Utility;

/// one step along the principal line.
#[derive(Debug, Clone, Copy)]
pub struct Milestone<E: Edge> {
    pub edge: E,
    pub rate: Probability,
    pub wins: Utility,
    pub visits: usize,
}

/// the principal line: the chain of best perspective-adjusted children
/// walked down from the root. inspection only; building one never touches
/// tree state.
#[derive(Debug, Clone)]
pub struct Line<E: Edge>(Vec<Milestone<E>>);

impl<E: Edge> From<Vec<Milestone<E>>> for Line<E> {
    fn from(steps: Vec<Milestone<E>>) -> Self {
        Self(steps)
    }
}

impl<E: Edge> Line<E> {
    pub fn steps(&self) -> &[Milestone<E>] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[rustfmt::skip]
impl<E: Edge> std::fmt::Display for Line<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌───────┬────────────┬──────────┬──────────┬──────────┐")?;
        writeln!(f, "│ Depth │       Move │     Rate │     Wins │   Visits │")?;
        writeln!(f, "├───────┼────────────┼──────────┼──────────┼──────────┤")?;
        for (depth, step) in self.0.iter().enumerate() {
            writeln!(
                f,
                "│ {:>5} │ {:>10} │ {:>8.3} │ {:>8.2} │ {:>8} │",
                depth + 1,
                format!("{:?}", step.edge),
                step.rate,
                step.wins,
                step.visits,
            )?;
        }
        writeln!(f, "└───────┴────────────┴──────────┴──────────┴──────────┘")
    }
}
