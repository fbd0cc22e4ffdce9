/// the mover identity is fully abstracted. it is basically a marker trait:
/// the engine only ever asks whether two movers are the same, to decide
/// which perspective a value estimate belongs to.
pub trait Turn: Copy + Clone + PartialEq + Eq + std::hash::Hash + std::fmt::Debug {}
