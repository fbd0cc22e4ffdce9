/// one legal move, abstracted behind its canonical identity.
///
/// two edges that represent the same logical move must compare equal and
/// report the same key, even when they were produced from independently
/// cloned states. implementors are closed tagged-variant types, so value
/// equality and the packed key never drift apart the way stringified
/// identities can; `a == b ⟺ a.key() == b.key()` is part of the contract.
pub trait Edge:
    Copy
    + Clone
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + std::hash::Hash
    + std::fmt::Debug
{
    /// canonical, stable identity of this move.
    fn key(&self) -> u32;
}
