/// bonuses granted by a guild capture. the capturing player picks one
/// before the turn passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Boon {
    /// immediate points.
    Tribute,
    /// a random card out of the common reserve.
    Draft,
}
