use crate::Reflect;

/// A tagless union holding exactly one alternative.
pub trait Union: Reflect {
    /// Declaration index of the active alternative.
    fn active_index(&self) -> usize;

    /// The value of the active alternative.
    fn active(&self) -> &dyn Reflect;
}
