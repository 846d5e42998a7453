use crate::Reflect;
use crate::info::Tag;

/// A member of a unit-only enum.
pub trait Enum: Reflect {
    /// Declaration index of the member.
    fn member_index(&self) -> usize;

    fn member_name(&self) -> &'static str;

    fn tag(&self) -> Tag;
}
