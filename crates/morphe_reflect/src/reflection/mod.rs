mod from_reflect;
mod reflect;

pub use from_reflect::FromReflect;
pub use reflect::Reflect;
