#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use morphe_reflect as reflect;

/// The most commonly used items, see [`reflect::prelude`].
pub mod prelude {
    pub use morphe_reflect::prelude::*;
}
