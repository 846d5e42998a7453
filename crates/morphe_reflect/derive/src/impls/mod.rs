// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod enum_kind;
mod struct_kind;
mod union_kind;

mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use enum_kind::impl_enum;
use struct_kind::impl_struct;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;
use union_kind::impl_union;
