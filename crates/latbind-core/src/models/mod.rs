//! Data model shared between the adapter and the engine boundary.
//!
//! The engine traffics in flat per-site (or per-hopping) arrays; everything
//! here models those arrays, their element-type families, and the fixed
//! modifier kinds.

mod array_value;
mod dtype;
mod modifier_kind;
mod modifier_return;

pub use array_value::ArrayValue;
pub use dtype::Dtype;
pub use modifier_kind::ModifierKind;
pub use modifier_return::ModifierReturn;
