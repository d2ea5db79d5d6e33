//! Trait seams between the adapter and the opaque simulation engine.

mod host;
mod modifier;

pub use host::IModifierHost;
pub use modifier::IModifier;
