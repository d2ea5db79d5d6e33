//! # latbind-core
//!
//! Foundation crate for the latbind modifier layer.
//! Defines the dtype families and array values exchanged with the simulation
//! engine, the four modifier kinds with their argument whitelists, errors,
//! probe configuration, and the engine-facing traits.
//! The adapter crate (`latbind-modifier`) depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ProbeConfig;
pub use errors::{LatbindResult, ModifierError};
pub use models::{ArrayValue, Dtype, ModifierKind, ModifierReturn};
pub use traits::{IModifier, IModifierHost};
