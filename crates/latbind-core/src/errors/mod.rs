//! Error types for modifier registration and validation.
//!
//! All failures are synchronous and raised at registration time, before the
//! engine ever invokes the callback. None are recoverable automatically.

mod modifier_error;

pub use modifier_error::ModifierError;

/// Result alias used across the workspace.
pub type LatbindResult<T> = std::result::Result<T, ModifierError>;
