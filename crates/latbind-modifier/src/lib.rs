//! # latbind-modifier
//!
//! Wraps user-supplied numeric callbacks into the engine's modifier
//! contracts, after validating their declared arguments and probing their
//! output once with synthetic inputs.
//!
//! ## Flow
//! 1. **Signature check** — declared names must be a subset of the kind's
//!    whitelist.
//! 2. **Wrapper construction** — a single parametrized [`Modifier`] carrying
//!    the callback, its argument names, its kind, and a display label.
//! 3. **Probe** — one synthetic call (length-10 half-precision arrays)
//!    verifying output count, shape, and complex policy.
//! 4. **Handoff** — the wrapper is given to the engine's registration slot
//!    for its kind; the engine calls `apply` during assembly.
//!
//! The probe uses fixed synthetic values and a fixed shape: callbacks whose
//! behavior depends on real physical argument ranges can pass validation and
//! still misbehave later. That is an accepted limitation of the scheme.

pub mod probe;
pub mod register;
pub mod signature;
pub mod wrapper;

pub use register::{hopping_energy, onsite_energy, site_position, site_state};
pub use wrapper::{Modifier, ModifierFn};
