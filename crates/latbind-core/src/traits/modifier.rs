use crate::models::{ArrayValue, ModifierKind, ModifierReturn};

/// Capability contract the engine invokes during assembly.
///
/// A validated wrapper implements this; the engine calls `apply` with real
/// lattice-derived arguments, one value per whitelist position of the kind.
pub trait IModifier: Send + Sync {
    /// Which of the four engine capabilities this modifier targets.
    fn kind(&self) -> ModifierKind;

    /// Human-readable call-site description, for display and diagnostics.
    fn label(&self) -> &str;

    /// Argument names the underlying callback declared.
    fn argnames(&self) -> &[String];

    /// Invoke the callback with the declared subset of `args` and cast the
    /// result back to the dominant input dtype where applicable.
    fn apply(&self, args: &[ArrayValue]) -> ModifierReturn;

    /// Whether the callback produces complex values. Validation-time only.
    fn is_complex(&self) -> bool;
}
