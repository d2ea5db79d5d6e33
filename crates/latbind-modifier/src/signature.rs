//! Declared-argument validation against a kind's whitelist.

use latbind_core::errors::{LatbindResult, ModifierError};
use latbind_core::models::ModifierKind;

/// Check that every declared argument name appears in the kind's whitelist.
///
/// Fails with [`ModifierError::UnexpectedArguments`] naming the offending
/// names and the permitted set. No side effects beyond the check.
pub fn check(declared: &[&str], kind: ModifierKind) -> LatbindResult<()> {
    let whitelist = kind.whitelist();
    let unexpected: Vec<&str> = declared
        .iter()
        .copied()
        .filter(|name| !whitelist.contains(name))
        .collect();

    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(ModifierError::UnexpectedArguments {
            unexpected: unexpected.join(", "),
            expected: whitelist.join(", "),
        })
    }
}
