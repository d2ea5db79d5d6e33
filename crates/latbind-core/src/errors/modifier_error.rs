/// Registration-time errors for user-supplied modifiers.
#[derive(Debug, thiserror::Error)]
pub enum ModifierError {
    #[error("unexpected argument(s) in modifier: {unexpected}; arguments must be any of: {expected}")]
    UnexpectedArguments { unexpected: String, expected: String },

    #[error("modifier '{label}' must return arrays, got a non-array value")]
    NotArrayLike { label: String },

    #[error("modifier expected to return {expected} array(s), but got {got}")]
    WrongReturnCount { expected: usize, got: usize },

    #[error("modifier must return arrays with the same shape as its arguments: expected length {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("modifier '{label}' must not return complex values")]
    ComplexNotAllowed { label: String },

    #[error("modifier kind mismatch: this slot takes {expected:?}, got {got:?}")]
    KindMismatch {
        expected: crate::models::ModifierKind,
        got: crate::models::ModifierKind,
    },
}
