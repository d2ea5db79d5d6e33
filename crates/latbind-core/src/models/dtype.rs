use serde::{Deserialize, Serialize};

/// Element-type family of an engine array.
///
/// `F16`/`F32`/`F64` form the real kind, `C64` the complex kind. Casting
/// rules between kinds live on [`crate::models::ArrayValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dtype {
    /// Half-precision float (probe dtype).
    F16,
    /// Single-precision float.
    F32,
    /// Double-precision float.
    F64,
    /// Double-precision complex.
    C64,
}

impl Dtype {
    /// Whether values of this dtype carry an imaginary part.
    pub fn is_complex(&self) -> bool {
        matches!(self, Self::C64)
    }

    pub fn is_real(&self) -> bool {
        !self.is_complex()
    }
}

impl std::fmt::Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::F16 => write!(f, "float16"),
            Self::F32 => write!(f, "float32"),
            Self::F64 => write!(f, "float64"),
            Self::C64 => write!(f, "complex128"),
        }
    }
}
