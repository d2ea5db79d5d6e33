use serde::{Deserialize, Serialize};

use super::{ArrayValue, Dtype};

/// What a user callback may produce.
///
/// `Scalar` covers non-array results: casting is not applicable to them and
/// they pass through `apply` unchanged, but the registration probe rejects
/// them because the engine requires arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModifierReturn {
    /// A single array.
    Array(ArrayValue),
    /// Several arrays (position modifiers return one per axis).
    Arrays(Vec<ArrayValue>),
    /// A non-array value, passed through untouched.
    Scalar(f64),
}

impl ModifierReturn {
    /// Whether any part of the result is complex-valued.
    pub fn is_complex(&self) -> bool {
        match self {
            Self::Array(v) => v.is_complex(),
            Self::Arrays(vs) => vs.iter().any(ArrayValue::is_complex),
            Self::Scalar(_) => false,
        }
    }

    /// Normalize to a list of arrays. Returns `None` for a scalar result.
    pub fn into_arrays(self) -> Option<Vec<ArrayValue>> {
        match self {
            Self::Array(v) => Some(vec![v]),
            Self::Arrays(vs) => Some(vs),
            Self::Scalar(_) => None,
        }
    }

    /// Cast every array to the given dtype under `same_kind` rules.
    ///
    /// All-or-nothing: if any array cannot be cast (or the result is a
    /// scalar), the original value is returned untouched.
    pub fn cast_same_kind(self, to: Dtype) -> ModifierReturn {
        match self {
            Self::Array(v) => match v.cast_same_kind(to) {
                Some(cast) => Self::Array(cast),
                None => Self::Array(v),
            },
            Self::Arrays(vs) => {
                let cast: Option<Vec<ArrayValue>> =
                    vs.iter().map(|v| v.cast_same_kind(to)).collect();
                match cast {
                    Some(cast) => Self::Arrays(cast),
                    None => Self::Arrays(vs),
                }
            }
            Self::Scalar(s) => Self::Scalar(s),
        }
    }
}

impl From<ArrayValue> for ModifierReturn {
    fn from(value: ArrayValue) -> Self {
        Self::Array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;
    use num_complex::Complex64;

    #[test]
    fn scalar_passes_through_cast_untouched() {
        let ret = ModifierReturn::Scalar(2.5);
        assert_eq!(ret.clone().cast_same_kind(Dtype::F16), ret);
    }

    #[test]
    fn mixed_arrays_cast_is_all_or_nothing() {
        let ret = ModifierReturn::Arrays(vec![
            ArrayValue::F64(Array1::from_elem(2, 1.0)),
            ArrayValue::C64(Array1::from_elem(2, Complex64::new(0.0, 1.0))),
        ]);
        // The complex member cannot narrow to f16, so nothing is cast.
        assert_eq!(ret.clone().cast_same_kind(Dtype::F16), ret);
    }
}
