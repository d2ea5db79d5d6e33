use half::f16;
use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::Dtype;

/// A flat engine array tagged with its element-type family.
///
/// Everything crossing the adapter boundary is 1-D: one value per site or per
/// hopping. Shape checks therefore reduce to length checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayValue {
    F16(Array1<f16>),
    F32(Array1<f32>),
    F64(Array1<f64>),
    C64(Array1<Complex64>),
}

impl ArrayValue {
    /// All-zeros f64 array.
    pub fn zeros(len: usize) -> Self {
        Self::F64(Array1::from_elem(len, 0.0))
    }

    /// All-ones f64 array.
    pub fn ones(len: usize) -> Self {
        Self::F64(Array1::from_elem(len, 1.0))
    }

    pub fn dtype(&self) -> Dtype {
        match self {
            Self::F16(_) => Dtype::F16,
            Self::F32(_) => Dtype::F32,
            Self::F64(_) => Dtype::F64,
            Self::C64(_) => Dtype::C64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::F16(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::C64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complex(&self) -> bool {
        self.dtype().is_complex()
    }

    /// Widen any variant to complex values.
    pub fn to_complex(&self) -> Array1<Complex64> {
        match self {
            Self::F16(v) => v.mapv(|x| Complex64::new(x.to_f64(), 0.0)),
            Self::F32(v) => v.mapv(|x| Complex64::new(f64::from(x), 0.0)),
            Self::F64(v) => v.mapv(|x| Complex64::new(x, 0.0)),
            Self::C64(v) => v.clone(),
        }
    }

    /// Widen a real variant to f64 values. Returns `None` for complex arrays.
    pub fn to_real(&self) -> Option<Array1<f64>> {
        match self {
            Self::F16(v) => Some(v.mapv(f16::to_f64)),
            Self::F32(v) => Some(v.mapv(f64::from)),
            Self::F64(v) => Some(v.clone()),
            Self::C64(_) => None,
        }
    }

    /// Cast to the given dtype under NumPy `same_kind` rules: real→real at
    /// any width, real→complex, and complex→complex succeed; complex→real
    /// does not (returns `None`, callers keep the raw value).
    pub fn cast_same_kind(&self, to: Dtype) -> Option<ArrayValue> {
        if self.dtype() == to {
            return Some(self.clone());
        }
        match to {
            Dtype::C64 => Some(Self::C64(self.to_complex())),
            Dtype::F16 => Some(Self::F16(self.to_real()?.mapv(f16::from_f64))),
            Dtype::F32 => Some(Self::F32(self.to_real()?.mapv(|x| x as f32))),
            Dtype::F64 => Some(Self::F64(self.to_real()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_kind_cast_narrows_real_arrays() {
        let v = ArrayValue::F64(Array1::from_vec(vec![0.5, 1.0]));
        let cast = v.cast_same_kind(Dtype::F16).unwrap();
        assert_eq!(cast.dtype(), Dtype::F16);
        assert_eq!(cast.len(), 2);
    }

    #[test]
    fn same_kind_cast_refuses_complex_to_real() {
        let v = ArrayValue::C64(Array1::from_elem(3, Complex64::new(1.0, 2.0)));
        assert!(v.cast_same_kind(Dtype::F64).is_none());
        assert!(v.cast_same_kind(Dtype::F16).is_none());
    }

    #[test]
    fn same_kind_cast_widens_real_to_complex() {
        let v = ArrayValue::F16(Array1::from_elem(2, f16::from_f64(0.25)));
        let cast = v.cast_same_kind(Dtype::C64).unwrap();
        assert!(cast.is_complex());
        assert_eq!(cast.to_complex()[0], Complex64::new(0.25, 0.0));
    }
}
