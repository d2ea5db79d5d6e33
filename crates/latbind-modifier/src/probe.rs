//! Registration-time synthetic probe.

use half::f16;
use latbind_core::config::ProbeConfig;
use latbind_core::errors::{LatbindResult, ModifierError};
use latbind_core::models::ArrayValue;
use latbind_core::traits::IModifier;
use ndarray::Array1;

/// Deterministic half-precision sample: a 0.0..1.0 ramp of the given length.
pub fn synthetic_input(len: usize) -> ArrayValue {
    let ramp: Vec<f16> = (0..len)
        .map(|i| f16::from_f32(i as f32 / len.max(1) as f32))
        .collect();
    ArrayValue::F16(Array1::from_vec(ramp))
}

/// Invoke the wrapper once with synthetic inputs and verify its output
/// against the kind's contract: array-like result, expected array count,
/// input shape preserved, and complex values only where permitted.
pub fn run(modifier: &dyn IModifier, config: &ProbeConfig) -> LatbindResult<()> {
    let kind = modifier.kind();
    let sample = synthetic_input(config.sample_len);
    let args = vec![sample; kind.whitelist().len()];

    tracing::trace!(kind = ?kind, sample_len = config.sample_len, "probing modifier");
    let out = modifier.apply(&args);

    let arrays = out.into_arrays().ok_or_else(|| ModifierError::NotArrayLike {
        label: modifier.label().to_string(),
    })?;

    if arrays.len() != kind.num_outputs() {
        return Err(ModifierError::WrongReturnCount {
            expected: kind.num_outputs(),
            got: arrays.len(),
        });
    }

    if let Some(bad) = arrays.iter().find(|v| v.len() != config.sample_len) {
        return Err(ModifierError::ShapeMismatch {
            expected: config.sample_len,
            got: bad.len(),
        });
    }

    if !kind.allows_complex() && modifier.is_complex() {
        return Err(ModifierError::ComplexNotAllowed {
            label: modifier.label().to_string(),
        });
    }

    Ok(())
}
