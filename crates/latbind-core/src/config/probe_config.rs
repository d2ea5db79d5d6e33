use serde::{Deserialize, Serialize};

/// Configuration for the registration-time synthetic probe.
///
/// The probe always runs with half-precision inputs; only the sample length
/// is configurable. The default of 10 is a fixed validation convention.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Length of each synthetic input array.
    pub sample_len: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { sample_len: 10 }
    }
}
