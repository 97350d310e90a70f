//! One tick worth of simulated FFT output.

use serde::{Deserialize, Serialize};

/// A fixed-length run of relative power levels.
///
/// Serialized on the wire as `{"s": [..]}`. Frames are built fresh every tick
/// and handed to the transport by value; nothing retains them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectrumFrame {
    #[serde(rename = "s")]
    samples: Vec<i32>,
}

impl SpectrumFrame {
    pub fn new(samples: Vec<i32>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
