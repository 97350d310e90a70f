use crate::{ConfigError, ConfigErrorResult, MAX_FRAME_LENGTH};

use sa_core::{
    DEFAULT_FRAME_LENGTH, DEFAULT_IN_BAND_HALF_WIDTH, DEFAULT_IN_BAND_OFFSET,
    DEFAULT_JITTER_AMPLITUDE, DEFAULT_OUT_OF_BAND_OFFSET, DEFAULT_SINE_AMPLITUDE,
    GeneratorConfig,
};

use serde::Deserialize;

/// Shape of the mock spectrum every session streams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpectrumConfig {
    pub frame_length: usize,
    pub in_band_half_width: usize,
    pub in_band_offset: i32,
    pub out_of_band_offset: i32,
    pub sine_amplitude: f64,
    pub jitter_amplitude: f64,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            frame_length: DEFAULT_FRAME_LENGTH,
            in_band_half_width: DEFAULT_IN_BAND_HALF_WIDTH,
            in_band_offset: DEFAULT_IN_BAND_OFFSET,
            out_of_band_offset: DEFAULT_OUT_OF_BAND_OFFSET,
            sine_amplitude: DEFAULT_SINE_AMPLITUDE,
            jitter_amplitude: DEFAULT_JITTER_AMPLITUDE,
        }
    }
}

impl SpectrumConfig {
    /// Generator settings every session is built from.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            frame_length: self.frame_length,
            in_band_half_width: self.in_band_half_width,
            in_band_offset: self.in_band_offset,
            out_of_band_offset: self.out_of_band_offset,
            sine_amplitude: self.sine_amplitude,
            jitter_amplitude: self.jitter_amplitude,
        }
    }

    /// Runs the generator's own checks, so startup rejects exactly what a
    /// session would.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.frame_length > MAX_FRAME_LENGTH {
            return Err(ConfigError::spectrum(format!(
                "spectrum.frame_length must be at most {}, got {}",
                MAX_FRAME_LENGTH, self.frame_length
            )));
        }

        self.generator_config()
            .validate()
            .map_err(|e| ConfigError::spectrum(format!("spectrum: {e}")))
    }
}
