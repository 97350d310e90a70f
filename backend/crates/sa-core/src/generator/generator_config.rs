use crate::{
    Band, CoreError, CoreResult, DEFAULT_FRAME_LENGTH, DEFAULT_IN_BAND_HALF_WIDTH,
    DEFAULT_IN_BAND_OFFSET, DEFAULT_JITTER_AMPLITUDE, DEFAULT_OUT_OF_BAND_OFFSET,
    DEFAULT_SINE_AMPLITUDE,
};

use std::ops::Range;
use std::panic::Location;

use error_location::ErrorLocation;

/// Shape of the synthetic spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Samples per frame (L). Must be even and non-zero.
    pub frame_length: usize,
    /// Half-width (w) of the carrier window centered at L/2.
    pub in_band_half_width: usize,
    /// Baseline applied inside the carrier window
    pub in_band_offset: i32,
    /// Baseline applied everywhere else
    pub out_of_band_offset: i32,
    /// Peak of the single sine cycle spread across the frame
    pub sine_amplitude: f64,
    /// Upper bound (exclusive) of the uniform jitter added per sample
    pub jitter_amplitude: f64,
}

impl Default for GeneratorConfig {
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

impl GeneratorConfig {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.frame_length == 0 || self.frame_length % 2 != 0 {
            return Err(Self::invalid(format!(
                "frame_length must be a non-zero even number, got {}",
                self.frame_length
            )));
        }

        if self.in_band_half_width >= self.frame_length / 2 {
            return Err(Self::invalid(format!(
                "in_band_half_width must be less than frame_length / 2 ({}), got {}",
                self.frame_length / 2,
                self.in_band_half_width
            )));
        }

        for (name, value) in [
            ("sine_amplitude", self.sine_amplitude),
            ("jitter_amplitude", self.jitter_amplitude),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Self::invalid(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        // Every sample must fit in i32: offset - A_sin ..= offset + A_sin + A_jit
        for (name, offset) in [
            ("in_band_offset", self.in_band_offset),
            ("out_of_band_offset", self.out_of_band_offset),
        ] {
            let low = f64::from(offset) - self.sine_amplitude;
            let high = f64::from(offset) + self.sine_amplitude + self.jitter_amplitude;
            if low < f64::from(i32::MIN) || high > f64::from(i32::MAX) {
                return Err(Self::invalid(format!(
                    "{name} {offset} with sine_amplitude {} and jitter_amplitude {} leaves the i32 sample range",
                    self.sine_amplitude, self.jitter_amplitude
                )));
            }
        }

        Ok(())
    }

    /// Bins classified in-band: `L/2 - w <= i < L/2 + w`.
    ///
    /// Lower edge inclusive, upper edge exclusive, so the window holds exactly
    /// `2w` bins.
    pub fn in_band_range(&self) -> Range<usize> {
        let center = self.frame_length / 2;
        center.saturating_sub(self.in_band_half_width)..center + self.in_band_half_width
    }

    pub fn band_of(&self, index: usize) -> Band {
        if self.in_band_range().contains(&index) {
            Band::InBand
        } else {
            Band::OutOfBand
        }
    }

    pub fn offset_for(&self, band: Band) -> i32 {
        match band {
            Band::InBand => self.in_band_offset,
            Band::OutOfBand => self.out_of_band_offset,
        }
    }

    /// Inclusive `(min, max)` any sample in `band` can take.
    ///
    /// The periodic and jitter terms are truncated toward zero before the
    /// baseline is added.
    pub fn bounds_for(&self, band: Band) -> (i32, i32) {
        let offset = self.offset_for(band);
        let below = self.sine_amplitude.trunc() as i32;
        let above = (self.sine_amplitude + self.jitter_amplitude).trunc() as i32;
        (offset.saturating_sub(below), offset.saturating_add(above))
    }

    #[track_caller]
    fn invalid(message: String) -> CoreError {
        CoreError::InvalidGeneratorConfig {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
