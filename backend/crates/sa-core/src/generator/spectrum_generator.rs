use crate::{CoreResult, GeneratorConfig, SpectrumFrame};

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces mock spectrum frames, one per call.
///
/// Each session owns its own generator, so nothing here is shared across tasks.
pub struct SpectrumGenerator {
    config: GeneratorConfig,
    /// Per-bin baseline, resolved once from the band layout
    baseline: Vec<i32>,
    /// Per-bin periodic term: one sine cycle across the frame
    carrier: Vec<f64>,
    rng: StdRng,
    tick: u64,
}

impl SpectrumGenerator {
    /// Create a generator seeded from the OS entropy source.
    pub fn new(config: GeneratorConfig) -> CoreResult<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a generator whose jitter sequence is reproducible.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> CoreResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GeneratorConfig, rng: StdRng) -> CoreResult<Self> {
        config.validate()?;

        let length = config.frame_length;
        let baseline = (0..length)
            .map(|i| config.offset_for(config.band_of(i)))
            .collect();
        let carrier = (0..length)
            .map(|i| config.sine_amplitude * (i as f64 / length as f64 * TAU).sin())
            .collect();

        Ok(Self {
            config,
            baseline,
            carrier,
            rng,
            tick: 0,
        })
    }

    /// Generate the next frame and advance the tick counter.
    pub fn next_frame(&mut self) -> SpectrumFrame {
        let jitter = self.config.jitter_amplitude;
        let samples = self
            .baseline
            .iter()
            .zip(&self.carrier)
            .map(|(&offset, &carrier)| {
                let noise = jitter * self.rng.random::<f64>();
                offset + (carrier + noise) as i32
            })
            .collect();

        self.tick = self.tick.wrapping_add(1);
        SpectrumFrame::new(samples)
    }

    /// Number of frames produced so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn frame_length(&self) -> usize {
        self.config.frame_length
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
