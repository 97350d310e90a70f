pub mod error;
pub mod generator;
pub mod models;


pub use error::{CoreError, Result as CoreResult};
pub use generator::generator_config::GeneratorConfig;
pub use generator::spectrum_generator::SpectrumGenerator;
pub use models::band::Band;
pub use models::spectrum_frame::SpectrumFrame;

pub const DEFAULT_FRAME_LENGTH: usize = 8192;
pub const DEFAULT_IN_BAND_HALF_WIDTH: usize = 3;
pub const DEFAULT_IN_BAND_OFFSET: i32 = -20;
pub const DEFAULT_OUT_OF_BAND_OFFSET: i32 = -100;
pub const DEFAULT_SINE_AMPLITUDE: f64 = 3.0;
pub const DEFAULT_JITTER_AMPLITUDE: f64 = 10.0;
