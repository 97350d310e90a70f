pub mod band;
pub mod spectrum_frame;
