pub mod generator_config;
pub mod spectrum_generator;
