pub mod center_freq;
pub mod error;
pub mod files;
