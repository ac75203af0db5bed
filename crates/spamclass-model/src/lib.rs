//! Model layer: on-disk formats, candle-backed forward pass, metadata
//! inspection, and placeholder model synthesis.

mod classifier;
mod config;
mod error;
mod sample;

pub use classifier::{ModelFormat, ModelInfo, SpamClassifier};
pub use config::{ModelConfig, OutputActivation};
pub use error::ModelError;
pub use sample::create_sample_model;
