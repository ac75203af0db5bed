use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported model format: {0} (expected a bundle directory or a .safetensors file)")]
    UnsupportedFormat(PathBuf),

    #[error("model config not found in {0}")]
    MissingConfig(PathBuf),

    #[error("model architecture mismatch: {0}")]
    BadArchitecture(String),

    #[error("model expects {expected} input features, got {got}")]
    InputWidth { expected: usize, got: usize },

    #[error(transparent)]
    Classify(#[from] spamclass_core::ClassifyError),

    #[error("tensor error: {0}")]
    Candle(#[from] candle_core::Error),

    #[error("safetensors error: {0}")]
    SafeTensors(#[from] safetensors::SafeTensorError),

    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
