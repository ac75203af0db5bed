use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("expected {expected} features, got {got}")]
    FeatureCount { expected: usize, got: usize },

    #[error("feature {index} is not a finite number")]
    NonFinite { index: usize },

    #[error("input must be a JSON object with a 'features' array: {0}")]
    Input(#[from] serde_json::Error),

    #[error("unexpected model output width: {0}")]
    OutputWidth(usize),
}
