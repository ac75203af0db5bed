//! Core domain types for spam classification: validated feature vectors
//! and normalized ham/spam prediction pairs.

mod error;
pub mod features;
pub mod prediction;

pub use error::ClassifyError;
pub use features::{FEATURE_COUNT, FeatureVector};
pub use prediction::{NORMALIZE_TOLERANCE, Prediction};
