//! Placeholder model synthesis.
//!
//! Writes the canned sample architecture with random weights so the
//! prediction path can be exercised without a trained model. The target
//! path picks the format: `.safetensors` suffix → single file, anything
//! else → bundle directory.

use std::collections::HashMap;
use std::path::Path;

use candle_core::{Device, Tensor};
use spamclass_core::FeatureVector;
use tracing::info;

use crate::classifier::{
    BUNDLE_CONFIG_FILE, BUNDLE_WEIGHTS_FILE, SINGLE_FILE_EXT, SpamClassifier,
};
use crate::config::{CONFIG_METADATA_KEY, ModelConfig};
use crate::error::ModelError;

/// Synthesize the sample model at `path`, then reload it and run one
/// forward pass over zeros as a smoke check on the written artifact.
pub fn create_sample_model(path: &Path) -> Result<(), ModelError> {
    let config = ModelConfig::sample();
    let device = Device::Cpu;

    let mut tensors: Vec<(String, Tensor)> = Vec::new();
    for (i, (in_dim, out_dim)) in config.layer_dims().into_iter().enumerate() {
        // Uniform init with the same bound candle-nn uses for linear layers.
        let bound = (1.0 / in_dim as f32).sqrt();
        let weight = Tensor::rand(-bound, bound, (out_dim, in_dim), &device)?;
        let bias = Tensor::rand(-bound, bound, (out_dim,), &device)?;
        tensors.push((format!("layers.{i}.weight"), weight));
        tensors.push((format!("layers.{i}.bias"), bias));
    }

    if path.extension().is_some_and(|ext| ext == SINGLE_FILE_EXT) {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut metadata = HashMap::new();
        metadata.insert(
            CONFIG_METADATA_KEY.to_string(),
            serde_json::to_string(&config)?,
        );
        safetensors::serialize_to_file(
            tensors.iter().map(|(name, tensor)| (name.as_str(), tensor)),
            &Some(metadata),
            path,
        )?;
    } else {
        std::fs::create_dir_all(path)?;
        std::fs::write(
            path.join(BUNDLE_CONFIG_FILE),
            serde_json::to_string_pretty(&config)?,
        )?;
        safetensors::serialize_to_file(
            tensors.iter().map(|(name, tensor)| (name.as_str(), tensor)),
            &None,
            &path.join(BUNDLE_WEIGHTS_FILE),
        )?;
    }

    let classifier = SpamClassifier::load(path)?;
    let zeros = FeatureVector::new(vec![0.0; config.input_dim])?;
    classifier.predict(&zeros)?;

    info!(path = %path.display(), "sample model created");
    Ok(())
}
