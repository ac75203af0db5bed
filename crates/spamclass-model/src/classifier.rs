//! Model loading and the forward pass.
//!
//! Two on-disk formats are supported: a bundle directory holding
//! `config.json` plus `model.safetensors`, and a single `.safetensors`
//! file with the config JSON embedded in its header metadata. Both
//! describe the same feed-forward network, executed here with candle.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use candle_core::{Device, Tensor};
use candle_nn::{Linear, Module};
use serde::Serialize;
use spamclass_core::{FeatureVector, Prediction};
use tracing::{debug, info};

use crate::config::{CONFIG_METADATA_KEY, ModelConfig, OutputActivation};
use crate::error::ModelError;

pub(crate) const BUNDLE_CONFIG_FILE: &str = "config.json";
pub(crate) const BUNDLE_WEIGHTS_FILE: &str = "model.safetensors";
pub(crate) const SINGLE_FILE_EXT: &str = "safetensors";

/// How the model is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// Directory with `config.json` and `model.safetensors`.
    Bundle,
    /// One `.safetensors` file, config in the header metadata.
    SingleFile,
}

impl ModelFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bundle => "bundle",
            Self::SingleFile => "safetensors",
        }
    }
}

/// Metadata surfaced by the `info` command. Shapes carry a `null` batch
/// dimension, so `[null, 25]` reads as "any batch of 25-wide rows".
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub model_path: String,
    pub model_type: &'static str,
    pub input_shape: [Option<usize>; 2],
    pub output_shape: [Option<usize>; 2],
}

/// A loaded classification model: stacked linear layers with ReLU
/// between and the configured activation on the output.
#[derive(Debug)]
pub struct SpamClassifier {
    layers: Vec<Linear>,
    config: ModelConfig,
    format: ModelFormat,
    path: PathBuf,
}

impl SpamClassifier {
    /// Load a model from either supported format.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let format = detect_format(path)?;
        let (config, tensors) = match format {
            ModelFormat::Bundle => load_bundle(path)?,
            ModelFormat::SingleFile => load_single_file(path)?,
        };
        let layers = assemble_layers(&config, &tensors)?;

        info!(
            format = format.as_str(),
            path = %path.display(),
            layers = layers.len(),
            input_dim = config.input_dim,
            output_dim = config.output_dim,
            "loaded model"
        );

        Ok(Self {
            layers,
            config,
            format,
            path: path.to_path_buf(),
        })
    }

    /// Run one forward pass and fold the output row into a prediction.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        if features.len() != self.config.input_dim {
            return Err(ModelError::InputWidth {
                expected: self.config.input_dim,
                got: features.len(),
            });
        }

        let input = Tensor::from_slice(
            features.as_slice(),
            (1, self.config.input_dim),
            &Device::Cpu,
        )?;
        let output = self.forward(&input)?;

        let rows = output.to_vec2::<f32>()?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::BadArchitecture("model produced no output row".into()))?;

        debug!(outputs = ?row, "forward pass complete");
        Ok(Prediction::from_raw(&row)?)
    }

    /// Model metadata: path, format, and tensor shapes.
    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            model_path: self.path.display().to_string(),
            model_type: self.format.as_str(),
            input_shape: [None, Some(self.config.input_dim)],
            output_shape: [None, Some(self.config.output_dim)],
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn format(&self) -> ModelFormat {
        self.format
    }

    fn forward(&self, input: &Tensor) -> Result<Tensor, ModelError> {
        let mut xs = input.clone();
        let last = self.layers.len() - 1;
        for (i, layer) in self.layers.iter().enumerate() {
            xs = layer.forward(&xs)?;
            if i < last {
                xs = xs.relu()?;
            }
        }

        let xs = match self.config.output_activation {
            OutputActivation::Softmax => candle_nn::ops::softmax_last_dim(&xs)?,
            OutputActivation::Sigmoid => candle_nn::ops::sigmoid(&xs)?,
            OutputActivation::None => xs,
        };

        if xs.dims() != &[1, self.config.output_dim][..] {
            return Err(ModelError::BadArchitecture(format!(
                "output shape {:?}, expected [1, {}]",
                xs.dims(),
                self.config.output_dim
            )));
        }
        Ok(xs)
    }
}

fn detect_format(path: &Path) -> Result<ModelFormat, ModelError> {
    if path.is_dir() {
        return Ok(ModelFormat::Bundle);
    }
    if path.is_file() {
        if path.extension().is_some_and(|ext| ext == SINGLE_FILE_EXT) {
            return Ok(ModelFormat::SingleFile);
        }
        return Err(ModelError::UnsupportedFormat(path.to_path_buf()));
    }
    Err(ModelError::NotFound(path.to_path_buf()))
}

fn load_bundle(path: &Path) -> Result<(ModelConfig, HashMap<String, Tensor>), ModelError> {
    let config_path = path.join(BUNDLE_CONFIG_FILE);
    if !config_path.is_file() {
        return Err(ModelError::MissingConfig(path.to_path_buf()));
    }
    let config: ModelConfig = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;

    let weights_path = path.join(BUNDLE_WEIGHTS_FILE);
    if !weights_path.is_file() {
        return Err(ModelError::NotFound(weights_path));
    }
    let tensors = candle_core::safetensors::load(&weights_path, &Device::Cpu)?;
    Ok((config, tensors))
}

fn load_single_file(path: &Path) -> Result<(ModelConfig, HashMap<String, Tensor>), ModelError> {
    let bytes = std::fs::read(path)?;
    let (_header_len, header) = safetensors::SafeTensors::read_metadata(&bytes)?;
    let config_json = header
        .metadata()
        .as_ref()
        .and_then(|meta| meta.get(CONFIG_METADATA_KEY))
        .ok_or_else(|| ModelError::MissingConfig(path.to_path_buf()))?;
    let config: ModelConfig = serde_json::from_str(config_json)?;

    let tensors = candle_core::safetensors::load(path, &Device::Cpu)?;
    Ok((config, tensors))
}

/// Build `Linear` layers from the tensor map, checking every weight and
/// bias shape against the config.
fn assemble_layers(
    config: &ModelConfig,
    tensors: &HashMap<String, Tensor>,
) -> Result<Vec<Linear>, ModelError> {
    let mut layers = Vec::new();
    for (i, (in_dim, out_dim)) in config.layer_dims().into_iter().enumerate() {
        let weight = tensors
            .get(&format!("layers.{i}.weight"))
            .ok_or_else(|| ModelError::BadArchitecture(format!("missing layers.{i}.weight")))?;
        let bias = tensors
            .get(&format!("layers.{i}.bias"))
            .ok_or_else(|| ModelError::BadArchitecture(format!("missing layers.{i}.bias")))?;

        if weight.dims() != &[out_dim, in_dim][..] {
            return Err(ModelError::BadArchitecture(format!(
                "layers.{i}.weight is {:?}, expected [{out_dim}, {in_dim}]",
                weight.dims()
            )));
        }
        if bias.dims() != &[out_dim][..] {
            return Err(ModelError::BadArchitecture(format!(
                "layers.{i}.bias is {:?}, expected [{out_dim}]",
                bias.dims()
            )));
        }

        layers.push(Linear::new(weight.clone(), Some(bias.clone())));
    }
    Ok(layers)
}
