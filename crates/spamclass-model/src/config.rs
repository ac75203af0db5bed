//! Architecture description stored alongside (or inside) the weights.

use serde::{Deserialize, Serialize};
use spamclass_core::FEATURE_COUNT;

/// Key under which the config JSON is embedded in a single-file model's
/// safetensors header metadata.
pub(crate) const CONFIG_METADATA_KEY: &str = "config";

/// Activation applied to the output layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputActivation {
    /// Two-wide `[ham, spam]` distribution.
    #[default]
    Softmax,
    /// Single spam score in [0, 1].
    Sigmoid,
    /// Raw logits; the prediction layer softmaxes them post hoc.
    None,
}

/// Feed-forward architecture: `input_dim` → each hidden width (ReLU
/// between) → `output_dim` with [`OutputActivation`] on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub input_dim: usize,
    pub hidden: Vec<usize>,
    pub output_dim: usize,
    #[serde(default)]
    pub output_activation: OutputActivation,
}

impl ModelConfig {
    /// The canned placeholder network used for testing: 25 → 64 → 32 →
    /// 16 → 2 with a softmax head.
    pub fn sample() -> Self {
        Self {
            input_dim: FEATURE_COUNT,
            hidden: vec![64, 32, 16],
            output_dim: 2,
            output_activation: OutputActivation::Softmax,
        }
    }

    /// (in, out) width of every linear layer, in forward order.
    pub fn layer_dims(&self) -> Vec<(usize, usize)> {
        let widths: Vec<usize> = std::iter::once(self.input_dim)
            .chain(self.hidden.iter().copied())
            .chain(std::iter::once(self.output_dim))
            .collect();
        widths.windows(2).map(|w| (w[0], w[1])).collect()
    }
}
