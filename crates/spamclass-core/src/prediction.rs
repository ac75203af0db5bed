//! Ham/spam probability pairs and their interpretation from raw model
//! outputs.
//!
//! Models come in two output shapes: a two-wide `[ham, spam]` row, or a
//! single spam score. Either way the result is folded into a pair that
//! sums to 1, falling back to a two-class softmax when the raw pair is
//! not already a probability distribution.

use crate::error::ClassifyError;

/// How far the raw pair may stray from summing to 1 before the softmax
/// fallback kicks in.
pub const NORMALIZE_TOLERANCE: f32 = 0.01;

/// Complementary class likelihoods. Invariant: both in [0, 1], sum 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    ham: f32,
    spam: f32,
}

impl Prediction {
    /// Interpret one output row from the model.
    ///
    /// Width 2 is read positionally as `[ham, spam]`; width 1 as a lone
    /// spam score with `ham = 1 - spam`. Anything else is an error.
    pub fn from_raw(outputs: &[f32]) -> Result<Self, ClassifyError> {
        match outputs {
            [ham, spam] => Ok(Self::normalized(*ham, *spam)),
            [spam] => Ok(Self {
                ham: 1.0 - spam,
                spam: *spam,
            }),
            other => Err(ClassifyError::OutputWidth(other.len())),
        }
    }

    /// Fold a raw pair into a distribution. Pairs already summing to 1
    /// (within [`NORMALIZE_TOLERANCE`]) pass through untouched; others
    /// are treated as logits and softmaxed.
    fn normalized(ham: f32, spam: f32) -> Self {
        if (ham + spam - 1.0).abs() <= NORMALIZE_TOLERANCE {
            return Self { ham, spam };
        }
        let ham_norm = ham.exp() / (ham.exp() + spam.exp());
        Self {
            ham: ham_norm,
            spam: 1.0 - ham_norm,
        }
    }

    pub fn ham(&self) -> f32 {
        self.ham
    }

    pub fn spam(&self) -> f32 {
        self.spam
    }

    /// Binary decision: spam strictly more likely than ham.
    pub fn is_spam(&self) -> bool {
        self.spam > self.ham
    }

    /// Likelihood of the winning class.
    pub fn confidence(&self) -> f32 {
        self.ham.max(self.spam)
    }
}
