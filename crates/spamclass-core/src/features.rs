//! Fixed-width numeric feature vectors describing a message.
//!
//! The classifier contract is positional: 25 floats extracted from an
//! email (lengths, ratios, token counts, header signals). This module
//! only enforces width and finiteness; feature extraction lives upstream.

use serde::Deserialize;

use crate::error::ClassifyError;

/// Width of the feature vector every model input must have.
pub const FEATURE_COUNT: usize = 25;

/// A validated, ordered list of [`FEATURE_COUNT`] finite `f32` values.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f32>);

/// Wire shape of a prediction request: `{"features": [..]}`.
#[derive(Debug, Deserialize)]
struct FeatureInput {
    features: Vec<f32>,
}

impl FeatureVector {
    /// Validate a raw vector: exact width, all values finite.
    pub fn new(values: Vec<f32>) -> Result<Self, ClassifyError> {
        if values.len() != FEATURE_COUNT {
            return Err(ClassifyError::FeatureCount {
                expected: FEATURE_COUNT,
                got: values.len(),
            });
        }
        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ClassifyError::NonFinite { index });
            }
        }
        Ok(Self(values))
    }

    /// Parse a `{"features": [...]}` JSON document.
    pub fn from_json(input: &str) -> Result<Self, ClassifyError> {
        let parsed: FeatureInput = serde_json::from_str(input)?;
        Self::new(parsed.features)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_for(values: &[f32]) -> String {
        let list: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        format!("{{\"features\": [{}]}}", list.join(", "))
    }

    #[test]
    fn accepts_exact_width() {
        let vec = FeatureVector::new(vec![0.5; FEATURE_COUNT]).unwrap();
        assert_eq!(vec.len(), FEATURE_COUNT);
        assert_eq!(vec.as_slice()[0], 0.5);
    }

    #[test]
    fn rejects_wrong_width() {
        let err = FeatureVector::new(vec![0.0; 10]).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::FeatureCount {
                expected: FEATURE_COUNT,
                got: 10
            }
        ));
    }

    #[test]
    fn rejects_non_finite() {
        let mut values = vec![0.0; FEATURE_COUNT];
        values[7] = f32::NAN;
        let err = FeatureVector::new(values).unwrap_err();
        assert!(matches!(err, ClassifyError::NonFinite { index: 7 }));
    }

    #[test]
    fn parses_features_document() {
        let doc = json_for(&[1.0; FEATURE_COUNT]);
        let vec = FeatureVector::from_json(&doc).unwrap();
        assert_eq!(vec.len(), FEATURE_COUNT);
    }

    #[test]
    fn rejects_missing_features_key() {
        let err = FeatureVector::from_json("{\"inputs\": [1, 2, 3]}").unwrap_err();
        assert!(matches!(err, ClassifyError::Input(_)));
    }

    #[test]
    fn rejects_short_features_document() {
        let doc = json_for(&[1.0; 3]);
        let err = FeatureVector::from_json(&doc).unwrap_err();
        assert!(matches!(err, ClassifyError::FeatureCount { got: 3, .. }));
    }

    #[test]
    fn rejects_non_numeric_features() {
        let err = FeatureVector::from_json("{\"features\": [\"a\", \"b\"]}").unwrap_err();
        assert!(matches!(err, ClassifyError::Input(_)));
    }
}
