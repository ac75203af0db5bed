//! Output rendering: JSON reports for scripting callers, plain text for
//! humans. JSON goes to stdout unmixed with logs, which stay on stderr.

use clap::ValueEnum;
use serde::Serialize;
use spamclass_core::Prediction;
use spamclass_model::ModelInfo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Wire shape of a prediction result, as consumed by the mail filter.
#[derive(Debug, Serialize)]
struct PredictionReport {
    predictions: [f32; 2],
    ham_probability: f32,
    spam_probability: f32,
    is_spam: bool,
    confidence: f32,
}

impl From<&Prediction> for PredictionReport {
    fn from(prediction: &Prediction) -> Self {
        Self {
            predictions: [prediction.ham(), prediction.spam()],
            ham_probability: prediction.ham(),
            spam_probability: prediction.spam(),
            is_spam: prediction.is_spam(),
            confidence: prediction.confidence(),
        }
    }
}

#[derive(Debug, Serialize)]
struct InfoReport<'a> {
    model_info: &'a ModelInfo,
}

pub fn render_prediction(
    prediction: &Prediction,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&PredictionReport::from(prediction))?),
        OutputFormat::Text => Ok(format!(
            "Ham: {:.4}, Spam: {:.4}\nClassification: {}\nConfidence: {:.4}",
            prediction.ham(),
            prediction.spam(),
            if prediction.is_spam() { "SPAM" } else { "HAM" },
            prediction.confidence(),
        )),
    }
}

pub fn render_info(info: &ModelInfo, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&InfoReport { model_info: info })?),
        OutputFormat::Text => Ok(format!(
            "Model: {}\nType: {}\nInput shape: {}\nOutput shape: {}",
            info.model_path,
            info.model_type,
            shape_str(&info.input_shape),
            shape_str(&info.output_shape),
        )),
    }
}

pub fn render_status(status: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::json!({ "status": status }).to_string(),
        OutputFormat::Text => status.to_string(),
    }
}

/// Report a failure. JSON mode keeps the `{"error": ...}` contract on
/// stdout; text mode writes to stderr.
pub fn report_error(err: &anyhow::Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "error": format!("{err:#}") }));
        }
        OutputFormat::Text => {
            eprintln!("Error: {err:#}");
        }
    }
}

fn shape_str(shape: &[Option<usize>; 2]) -> String {
    let dims: Vec<String> = shape
        .iter()
        .map(|dim| dim.map_or_else(|| "batch".to_string(), |n| n.to_string()))
        .collect();
    format!("[{}]", dims.join(", "))
}
