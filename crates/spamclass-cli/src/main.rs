//! spamclass — spam classification inference over pre-trained models.
//!
//! Three commands: `predict` classifies a 25-wide feature vector,
//! `info` inspects model metadata, and `create-sample` writes a
//! placeholder model for testing the pipeline end to end.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use spamclass_core::FeatureVector;
use spamclass_model::{SpamClassifier, create_sample_model};
use tracing_subscriber::EnvFilter;

mod report;

use report::OutputFormat;

#[derive(Parser)]
#[command(name = "spamclass")]
#[command(version)]
#[command(about = "Spam classification inference over pre-trained models")]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one feature vector
    Predict {
        /// Model path: bundle directory or .safetensors file
        #[arg(long)]
        model: PathBuf,
        /// JSON file with a "features" array, or '-' for stdin
        #[arg(long)]
        input: PathBuf,
        /// Report format
        #[arg(long, value_enum, default_value = "json")]
        output: OutputFormat,
    },
    /// Show model metadata
    Info {
        /// Model path: bundle directory or .safetensors file
        #[arg(long)]
        model: PathBuf,
        /// Report format
        #[arg(long, value_enum, default_value = "json")]
        output: OutputFormat,
    },
    /// Write a placeholder model for testing
    CreateSample {
        /// Target path: `.safetensors` suffix for a single file,
        /// anything else for a bundle directory
        #[arg(long)]
        model: PathBuf,
        /// Report format
        #[arg(long, value_enum, default_value = "json")]
        output: OutputFormat,
    },
}

impl Commands {
    fn output_format(&self) -> OutputFormat {
        match self {
            Self::Predict { output, .. }
            | Self::Info { output, .. }
            | Self::CreateSample { output, .. } => *output,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "spamclass starting");

    let format = cli.command.output_format();
    match run(cli.command) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report::report_error(&err, format);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Predict {
            model,
            input,
            output,
        } => {
            let raw = read_input(&input)?;
            let features = FeatureVector::from_json(&raw)?;
            let classifier = SpamClassifier::load(&model)?;
            let prediction = classifier.predict(&features)?;
            report::render_prediction(&prediction, output)
        }
        Commands::Info { model, output } => {
            let classifier = SpamClassifier::load(&model)?;
            report::render_info(&classifier.info(), output)
        }
        Commands::CreateSample { model, output } => {
            create_sample_model(&model)?;
            Ok(report::render_status("sample model created", output))
        }
    }
}

/// Read the features document from a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading features from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Logs go to stderr so stdout stays parseable for scripting callers.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
