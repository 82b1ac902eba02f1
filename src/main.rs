//! CLI entry point for the notebook model analyzer.

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use model_analyzer::{
    AnalyzerConfig, AnalyzerError, ModelAnalyzer, ReportGenerator, read_html, read_notebook,
};
use std::path::Path;
use tracing::info;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Standalone HTML report page
    Html,
    /// Compact JSON summary
    Json,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Analyze machine learning models in Jupyter notebooks",
    long_about = "Scans a Jupyter notebook (.ipynb) or its HTML export for ML model\n\
                  definitions, hyperparameters, datasets and workflow structure,\n\
                  without executing any notebook code.\n\n\
                  EXAMPLES:\n  \
                  # HTML report to a file\n  \
                  model-analyzer experiment.ipynb -o report.html\n\n  \
                  # JSON summary to stdout, for piping\n  \
                  model-analyzer experiment.ipynb --format json | jq .models\n\n  \
                  # Analyze an nbconvert HTML export\n  \
                  model-analyzer experiment.html -o report.html"
)]
struct Args {
    /// Input notebook (.ipynb) or HTML export (.html)
    input: String,

    /// Output file for the report
    ///
    /// If not specified, the report is written to stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "html")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Characters of context kept around each model match in its excerpt
    #[arg(long, default_value = "50")]
    excerpt_context: usize,

    /// Characters searched after a dataset match for a shape annotation
    #[arg(long, default_value = "200")]
    shape_window: usize,
}

/// Initialize the tracing subscriber for logging.
///
/// When the report goes to stdout, logging is completely disabled so the
/// output stays machine-readable.
fn init_logging(level: &str, quiet: bool, stdout_output: bool) {
    if stdout_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is disabled when the report itself goes to stdout
    init_logging(&args.log_level, args.quiet, args.output.is_none());

    let input = Path::new(&args.input);
    if !input.exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let config = AnalyzerConfig::builder()
        .excerpt_context(args.excerpt_context)
        .shape_window(args.shape_window)
        .build()?;

    // Dispatch on the input extension
    let extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    info!("Loading document: {}", args.input);
    let cells = match extension.as_str() {
        "ipynb" => read_notebook(input)?,
        "html" | "htm" => read_html(input)?,
        _ => {
            return Err(AnalyzerError::UnsupportedFormat(format!(
                "Input file must be .ipynb or .html, got: {}",
                args.input
            ))
            .into());
        }
    };

    let result = ModelAnalyzer::with_config(config).analyze(&cells);
    let generator = ReportGenerator::new();

    match (args.format, args.output.as_deref()) {
        (OutputFormat::Json, Some(path)) => generator.write_json(&result, Path::new(path))?,
        (OutputFormat::Json, None) => {
            println!("{}", serde_json::to_string_pretty(&generator.to_json(&result))?);
        }
        (OutputFormat::Html, Some(path)) => generator.write_html(&result, Path::new(path))?,
        (OutputFormat::Html, None) => print!("{}", generator.render_html(&result)),
    }

    Ok(())
}
