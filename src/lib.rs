//! Notebook Model Analysis Library
//!
//! A heuristic extraction engine for machine learning experiment notebooks.
//!
//! # Overview
//!
//! This library scans Jupyter notebook files (or their HTML exports) without
//! executing them and reconstructs the ML experiment they describe:
//!
//! - **Model Detection**: Regex-catalog matching for sklearn, XGBoost,
//!   LightGBM, TensorFlow/Keras and PyTorch constructors
//! - **Hyperparameter Extraction**: Balanced-parenthesis argument scanning
//!   with typed literal decoding
//! - **Dataset Detection**: Loader-call matching with assignment-name
//!   inference and `shape: (...)` comment parsing
//! - **Workflow Classification**: Per-cell training and evaluation flags
//! - **Insight Synthesis**: Rule-based recommendations and warnings
//! - **Reporting**: JSON summaries and standalone HTML report pages
//!
//! Scanned source is treated as untrusted text. Extraction never executes
//! notebook code and never fails on malformed code; anomalies degrade to
//! absent or fallback values.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use model_analyzer::{ModelAnalyzer, ReportGenerator, read_notebook};
//! use std::path::Path;
//!
//! let cells = read_notebook(Path::new("experiment.ipynb"))?;
//! let result = ModelAnalyzer::new().analyze(&cells);
//!
//! for model in &result.models {
//!     println!("{} in cell {}", model.model_type, model.cell_index);
//! }
//!
//! let generator = ReportGenerator::new();
//! generator.write_html(&result, Path::new("report.html"))?;
//! ```
//!
//! # Configuration
//!
//! Use [`AnalyzerConfig`] to adjust the scan windows:
//!
//! ```rust,ignore
//! use model_analyzer::{AnalyzerConfig, ModelAnalyzer};
//!
//! let config = AnalyzerConfig::builder()
//!     .excerpt_context(80)    // chars of context kept around a model match
//!     .shape_window(400)      // chars searched for a shape annotation
//!     .build()?;
//!
//! let analyzer = ModelAnalyzer::with_config(config);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod insights;
pub mod report;
pub mod types;

// Re-exports for convenient access
pub use catalog::Framework;
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, ConfigValidationError};
pub use error::{AnalyzerError, Result as AnalyzerResult, ResultExt};
pub use extract::ModelAnalyzer;
pub use ingest::{read_html, read_notebook};
pub use report::ReportGenerator;
pub use types::{AnalysisResult, Cell, CellKind, DatasetRecord, Hyperparameters, ModelRecord, ParamValue};
