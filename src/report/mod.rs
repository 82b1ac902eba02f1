//! Report generation module.
//!
//! Renders an [`crate::types::AnalysisResult`] as either a compact JSON
//! summary or a standalone HTML page, to a file or to stdout.
//!
//! # Example
//!
//! ```rust,ignore
//! use model_analyzer::{ModelAnalyzer, ReportGenerator};
//!
//! let result = ModelAnalyzer::new().analyze(&cells);
//! let generator = ReportGenerator::new();
//!
//! // Print as JSON
//! println!("{}", serde_json::to_string_pretty(&generator.to_json(&result))?);
//!
//! // Or write an HTML report
//! generator.write_html(&result, Path::new("report.html"))?;
//! ```

mod generator;

pub use generator::ReportGenerator;
