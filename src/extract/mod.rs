//! The extraction engine.
//!
//! Layered bottom-up: [`decode_literal`] turns one argument value into a
//! typed [`crate::types::ParamValue`]; [`parse_call_arguments`] finds a
//! call's balanced argument list and decodes it; [`scan_cell`] runs the
//! whole pattern catalog against one cell; [`ModelAnalyzer`] aggregates
//! across a document and attaches the synthesized insights.
//!
//! Every layer is total over arbitrary text: scanned source is never
//! assumed to be syntactically valid, and scan failures degrade to empty
//! or fallback values rather than errors.

mod arguments;
mod cell;
mod document;
mod literal;

pub use arguments::parse_call_arguments;
pub use cell::{CellScan, scan_cell};
pub use document::ModelAnalyzer;
pub use literal::decode_literal;
