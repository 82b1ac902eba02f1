//! Document ingestion.
//!
//! Turns a notebook container file (`.ipynb`, nbformat v4 JSON) or an HTML
//! export into the ordered [`crate::types::Cell`] sequence the extraction
//! engine consumes. This is the only place a malformed *document* is an
//! error; once cells exist, analysis cannot fail.
//!
//! Which reader to use is the caller's choice (the CLI dispatches on file
//! extension).

mod html;
mod notebook;

pub use html::read_html;
pub use notebook::read_notebook;
