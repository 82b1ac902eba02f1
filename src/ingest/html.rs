//! Reader for HTML notebook exports.
//!
//! nbconvert wraps each rendered code cell in a `<div class="highlight">`
//! block. The reader pulls those blocks out, strips the syntax-highlighting
//! markup, and yields the plain source text. Only code cells survive an
//! HTML export, so every extracted block is a code cell and the index space
//! is the enumeration order of the blocks.

use crate::error::{AnalyzerError, Result};
use crate::types::Cell;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Opening tag of a highlighted code block. Matches any `<div>` whose
/// class list contains the `highlight` token.
static HIGHLIGHT_DIV: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r#"<div\b[^>]*class\s*=\s*["'][^"']*\bhighlight\b[^"']*["'][^>]*>"#)
        .case_insensitive(true)
        .build()
        .expect("Invalid regex: highlight div")
});

/// Any div boundary, for depth counting inside a highlight block.
static DIV_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"</?div\b")
        .case_insensitive(true)
        .build()
        .expect("Invalid regex: div boundary")
});

static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex: markup tag"));

/// Read an HTML notebook export into its code cell sequence.
///
/// A file that cannot be read is an error; a file with no recognizable
/// code blocks is an empty document, not an error.
pub fn read_html(path: &Path) -> Result<Vec<Cell>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AnalyzerError::HtmlParse(format!("{}: {e}", path.display())))?;
    let cells = code_cells_from_html(&raw);

    debug!("Read {} code cells from {}", cells.len(), path.display());
    Ok(cells)
}

fn code_cells_from_html(html: &str) -> Vec<Cell> {
    HIGHLIGHT_DIV
        .find_iter(html)
        .enumerate()
        .map(|(index, open)| {
            let body_start = open.end();
            let body_end = block_end(html, body_start);
            let source = unescape_entities(&strip_markup(&html[body_start..body_end]));
            Cell::code(index, source.trim_end_matches('\n'))
        })
        .collect()
}

/// Find where the block opened just before `from` closes, tracking nested
/// divs. An unclosed block runs to the end of the document.
fn block_end(html: &str, from: usize) -> usize {
    let mut depth = 1usize;
    for boundary in DIV_BOUNDARY.find_iter(&html[from..]) {
        if boundary.as_str().starts_with("</") {
            depth -= 1;
            if depth == 0 {
                return from + boundary.start();
            }
        } else {
            depth += 1;
        }
    }
    html.len()
}

fn strip_markup(block: &str) -> String {
    TAG.replace_all(block, "").into_owned()
}

fn unescape_entities(text: &str) -> String {
    // `&amp;` last, so already-unescaped ampersands are not double-decoded.
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
