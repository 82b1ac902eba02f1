//! Reader for nbformat v4 notebook containers.

use crate::error::{AnalyzerError, Result};
use crate::types::{Cell, CellKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RawNotebook {
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: SourceText,
}

/// nbformat stores a cell's source either as one joined string or as a
/// list of line strings (each keeping its trailing newline).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceText {
    Joined(String),
    Lines(Vec<String>),
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::Joined(String::new())
    }
}

impl SourceText {
    fn into_string(self) -> String {
        match self {
            SourceText::Joined(s) => s,
            SourceText::Lines(lines) => lines.concat(),
        }
    }
}

/// Read a notebook file into its ordered cell sequence.
///
/// Every cell of the document is returned, indexed by its position among
/// all cells; non-code cells keep their place so record indices line up
/// with notebook numbering.
pub fn read_notebook(path: &Path) -> Result<Vec<Cell>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AnalyzerError::NotebookParse(format!("{}: {e}", path.display())))?;
    let cells = cells_from_json(&raw)
        .map_err(|e| AnalyzerError::NotebookParse(format!("{}: {e}", path.display())))?;

    debug!("Read {} cells from {}", cells.len(), path.display());
    Ok(cells)
}

fn cells_from_json(raw: &str) -> serde_json::Result<Vec<Cell>> {
    let notebook: RawNotebook = serde_json::from_str(raw)?;

    Ok(notebook
        .cells
        .into_iter()
        .enumerate()
        .map(|(index, cell)| {
            let kind = if cell.cell_type == "code" {
                CellKind::Code
            } else {
                CellKind::Other
            };
            Cell {
                index,
                source: cell.source.into_string(),
                kind,
            }
        })
        .collect())
}
