//! Data model for notebook analysis.
//!
//! Cells come in from the ingestion layer, records come out of the
//! extraction engine, and [`AnalysisResult`] is the single aggregate handed
//! to the reporting layer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for document cells. Only code cells are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Executable code content.
    Code,
    /// Markdown, raw text, or anything else the document carries.
    Other,
}

/// One unit of content within an analyzed document, identified by its
/// position among *all* of the document's cells (code and other alike).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Zero-based position within the source document.
    pub index: usize,
    /// Raw cell text. Never assumed to be syntactically valid.
    pub source: String,
    /// Cell discriminator.
    pub kind: CellKind,
}

impl Cell {
    /// Create a code cell.
    pub fn code(index: usize, source: impl Into<String>) -> Self {
        Self {
            index,
            source: source.into(),
            kind: CellKind::Code,
        }
    }

    /// Create a non-code cell.
    pub fn other(index: usize, source: impl Into<String>) -> Self {
        Self {
            index,
            source: source.into(),
            kind: CellKind::Other,
        }
    }

    pub fn is_code(&self) -> bool {
        self.kind == CellKind::Code
    }
}

/// A hyperparameter value decoded from scanned source text.
///
/// Decoding is best-effort: anything the safe literal grammar cannot handle
/// is preserved verbatim as [`ParamValue::Raw`]. Variant order matters for
/// untagged deserialization (integers before floats, quoted strings before
/// raw text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean literal (`True` / `False` in the scanned source).
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating-point literal.
    Float(f64),
    /// `None` literal.
    None,
    /// Quoted string literal, quotes stripped.
    Str(String),
    /// Bracketed collection literal, elements decoded recursively.
    List(Vec<ParamValue>),
    /// Verbatim source text for anything the literal grammar rejected.
    Raw(String),
}

impl ParamValue {
    /// Truthiness following the scanned language's conventions: zero, empty,
    /// `False`, and `None` are all falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            ParamValue::Bool(b) => *b,
            ParamValue::Int(i) => *i != 0,
            ParamValue::Float(f) => *f != 0.0,
            ParamValue::None => false,
            ParamValue::Str(s) | ParamValue::Raw(s) => !s.is_empty(),
            ParamValue::List(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::None => write!(f, "None"),
            ParamValue::Str(s) | ParamValue::Raw(s) => write!(f, "{s}"),
            ParamValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Ordered mapping from argument name to decoded value.
///
/// Key order is first-seen; a name repeated in source keeps its original
/// position but takes the last value (last-write-wins).
pub type Hyperparameters = IndexMap<String, ParamValue>;

/// Information about one matched model-constructor occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Cleaned call name, e.g. `RandomForestClassifier`.
    pub model_type: String,
    /// Constructor arguments captured from the call site.
    pub hyperparameters: Hyperparameters,
    /// Index of the cell the match was found in.
    pub cell_index: usize,
    /// Bounded window of source text surrounding the match.
    pub source_excerpt: String,
    /// 1-based line within the cell where the match starts.
    pub line_number: usize,
}

/// Information about one matched dataset-loading occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Identifier the dataset was assigned to, or a synthesized
    /// `dataset_{offset}` fallback.
    pub name: String,
    /// Dimensions parsed from a nearby `shape: (...)` annotation, if any.
    pub shape: Option<Vec<usize>>,
    /// Human-readable description.
    pub description: String,
    /// Index of the cell the match was found in.
    pub cell_index: usize,
}

/// Complete analysis of one document. Built once, immutable after
/// construction, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Model records in cell-then-match order.
    pub models: Vec<ModelRecord>,
    /// Dataset records in cell-then-match order.
    pub datasets: Vec<DatasetRecord>,
    /// Indices of cells containing training calls, in document order.
    pub training_cells: Vec<usize>,
    /// Indices of cells containing evaluation calls, in document order.
    pub evaluation_cells: Vec<usize>,
    /// Heuristic recommendations, in rule order.
    pub recommendations: Vec<String>,
    /// Heuristic warnings, in rule order.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_param_value_truthiness() {
        assert!(ParamValue::Int(5).is_truthy());
        assert!(ParamValue::Bool(true).is_truthy());
        assert!(ParamValue::Str("x".to_string()).is_truthy());

        assert!(!ParamValue::Int(0).is_truthy());
        assert!(!ParamValue::Float(0.0).is_truthy());
        assert!(!ParamValue::Bool(false).is_truthy());
        assert!(!ParamValue::None.is_truthy());
        assert!(!ParamValue::Str(String::new()).is_truthy());
        assert!(!ParamValue::List(Vec::new()).is_truthy());
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::Int(100).to_string(), "100");
        assert_eq!(ParamValue::Bool(true).to_string(), "True");
        assert_eq!(ParamValue::None.to_string(), "None");
        assert_eq!(
            ParamValue::List(vec![ParamValue::Int(1), ParamValue::Str("a".to_string())])
                .to_string(),
            "[1, a]"
        );
    }

    #[test]
    fn test_param_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ParamValue::Int(5)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&ParamValue::Bool(false)).unwrap(),
            "false"
        );
        assert_eq!(serde_json::to_string(&ParamValue::None).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&ParamValue::Str("gini".to_string())).unwrap(),
            "\"gini\""
        );
        assert_eq!(
            serde_json::to_string(&ParamValue::List(vec![
                ParamValue::Int(10),
                ParamValue::Int(20)
            ]))
            .unwrap(),
            "[10,20]"
        );
    }

    #[test]
    fn test_hyperparameters_keep_first_seen_order() {
        let mut params = Hyperparameters::new();
        params.insert("n_estimators".to_string(), ParamValue::Int(100));
        params.insert("max_depth".to_string(), ParamValue::Int(5));
        params.insert("n_estimators".to_string(), ParamValue::Int(200)); // overwrite

        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["n_estimators", "max_depth"]);
        assert_eq!(params["n_estimators"], ParamValue::Int(200));
    }

    #[test]
    fn test_analysis_result_json_roundtrip() {
        let result = AnalysisResult {
            models: vec![ModelRecord {
                model_type: "SVC".to_string(),
                hyperparameters: Hyperparameters::from_iter([(
                    "C".to_string(),
                    ParamValue::Float(1.5),
                )]),
                cell_index: 2,
                source_excerpt: "clf = SVC(C=1.5)".to_string(),
                line_number: 1,
            }],
            datasets: vec![DatasetRecord {
                name: "df".to_string(),
                shape: Some(vec![150, 4]),
                description: "Dataset loaded in cell 0".to_string(),
                cell_index: 0,
            }],
            training_cells: vec![2],
            evaluation_cells: vec![],
            recommendations: vec!["tune".to_string()],
            warnings: vec![],
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
