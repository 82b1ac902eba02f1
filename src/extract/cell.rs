//! Per-cell scanning pipeline.
//!
//! Runs every catalog pattern against one cell's text, classifies the cell
//! as training/evaluation, and produces a structured record for every model
//! and dataset hit. Nothing here returns an error: parsing failures degrade
//! to partial or empty results for the cell.

use crate::catalog;
use crate::config::AnalyzerConfig;
use crate::types::{Cell, DatasetRecord, ModelRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::arguments::parse_call_arguments;

/// `identifier =` assignment preceding a dataset-loading call.
static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*=").expect("Invalid regex: assignment"));

/// `shape: (n, n, ...)` annotation near a dataset-loading call.
static SHAPE_NOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"shape[:\s]*\(([^)]+)\)").expect("Invalid regex: shape note"));

/// Everything the extractor learned from one cell.
#[derive(Debug, Default)]
pub struct CellScan {
    pub is_training: bool,
    pub is_evaluation: bool,
    pub models: Vec<ModelRecord>,
    pub datasets: Vec<DatasetRecord>,
}

/// Scan one cell. Records reference `cell.index`; within the cell they come
/// out in catalog order, then match order.
pub fn scan_cell(cell: &Cell, config: &AnalyzerConfig) -> CellScan {
    let source = cell.source.as_str();

    let mut scan = CellScan {
        is_training: catalog::training_patterns().iter().any(|p| p.is_match(source)),
        is_evaluation: catalog::evaluation_patterns()
            .iter()
            .any(|p| p.is_match(source)),
        ..Default::default()
    };

    for group in catalog::model_patterns() {
        for pattern in &group.patterns {
            for m in pattern.find_iter(source) {
                let model_type = clean_model_type(m.as_str());
                debug!(
                    "Matched {} model '{}' in cell {}",
                    group.framework.name(),
                    model_type,
                    cell.index
                );

                scan.models.push(ModelRecord {
                    model_type,
                    hyperparameters: parse_call_arguments(source, m.start()),
                    cell_index: cell.index,
                    source_excerpt: excerpt_window(
                        source,
                        m.start(),
                        m.end(),
                        config.excerpt_context,
                    )
                    .to_string(),
                    line_number: source[..m.start()].matches('\n').count() + 1,
                });
            }
        }
    }

    for pattern in catalog::dataset_patterns() {
        for m in pattern.find_iter(source) {
            scan.datasets.push(DatasetRecord {
                name: infer_dataset_name(source, m.start()),
                shape: extract_shape(source, m.start(), config.shape_window),
                description: format!("Dataset loaded in cell {}", cell.index),
                cell_index: cell.index,
            });
        }
    }

    scan
}

/// Strip the trailing call-opening parenthesis and anything after it from
/// the matched text.
fn clean_model_type(matched: &str) -> String {
    let matched = matched.trim();
    match matched.find('(') {
        Some(pos) => matched[..pos].trim_end().to_string(),
        None => matched.to_string(),
    }
}

/// Bounded window of source around a match, clipped to the cell and to
/// UTF-8 character boundaries.
fn excerpt_window(source: &str, start: usize, end: usize, context: usize) -> &str {
    let lo = floor_char_boundary(source, start.saturating_sub(context));
    let hi = ceil_char_boundary(source, end.saturating_add(context).min(source.len()));
    &source[lo..hi]
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_char_boundary(s: &str, mut i: usize) -> usize {
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Scan the text preceding the match, within its source line, for an
/// `identifier =` assignment. Falls back to a name synthesized from the
/// match offset, which is unique within the cell if not human-friendly.
fn infer_dataset_name(source: &str, match_start: usize) -> String {
    let line = source[..match_start].rsplit('\n').next().unwrap_or("");
    if let Some(caps) = ASSIGNMENT.captures(line) {
        return caps[1].to_string();
    }
    format!("dataset_{match_start}")
}

/// Look for a `shape: (n, n, ...)` annotation in a bounded window after the
/// match start. All dimensions must parse or the shape is absent.
fn extract_shape(source: &str, match_start: usize, window: usize) -> Option<Vec<usize>> {
    let hi = ceil_char_boundary(source, match_start.saturating_add(window).min(source.len()));
    let caps = SHAPE_NOTE.captures(&source[match_start..hi])?;
    caps[1]
        .split(',')
        .map(|dim| dim.trim().parse::<usize>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamValue;
    use pretty_assertions::assert_eq;

    fn scan(source: &str) -> CellScan {
        scan_cell(&Cell::code(0, source), &AnalyzerConfig::default())
    }

    #[test]
    fn test_cell_with_no_matches_is_empty() {
        let scan = scan("import numpy as np\nprint('hello')\n");

        assert!(!scan.is_training);
        assert!(!scan.is_evaluation);
        assert!(scan.models.is_empty());
        assert!(scan.datasets.is_empty());
    }

    #[test]
    fn test_model_with_hyperparameters() {
        let scan = scan("model = RandomForestClassifier(max_depth=5, n_estimators=100)\nmodel.fit(X, y)");

        assert!(scan.is_training);
        assert_eq!(scan.models.len(), 1);

        let model = &scan.models[0];
        assert_eq!(model.model_type, "RandomForestClassifier");
        assert_eq!(model.hyperparameters["max_depth"], ParamValue::Int(5));
        assert_eq!(model.hyperparameters["n_estimators"], ParamValue::Int(100));
        assert_eq!(model.cell_index, 0);
        assert_eq!(model.line_number, 1);
    }

    #[test]
    fn test_line_number_is_one_based_within_cell() {
        let scan = scan("import sklearn\n\n\ntree = DecisionTreeClassifier()\n");
        assert_eq!(scan.models[0].line_number, 4);
    }

    #[test]
    fn test_evaluation_classification() {
        let scan = scan("preds = model.predict(X_test)\nprint(accuracy_score(y_test, preds))");

        assert!(scan.is_evaluation);
        assert!(!scan.is_training);
        assert!(scan.models.is_empty());
    }

    #[test]
    fn test_excerpt_is_bounded_and_contains_match() {
        let padding = "x = 0\n".repeat(40);
        let source = format!("{padding}clf = SVC(C=1.0)\n{padding}");
        let scan = scan(&source);

        let excerpt = &scan.models[0].source_excerpt;
        assert!(excerpt.contains("SVC("));
        // 50 chars each side plus the match itself.
        assert!(excerpt.len() <= "SVC(".len() + 100);
    }

    #[test]
    fn test_excerpt_clips_to_cell_bounds() {
        let scan = scan("SVC()");
        assert_eq!(scan.models[0].source_excerpt, "SVC()");
    }

    #[test]
    fn test_excerpt_respects_multibyte_boundaries() {
        let source = format!("{} clf = SVC(C=1)", "\u{00e9}".repeat(40));
        // Must not panic slicing into a two-byte character.
        let scan = scan(&source);
        assert_eq!(scan.models.len(), 1);
    }

    #[test]
    fn test_dataset_name_from_assignment() {
        let scan = scan(r#"df = pd.read_csv("data.csv")  # shape: (150, 4)"#);

        assert_eq!(scan.datasets.len(), 1);
        let dataset = &scan.datasets[0];
        assert_eq!(dataset.name, "df");
        assert_eq!(dataset.shape, Some(vec![150, 4]));
        assert_eq!(dataset.description, "Dataset loaded in cell 0");
    }

    #[test]
    fn test_dataset_name_fallback_is_offset_based() {
        let scan = scan(r#"print(pd.read_csv("data.csv"))"#);

        assert_eq!(scan.datasets[0].name, "dataset_6");
    }

    #[test]
    fn test_shape_absent_when_unparsable() {
        let scan = scan(r#"df = pd.read_csv("x.csv")  # shape: (150, four)"#);
        assert_eq!(scan.datasets[0].shape, None);
    }

    #[test]
    fn test_shape_outside_window_is_ignored() {
        let filler = "# ".to_string() + &"y".repeat(250) + "\n";
        let source = format!("df = pd.read_csv(\"x.csv\")\n{filler}# shape: (10, 2)");
        let scan = scan(&source);
        assert_eq!(scan.datasets[0].shape, None);
    }

    #[test]
    fn test_multiple_models_in_one_cell() {
        let scan = scan("a = LinearRegression()\nb = LogisticRegression()\n");

        let types: Vec<&str> = scan.models.iter().map(|m| m.model_type.as_str()).collect();
        assert_eq!(types, vec!["LinearRegression", "LogisticRegression"]);
    }

    #[test]
    fn test_model_type_strips_whitespace_before_paren() {
        let scan = scan("clf = DecisionTreeClassifier  (criterion='gini')");
        assert_eq!(scan.models[0].model_type, "DecisionTreeClassifier");
        assert_eq!(
            scan.models[0].hyperparameters["criterion"],
            ParamValue::Str("gini".to_string())
        );
    }

    #[test]
    fn test_pattern_without_paren_keeps_full_match() {
        let scan = scan("class Net(nn.Module):\n    pass\n");
        assert_eq!(scan.models[0].model_type, "nn.Module");
    }

    #[test]
    fn test_truncated_call_yields_model_with_empty_hyperparameters() {
        let scan = scan("clf = GradientBoostingClassifier(n_estimators=50, lear");

        assert_eq!(scan.models.len(), 1);
        assert!(scan.models[0].hyperparameters.is_empty());
    }
}
