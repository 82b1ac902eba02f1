//! Document-level extraction: drives the cell scanner over a whole
//! document and aggregates the results.

use crate::config::AnalyzerConfig;
use crate::insights;
use crate::types::{AnalysisResult, Cell};
use tracing::info;

use super::cell::scan_cell;

/// The analysis engine. Holds only configuration; every call to
/// [`ModelAnalyzer::analyze`] is independent and deterministic.
///
/// # Example
///
/// ```rust,ignore
/// use model_analyzer::{Cell, ModelAnalyzer};
///
/// let cells = vec![Cell::code(0, "model = LinearRegression()\nmodel.fit(X, y)")];
/// let result = ModelAnalyzer::new().analyze(&cells);
/// assert_eq!(result.models[0].model_type, "LinearRegression");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelAnalyzer {
    config: AnalyzerConfig,
}

impl ModelAnalyzer {
    /// Create an analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze an ordered sequence of cells.
    ///
    /// Only code cells participate; others are skipped but keep their
    /// place in the document's index space. An empty sequence is not an
    /// error: it yields a result whose collections are all empty except
    /// for the "no models detected" recommendation.
    pub fn analyze(&self, cells: &[Cell]) -> AnalysisResult {
        let mut result = AnalysisResult::default();

        for cell in cells {
            if !cell.is_code() {
                continue;
            }

            let scan = scan_cell(cell, &self.config);
            if scan.is_training {
                result.training_cells.push(cell.index);
            }
            if scan.is_evaluation {
                result.evaluation_cells.push(cell.index);
            }
            result.models.extend(scan.models);
            result.datasets.extend(scan.datasets);
        }

        info!(
            "Analyzed {} cells: {} models, {} datasets, {} training cells, {} evaluation cells",
            cells.len(),
            result.models.len(),
            result.datasets.len(),
            result.training_cells.len(),
            result.evaluation_cells.len()
        );

        result.recommendations = insights::recommendations(&result.models, &result.datasets);
        result.warnings = insights::warnings(&result.models);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::NO_MODELS;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document() {
        let result = ModelAnalyzer::new().analyze(&[]);

        assert!(result.models.is_empty());
        assert!(result.datasets.is_empty());
        assert!(result.training_cells.is_empty());
        assert!(result.evaluation_cells.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.recommendations, vec![NO_MODELS.to_string()]);
    }

    #[test]
    fn test_non_code_cells_are_skipped_but_keep_indices() {
        let cells = vec![
            Cell::other(0, "# Training\nRandomForestClassifier(n_estimators=10)"),
            Cell::code(1, "clf = RandomForestClassifier(n_estimators=10)\nclf.fit(X, y)"),
        ];
        let result = ModelAnalyzer::new().analyze(&cells);

        assert_eq!(result.models.len(), 1);
        assert_eq!(result.models[0].cell_index, 1);
        assert_eq!(result.training_cells, vec![1]);
    }

    #[test]
    fn test_records_accumulate_in_cell_order() {
        let cells = vec![
            Cell::code(0, "a = LogisticRegression()"),
            Cell::code(1, "b = LinearRegression()"),
        ];
        let result = ModelAnalyzer::new().analyze(&cells);

        let order: Vec<(usize, &str)> = result
            .models
            .iter()
            .map(|m| (m.cell_index, m.model_type.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![(0, "LogisticRegression"), (1, "LinearRegression")]
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let cells = vec![
            Cell::code(0, "df = pd.read_csv('train.csv')  # shape: (891, 12)"),
            Cell::code(1, "clf = XGBClassifier(max_depth=6)\nclf.fit(X, y)"),
            Cell::code(2, "clf.predict(X_test)"),
        ];
        let analyzer = ModelAnalyzer::new();

        let first = analyzer.analyze(&cells);
        let second = analyzer.analyze(&cells);
        assert_eq!(first, second);
    }

    #[test]
    fn test_training_and_evaluation_indices_ordered() {
        let cells = vec![
            Cell::code(0, "model.fit(X, y)"),
            Cell::other(1, "notes"),
            Cell::code(2, "model.fit(X2, y2)\nmodel.score(X2, y2)"),
        ];
        let result = ModelAnalyzer::new().analyze(&cells);

        assert_eq!(result.training_cells, vec![0, 2]);
        assert_eq!(result.evaluation_cells, vec![2]);
    }
}
