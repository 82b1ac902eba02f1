//! Heuristic recommendation and warning synthesis.
//!
//! Pure functions of the aggregated model/dataset collections. Rules run
//! in a fixed order and every satisfied rule appends its message; the
//! "no models" rule is the one short-circuit, suppressing the rest of the
//! recommendation chain.

use crate::types::{DatasetRecord, ModelRecord};
use std::collections::HashSet;

pub const NO_MODELS: &str = "No models detected. Consider adding model training code.";
pub const TRY_MULTIPLE_MODELS: &str = "Consider trying multiple model types for comparison.";
pub const TUNE_HYPERPARAMETERS: &str = "Consider hyperparameter tuning for better performance.";
pub const USE_CROSS_VALIDATION: &str = "Implement cross-validation for robust model evaluation.";
pub const FEATURE_ENGINEERING: &str = "Consider feature engineering and data preprocessing.";
pub const NO_CROSS_VALIDATION: &str = "No cross-validation detected. Model may not generalize well.";

/// Model families prone to overfitting when grown without a depth limit.
const DEPTH_SENSITIVE_FAMILIES: [&str; 2] = ["DecisionTreeRegressor", "DecisionTreeClassifier"];

/// Hyperparameter that constrains tree depth.
const DEPTH_KEY: &str = "max_depth";

/// Substring whose presence in a model's excerpt indicates cross-validation.
const CROSS_VALIDATION_MARKER: &str = "cross_val";

/// Evaluate the recommendation rules, in order.
pub fn recommendations(models: &[ModelRecord], datasets: &[DatasetRecord]) -> Vec<String> {
    let mut recommendations = Vec::new();

    // Rule 1: nothing to work with; no further rules apply.
    if models.is_empty() {
        recommendations.push(NO_MODELS.to_string());
        return recommendations;
    }

    // Rule 2: only one distinct model type in the whole document.
    let distinct_types: HashSet<&str> = models.iter().map(|m| m.model_type.as_str()).collect();
    if distinct_types.len() == 1 {
        recommendations.push(TRY_MULTIPLE_MODELS.to_string());
    }

    // Rule 3: at least one model was instantiated with no hyperparameters.
    let tuned = models
        .iter()
        .filter(|m| !m.hyperparameters.is_empty())
        .count();
    if tuned < models.len() {
        recommendations.push(TUNE_HYPERPARAMETERS.to_string());
    }

    // Rule 4: always, when models exist.
    recommendations.push(USE_CROSS_VALIDATION.to_string());

    // Rule 5: preprocessing advice only makes sense with data in view.
    if !datasets.is_empty() {
        recommendations.push(FEATURE_ENGINEERING.to_string());
    }

    recommendations
}

/// Evaluate the warning rules, in order.
pub fn warnings(models: &[ModelRecord]) -> Vec<String> {
    let mut warnings = Vec::new();

    // Rule 1: one warning per unconstrained decision tree.
    for model in models {
        let depth_sensitive = DEPTH_SENSITIVE_FAMILIES
            .iter()
            .any(|family| model.model_type.contains(family));
        let depth_limited = model
            .hyperparameters
            .get(DEPTH_KEY)
            .is_some_and(|value| value.is_truthy());

        if depth_sensitive && !depth_limited {
            warnings.push(format!(
                "Decision tree without max_depth may overfit (Cell {})",
                model.cell_index
            ));
        }
    }

    // Rule 2: one warning when no excerpt shows cross-validation.
    if !models.is_empty()
        && !models
            .iter()
            .any(|m| m.source_excerpt.contains(CROSS_VALIDATION_MARKER))
    {
        warnings.push(NO_CROSS_VALIDATION.to_string());
    }

    warnings
}
