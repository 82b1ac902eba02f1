//! Static registry of recognizer patterns.
//!
//! Everything the extraction engine can recognize lives here as literal
//! data: model constructors grouped by framework, training calls,
//! evaluation calls, and dataset-loading calls. Supporting a new framework
//! means adding entries to the model pattern table; the scanning pipeline
//! in [`crate::extract`] never changes.
//!
//! All patterns are compiled case-insensitive, once, at first use. An
//! invalid pattern is a programmer error and panics at initialization.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Modeling ecosystem a matched pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Sklearn,
    Xgboost,
    Lightgbm,
    Tensorflow,
    Pytorch,
}

impl Framework {
    /// Lowercase tag used in reports and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sklearn => "sklearn",
            Self::Xgboost => "xgboost",
            Self::Lightgbm => "lightgbm",
            Self::Tensorflow => "tensorflow",
            Self::Pytorch => "pytorch",
        }
    }
}

/// Model-constructor patterns for one framework.
#[derive(Debug)]
pub struct ModelPatternGroup {
    pub framework: Framework,
    pub patterns: Vec<Regex>,
}

fn pattern(re: &str) -> Regex {
    RegexBuilder::new(re)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("Invalid pattern '{re}': {e}"))
}

/// Model-constructor patterns, grouped by framework. Iteration order is
/// fixed and observable: records for one cell come out in this order.
static MODEL_PATTERNS: Lazy<Vec<ModelPatternGroup>> = Lazy::new(|| {
    vec![
        ModelPatternGroup {
            framework: Framework::Sklearn,
            patterns: vec![
                pattern(r"LinearRegression\s*\("),
                pattern(r"LogisticRegression\s*\("),
                pattern(r"RandomForestRegressor\s*\("),
                pattern(r"RandomForestClassifier\s*\("),
                pattern(r"SVC\s*\("),
                pattern(r"SVR\s*\("),
                pattern(r"GradientBoostingRegressor\s*\("),
                pattern(r"GradientBoostingClassifier\s*\("),
                pattern(r"DecisionTreeRegressor\s*\("),
                pattern(r"DecisionTreeClassifier\s*\("),
                pattern(r"KNeighborsRegressor\s*\("),
                pattern(r"KNeighborsClassifier\s*\("),
                pattern(r"MLPRegressor\s*\("),
                pattern(r"MLPClassifier\s*\("),
            ],
        },
        ModelPatternGroup {
            framework: Framework::Xgboost,
            patterns: vec![
                pattern(r"XGBRegressor\s*\("),
                pattern(r"XGBClassifier\s*\("),
                pattern(r"xgb\.train\s*\("),
            ],
        },
        ModelPatternGroup {
            framework: Framework::Lightgbm,
            patterns: vec![
                pattern(r"LGBMRegressor\s*\("),
                pattern(r"LGBMClassifier\s*\("),
                pattern(r"lgb\.train\s*\("),
            ],
        },
        ModelPatternGroup {
            framework: Framework::Tensorflow,
            patterns: vec![
                pattern(r"tf\.keras\.models\.Sequential\s*\("),
                pattern(r"keras\.models\.Sequential\s*\("),
                pattern(r"tf\.keras\.Model\s*\("),
                pattern(r"Model\s*\("),
            ],
        },
        ModelPatternGroup {
            framework: Framework::Pytorch,
            patterns: vec![
                pattern(r"torch\.nn\.Module"),
                pattern(r"nn\.Module"),
                pattern(r"torch\.nn\.Linear\s*\("),
                pattern(r"nn\.Linear\s*\("),
            ],
        },
    ]
});

/// Calls that indicate a cell trains a model.
static TRAINING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        pattern(r"\.fit\s*\("),
        pattern(r"\.train\s*\("),
        pattern(r"model\.compile\s*\("),
        pattern(r"\.fit_generator\s*\("),
    ]
});

/// Calls that indicate a cell evaluates a model.
static EVALUATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        pattern(r"\.predict\s*\("),
        pattern(r"\.score\s*\("),
        pattern(r"\.evaluate\s*\("),
        pattern(r"\.predict_proba\s*\("),
        pattern(r"cross_val_score\s*\("),
        pattern(r"train_test_split\s*\("),
        pattern(r"accuracy_score\s*\("),
        pattern(r"mean_squared_error\s*\("),
        pattern(r"classification_report\s*\("),
        pattern(r"confusion_matrix\s*\("),
    ]
});

/// Calls that load or synthesize a dataset.
static DATASET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        pattern(r"pd\.read_csv\s*\("),
        pattern(r"pd\.read_excel\s*\("),
        pattern(r"load_iris\s*\("),
        pattern(r"load_boston\s*\("),
        pattern(r"load_diabetes\s*\("),
        pattern(r"load_wine\s*\("),
        pattern(r"load_breast_cancer\s*\("),
        pattern(r"make_classification\s*\("),
        pattern(r"make_regression\s*\("),
    ]
});

/// Model-constructor pattern groups, in fixed framework order.
pub fn model_patterns() -> &'static [ModelPatternGroup] {
    &MODEL_PATTERNS
}

/// Training-call patterns.
pub fn training_patterns() -> &'static [Regex] {
    &TRAINING_PATTERNS
}

/// Evaluation-call patterns.
pub fn evaluation_patterns() -> &'static [Regex] {
    &EVALUATION_PATTERNS
}

/// Dataset-loading patterns.
pub fn dataset_patterns() -> &'static [Regex] {
    &DATASET_PATTERNS
}
