//! Configuration for the analysis engine.
//!
//! Uses the builder pattern for ergonomic setup. The defaults reproduce the
//! documented extraction windows; widen them for notebooks with very long
//! lines or shape annotations far from the loading call.

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::ModelAnalyzer`].
///
/// # Example
///
/// ```rust,ignore
/// use model_analyzer::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .excerpt_context(80)
///     .shape_window(300)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Characters of surrounding source kept on each side of a model match
    /// in its `source_excerpt`.
    /// Default: 50
    pub excerpt_context: usize,

    /// Characters searched after a dataset match for a `shape: (...)`
    /// annotation.
    /// Default: 200
    pub shape_window: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            excerpt_context: 50,
            shape_window: 200,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.excerpt_context == 0 {
            return Err(ConfigValidationError::ZeroWindow {
                field: "excerpt_context",
            });
        }

        if self.shape_window == 0 {
            return Err(ConfigValidationError::ZeroWindow {
                field: "shape_window",
            });
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid window for '{field}': must be at least 1 character")]
    ZeroWindow { field: &'static str },
}

/// Builder for [`AnalyzerConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    excerpt_context: Option<usize>,
    shape_window: Option<usize>,
}

impl AnalyzerConfigBuilder {
    /// Set the number of characters kept around each model match.
    pub fn excerpt_context(mut self, chars: usize) -> Self {
        self.excerpt_context = Some(chars);
        self
    }

    /// Set the number of characters searched for a shape annotation.
    pub fn shape_window(mut self, chars: usize) -> Self {
        self.shape_window = Some(chars);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalyzerConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalyzerConfig, ConfigValidationError> {
        let config = AnalyzerConfig {
            excerpt_context: self.excerpt_context.unwrap_or(50),
            shape_window: self.shape_window.unwrap_or(200),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.excerpt_context, 50);
        assert_eq!(config.shape_window, 200);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalyzerConfig::builder()
            .excerpt_context(80)
            .shape_window(400)
            .build()
            .unwrap();
        assert_eq!(config.excerpt_context, 80);
        assert_eq!(config.shape_window, 400);
    }

    #[test]
    fn test_zero_excerpt_context_rejected() {
        let result = AnalyzerConfig::builder().excerpt_context(0).build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("excerpt_context"));
    }

    #[test]
    fn test_zero_shape_window_rejected() {
        let result = AnalyzerConfig::builder().shape_window(0).build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("shape_window"));
    }
}
