use crate::error::{AnalyzerError, Result};
use crate::types::{AnalysisResult, DatasetRecord, ModelRecord};
use chrono::Local;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tracing::info;

/// Renders analysis results. Stateless; one instance can serve any number
/// of results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the compact JSON summary of a result.
    ///
    /// Model entries carry `type`, `hyperparameters` and `cell`; dataset
    /// entries carry `name`, `shape` and `cell`. Excerpts and line numbers
    /// are an HTML-report concern and are left out here.
    pub fn to_json(&self, result: &AnalysisResult) -> Value {
        json!({
            "models": result.models.iter().map(|m| json!({
                "type": m.model_type,
                "hyperparameters": m.hyperparameters,
                "cell": m.cell_index,
            })).collect::<Vec<_>>(),
            "datasets": result.datasets.iter().map(|d| json!({
                "name": d.name,
                "shape": d.shape,
                "cell": d.cell_index,
            })).collect::<Vec<_>>(),
            "recommendations": result.recommendations,
            "warnings": result.warnings,
        })
    }

    /// Render a standalone HTML report page.
    ///
    /// Everything that originated in scanned source text is escaped before
    /// embedding.
    pub fn render_html(&self, result: &AnalysisResult) -> String {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S");

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Model Analysis Report</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .section {{ margin: 20px 0; }}
        .model-card {{ border: 1px solid #ddd; padding: 15px; margin: 10px 0; }}
        .warning {{ color: #d32f2f; }}
        .recommendation {{ color: #1976d2; }}
        .hyperparams {{ background: #f5f5f5; padding: 10px; margin: 5px 0; }}
        pre {{ background: #f5f5f5; padding: 10px; overflow-x: auto; }}
    </style>
</head>
<body>
    <h1>Model Analysis Report</h1>

    <div class="section">
        <h2>Summary</h2>
        <p>Found {model_count} models across {training_count} training cells</p>
        <p>Detected {dataset_count} datasets</p>
        <p>Generated: {generated_at}</p>
    </div>

    <div class="section">
        <h2>Detected Models</h2>
        {models}
    </div>

    <div class="section">
        <h2>Datasets</h2>
        {datasets}
    </div>

    <div class="section">
        <h2>Recommendations</h2>
        <ul>
            {recommendations}
        </ul>
    </div>

    <div class="section">
        <h2>Warnings</h2>
        <ul>
            {warnings}
        </ul>
    </div>
</body>
</html>
"#,
            model_count = result.models.len(),
            training_count = result.training_cells.len(),
            dataset_count = result.datasets.len(),
            models = models_html(&result.models),
            datasets = datasets_html(&result.datasets),
            recommendations = list_items(&result.recommendations, "recommendation"),
            warnings = list_items(&result.warnings, "warning"),
        )
    }

    /// Render and write the HTML report.
    pub fn write_html(&self, result: &AnalysisResult, path: &Path) -> Result<()> {
        fs::write(path, self.render_html(result))
            .map_err(|e| AnalyzerError::ReportGeneration(format!("{}: {e}", path.display())))?;

        info!("Report saved: {}", path.display());
        Ok(())
    }

    /// Write the JSON summary, pretty-printed.
    pub fn write_json(&self, result: &AnalysisResult, path: &Path) -> Result<()> {
        let body = serde_json::to_string_pretty(&self.to_json(result))?;
        fs::write(path, body)
            .map_err(|e| AnalyzerError::ReportGeneration(format!("{}: {e}", path.display())))?;

        info!("Report saved: {}", path.display());
        Ok(())
    }
}

fn models_html(models: &[ModelRecord]) -> String {
    if models.is_empty() {
        return "<p>No models detected</p>".to_string();
    }

    models
        .iter()
        .map(|model| {
            let hyperparams = if model.hyperparameters.is_empty() {
                String::new()
            } else {
                let lines = model
                    .hyperparameters
                    .iter()
                    .map(|(k, v)| escape_html(&format!("{k}: {v}")))
                    .collect::<Vec<_>>()
                    .join("<br>\n            ");
                format!(
                    r#"<div class="hyperparams">
            <strong>Hyperparameters:</strong><br>
            {lines}
        </div>
        "#
                )
            };

            format!(
                r#"<div class="model-card">
        <h3>{model_type}</h3>
        <p><strong>Cell:</strong> {cell} (Line {line})</p>
        {hyperparams}<pre>{excerpt}</pre>
    </div>
    "#,
                model_type = escape_html(&model.model_type),
                cell = model.cell_index,
                line = model.line_number,
                excerpt = escape_html(&model.source_excerpt),
            )
        })
        .collect()
}

fn datasets_html(datasets: &[DatasetRecord]) -> String {
    if datasets.is_empty() {
        return "<p>No datasets detected</p>".to_string();
    }

    datasets
        .iter()
        .map(|dataset| {
            let shape_info = match &dataset.shape {
                Some(dims) => {
                    let dims = dims
                        .iter()
                        .map(|d| d.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!(" (Shape: ({dims}))")
                }
                None => String::new(),
            };

            format!(
                r#"<div class="model-card">
        <h3>{name}{shape_info}</h3>
        <p><strong>Cell:</strong> {cell}</p>
        <p>{description}</p>
    </div>
    "#,
                name = escape_html(&dataset.name),
                cell = dataset.cell_index,
                description = escape_html(&dataset.description),
            )
        })
        .collect()
}

fn list_items(messages: &[String], class: &str) -> String {
    messages
        .iter()
        .map(|msg| format!(r#"<li class="{class}">{}</li>"#, escape_html(msg)))
        .collect::<Vec<_>>()
        .join("\n            ")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
