pub mod json;
pub mod md;

use crate::detect::Detection;
use crate::error::SfiError;
use crate::types::report::Assessment;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    assessments: &[Assessment],
    format: OutputFormat,
    project: Option<&str>,
) -> Result<String, SfiError> {
    match format {
        OutputFormat::Json => json::to_json(assessments).map_err(SfiError::Json),
        OutputFormat::Md => Ok(md::to_markdown(assessments, project)),
    }
}

pub fn render_detection(
    source: &str,
    detection: &Detection,
    format: OutputFormat,
) -> Result<String, SfiError> {
    match format {
        OutputFormat::Json => json::detection_to_json(source, detection).map_err(SfiError::Json),
        OutputFormat::Md => Ok(md::detection_to_markdown(source, detection)),
    }
}

pub fn render_rules(format: OutputFormat) -> Result<String, SfiError> {
    match format {
        OutputFormat::Json => json::rules_to_json().map_err(SfiError::Json),
        OutputFormat::Md => Ok(md::rules_to_markdown()),
    }
}

/// Writes a rendered report for export, creating parent directories.
pub fn export(path: &Path, rendered: &str) -> Result<(), SfiError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, rendered)?;
    tracing::info!(path = %path.display(), "report exported");
    Ok(())
}
