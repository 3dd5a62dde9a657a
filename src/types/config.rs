use crate::error::SfiError;
use crate::types::scoring::{Points, MAX_TOTAL};
use serde::Deserialize;
use std::collections::BTreeMap;

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SfiConfig {
    pub project: Option<ProjectConfig>,
    pub review: Option<ReviewConfig>,
    pub report: Option<ReportConfig>,
    pub scoring: Option<ScoringConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewConfig {
    pub reviewer: Option<String>,
    /// Kept as raw names: unknown attributes are ignored during review, not here.
    #[serde(default)]
    pub overrides: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub fail_under: Option<Points>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl SfiConfig {
    pub fn project_name(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|project| project.name.as_deref())
    }

    pub fn reviewer(&self) -> Option<&str> {
        self.review
            .as_ref()
            .and_then(|review| review.reviewer.as_deref())
    }

    pub fn overrides(&self) -> Vec<(String, bool)> {
        self.review
            .as_ref()
            .map(|review| {
                review
                    .overrides
                    .iter()
                    .map(|(name, value)| (name.clone(), *value))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn fail_under(&self) -> Option<Points> {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.fail_under)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn validate(&self) -> Result<(), SfiError> {
        if let Some(fail_under) = self.fail_under() {
            if fail_under > MAX_TOTAL {
                return Err(SfiError::ConfigParse(format!(
                    "scoring.fail_under must be between 0 and {MAX_TOTAL} (found {fail_under})"
                )));
            }
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(SfiError::ConfigParse(format!(
                    "unsupported logging.level: {level}"
                )));
            }
        }

        if let Some(reviewer) = self.reviewer() {
            if reviewer.trim().is_empty() {
                return Err(SfiError::ConfigParse(
                    "review.reviewer must not be empty when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}
