use super::errors::ValidationError;
use super::models::{Check, Severity};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Passed,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackCheck {
    pub stack: String,
    #[serde(flatten)]
    pub check: Check,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub timestamp: DateTime<Utc>,
    pub environment: String,
    pub overall_status: OverallStatus,
    pub checks: Vec<StackCheck>,
    pub summary: Summary,
}

impl ValidationReport {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            environment: environment.into(),
            overall_status: OverallStatus::Passed,
            checks: Vec::new(),
            summary: Summary::default(),
        }
    }

    pub fn record(&mut self, stack: &str, checks: Vec<Check>) {
        for check in checks {
            let result = &check.result;
            if result.passed {
                self.summary.passed += 1;
            } else if result.severity == Severity::Error {
                self.summary.failed += 1;
                self.overall_status = OverallStatus::Failed;
            } else if result.severity == Severity::Warning {
                self.summary.warnings += 1;
            }
            self.checks.push(StackCheck {
                stack: stack.to_string(),
                check,
            });
        }
    }

    pub fn passed(&self) -> bool {
        self.overall_status == OverallStatus::Passed
    }

    /// `Err` listing every failed error check when the run failed.
    pub fn ensure_passed(&self) -> Result<(), ValidationError> {
        let failing: Vec<&StackCheck> = self
            .checks
            .iter()
            .filter(|entry| entry.check.result.is_failure())
            .collect();
        if failing.is_empty() {
            return Ok(());
        }

        let mut stacks: Vec<&str> = failing.iter().map(|entry| entry.stack.as_str()).collect();
        stacks.dedup();
        Err(ValidationError::Failed {
            stack: stacks.join(", "),
            failures: failing.into_iter().map(|entry| entry.check.clone()).collect(),
        })
    }

    /// Console lines, one per check.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self
            .checks
            .iter()
            .map(|entry| {
                format!(
                    "{} [{}] {}: {}",
                    entry.check.result.icon(),
                    entry.stack,
                    entry.check.rule,
                    entry.check.result.message
                )
            })
            .collect();
        lines.push(format!(
            "Summary: {} passed, {} failed, {} warnings",
            self.summary.passed, self.summary.failed, self.summary.warnings
        ));
        lines.join("\n")
    }

    /// Writes the report as pretty JSON into `dir`, returning the file path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;
        let path = dir.join(format!(
            "validation-{}-{}.json",
            self.environment,
            self.timestamp.format("%Y%m%dT%H%M%SZ")
        ));
        let body = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, body)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        info!("Validation report saved to {}", path.display());
        Ok(path)
    }
}
