use super::models::Check;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{stack} stack validation failed: {}", rule_names(.failures))]
    Failed { stack: String, failures: Vec<Check> },
}

impl ValidationError {
    /// `Err` when any check is a failed error.
    pub fn check(stack: &str, checks: &[Check]) -> Result<(), ValidationError> {
        let failures: Vec<Check> = checks
            .iter()
            .filter(|check| check.result.is_failure())
            .cloned()
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Failed {
                stack: stack.to_string(),
                failures,
            })
        }
    }
}

fn rule_names(checks: &[Check]) -> String {
    checks
        .iter()
        .map(|check| check.rule.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
