use super::models::{Check, StackOutputs, ValidationResult};
use super::rule::ValidationRule;
use futures::FutureExt;
use log::{debug, warn};
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// Runs an ordered list of rules against a stack's outputs.
///
/// Register every rule before validating; rules run one at a time in the
/// order they were added.
#[derive(Default)]
pub struct StackValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl StackValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    pub fn add_rule(&mut self, rule: impl ValidationRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn add_boxed(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// One check per rule, in registration order. A rule that errors or
    /// panics yields a failed `error` check and the run carries on.
    pub async fn validate_stack(&self, stack_label: &str, outputs: &StackOutputs) -> Vec<Check> {
        let mut checks = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            debug!("[{}] running rule {}", stack_label, rule.name());
            let result = match AssertUnwindSafe(rule.validate(outputs)).catch_unwind().await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => rule_failed(stack_label, rule.name(), &e.to_string()),
                Err(panic) => rule_failed(stack_label, rule.name(), &panic_message(&*panic)),
            };
            checks.push(Check {
                rule: rule.name().to_string(),
                result,
            });
        }

        checks
    }
}

fn rule_failed(stack_label: &str, rule: &str, error: &str) -> ValidationResult {
    warn!("[{}] rule {} failed: {}", stack_label, rule, error);
    ValidationResult::error(format!("Rule \"{}\" failed with error: {}", rule, error))
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "rule panicked".to_string()
    }
}
