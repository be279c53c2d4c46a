use super::models::{StackOutputs, ValidationResult};
use anyhow::Result;
use async_trait::async_trait;

/// A named check over a stack's outputs.
///
/// Implementations must not keep state between runs. Checks that touch the
/// network bound their own wait and report failures as results.
#[async_trait]
pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    async fn validate(&self, outputs: &StackOutputs) -> Result<ValidationResult>;
}

pub type CheckFn = fn(&StackOutputs) -> Result<ValidationResult>;

/// A rule backed by a plain function.
#[derive(Clone, Copy)]
pub struct StaticRule {
    pub name: &'static str,
    pub description: &'static str,
    pub check: CheckFn,
}

#[async_trait]
impl ValidationRule for StaticRule {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    async fn validate(&self, outputs: &StackOutputs) -> Result<ValidationResult> {
        (self.check)(outputs)
    }
}
