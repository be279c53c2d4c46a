use super::{OutputSource, StackRef};
use crate::validation::StackOutputs;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use tokio::process::Command;

/// Reads outputs of a deployed stack through the `pulumi` CLI.
#[derive(Debug, Clone)]
pub struct LiveOutputs {
    program: String,
}

impl LiveOutputs {
    pub fn new() -> Self {
        Self::with_program("pulumi")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Parses `stack output --json`; anything but an object is an error.
    pub fn parse(stack: &StackRef, stdout: &[u8]) -> Result<StackOutputs> {
        let value: serde_json::Value = serde_json::from_slice(stdout)
            .with_context(|| format!("Failed to parse outputs of stack: {}", stack))?;
        StackOutputs::from_json(value)
            .ok_or_else(|| anyhow::anyhow!("No outputs found for {} stack: {}", stack.kind.label(), stack))
    }
}

impl Default for LiveOutputs {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputSource for LiveOutputs {
    async fn fetch(&self, stack: &StackRef) -> Result<StackOutputs> {
        let reference = stack.to_string();
        debug!("Fetching outputs of {}", reference);

        let output = Command::new(&self.program)
            .args(["stack", "output", "--json", "--stack", reference.as_str()])
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Reading outputs of {} failed: {}", reference, stderr.trim());
            return Err(anyhow::anyhow!(
                "Failed to read outputs of stack {}: {}",
                reference,
                stderr.trim()
            ));
        }

        Self::parse(stack, &output.stdout)
    }
}
