//! Where stack outputs come from.
//!
//! The caller picks the source: `MockOutputs` for offline runs,
//! `LiveOutputs` to read a deployed stack.

pub mod live;
pub mod mock;

pub use live::LiveOutputs;
pub use mock::MockOutputs;

use crate::validation::StackOutputs;
use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackKind {
    Foundation,
    Platform,
}

impl StackKind {
    pub fn label(&self) -> &'static str {
        match self {
            StackKind::Foundation => "foundation",
            StackKind::Platform => "platform",
        }
    }
}

/// A stack of a given kind in one project and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackRef {
    pub kind: StackKind,
    pub organization: Option<String>,
    pub project: String,
    pub stack: String,
}

impl fmt::Display for StackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.organization {
            Some(organization) => write!(f, "{}/{}/{}", organization, self.project, self.stack),
            None => write!(f, "{}/{}", self.project, self.stack),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait OutputSource: Send + Sync {
    async fn fetch(&self, stack: &StackRef) -> Result<StackOutputs>;
}
