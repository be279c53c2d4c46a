use crate::dns::NamingConvention;
use crate::outputs::{StackKind, StackRef};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Duration;
use validator::Validate;

pub const DIGITALOCEAN_API_URL: &str = "https://api.digitalocean.com/v2";

fn default_probe_timeout() -> u64 {
    5
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "Environment cannot be empty"))]
    pub environment: Cow<'static, str>,

    /// Applied to root records that don't choose their own.
    #[serde(default)]
    pub naming_convention: NamingConvention,

    #[serde(default = "default_probe_timeout")]
    #[validate(range(min = 1, max = 60, message = "Probe timeout must be between 1 and 60 seconds"))]
    pub probe_timeout_secs: u64,

    #[serde(default)]
    pub report_dir: Option<PathBuf>,

    #[serde(default)]
    #[validate(nested)]
    pub stacks: Stacks,

    #[serde(default)]
    #[validate(nested)]
    pub provider: Option<Provider>,

    /// Bare list or `{value: [...]}`, checked when records are resolved.
    #[serde(default)]
    pub dns_records: serde_yaml::Value,
}

impl Config {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Reference to the stack of `kind` in `stack_name`, or in the configured
    /// environment when none is given.
    pub fn stack_ref(&self, kind: StackKind, stack_name: Option<&str>) -> StackRef {
        let project = match kind {
            StackKind::Foundation => &self.stacks.foundation,
            StackKind::Platform => &self.stacks.platform,
        };
        StackRef {
            kind,
            organization: self.stacks.organization.as_deref().map(str::to_string),
            project: project.to_string(),
            stack: stack_name.unwrap_or(self.environment.as_ref()).to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Stacks {
    pub organization: Option<Cow<'static, str>>,

    #[validate(length(min = 1, message = "Foundation project cannot be empty"))]
    pub foundation: Cow<'static, str>,

    #[validate(length(min = 1, message = "Platform project cannot be empty"))]
    pub platform: Cow<'static, str>,
}

impl Default for Stacks {
    fn default() -> Self {
        Self {
            organization: None,
            foundation: Cow::Borrowed("democracy-foundation"),
            platform: Cow::Borrowed("democracy-platform"),
        }
    }
}

fn default_api_url() -> Cow<'static, str> {
    Cow::Borrowed(DIGITALOCEAN_API_URL)
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Provider {
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: Cow<'static, str>,

    #[serde(default = "default_api_url")]
    #[validate(length(min = 1, message = "API base URL cannot be empty"))]
    pub base_url: Cow<'static, str>,
}
