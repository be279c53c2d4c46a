pub mod models;

pub use models::{Config, Provider, Stacks};

use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

/// Reads and validates the YAML config at `path`.
pub fn load_config(path: &Path) -> Result<Config> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
