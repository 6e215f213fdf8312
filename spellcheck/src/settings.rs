//! Tree configuration loaded from YAML.
//!
//! ```yaml
//! empty_keys: reject   # or allow
//! duplicates: ignore   # or replace
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rbdict::TreeConfig;

/// Reads a [`TreeConfig`] from `path`, or returns the default when no
/// path was given.
pub fn load(path: Option<&Path>) -> Result<TreeConfig> {
    let Some(path) = path else {
        return Ok(TreeConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn parse(content: &str) -> Result<TreeConfig> {
    // an empty document means "all defaults"
    if content.trim().is_empty() {
        return Ok(TreeConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
