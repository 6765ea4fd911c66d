//! Optional `config.toml` in the data directory.
//!
//! ```toml
//! save_inputs = false
//! default_format = "json"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Remember the last birth date and name between runs.
    pub save_inputs: bool,
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_inputs: true,
            default_format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `config.toml` from `base_dir`. A missing file yields the defaults.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config = Self::parse(&content)?;
        tracing::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}
