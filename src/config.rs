// src/config.rs
//! Optional `graphveil.toml` configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::repair::Strategy;

pub const CONFIG_FILE: &str = "graphveil.toml";

/// Defaults for the `anonymize` command. CLI flags override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizeConfig {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default)]
    pub strategy: Strategy,
    /// Seed for the repair RNG; omitted means entropy from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AnonymizeConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            strategy: Strategy::default(),
            seed: None,
        }
    }
}

const fn default_alpha() -> f64 {
    0.25
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub anonymize: AnonymizeConfig,
}

impl Config {
    /// Loads `graphveil.toml` from the working directory. A missing file
    /// yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
    }
}
