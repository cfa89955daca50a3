use networks::env::{EnvSource, Layered};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

/// Settings file for `netconf`.
///
/// ```toml
/// [env]
/// INFURA_KEY = "..."
/// FORK = "main"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Fallback values for the environment variables read by the registry
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Environment where `primary` wins over values from this file.
    pub fn layered<P: EnvSource>(&self, primary: P) -> Layered<P, &BTreeMap<String, String>> {
        primary.or(&self.env)
    }
}
