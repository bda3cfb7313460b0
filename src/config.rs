use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Where the configuration is read from, relative to the working directory
pub const CONFIG_PATH: &str = "config.toml";

/// Pokedex location used when the config doesn't name one
pub const DEFAULT_DATASET_PATH: &str = "data/all_pokemon_data.csv";

/// Server configuration read from `config.toml`
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Path of the pokedex csv
    pub dataset_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

impl Config {
    /// Reads the configuration in `config.toml`
    pub fn load() -> Result<Self> {
        Self::from_file(CONFIG_PATH)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        fs::read_to_string(path)?.parse::<Self>()
    }
}

impl std::str::FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let cfg = s.parse::<toml::Table>()?;

        let dataset_path = cfg
            .get("dataset")
            .ok_or(anyhow::anyhow!("No [dataset] section"))?
            .get("path")
            .and_then(|p| p.as_str())
            .ok_or(anyhow::anyhow!("No dataset path"))?;

        Ok(Self {
            dataset_path: PathBuf::from(dataset_path),
        })
    }
}
