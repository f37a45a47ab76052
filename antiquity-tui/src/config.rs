use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub provider: ProviderConfig,
    pub query: QueryConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub(crate) struct ProviderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub(crate) struct QueryConfig {
    pub start_year: i32,
    pub end_year: i32,
    pub current_year: i32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub(crate) struct LogConfig {
    pub file: PathBuf,
    pub filter: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: antiquity_provider_pleiades::DEFAULT_BASE_URL.to_owned(),
            user_agent: "antiquity/0.1".to_owned(),
            timeout_secs: 20,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        // 50 BCE to 100 CE, looking at year 0
        Self {
            start_year: -50,
            end_year: 100,
            current_year: 0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("antiquity.log"),
            filter: "antiquity=info".to_owned(),
        }
    }
}

impl AppConfig {
    pub(crate) fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Load `path` if given, else the default file if it exists, else built-in defaults.
    pub(crate) fn load(path: Option<&Path>, default_path: &Path) -> Result<Self> {
        match path {
            Some(explicit) => Self::load_from_file(explicit),
            None if default_path.exists() => Self::load_from_file(default_path),
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
