use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to a CSV pair list; `None` means the embedded dictionary.
    pub dictionary: Option<PathBuf>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: u64,

    #[serde(default = "default_pdf_expiry_secs")]
    pub pdf_expiry_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_input_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_pdf_expiry_secs() -> u64 {
    3600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            request_timeout_secs: default_request_timeout_secs(),
            max_input_bytes: default_max_input_bytes(),
            pdf_expiry_secs: default_pdf_expiry_secs(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(dictionary: Option<PathBuf>, timeout_secs: Option<u64>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".spellvar.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(path) = dictionary {
            config.dictionary = Some(path);
        }
        if let Some(secs) = timeout_secs {
            config.request_timeout_secs = secs;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.request_timeout_secs != default_request_timeout_secs() {
            self.request_timeout_secs = other.request_timeout_secs;
        }
        if other.max_input_bytes != default_max_input_bytes() {
            self.max_input_bytes = other.max_input_bytes;
        }
        if other.pdf_expiry_secs != default_pdf_expiry_secs() {
            self.pdf_expiry_secs = other.pdf_expiry_secs;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellvar").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
