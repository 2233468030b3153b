//! Application configuration management.
//!
//! Settings are layered with figment, later layers winning:
//!
//! 1. Built-in defaults
//! 2. `config.toml` in the platform-specific config directory
//! 3. `DEDUP_*` environment variables (e.g. `DEDUP_CHUNK_SIZE=65536`)
//! 4. Command-line flags (applied by the caller)

use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::scanner::CHUNK_SIZE;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "DEDUP_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format.
    pub output: OutputFormat,
    /// Read chunk size for hashing, in bytes.
    pub chunk_size: usize,
    /// Show progress bars in text mode.
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            chunk_size: CHUNK_SIZE,
            progress: true,
        }
    }
}

impl Config {
    /// Load the configuration from the default platform-specific path and
    /// the environment.
    ///
    /// Falls back to defaults if anything goes wrong.
    pub fn load() -> Self {
        let loaded = Self::config_path().and_then(|path| Self::load_from(&path));
        match loaded {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load the configuration from a specific TOML file and the environment.
    ///
    /// A missing file is not an error; invalid contents are.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or environment holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = Self::figment(path)
            .extract()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// The layered provider chain used by [`load_from`](Self::load_from).
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            anyhow::bail!("chunk_size must be at least 1");
        }
        Ok(())
    }

    /// Get the default platform-specific configuration path.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "dedup")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
