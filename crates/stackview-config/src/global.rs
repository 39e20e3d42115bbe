//! Global configuration for stackview
//!
//! Located at `~/.config/stackview/config.toml`

use crate::{ConfigError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Domain suffix appended to every service alias
pub const DEFAULT_INTERNAL_DOMAIN: &str = "zaneops.internal";

/// Placeholder shown instead of an unrevealed environment value
pub const DEFAULT_SECRET_MASK: &str = "*********";

/// Global stackview configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub display: DisplayConfig,
    pub source: SourceConfig,
    pub tui: TuiConfig,
}

/// How derived values are displayed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Internal DNS domain used for network and global aliases
    pub internal_domain: String,
    /// Fixed-width mask for secret values
    pub secret_mask: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            internal_domain: DEFAULT_INTERNAL_DOMAIN.to_string(),
            secret_mask: DEFAULT_SECRET_MASK.to_string(),
        }
    }
}

/// Where stack snapshots are read from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Directory holding `<project>/<env>/<stack>.json` snapshots.
    /// `~` and environment variables are expanded. Defaults to `<data dir>/stacks`.
    pub data_dir: Option<String>,
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Snapshot reload interval in seconds (0 disables periodic reload)
    pub refresh_secs: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            refresh_secs: 5,
        }
    }
}

impl TuiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_secs > 0).then(|| Duration::from_secs(self.refresh_secs))
    }
}

impl GlobalConfig {
    /// Load global configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;

        tracing::debug!(
            "Loaded config from {:?}: internal_domain={}",
            path,
            config.display.internal_domain
        );

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.display.internal_domain.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "display.internal_domain must not be empty".to_string(),
            ));
        }
        if self.display.internal_domain.starts_with('.') {
            return Err(ConfigError::Invalid(
                "display.internal_domain must not start with '.'".to_string(),
            ));
        }
        if self.display.secret_mask.is_empty() {
            return Err(ConfigError::Invalid(
                "display.secret_mask must not be empty".to_string(),
            ));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tui.tick_rate_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "stackview").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "stackview").ok_or(ConfigError::NoDataDir)?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Directory holding stack snapshots, after `~`/env expansion
    pub fn stacks_dir(&self) -> Result<PathBuf> {
        match &self.source.data_dir {
            Some(dir) => {
                let expanded = shellexpand::full(dir)
                    .map_err(|e| ConfigError::Invalid(format!("source.data_dir: {}", e)))?;
                Ok(PathBuf::from(expanded.as_ref()))
            }
            None => Ok(Self::data_dir()?.join("stacks")),
        }
    }
}
