//! Configuration management for hw-doctor
//!
//! Config file location:
//! - Linux: ~/.config/hw-doctor/config.toml
//! - macOS: ~/Library/Application Support/hw-doctor/config.toml
//! - Windows: %APPDATA%/hw-doctor/config.toml
//!
//! You can override the config location by setting `HW_DOCTOR_CONFIG_PATH`.
//!
//! Only presentation and sequencing preferences live here; the classifier
//! thresholds are compile-time constants and deliberately not configurable.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,

    /// Check sequencing preferences
    #[serde(default)]
    pub checks: ChecksConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colorize verdict lines by status
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { color: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecksConfig {
    /// Skip the synthetic CPU/memory benchmarks (they block for a few
    /// seconds each)
    #[serde(default)]
    pub skip_benchmarks: bool,

    /// Check names to leave out of the run (see `hw-doctor list`)
    #[serde(default)]
    pub disabled: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from file or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

            let config: Config = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config from {}", config_path.display())
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
        fs::write(config_path, toml)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Self::config_path_from(std::env::var_os("HW_DOCTOR_CONFIG_PATH"))
    }

    fn config_path_from(overridden: Option<OsString>) -> Result<PathBuf> {
        if let Some(path) = overridden {
            let path = path.to_string_lossy();
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let proj_dirs = ProjectDirs::from("com", "hwdoctor", "hw-doctor")
            .context("Could not determine project directories")?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.output.color);
        assert!(!config.checks.skip_benchmarks);
        assert!(config.checks.disabled.is_empty());
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.checks.skip_benchmarks = true;
        config.checks.disabled.push("laptop".to_string());

        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert!(parsed.checks.skip_benchmarks);
        assert_eq!(parsed.checks.disabled, vec!["laptop".to_string()]);
    }

    #[test]
    fn test_save_and_load_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.output.color = false;
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert!(!loaded.output.color);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.output.color);
    }

    #[test]
    fn test_config_path_override() {
        let path =
            Config::config_path_from(Some(OsString::from("/tmp/custom/config.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom/config.toml"));

        // Blank override falls through to the platform default.
        let fallback = Config::config_path_from(Some(OsString::from("  "))).unwrap();
        assert!(fallback.ends_with("config.toml"));
        assert_ne!(fallback, PathBuf::from("  "));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[checks]\nskip_benchmarks = true\n").unwrap();
        assert!(parsed.output.color);
        assert!(parsed.checks.skip_benchmarks);
    }
}
