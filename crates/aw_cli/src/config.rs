//! awtheme configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use aw_theme::ContextConfig;

pub const CONFIG_FILE: &str = "awtheme.toml";

/// Top-level configuration (awtheme.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct AwConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Where theme state is persisted
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
    /// Quiet period before the active theme is written
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".awtheme")
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ThemeConfig {
    /// Theme used when nothing is persisted yet
    #[serde(default = "default_theme")]
    pub default: String,
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: default_theme(),
        }
    }
}

/// Remote save endpoint
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RemoteConfig {
    /// Site origin; themes are POSTed to `<endpoint>/api/save-theme`
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl AwConfig {
    /// Load configuration from a directory (looks for awtheme.toml).
    ///
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(&config_path)
    }

    /// Load an explicitly named file, which must exist.
    pub fn load_file(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: AwConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Library options derived from the file.
    pub fn context_config(&self) -> ContextConfig {
        ContextConfig {
            default_theme: self.theme.default.clone(),
            debounce: Duration::from_millis(self.storage.debounce_ms),
            project_tokens: true,
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AwConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config, AwConfig::default());
        assert_eq!(config.storage.debounce_ms, 300);
        assert_eq!(config.theme.default, "light");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[theme]\ndefault = \"neonNoir\"\n\n[remote]\nendpoint = \"http://localhost:3000\"\n",
        )
        .unwrap();

        let config = AwConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.theme.default, "neonNoir");
        assert_eq!(config.remote.endpoint.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(config.context_config().debounce, Duration::from_millis(300));
    }

    #[test]
    fn toml_round_trips() {
        let config = AwConfig::default();
        let text = config.to_toml().unwrap();
        let back: AwConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AwConfig::load_file(&dir.path().join("nope.toml")).is_err());
    }
}
