use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default number of most recent scans summarised by `stats`.
pub const DEFAULT_RECENT_WINDOW: usize = 10;

fn default_record_history() -> bool {
    true
}

fn default_recent_window() -> usize {
    DEFAULT_RECENT_WINDOW
}

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
///
/// Scoring weights and the detector lists are fixed in code and are not
/// configurable; only the surrounding history behaviour is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhishguardConfig {
    /// Append every completed scan to the persisted history.
    #[serde(default = "default_record_history")]
    pub record_history: bool,
    /// Optional override for the history file (None = XDG state dir).
    #[serde(default)]
    pub history_path: Option<PathBuf>,
    /// Number of most recent scans broken down by `stats`.
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,
}

impl Default for PhishguardConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            history_path: None,
            recent_window: DEFAULT_RECENT_WINDOW,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishguardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: PhishguardConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PhishguardConfig::default();
        assert!(cfg.record_history);
        assert!(cfg.history_path.is_none());
        assert_eq!(cfg.recent_window, 10);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PhishguardConfig {
            record_history: false,
            history_path: Some(PathBuf::from("/tmp/pg/history.json")),
            recent_window: 25,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PhishguardConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: PhishguardConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, PhishguardConfig::default());

        let cfg: PhishguardConfig = toml::from_str("recent_window = 5").unwrap();
        assert_eq!(cfg.recent_window, 5);
        assert!(cfg.record_history);
    }

    #[test]
    fn config_toml_custom_history_path() {
        let toml = r#"
            record_history = false
            history_path = "/var/tmp/phishguard.json"
        "#;
        let cfg: PhishguardConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.record_history);
        assert_eq!(
            cfg.history_path.as_deref(),
            Some(std::path::Path::new("/var/tmp/phishguard.json"))
        );
        assert_eq!(cfg.recent_window, DEFAULT_RECENT_WINDOW);
    }
}
