//! User settings loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::Panel;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Presenter settings. Every field has a default, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `sessions.json`, `articles.json`, `cognizance.json`.
    pub data_dir: PathBuf,
    /// Log destination; defaults to the platform data dir.
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `info` or `fourc_core=debug`.
    pub log_level: String,
    pub start_panel: Panel,
    pub show_welcome: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_file: None,
            log_level: "info".to_string(),
            start_panel: Panel::Sessions,
            show_welcome: true,
        }
    }
}

impl Settings {
    pub fn from_toml(s: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&data, path)
    }

    /// Load an explicit config file, or the default one if it exists.
    ///
    /// An explicit path must exist; the default path may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Resolved log file path.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("fourc")
                .join("fourc-tui.log")
        })
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fourc").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let s = Settings::from_toml("", Path::new("config.toml")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let s = Settings::from_toml(
            "data_dir = \"/srv/fourc\"\nstart_panel = \"cognizance\"\nshow_welcome = false\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert_eq!(s.data_dir, PathBuf::from("/srv/fourc"));
        assert_eq!(s.start_panel, Panel::Cognizance);
        assert!(!s.show_welcome);
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let err = Settings::from_toml("start_panel = 3", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn explicit_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn explicit_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut settings = Settings::default();
        settings.log_file = Some(dir.path().join("x.log"));
        settings.start_panel = Panel::Articles;
        std::fs::write(&path, toml::to_string(&settings).unwrap()).unwrap();

        let loaded = Settings::load(Some(&path)).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.log_path(), dir.path().join("x.log"));
    }
}
