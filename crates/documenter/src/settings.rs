//! User settings, read from a TOML file.
//!
//! ```toml
//! [layout]
//! label_width = 23
//! border_length = 72
//! wrap_width = 50
//!
//! [repl]
//! prompt = "$ "
//! history = true
//! history_file = "/home/me/.local/share/documenter/history.txt"
//! ```

use std::path::{
    Path,
    PathBuf,
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::constants::{
    APP_DIR_NAME,
    DEFAULT_PROMPT,
    HISTORY_FILE_NAME,
    SETTINGS_FILE_NAME,
};
use crate::docstring::DocLayout;

/// Smallest label width that still fits every same-line label (`ROUTE URI:` plus a space).
pub const MIN_LABEL_WIDTH: usize = 12;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub layout: DocLayout,
    pub repl: ReplSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplSettings {
    pub prompt: String,
    pub history: bool,
    /// Overrides the default history location under the user's data directory.
    pub history_file: Option<PathBuf>,
}

impl Default for ReplSettings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history: true,
            history_file: None,
        }
    }
}

impl ReplSettings {
    /// Where history is kept, or `None` when history is disabled or there is no data directory.
    pub fn history_path(&self) -> Option<PathBuf> {
        if !self.history {
            return None;
        }
        self.history_file
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join(HISTORY_FILE_NAME)))
    }
}

impl Settings {
    /// Default location of the settings file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Loads settings from `path`, or from [`Settings::default_path`] when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("no settings file found, using defaults");
                    Ok(Self::default())
                },
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let layout = &self.layout;
        if layout.label_width < MIN_LABEL_WIDTH {
            return Err(SettingsError::Invalid {
                key: "layout.label_width",
                reason: format!("must be at least {MIN_LABEL_WIDTH}, got {}", layout.label_width),
            });
        }
        for (key, value) in [
            ("layout.border_length", layout.border_length),
            ("layout.wrap_width", layout.wrap_width),
        ] {
            if value == 0 {
                return Err(SettingsError::Invalid {
                    key,
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}
