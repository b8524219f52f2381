use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DebtError, Result};

pub const DEFAULT_INPUT_FILE: &str = "deuda_clientes.txt";
pub const DEFAULT_DATABASE: &str = "deudas_clientes.db";

/// Where the pipeline reads from and writes to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,
    #[serde(default = "default_database")]
    pub database: PathBuf,
}

fn default_input_file() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            database: default_database(),
        }
    }
}

impl Settings {
    /// Apply command-line (or environment) values over the loaded settings.
    pub fn with_overrides(mut self, input_file: Option<PathBuf>, database: Option<PathBuf>) -> Self {
        if let Some(path) = input_file {
            self.input_file = path;
        }
        if let Some(path) = database {
            self.database = path;
        }
        self
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("debt-loader")
}

pub fn default_settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn read_settings_file(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| DebtError::Settings(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| DebtError::Settings(format!("invalid {}: {e}", path.display())))
}

/// Load settings from `explicit` if given, otherwise from the default
/// location when it exists.
///
/// An explicitly requested file must exist and parse. A broken default file
/// is ignored with a warning.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading settings");
        return read_settings_file(path);
    }
    let path = default_settings_path();
    if !path.exists() {
        return Ok(Settings::default());
    }
    match read_settings_file(&path) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!("{e}; using defaults");
            Ok(Settings::default())
        }
    }
}
