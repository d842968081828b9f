use std::fs;
use std::path::{Path, PathBuf};

use scribe_logging::{scribe_info, scribe_warn};
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = "scribe_settings.ron";

/// User settings stored as RON in the platform data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub base_url: String,
    pub output_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            output_dir: PathBuf::from("reports"),
        }
    }
}

pub fn settings_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Scribe")
        .join(SETTINGS_FILENAME)
}

impl AppSettings {
    /// Loads settings, falling back to defaults when the file is missing or
    /// does not parse.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(err) => {
                scribe_warn!("Failed to read settings from {:?}: {}", path, err);
                return Self::default();
            }
        };

        match ron::from_str(&content) {
            Ok(settings) => {
                scribe_info!("Loaded settings from {:?}", path);
                settings
            }
            Err(err) => {
                scribe_warn!("Failed to parse settings from {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                scribe_warn!("Failed to create settings dir {:?}: {}", parent, err);
                return;
            }
        }

        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(self, pretty) {
            Ok(text) => text,
            Err(err) => {
                scribe_warn!("Failed to serialize settings: {}", err);
                return;
            }
        };

        if let Err(err) = fs::write(path, content) {
            scribe_warn!("Failed to write settings to {:?}: {}", path, err);
        }
    }
}
