//! Persisted user preferences consulted by the panel.

use crate::aspect::DEFAULT_ASPECT_RATIOS;
use crate::error::SettingsError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Preference key for "hardware decoding enabled".
pub const HWDEC_KEY: &str = "hwdec";

/// Read access to boolean user preferences.
pub trait Preferences: Send + Sync {
    /// Value of a boolean preference; unknown keys read as `false`.
    fn get_boolean(&self, key: &str) -> bool;
}

/// Settings file contents.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Whether the player requests hardware decoding.
    pub hwdec: bool,
    /// Aspect ratio tokens offered by the panel, in cycling order.
    pub aspect_ratios: Vec<String>,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            hwdec: true,
            aspect_ratios: DEFAULT_ASPECT_RATIOS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PanelSettings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let settings = serde_json::from_str(&content)?;
                debug!("loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl Preferences for PanelSettings {
    fn get_boolean(&self, key: &str) -> bool {
        match key {
            HWDEC_KEY => self.hwdec,
            _ => {
                debug!("unknown boolean preference '{}'", key);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cine-options-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = PanelSettings::load(temp_path("does-not-exist.json")).unwrap();
        assert_eq!(settings, PanelSettings::default());
        assert!(settings.get_boolean(HWDEC_KEY));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{ "hwdec": false }"#).unwrap();

        let settings = PanelSettings::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(!settings.hwdec);
        assert_eq!(settings.aspect_ratios.len(), DEFAULT_ASPECT_RATIOS.len());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved.json");
        let settings = PanelSettings {
            hwdec: false,
            aspect_ratios: vec!["-1".into(), "4:3".into()],
        };
        settings.save(&path).unwrap();

        let loaded = PanelSettings::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed.json");
        fs::write(&path, "{ hwdec: ").unwrap();

        let result = PanelSettings::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_unknown_preference_is_false() {
        assert!(!PanelSettings::default().get_boolean("fullscreen"));
    }
}
