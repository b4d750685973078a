use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::app::domain::settings::PuzzleSettings;
use crate::app::infrastructure::error::Result;

/// Environment variable overriding the settings file location.
pub const SETTINGS_PATH_ENV: &str = "RIDDLELOCK_SETTINGS";

/// Durable storage for [`PuzzleSettings`]: a single JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$RIDDLELOCK_SETTINGS`, or the platform config directory.
    pub fn at_default_location() -> Self {
        if let Some(path) = std::env::var_os(SETTINGS_PATH_ENV) {
            return Self::new(path);
        }
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("riddlelock");
        path.push("settings.json");
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record merged over the defaults.
    ///
    /// Never fails: a missing or unreadable file yields the defaults.
    pub fn load(&self) -> PuzzleSettings {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), "Failed to read settings: {e}. Using defaults.");
                }
                return PuzzleSettings::default();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(value) => merge_with_defaults(value),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to parse settings: {e}. Using defaults.");
                PuzzleSettings::default()
            }
        }
    }

    /// Overwrite the persisted record with `settings`.
    pub fn save(&self, settings: &PuzzleSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    /// Remove the persisted record. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Shallow merge of a persisted JSON value over the defaults.
///
/// Unknown keys are ignored. A known key whose value does not fit its field
/// keeps the default.
pub fn merge_with_defaults(persisted: Value) -> PuzzleSettings {
    let Value::Object(persisted) = persisted else {
        tracing::warn!("Persisted settings are not a JSON object. Using defaults.");
        return PuzzleSettings::default();
    };

    let Ok(Value::Object(mut merged)) = serde_json::to_value(PuzzleSettings::default()) else {
        return PuzzleSettings::default();
    };

    for (key, value) in persisted {
        if !merged.contains_key(&key) {
            continue;
        }
        let mut candidate = merged.clone();
        candidate.insert(key.clone(), value);
        match serde_json::from_value::<PuzzleSettings>(Value::Object(candidate.clone())) {
            Ok(_) => merged = candidate,
            Err(e) => tracing::warn!(key = %key, "Ignoring persisted setting: {e}"),
        }
    }

    serde_json::from_value(Value::Object(merged)).unwrap_or_default()
}
