//! # Settings Persistence
//!
//! Save and load application settings to/from disk.
//!
//! The on-disk document uses the same camelCase field names as the remote
//! `data/settings.json`, so the two copies stay interchangeable.

use std::fs;
use std::path::{Path, PathBuf};

use khata_types::AppSettings;

/// Returns the settings file path.
fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("khata").join("settings.json"))
}

/// Loads settings from disk.
///
/// Returns `None` when the file is missing or unreadable; the app then
/// starts unconfigured and routes to the setup screen.
pub fn load() -> Option<AppSettings> {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine config directory");
        return None;
    };
    load_from(&path)
}

fn load_from(path: &Path) -> Option<AppSettings> {
    if !path.exists() {
        tracing::debug!(?path, "Settings file not found");
        return None;
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(settings) => {
                tracing::info!(?path, "Loaded settings");
                Some(settings)
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to parse settings, starting unconfigured");
                None
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read settings, starting unconfigured");
            None
        }
    }
}

/// Saves settings to disk.
pub fn save(settings: &AppSettings) -> Result<(), String> {
    let Some(path) = settings_path() else {
        return Err("Could not determine config directory".to_string());
    };
    save_to(&path, settings)
}

fn save_to(path: &Path, settings: &AppSettings) -> Result<(), String> {
    // Create config directory if needed
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            return Err(format!("Failed to create config directory: {}", e));
        }
    }

    let contents = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    fs::write(path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

    tracing::info!(?path, "Saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("khata").join("settings.json");

        let settings = AppSettings {
            github_token: "token".to_string(),
            github_repo: "acme/data".to_string(),
            ..Default::default()
        };

        save_to(&path, &settings).unwrap();
        let loaded = load_from(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_saved_file_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        save_to(&path, &AppSettings::default()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();

        assert!(raw.contains("\"githubToken\""));
        assert!(raw.contains("\"companyDetails\""));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from(&dir.path().join("nope.json")).is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_from(&path).is_none());
    }
}
