//! Configuration file persistence for Mica
//!
//! This module handles loading and saving the settings file in the
//! platform-specific config directory, with graceful fallback to defaults
//! when the file is missing or unreadable.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "mica";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Temporary file name used during atomic writes
const CONFIG_TEMP_NAME: &str = "config.json.tmp";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\mica\`
/// - **macOS**: `~/Library/Application Support/mica/`
/// - **Linux**: `~/.config/mica/`
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the configuration file.
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        debug!("Creating config directory: {}", config_dir.display());
        fs::create_dir_all(&config_dir).map_err(|e| Error::ConfigSave {
            path: config_dir.clone(),
            source: Box::new(e),
        })?;
    }
    Ok(config_dir)
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load configuration from the default location.
///
/// A missing file yields defaults; a corrupted file logs a warning and
/// yields defaults. Loaded settings are sanitized before use.
pub fn load_config() -> Settings {
    load_config_internal()
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

fn load_config_internal() -> Result<Settings> {
    let config_path = get_config_file_path()?;
    if !config_path.exists() {
        debug!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        return Ok(Settings::default());
    }
    load_settings_from(&config_path)
}

/// Load and sanitize settings from an explicit path.
fn load_settings_from(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mut settings: Settings = serde_json::from_str(&contents)?;
    settings.sanitize();
    debug!("Loaded configuration from {}", path.display());
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Save configuration to the default location.
pub fn save_config(settings: &Settings) -> Result<()> {
    let config_dir = ensure_config_dir()?;
    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let temp_path = config_dir.join(CONFIG_TEMP_NAME);
    save_settings_to(settings, &config_path, &temp_path)?;
    info!("Configuration saved to {}", config_path.display());
    Ok(())
}

/// Save configuration, logging failures instead of returning them.
///
/// Returns `true` when the save succeeded. Used on shutdown and for
/// periodic saves where an error should not interrupt the user.
pub fn save_config_silent(settings: &Settings) -> bool {
    match save_config(settings) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save configuration: {}", e);
            false
        }
    }
}

/// Write settings as pretty JSON via a temp file, then rename into place.
/// The rename keeps a crash mid-write from truncating the existing config.
fn save_settings_to(settings: &Settings, path: &Path, temp_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;

    fs::write(temp_path, &json).map_err(|e| Error::ConfigSave {
        path: temp_path.to_path_buf(),
        source: Box::new(e),
    })?;
    fs::rename(temp_path, path).map_err(|e| Error::ConfigSave {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorTheme;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let temp = dir.path().join("config.json.tmp");

        let mut settings = Settings::default();
        settings.editor_theme = EditorTheme::Light;
        settings.deck_theme.canvas_width = 1600;
        settings.deck_theme.canvas_height = 900;

        save_settings_to(&settings, &path, &temp).unwrap();
        assert!(path.exists());
        assert!(!temp.exists());

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_settings_from(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::ConfigLoad { .. })));
    }

    #[test]
    fn test_load_corrupted_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not valid json").unwrap();

        let result = load_settings_from(&path);
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_loaded_settings_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"window_size":{"width":5.0,"height":600.0}}"#,
        )
        .unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.window_size.width, 400.0);
        assert_eq!(loaded.window_size.height, 600.0);
    }
}
