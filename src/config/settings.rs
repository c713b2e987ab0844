//! User settings and preferences for Mica
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence.

use crate::theme::DeckTheme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Editor Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Color theme for the editor window (not the exported deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorTheme {
    Light,
    #[default]
    Dark,
    System,
}

impl EditorTheme {
    pub fn label(&self) -> &'static str {
        match self {
            EditorTheme::Light => "Light",
            EditorTheme::Dark => "Dark",
            EditorTheme::System => "System",
        }
    }

    pub fn all() -> &'static [EditorTheme] {
        &[EditorTheme::Light, EditorTheme::Dark, EditorTheme::System]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Window X position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Window Y position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Whether the window was maximized
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// All persisted user settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Editor window theme
    pub editor_theme: EditorTheme,
    /// Theme applied to exported presentations and the playback view
    pub deck_theme: DeckTheme,
    /// Window size and position from the last session
    pub window_size: WindowSize,
    /// Directory of the most recent export, used to seed the save dialog
    pub last_export_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor_theme: EditorTheme::default(),
            deck_theme: DeckTheme::default(),
            window_size: WindowSize::default(),
            last_export_dir: None,
        }
    }
}

impl Settings {
    /// Clamp out-of-range values loaded from disk into usable bounds.
    ///
    /// A hand-edited or corrupted config file should degrade to something
    /// workable rather than produce a zero-sized window or slide canvas.
    pub fn sanitize(&mut self) {
        self.window_size.width = self.window_size.width.clamp(400.0, 10_000.0);
        self.window_size.height = self.window_size.height.clamp(300.0, 10_000.0);
        self.deck_theme.canvas_width = self.deck_theme.canvas_width.clamp(320, 7_680);
        self.deck_theme.canvas_height = self.deck_theme.canvas_height.clamp(180, 4_320);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.editor_theme, EditorTheme::Dark);
        assert_eq!(settings.window_size.width, 1280.0);
        assert!(settings.last_export_dir.is_none());
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let mut settings = Settings::default();
        settings.editor_theme = EditorTheme::Light;
        settings.last_export_dir = Some(PathBuf::from("/tmp"));

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // Older or hand-written config files may omit fields.
        let settings: Settings = serde_json::from_str(r#"{"editor_theme":"light"}"#).unwrap();
        assert_eq!(settings.editor_theme, EditorTheme::Light);
        assert_eq!(settings.window_size.width, 1280.0);
    }

    #[test]
    fn test_sanitize_clamps_extremes() {
        let mut settings = Settings::default();
        settings.window_size.width = 1.0;
        settings.window_size.height = 99_999.0;
        settings.deck_theme.canvas_width = 10;
        settings.deck_theme.canvas_height = 100_000;

        settings.sanitize();
        assert_eq!(settings.window_size.width, 400.0);
        assert_eq!(settings.window_size.height, 10_000.0);
        assert_eq!(settings.deck_theme.canvas_width, 320);
        assert_eq!(settings.deck_theme.canvas_height, 4_320);
    }
}
