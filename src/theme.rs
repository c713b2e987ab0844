//! Deck theme for Mica
//!
//! A `DeckTheme` is the set of purely cosmetic parameters copied into the
//! exported artifact's styling: accent color, stage and card backgrounds,
//! the slide canvas size, and the marker compositing mode. It has no
//! behavioral effect on navigation or annotation logic.

use egui::Color32;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// An opaque RGB color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.0[0], self.0[1], self.0[2])
    }

    /// CSS color string, e.g. `rgb(255, 128, 64)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Marker Blend
// ─────────────────────────────────────────────────────────────────────────────

/// Compositing mode for the marker tool.
///
/// Exposed as an explicit theme option; both the in-app annotation surface
/// and the exported player honor it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkerBlend {
    /// Plain translucency over the existing strokes
    #[default]
    Translucent,
    /// Darkening highlight (multiplies underlying color)
    Multiply,
    /// Brightening highlight (keeps the lighter channel)
    Lighten,
}

impl MarkerBlend {
    /// Display label for the settings UI.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerBlend::Translucent => "Translucent",
            MarkerBlend::Multiply => "Multiply",
            MarkerBlend::Lighten => "Lighten",
        }
    }

    /// The canvas `globalCompositeOperation` used by the exported player.
    pub fn composite_operation(&self) -> &'static str {
        match self {
            MarkerBlend::Translucent => "source-over",
            MarkerBlend::Multiply => "multiply",
            MarkerBlend::Lighten => "lighten",
        }
    }

    pub fn all() -> &'static [MarkerBlend] {
        &[
            MarkerBlend::Translucent,
            MarkerBlend::Multiply,
            MarkerBlend::Lighten,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Deck Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Presentation parameters for a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckTheme {
    /// Accent color for headings and active controls
    pub accent: Rgb,
    /// Stage background behind the slide card
    pub outer_background: Rgb,
    /// Slide card background
    pub inner_background: Rgb,
    /// Slide canvas width in CSS pixels
    pub canvas_width: u32,
    /// Slide canvas height in CSS pixels
    pub canvas_height: u32,
    /// Marker tool compositing mode
    #[serde(default)]
    pub marker_blend: MarkerBlend,
}

impl DeckTheme {
    /// Light preset: white card on a muted blue stage.
    pub fn daylight() -> Self {
        Self {
            accent: Rgb([30, 60, 114]),
            outer_background: Rgb([42, 82, 152]),
            inner_background: Rgb([255, 255, 255]),
            canvas_width: 1200,
            canvas_height: 675,
            marker_blend: MarkerBlend::Translucent,
        }
    }

    /// Dark preset: slate card on a near-black stage.
    pub fn midnight() -> Self {
        Self {
            accent: Rgb([99, 102, 241]),
            outer_background: Rgb([15, 23, 42]),
            inner_background: Rgb([226, 232, 240]),
            canvas_width: 1200,
            canvas_height: 675,
            marker_blend: MarkerBlend::Multiply,
        }
    }

    /// Width-to-height ratio of the slide canvas.
    pub fn aspect_ratio(&self) -> f32 {
        self.canvas_width as f32 / self.canvas_height.max(1) as f32
    }
}

impl Default for DeckTheme {
    fn default() -> Self {
        Self::daylight()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_css() {
        assert_eq!(Rgb([255, 128, 64]).to_css(), "rgb(255, 128, 64)");
    }

    #[test]
    fn test_marker_blend_composite_operation() {
        assert_eq!(
            MarkerBlend::Translucent.composite_operation(),
            "source-over"
        );
        assert_eq!(MarkerBlend::Multiply.composite_operation(), "multiply");
        assert_eq!(MarkerBlend::Lighten.composite_operation(), "lighten");
    }

    #[test]
    fn test_theme_serde_round_trip() {
        let theme = DeckTheme::midnight();
        let json = serde_json::to_string(&theme).unwrap();
        let back: DeckTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn test_aspect_ratio() {
        let theme = DeckTheme::daylight();
        assert!((theme.aspect_ratio() - 16.0 / 9.0).abs() < 0.01);
    }
}
