//! Presentation document generation
//!
//! This module composes the exported artifact: it serializes the deck
//! snapshot to JSON, renders the theme to CSS custom properties, and
//! injects both into the fixed player bundle from `template`. The result
//! is a single self-contained HTML document with no external dependencies.

use crate::deck::Snapshot;
use crate::theme::DeckTheme;
use log::info;
use std::path::Path;

use super::template::{PLAYER_CSS, PLAYER_JS};

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur while generating or writing a presentation.
#[derive(Debug)]
pub enum ExportError {
    /// Failed to write the output file
    IoError(std::io::Error),
    /// Failed to serialize the slide data
    SerializeError(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "IO error: {}", e),
            ExportError::SerializeError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerializeError(err)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Document Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate the complete presentation document for a snapshot.
///
/// `title` becomes the document title (HTML-escaped). Slide content is
/// injected verbatim — it is trusted author input by design.
pub fn generate_document(snapshot: &Snapshot, title: &str) -> Result<String, ExportError> {
    let slides_json = serde_json::to_string(&snapshot.slides)?;
    let theme_css = generate_theme_css(&snapshot.theme);

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="generator" content="Mica">
<title>{title}</title>
<style>
{theme_css}
{player_css}
</style>
</head>
<body>
<main class="stage" id="stage"></main>
<canvas id="overlay"></canvas>
<div class="laser-dot" id="laserDot"></div>

<div class="side-controls">
    <button class="ctl" id="btnMenu" title="Slide index">&#9776;</button>
    <button class="ctl" id="btnLaser" title="Laser pointer">&#9678;</button>
    <div class="tool-group">
        <button class="ctl" id="btnPen" title="Pen">&#9998;</button>
        <button class="ctl" id="btnMarker" title="Marker">&#9646;</button>
        <button class="ctl" id="btnEraser" title="Eraser">&#9003;</button>
        <button class="ctl" id="btnClear" title="Clear drawing">&#128465;</button>
    </div>
    <button class="ctl" id="btnFull" title="Fullscreen">&#10530;</button>
</div>

<div class="index-overlay" id="indexOverlay"></div>
<aside class="index-panel" id="indexPanel">
    <header><span>Slides</span><button class="ctl small" id="btnCloseIndex">&times;</button></header>
    <div class="index-list" id="indexList"></div>
</aside>

<footer class="nav-bar">
    <button class="nav-arrow" id="btnPrev">&#8249;</button>
    <span class="page-counter" id="pageCounter">1 / 1</span>
    <button class="nav-arrow" id="btnNext">&#8250;</button>
</footer>

<script>
const SLIDES = {slides_json};
const MARKER_OP = "{marker_op}";
{player_js}
</script>
</body>
</html>"#,
        title = html_escape(title),
        theme_css = theme_css,
        player_css = PLAYER_CSS,
        slides_json = slides_json,
        marker_op = snapshot.theme.marker_blend.composite_operation(),
        player_js = PLAYER_JS,
    );

    Ok(html)
}

/// Write the generated presentation to `output_path`.
pub fn export_to_file(
    snapshot: &Snapshot,
    title: &str,
    output_path: &Path,
) -> Result<(), ExportError> {
    let html = generate_document(snapshot, title)?;
    std::fs::write(output_path, &html)?;
    info!(
        "Exported {} slide(s) to {}",
        snapshot.len(),
        output_path.display()
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// CSS Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Render the deck theme as CSS custom properties for the player styles.
fn generate_theme_css(theme: &DeckTheme) -> String {
    format!(
        r#":root {{
    --accent: {accent};
    --stage-bg: {stage_bg};
    --card-bg: {card_bg};
    --canvas-w: {canvas_w}px;
    --canvas-aspect: {canvas_w} / {canvas_h};
}}"#,
        accent = theme.accent.to_css(),
        stage_bg = theme.outer_background.to_css(),
        card_bg = theme.inner_background.to_css(),
        canvas_w = theme.canvas_width,
        canvas_h = theme.canvas_height,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Utility Functions
// ─────────────────────────────────────────────────────────────────────────────

/// HTML-escape a string.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Deck, SlideFields};
    use crate::theme::{DeckTheme, MarkerBlend};

    fn sample_snapshot() -> Snapshot {
        let mut deck = Deck::new();
        deck.update_current(SlideFields {
            title: "First".to_string(),
            content: "<p>alpha &amp; beta</p>".to_string(),
            notes: "backstage-only".to_string(),
        });
        deck.add_slide();
        deck.snapshot(&DeckTheme::daylight())
    }

    #[test]
    fn test_generate_document_structure() {
        let html = generate_document(&sample_snapshot(), "My Talk").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My Talk</title>"));
        assert!(html.contains("<canvas id=\"overlay\">"));
        assert!(html.contains("id=\"indexPanel\""));
        assert!(html.contains("id=\"pageCounter\""));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_slide_data_is_injected_once() {
        let html = generate_document(&sample_snapshot(), "T").unwrap();
        assert_eq!(html.matches("const SLIDES = [").count(), 1);
        assert!(html.contains("\"title\":\"First\""));
        // Content is embedded verbatim, not re-escaped.
        assert!(html.contains("alpha &amp; beta"));
    }

    #[test]
    fn test_notes_never_reach_the_artifact() {
        let html = generate_document(&sample_snapshot(), "T").unwrap();
        assert!(!html.contains("backstage-only"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = generate_document(&sample_snapshot(), "<Talk> & \"Demo\"").unwrap();
        assert!(html.contains("<title>&lt;Talk&gt; &amp; &quot;Demo&quot;</title>"));
    }

    #[test]
    fn test_theme_values_are_injected() {
        let snapshot = sample_snapshot();
        let html = generate_document(&snapshot, "T").unwrap();
        assert!(html.contains("--accent: rgb(30, 60, 114);"));
        assert!(html.contains("--stage-bg: rgb(42, 82, 152);"));
        assert!(html.contains("--canvas-aspect: 1200 / 675;"));
    }

    #[test]
    fn test_marker_blend_maps_to_composite_operation() {
        let mut snapshot = sample_snapshot();
        snapshot.theme.marker_blend = MarkerBlend::Multiply;
        let html = generate_document(&snapshot, "T").unwrap();
        assert!(html.contains("const MARKER_OP = \"multiply\";"));

        snapshot.theme.marker_blend = MarkerBlend::Translucent;
        let html = generate_document(&snapshot, "T").unwrap();
        assert!(html.contains("const MARKER_OP = \"source-over\";"));
    }

    #[test]
    fn test_document_is_self_contained() {
        let html = generate_document(&sample_snapshot(), "T").unwrap();
        // No external stylesheet/script/CDN references.
        assert!(!html.contains("<link rel="));
        assert!(!html.contains("src=\"http"));
        assert!(!html.contains("@import"));
    }

    #[test]
    fn test_export_to_file_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.html");
        export_to_file(&sample_snapshot(), "T", &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("const SLIDES = ["));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("plain"), "plain");
        assert_eq!(html_escape("<b>"), "&lt;b&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }
}
