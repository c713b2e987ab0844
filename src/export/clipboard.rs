//! Clipboard export
//!
//! Copies a generated presentation document to the system clipboard using
//! the arboard crate, as an alternative to saving a file — handy for
//! pasting straight into a gist or an editor.

use super::html::{generate_document, ExportError};
use crate::deck::Snapshot;
use arboard::Clipboard;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// Failed to access the clipboard
    AccessError(String),
    /// Failed to set clipboard content
    WriteError(String),
    /// Document generation failed
    ExportError(ExportError),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::AccessError(msg) => write!(f, "Clipboard access error: {}", msg),
            ClipboardError::WriteError(msg) => write!(f, "Clipboard write error: {}", msg),
            ClipboardError::ExportError(e) => write!(f, "Document generation error: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<ExportError> for ClipboardError {
    fn from(err: ExportError) -> Self {
        ClipboardError::ExportError(err)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Generate the presentation document for `snapshot` and place it on the
/// clipboard as plain text (the document source).
pub fn copy_document_to_clipboard(snapshot: &Snapshot, title: &str) -> Result<(), ClipboardError> {
    let html = generate_document(snapshot, title)?;

    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;
    clipboard
        .set_text(html)
        .map_err(|e| ClipboardError::WriteError(e.to_string()))?;

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_display() {
        let err = ClipboardError::AccessError("no display".to_string());
        assert!(err.to_string().contains("no display"));
    }

    #[test]
    fn test_export_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: ClipboardError = ExportError::IoError(io).into();
        assert!(matches!(err, ClipboardError::ExportError(_)));
    }

    // Actual clipboard round-trips need a display context, which CI
    // environments typically lack.
}
