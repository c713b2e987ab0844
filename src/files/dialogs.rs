//! Native file dialog integration using the rfd crate
//!
//! This module provides functions to open native file picker dialogs
//! for saving exported presentations and for choosing images to embed.

use rfd::FileDialog;
use std::path::PathBuf;

/// File extension filters for supported file types.
const HTML_EXTENSIONS: &[&str] = &["html", "htm"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Opens a native save dialog for the exported presentation.
///
/// Returns `Some(PathBuf)` if a location was selected, `None` if cancelled.
pub fn save_presentation_dialog(
    initial_dir: Option<&PathBuf>,
    default_name: &str,
) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Export Presentation")
        .add_filter("HTML Presentation", HTML_EXTENSIONS)
        .set_file_name(default_name);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}

/// Opens a native file dialog for choosing an image to embed in a slide.
///
/// Returns `Some(PathBuf)` if an image was selected, `None` if cancelled.
pub fn pick_image_dialog(initial_dir: Option<&PathBuf>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Embed Image")
        .add_filter("Images", IMAGE_EXTENSIONS);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}
