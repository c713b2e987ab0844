//! Image embedding
//!
//! Exported presentations are single files, so images are embedded into
//! slide content as base64 `data:` URIs rather than referenced by path.
//! The file is decoded with the image crate first: rejecting a broken image
//! at insertion time beats exporting a deck with a dead `<img>` in it.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::info;
use std::path::Path;

/// Read an image file and return an `<img>` tag with its content embedded
/// as a base64 data URI.
pub fn image_tag_for_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;

    // Validate before embedding; also tells us the real format regardless
    // of the file extension.
    let format = image::guess_format(&bytes)
        .map_err(|e| Error::Application(format!("Unrecognized image format: {}", e)))?;
    let mime = match format {
        image::ImageFormat::Png => "image/png",
        image::ImageFormat::Jpeg => "image/jpeg",
        other => {
            return Err(Error::Application(format!(
                "Unsupported image format: {:?} (use PNG or JPEG)",
                other
            )))
        }
    };
    image::load_from_memory(&bytes)
        .map_err(|e| Error::Application(format!("Could not decode image: {}", e)))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    info!("Embedding {} ({} bytes) as {}", name, bytes.len(), mime);

    Ok(format!(
        "<img src=\"data:{};base64,{}\" alt=\"{}\">",
        mime,
        STANDARD.encode(&bytes),
        name
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
        let mut cursor = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_png_becomes_data_uri_tag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        std::fs::write(&path, tiny_png_bytes()).unwrap();

        let tag = image_tag_for_file(&path).unwrap();
        assert!(tag.starts_with("<img src=\"data:image/png;base64,"));
        assert!(tag.contains("alt=\"dot.png\""));
        assert!(tag.ends_with(">"));
    }

    #[test]
    fn test_non_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(image_tag_for_file(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = image_tag_for_file(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
