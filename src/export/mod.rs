//! Presentation export for Mica
//!
//! Turns a deck snapshot into one self-contained HTML artifact that plays
//! itself: navigation, freehand annotation, and laser pointer are all built
//! into the generated document.
//!
//! # Architecture
//!
//! - `template.rs` - the fixed player bundle (stylesheet + script constants)
//! - `html.rs` - composition: snapshot JSON + theme CSS injected into the bundle
//! - `clipboard.rs` - copy the generated document to the system clipboard

pub mod clipboard;
pub mod html;
mod template;

pub use clipboard::copy_document_to_clipboard;
pub use html::{export_to_file, generate_document, ExportError};
