//! UI components for Mica
//!
//! This module contains the editor panels and the playback view.

mod editor_form;
pub mod markup;
mod present;
mod preview;
mod slide_list;
mod toolbar;

pub use editor_form::EditorForm;
pub use present::{PresentAction, PresentView};
pub use preview::PreviewPanel;
pub use slide_list::{SlideListAction, SlideListPanel};
pub use toolbar::{Snippet, Toolbar, ToolbarAction};
