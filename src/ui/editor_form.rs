//! Slide editor form
//!
//! Title, content, and notes inputs bound to the current slide. Edits are
//! written back through `Deck::update_current` in one call per changed
//! frame, so the deck is the single source of truth and the form carries
//! no state of its own.

use crate::deck::{Deck, SlideFields};
use eframe::egui::{self, RichText, TextEdit, Ui};

/// Rows given to the content editor.
const CONTENT_ROWS: usize = 14;
/// Rows given to the notes editor.
const NOTES_ROWS: usize = 4;

#[derive(Debug, Default)]
pub struct EditorForm;

impl EditorForm {
    pub fn new() -> Self {
        Self
    }

    /// Render the form. Returns `true` when the slide was modified.
    pub fn show(&self, ui: &mut Ui, deck: &mut Deck) -> bool {
        let slide = deck.current_slide();
        let mut fields = SlideFields {
            title: slide.title.clone(),
            content: slide.content.clone(),
            notes: slide.notes.clone(),
        };
        let mut changed = false;

        ui.label(RichText::new("Title").strong());
        changed |= ui
            .add(
                TextEdit::singleline(&mut fields.title)
                    .desired_width(f32::INFINITY)
                    .hint_text("Slide title"),
            )
            .changed();

        ui.add_space(8.0);
        ui.label(RichText::new("Content").strong());
        ui.label(
            RichText::new("HTML fragment, rendered verbatim in the exported deck")
                .small()
                .weak(),
        );
        changed |= ui
            .add(
                TextEdit::multiline(&mut fields.content)
                    .desired_width(f32::INFINITY)
                    .desired_rows(CONTENT_ROWS)
                    .code_editor(),
            )
            .changed();

        ui.add_space(8.0);
        ui.label(RichText::new("Speaker notes").strong());
        ui.label(RichText::new("Not included in the exported file").small().weak());
        changed |= ui
            .add(
                TextEdit::multiline(&mut fields.notes)
                    .desired_width(f32::INFINITY)
                    .desired_rows(NOTES_ROWS),
            )
            .changed();

        if changed {
            deck.update_current(fields);
        }
        changed
    }
}
