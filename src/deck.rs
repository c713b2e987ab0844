//! Deck model for Mica
//!
//! This module defines the `Deck` struct that owns the ordered slide list
//! and the editing cursor, plus the immutable `Snapshot` handed to the
//! presentation runtime and the export pipeline.

use crate::theme::DeckTheme;
use log::{debug, warn};
use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// Slide
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque identifier for a slide.
///
/// Ids are issued by a deck-owned monotonic counter, so they are unique
/// within a deck and stable across duplication and reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(u64);

/// A single slide as edited in the authoring UI.
///
/// `content` is an HTML-like fragment that is never validated or
/// sanitized — the runtime and the exported artifact render it verbatim.
/// `notes` are author-only and excluded from the snapshot.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Unique identifier for this slide
    pub id: SlideId,
    /// Slide title (plain text)
    pub title: String,
    /// Slide body as a rich-text fragment
    pub content: String,
    /// Speaker notes, not rendered in playback
    pub notes: String,
}

impl Slide {
    fn starter(id: SlideId) -> Self {
        Self {
            id,
            title: "Welcome to Mica".to_string(),
            content: "<p>Build your deck with the editor on the left.</p>\n<ul>\n  <li>Add and duplicate slides</li>\n  <li>Rehearse with Present</li>\n  <li>Export a single HTML file</li>\n</ul>".to_string(),
            notes: String::new(),
        }
    }

    fn placeholder(id: SlideId) -> Self {
        Self {
            id,
            title: "New Slide".to_string(),
            content: "<p>Add your content here...</p>".to_string(),
            notes: String::new(),
        }
    }
}

/// Editable fields of a slide, applied in one call from the form bindings.
#[derive(Debug, Clone, Default)]
pub struct SlideFields {
    pub title: String,
    pub content: String,
    pub notes: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// One slide as seen by the presentation runtime.
///
/// Ids and notes are not needed at playback time and are dropped here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SnapshotSlide {
    pub title: String,
    pub content: String,
}

/// Immutable serialized copy of a deck plus its theme.
///
/// Created once per export or playback launch; edits made to the live deck
/// afterwards do not propagate into it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub slides: Vec<SnapshotSlide>,
    pub theme: DeckTheme,
}

impl Snapshot {
    /// Number of slides. Always at least 1 (deck invariant).
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Deck
// ─────────────────────────────────────────────────────────────────────────────

/// The ordered slide collection being authored.
///
/// Order is navigation order. The cursor always points at a valid slide and
/// is clamped on every structural mutation. The deck is never empty:
/// deleting the last remaining slide is rejected, not performed.
#[derive(Debug)]
pub struct Deck {
    slides: Vec<Slide>,
    current: usize,
    next_id: u64,
}

impl Deck {
    /// Create a deck with a single starter slide.
    pub fn new() -> Self {
        let mut deck = Self {
            slides: Vec::new(),
            current: 0,
            next_id: 0,
        };
        let id = deck.issue_id();
        deck.slides.push(Slide::starter(id));
        deck
    }

    fn issue_id(&mut self) -> SlideId {
        let id = SlideId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Number of slides. Always ≥ 1.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// All slides in order (read-only).
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Index of the slide currently being edited.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The slide currently being edited.
    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    /// Append a new slide with placeholder content and select it.
    ///
    /// Returns the index of the new slide.
    pub fn add_slide(&mut self) -> usize {
        let id = self.issue_id();
        self.slides.push(Slide::placeholder(id));
        self.current = self.slides.len() - 1;
        debug!("Added slide {:?} at index {}", id, self.current);
        self.current
    }

    /// Insert a deep copy of the slide at `index` immediately after it.
    ///
    /// The copy gets a fresh id and a " (Copy)" title suffix, and becomes
    /// the current slide. Returns `false` for an out-of-range index.
    pub fn duplicate_slide(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            warn!("Ignoring duplicate of out-of-range slide index {}", index);
            return false;
        }
        let mut copy = self.slides[index].clone();
        copy.id = self.issue_id();
        copy.title.push_str(" (Copy)");
        self.slides.insert(index + 1, copy);
        self.current = index + 1;
        debug!("Duplicated slide {} -> {}", index, self.current);
        true
    }

    /// Remove the slide at `index`.
    ///
    /// Rejected (returns `false`, deck unchanged) when the deck holds only
    /// one slide or the index is out of range. The cursor is clamped to the
    /// new length afterwards.
    pub fn delete_slide(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            warn!("Ignoring delete of out-of-range slide index {}", index);
            return false;
        }
        if self.slides.len() == 1 {
            warn!("Rejected deleting the last remaining slide");
            return false;
        }
        self.slides.remove(index);
        if self.current >= self.slides.len() {
            self.current = self.slides.len() - 1;
        } else if index < self.current {
            self.current -= 1;
        }
        debug!("Deleted slide {}, cursor now {}", index, self.current);
        true
    }

    /// Overwrite the editable fields of the current slide.
    pub fn update_current(&mut self, fields: SlideFields) {
        let slide = &mut self.slides[self.current];
        slide.title = fields.title;
        slide.content = fields.content;
        slide.notes = fields.notes;
    }

    /// Move the cursor to `index`.
    ///
    /// Out-of-range requests are ignored and return `false`.
    pub fn set_current(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = index;
            true
        } else {
            warn!("Ignoring selection of out-of-range slide index {}", index);
            false
        }
    }

    /// Produce the immutable snapshot consumed by the runtime and exporter.
    ///
    /// Pure: the deck is not modified. Notes and ids are dropped.
    pub fn snapshot(&self, theme: &DeckTheme) -> Snapshot {
        Snapshot {
            slides: self
                .slides
                .iter()
                .map(|s| SnapshotSlide {
                    title: s.title.clone(),
                    content: s.content.clone(),
                })
                .collect(),
            theme: theme.clone(),
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(n: usize) -> Deck {
        let mut deck = Deck::new();
        for _ in 1..n {
            deck.add_slide();
        }
        deck
    }

    #[test]
    fn test_new_deck_has_one_slide() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn test_add_slide_selects_it() {
        let mut deck = Deck::new();
        let index = deck.add_slide();
        assert_eq!(deck.len(), 2);
        assert_eq!(index, 1);
        assert_eq!(deck.current_index(), 1);
        assert_eq!(deck.current_slide().title, "New Slide");
    }

    #[test]
    fn test_slide_ids_are_unique() {
        let mut deck = deck_of(4);
        deck.duplicate_slide(2);
        let mut ids: Vec<SlideId> = deck.slides().iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn test_duplicate_inserts_adjacent_copy() {
        let mut deck = deck_of(3);
        deck.set_current(0);
        {
            let fields = SlideFields {
                title: "Original".to_string(),
                content: "<p>body</p>".to_string(),
                notes: "n".to_string(),
            };
            deck.update_current(fields);
        }

        assert!(deck.duplicate_slide(0));
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.current_index(), 1);
        assert_eq!(deck.slides()[1].title, "Original (Copy)");
        assert_eq!(deck.slides()[1].content, "<p>body</p>");
        assert_ne!(deck.slides()[1].id, deck.slides()[0].id);
        // Slides before and after the insertion point are untouched
        assert_eq!(deck.slides()[0].title, "Original");
        assert_eq!(deck.slides()[2].title, "New Slide");
    }

    #[test]
    fn test_duplicate_out_of_range_is_rejected() {
        let mut deck = deck_of(2);
        assert!(!deck.duplicate_slide(5));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_delete_last_slide_is_rejected() {
        let mut deck = Deck::new();
        assert!(!deck.delete_slide(0));
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn test_delete_clamps_cursor() {
        let mut deck = deck_of(3);
        deck.set_current(2);
        assert!(deck.delete_slide(2));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn test_delete_before_cursor_shifts_cursor() {
        let mut deck = deck_of(3);
        deck.set_current(2);
        assert!(deck.delete_slide(0));
        // Cursor still points at the same slide, now at index 1
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn test_delete_out_of_range_is_rejected() {
        let mut deck = deck_of(2);
        assert!(!deck.delete_slide(7));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_set_current_ignores_invalid_index() {
        let mut deck = deck_of(2);
        assert!(deck.set_current(1));
        assert!(!deck.set_current(9));
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn test_update_current_overwrites_fields() {
        let mut deck = Deck::new();
        deck.update_current(SlideFields {
            title: "T".to_string(),
            content: "<h2>C</h2>".to_string(),
            notes: "N".to_string(),
        });
        let slide = deck.current_slide();
        assert_eq!(slide.title, "T");
        assert_eq!(slide.content, "<h2>C</h2>");
        assert_eq!(slide.notes, "N");
    }

    #[test]
    fn test_snapshot_copies_slides_and_drops_notes() {
        let mut deck = deck_of(2);
        deck.update_current(SlideFields {
            title: "Second".to_string(),
            content: "<p>two</p>".to_string(),
            notes: "private".to_string(),
        });

        let snapshot = deck.snapshot(&DeckTheme::daylight());
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.slides[1].title, "Second");
        assert_eq!(snapshot.slides[1].content, "<p>two</p>");

        // Later edits do not propagate into the snapshot
        deck.update_current(SlideFields::default());
        assert_eq!(snapshot.slides[1].title, "Second");

        // Notes never appear in the serialized form
        let json = serde_json::to_string(&snapshot.slides).unwrap();
        assert!(!json.contains("private"));
        assert!(!json.contains("notes"));
    }
}
