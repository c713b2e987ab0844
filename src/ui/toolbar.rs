//! Toolbar for the editor window
//!
//! A single row of grouped controls: deck operations, markup snippet
//! insertion, theme menus, and export/playback actions. The toolbar emits a
//! `ToolbarAction` and never mutates state itself; the app layer routes the
//! action to the deck, the exporter, or the settings.

use crate::config::EditorTheme;
use crate::theme::MarkerBlend;
use eframe::egui::{self, RichText, Ui};

// ─────────────────────────────────────────────────────────────────────────────
// Snippets
// ─────────────────────────────────────────────────────────────────────────────

/// Markup snippets insertable into the content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    Subheading,
    Paragraph,
    BulletList,
    CodeBlock,
    Divider,
}

impl Snippet {
    /// The fragment appended to the slide content.
    pub fn template(&self) -> &'static str {
        match self {
            Snippet::Subheading => "<h2>Subheading Title</h2>\n",
            Snippet::Paragraph => "<p>Write your paragraph text here.</p>\n",
            Snippet::BulletList => "<ul>\n  <li>Item 1</li>\n  <li>Item 2</li>\n</ul>\n",
            Snippet::CodeBlock => {
                "<div class=\"code-block\">// Code here\nconsole.log('Hello');</div>\n"
            }
            Snippet::Divider => "<hr>\n",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Snippet::Subheading => "H2",
            Snippet::Paragraph => "¶",
            Snippet::BulletList => "• List",
            Snippet::CodeBlock => "</>",
            Snippet::Divider => "―",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Snippet::Subheading => "Insert subheading",
            Snippet::Paragraph => "Insert paragraph",
            Snippet::BulletList => "Insert bullet list",
            Snippet::CodeBlock => "Insert code block",
            Snippet::Divider => "Insert divider",
        }
    }

    pub fn all() -> &'static [Snippet] {
        &[
            Snippet::Subheading,
            Snippet::Paragraph,
            Snippet::BulletList,
            Snippet::CodeBlock,
            Snippet::Divider,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Actions
// ─────────────────────────────────────────────────────────────────────────────

/// Actions that can be triggered from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    /// Append a new slide and select it
    AddSlide,
    /// Append a markup snippet to the current slide's content
    InsertSnippet(Snippet),
    /// Pick an image and embed it as a data URI
    EmbedImage,
    /// Start in-app playback
    Present,
    /// Export the deck to an HTML file
    ExportHtml,
    /// Copy the generated document to the clipboard
    CopyHtml,
    /// Switch the editor window theme
    SetEditorTheme(EditorTheme),
    /// Apply a deck theme preset
    ApplyDaylightTheme,
    /// Apply the dark deck theme preset
    ApplyMidnightTheme,
    /// Change the marker compositing mode
    SetMarkerBlend(MarkerBlend),
}

// ─────────────────────────────────────────────────────────────────────────────
// Toolbar
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct Toolbar;

impl Toolbar {
    pub fn new() -> Self {
        Self
    }

    /// Render the toolbar and return any triggered action.
    pub fn show(
        &self,
        ui: &mut Ui,
        editor_theme: EditorTheme,
        marker_blend: MarkerBlend,
    ) -> Option<ToolbarAction> {
        let mut action = None;

        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Mica").heading().strong());
            ui.separator();

            if ui.button("＋ Slide").on_hover_text("Add slide").clicked() {
                action = Some(ToolbarAction::AddSlide);
            }

            ui.separator();
            for &snippet in Snippet::all() {
                if ui
                    .button(snippet.label())
                    .on_hover_text(snippet.description())
                    .clicked()
                {
                    action = Some(ToolbarAction::InsertSnippet(snippet));
                }
            }
            if ui.button("🖼").on_hover_text("Embed image").clicked() {
                action = Some(ToolbarAction::EmbedImage);
            }

            ui.separator();
            ui.menu_button("Theme", |ui| {
                ui.label(RichText::new("Editor").small().weak());
                for &theme in EditorTheme::all() {
                    if ui
                        .selectable_label(editor_theme == theme, theme.label())
                        .clicked()
                    {
                        action = Some(ToolbarAction::SetEditorTheme(theme));
                        ui.close_menu();
                    }
                }
                ui.separator();
                ui.label(RichText::new("Deck preset").small().weak());
                if ui.button("Daylight").clicked() {
                    action = Some(ToolbarAction::ApplyDaylightTheme);
                    ui.close_menu();
                }
                if ui.button("Midnight").clicked() {
                    action = Some(ToolbarAction::ApplyMidnightTheme);
                    ui.close_menu();
                }
                ui.separator();
                ui.label(RichText::new("Marker blend").small().weak());
                for &blend in MarkerBlend::all() {
                    if ui
                        .selectable_label(marker_blend == blend, blend.label())
                        .clicked()
                    {
                        action = Some(ToolbarAction::SetMarkerBlend(blend));
                        ui.close_menu();
                    }
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new("▶ Present").strong())
                    .on_hover_text("Rehearse in-app (F5)")
                    .clicked()
                {
                    action = Some(ToolbarAction::Present);
                }
                if ui
                    .button("⬇ Export")
                    .on_hover_text("Export standalone HTML (Ctrl+E)")
                    .clicked()
                {
                    action = Some(ToolbarAction::ExportHtml);
                }
                if ui
                    .button("⧉ Copy HTML")
                    .on_hover_text("Copy the presentation document to the clipboard")
                    .clicked()
                {
                    action = Some(ToolbarAction::CopyHtml);
                }
            });
        });

        action
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_templates_are_fragments() {
        for &snippet in Snippet::all() {
            let template = snippet.template();
            assert!(template.starts_with('<'), "{:?}", snippet);
            assert!(template.ends_with('\n'), "{:?}", snippet);
        }
    }

    #[test]
    fn test_snippet_list_is_complete() {
        assert_eq!(Snippet::all().len(), 5);
    }
}
