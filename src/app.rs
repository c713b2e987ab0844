//! Main application module for Mica
//!
//! This module implements the eframe App trait: the editor screen (toolbar,
//! slide list, form, preview), the playback mode switch, toast lifecycle,
//! and settings persistence.

use crate::config::{save_config_silent, EditorTheme, Settings};
use crate::deck::{Deck, SlideFields};
use crate::export::{copy_document_to_clipboard, export_to_file};
use crate::files::dialogs::{pick_image_dialog, save_presentation_dialog};
use crate::files::images::image_tag_for_file;
use crate::runtime::Session;
use crate::theme::DeckTheme;
use crate::ui::{
    EditorForm, PresentAction, PresentView, PreviewPanel, SlideListAction, SlideListPanel,
    Toolbar, ToolbarAction,
};
use eframe::egui;
use log::{info, warn};
use std::path::PathBuf;

/// How long toasts stay visible, in seconds.
const TOAST_DURATION: f64 = 3.0;

/// Minimum seconds between config writes, so a window-resize drag does not
/// hammer the disk.
const SETTINGS_SAVE_DEBOUNCE: f64 = 2.0;

/// Keyboard shortcuts handled on the editor screen.
#[derive(Debug, Clone, Copy)]
enum KeyboardAction {
    /// Add a slide (Ctrl+N)
    AddSlide,
    /// Duplicate the current slide (Ctrl+D)
    DuplicateCurrent,
    /// Export as HTML (Ctrl+E)
    ExportHtml,
    /// Start playback (F5)
    Present,
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Transient editor-screen state.
#[derive(Debug, Default)]
struct UiState {
    /// Temporary toast message shown at the bottom of the window
    toast_message: Option<String>,
    /// When the toast message should expire (seconds since app start)
    toast_expires_at: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application
// ─────────────────────────────────────────────────────────────────────────────

/// The main application struct that holds all state and implements eframe::App.
pub struct MicaApp {
    /// The deck being authored
    deck: Deck,
    /// User settings (loaded from config)
    settings: Settings,
    /// Whether settings have been modified and need saving
    settings_dirty: bool,
    /// Transient UI state
    ui: UiState,
    /// Toolbar component
    toolbar: Toolbar,
    /// Slide list panel component
    slide_list: SlideListPanel,
    /// Editor form component
    editor_form: EditorForm,
    /// Live preview component
    preview: PreviewPanel,
    /// Active playback session, if any (None = editor screen)
    playback: Option<(Session, PresentView)>,
    /// Application start time for timing toast messages
    start_time: std::time::Instant,
    /// When settings were last written (seconds since app start)
    last_settings_save: f64,
}

impl MicaApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let app = Self {
            deck: Deck::new(),
            settings,
            settings_dirty: false,
            ui: UiState::default(),
            toolbar: Toolbar::new(),
            slide_list: SlideListPanel::new(),
            editor_form: EditorForm::new(),
            preview: PreviewPanel::new(),
            playback: None,
            start_time: std::time::Instant::now(),
            last_settings_save: 0.0,
        };
        app.apply_editor_theme(&cc.egui_ctx);
        app
    }

    fn apply_editor_theme(&self, ctx: &egui::Context) {
        let visuals = match self.settings.editor_theme {
            EditorTheme::Light => egui::Visuals::light(),
            EditorTheme::Dark => egui::Visuals::dark(),
            EditorTheme::System => {
                if ctx.style().visuals.dark_mode {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                }
            }
        };
        ctx.set_visuals(visuals);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────────────────────

    fn now(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Show a temporary toast message (disappears after a fixed delay).
    fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(self.now() + TOAST_DURATION);
    }

    /// Clear the toast once its fire-and-forget delay has elapsed.
    fn update_toast(&mut self) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if self.now() >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Action Routing
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_toolbar_action(&mut self, ctx: &egui::Context, action: ToolbarAction) {
        match action {
            ToolbarAction::AddSlide => {
                self.deck.add_slide();
                self.show_toast("Slide added");
            }
            ToolbarAction::InsertSnippet(snippet) => {
                self.append_to_current_content(snippet.template());
            }
            ToolbarAction::EmbedImage => self.embed_image(),
            ToolbarAction::Present => self.start_playback(ctx),
            ToolbarAction::ExportHtml => self.export_html(),
            ToolbarAction::CopyHtml => self.copy_html(),
            ToolbarAction::SetEditorTheme(theme) => {
                self.settings.editor_theme = theme;
                self.settings_dirty = true;
                self.apply_editor_theme(ctx);
            }
            ToolbarAction::ApplyDaylightTheme => {
                self.settings.deck_theme = DeckTheme::daylight();
                self.settings_dirty = true;
                self.show_toast("Daylight theme applied");
            }
            ToolbarAction::ApplyMidnightTheme => {
                self.settings.deck_theme = DeckTheme::midnight();
                self.settings_dirty = true;
                self.show_toast("Midnight theme applied");
            }
            ToolbarAction::SetMarkerBlend(blend) => {
                self.settings.deck_theme.marker_blend = blend;
                self.settings_dirty = true;
            }
        }
    }

    fn handle_slide_list_action(&mut self, action: SlideListAction) {
        match action {
            SlideListAction::Select(index) => {
                self.deck.set_current(index);
            }
            SlideListAction::Duplicate(index) => {
                if self.deck.duplicate_slide(index) {
                    self.show_toast("Slide duplicated");
                }
            }
            SlideListAction::Delete(index) => {
                if self.deck.delete_slide(index) {
                    self.show_toast("Slide deleted");
                } else {
                    // Invariant guard: the deck never becomes empty.
                    self.show_toast("Cannot delete the last slide");
                }
            }
        }
    }

    fn append_to_current_content(&mut self, fragment: &str) {
        let slide = self.deck.current_slide();
        let mut fields = SlideFields {
            title: slide.title.clone(),
            content: slide.content.clone(),
            notes: slide.notes.clone(),
        };
        if !fields.content.is_empty() && !fields.content.ends_with('\n') {
            fields.content.push('\n');
        }
        fields.content.push_str(fragment);
        self.deck.update_current(fields);
    }

    fn embed_image(&mut self) {
        let Some(path) = pick_image_dialog(self.settings.last_export_dir.as_ref()) else {
            return;
        };
        match image_tag_for_file(&path) {
            Ok(tag) => {
                self.append_to_current_content(&format!("{}\n", tag));
                self.show_toast("Image embedded");
            }
            Err(e) => {
                warn!("Image embed failed: {}", e);
                self.show_toast(format!("Could not embed image: {}", e));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export & Playback
    // ─────────────────────────────────────────────────────────────────────────

    /// Document title for exports: the first slide's title, if it has one.
    fn export_title(&self) -> String {
        let first = &self.deck.slides()[0].title;
        if first.is_empty() {
            "Presentation".to_string()
        } else {
            first.clone()
        }
    }

    fn export_html(&mut self) {
        let Some(path) =
            save_presentation_dialog(self.settings.last_export_dir.as_ref(), "presentation.html")
        else {
            return;
        };

        let snapshot = self.deck.snapshot(&self.settings.deck_theme);
        match export_to_file(&snapshot, &self.export_title(), &path) {
            Ok(()) => {
                self.settings.last_export_dir = path.parent().map(PathBuf::from);
                self.settings_dirty = true;
                self.show_toast("Presentation exported");
                // Show the result right away; a failure here is not worth
                // interrupting the user over.
                if let Err(e) = open::that_detached(&path) {
                    warn!("Could not open exported file: {}", e);
                }
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                self.show_toast(format!("Export failed: {}", e));
            }
        }
    }

    fn copy_html(&mut self) {
        let snapshot = self.deck.snapshot(&self.settings.deck_theme);
        match copy_document_to_clipboard(&snapshot, &self.export_title()) {
            Ok(()) => self.show_toast("Presentation copied to clipboard"),
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                self.show_toast(format!("Copy failed: {}", e));
            }
        }
    }

    fn start_playback(&mut self, ctx: &egui::Context) {
        let snapshot = self.deck.snapshot(&self.settings.deck_theme);
        let size = ctx.screen_rect().size();
        let session = Session::new(snapshot, size.x as u32, size.y as u32);
        self.playback = Some((session, PresentView::new()));
        info!("Entered playback mode");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editor Screen
    // ─────────────────────────────────────────────────────────────────────────

    fn collect_keyboard_action(&self, ctx: &egui::Context) -> Option<KeyboardAction> {
        ctx.input_mut(|i| {
            if i.consume_key(egui::Modifiers::COMMAND, egui::Key::N) {
                Some(KeyboardAction::AddSlide)
            } else if i.consume_key(egui::Modifiers::COMMAND, egui::Key::D) {
                Some(KeyboardAction::DuplicateCurrent)
            } else if i.consume_key(egui::Modifiers::COMMAND, egui::Key::E) {
                Some(KeyboardAction::ExportHtml)
            } else if i.consume_key(egui::Modifiers::NONE, egui::Key::F5) {
                Some(KeyboardAction::Present)
            } else {
                None
            }
        })
    }

    fn show_editor_screen(&mut self, ctx: &egui::Context) {
        match self.collect_keyboard_action(ctx) {
            Some(KeyboardAction::AddSlide) => {
                self.deck.add_slide();
            }
            Some(KeyboardAction::DuplicateCurrent) => {
                let index = self.deck.current_index();
                self.deck.duplicate_slide(index);
            }
            Some(KeyboardAction::ExportHtml) => self.export_html(),
            Some(KeyboardAction::Present) => self.start_playback(ctx),
            None => {}
        }

        let mut toolbar_action = None;
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            toolbar_action = self.toolbar.show(
                ui,
                self.settings.editor_theme,
                self.settings.deck_theme.marker_blend,
            );
            ui.add_space(4.0);
        });
        if let Some(action) = toolbar_action {
            self.handle_toolbar_action(ctx, action);
        }

        let mut list_action = None;
        egui::SidePanel::left("slide-list")
            .default_width(240.0)
            .show(ctx, |ui| {
                list_action = self.slide_list.show(ui, &self.deck);
            });
        if let Some(action) = list_action {
            self.handle_slide_list_action(action);
        }

        egui::SidePanel::right("preview")
            .default_width(360.0)
            .show(ctx, |ui| {
                self.preview
                    .show(ui, self.deck.current_slide(), &self.settings.deck_theme);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.editor_form.show(ui, &mut self.deck);
            });
        });

        self.show_toast_overlay(ctx);
    }

    fn show_toast_overlay(&self, ctx: &egui::Context) {
        if let Some(message) = &self.ui.toast_message {
            egui::Area::new(egui::Id::new("toast"))
                .anchor(egui::Align2::CENTER_BOTTOM, egui::Vec2::new(0.0, -24.0))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(message);
                    });
                });
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    fn track_window_size(&mut self, ctx: &egui::Context) {
        let (inner_rect, maximized) = ctx.input(|i| {
            let viewport = i.viewport();
            (viewport.inner_rect, viewport.maximized.unwrap_or(false))
        });
        if let Some(rect) = inner_rect {
            let size = &mut self.settings.window_size;
            if !maximized
                && ((size.width - rect.width()).abs() > 1.0
                    || (size.height - rect.height()).abs() > 1.0)
            {
                size.width = rect.width();
                size.height = rect.height();
                size.x = Some(rect.min.x);
                size.y = Some(rect.min.y);
                self.settings_dirty = true;
            }
            if size.maximized != maximized {
                size.maximized = maximized;
                self.settings_dirty = true;
            }
        }
    }

    fn save_settings_if_dirty(&mut self) {
        if !self.settings_dirty {
            return;
        }
        let now = self.now();
        if now - self.last_settings_save < SETTINGS_SAVE_DEBOUNCE {
            return;
        }
        if save_config_silent(&self.settings) {
            self.settings_dirty = false;
            self.last_settings_save = now;
        }
    }
}

impl eframe::App for MicaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_toast();
        self.track_window_size(ctx);

        let mut leave_playback = false;
        if let Some((session, view)) = &mut self.playback {
            leave_playback = view.show(ctx, session) == Some(PresentAction::Exit);
            // Keep repainting so the laser dot and strokes track smoothly.
            ctx.request_repaint();
        }
        if leave_playback {
            self.playback = None;
            info!("Left playback mode");
        }
        if self.playback.is_none() {
            self.show_editor_screen(ctx);
            if self.ui.toast_message.is_some() {
                ctx.request_repaint();
            }
        }

        self.save_settings_if_dirty();
    }
}
