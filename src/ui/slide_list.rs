//! Slide list panel
//!
//! The left-hand panel showing one numbered thumbnail per slide: title,
//! a tag-stripped content preview, and duplicate/delete buttons. The panel
//! only reads the deck and reports the clicked action; the app layer
//! performs the mutation so rejections can be surfaced as toasts.

use crate::deck::Deck;
use crate::ui::markup::preview_text;
use eframe::egui::{self, Color32, RichText, Ui};

/// Maximum characters of content shown in a thumbnail.
const PREVIEW_CHARS: usize = 50;

/// Actions triggered from the slide list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideListAction {
    /// Make this slide the edited one
    Select(usize),
    /// Insert a copy right after this slide
    Duplicate(usize),
    /// Remove this slide
    Delete(usize),
}

/// Slide list panel state and rendering.
#[derive(Debug, Default)]
pub struct SlideListPanel;

impl SlideListPanel {
    pub fn new() -> Self {
        Self
    }

    /// Render the panel and return any triggered action.
    pub fn show(&self, ui: &mut Ui, deck: &Deck) -> Option<SlideListAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading("Slides");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}", deck.len()))
                        .strong()
                        .color(ui.visuals().hyperlink_color),
                );
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, slide) in deck.slides().iter().enumerate() {
                    let selected = index == deck.current_index();
                    let frame = egui::Frame::group(ui.style()).stroke(if selected {
                        egui::Stroke::new(1.5, ui.visuals().hyperlink_color)
                    } else {
                        ui.visuals().window_stroke
                    });

                    let response = frame
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(format!("#{}", index + 1))
                                        .weak()
                                        .monospace(),
                                );
                                let title = if slide.title.is_empty() {
                                    "Untitled Slide"
                                } else {
                                    &slide.title
                                };
                                ui.label(RichText::new(title).strong());

                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui
                                            .small_button("✕")
                                            .on_hover_text("Delete")
                                            .clicked()
                                        {
                                            action = Some(SlideListAction::Delete(index));
                                        }
                                        if ui
                                            .small_button("⧉")
                                            .on_hover_text("Duplicate")
                                            .clicked()
                                        {
                                            action = Some(SlideListAction::Duplicate(index));
                                        }
                                    },
                                );
                            });
                            ui.label(
                                RichText::new(preview_text(&slide.content, PREVIEW_CHARS))
                                    .small()
                                    .color(Color32::GRAY),
                            );
                        })
                        .response;

                    // Clicking anywhere else on the card selects the slide.
                    if action.is_none()
                        && response.interact(egui::Sense::click()).clicked()
                        && !selected
                    {
                        action = Some(SlideListAction::Select(index));
                    }

                    ui.add_space(4.0);
                }
            });

        action
    }
}
