//! Live slide preview
//!
//! An approximate rendering of the current slide inside a card styled with
//! the deck theme. Slide content is arbitrary HTML, which egui does not
//! render, so the preview shows the title styled with the accent color and
//! the body as tag-stripped text — enough to judge pacing and wording; the
//! exported artifact is the faithful rendering.

use crate::deck::Slide;
use crate::theme::DeckTheme;
use crate::ui::markup::strip_tags;
use eframe::egui::{self, Color32, RichText, Ui};

#[derive(Debug, Default)]
pub struct PreviewPanel;

impl PreviewPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, ui: &mut Ui, slide: &Slide, theme: &DeckTheme) {
        ui.label(RichText::new("Preview").strong());
        ui.add_space(4.0);

        let outer = egui::Frame::none()
            .fill(theme.outer_background.to_color32())
            .rounding(8.0)
            .inner_margin(18.0);

        outer.show(ui, |ui| {
            ui.set_width(ui.available_width());
            let card = egui::Frame::none()
                .fill(theme.inner_background.to_color32())
                .rounding(10.0)
                .inner_margin(16.0);

            card.show(ui, |ui| {
                ui.set_width(ui.available_width());
                let title = if slide.title.is_empty() {
                    "Untitled Slide"
                } else {
                    &slide.title
                };
                ui.label(
                    RichText::new(title)
                        .heading()
                        .color(theme.accent.to_color32()),
                );
                ui.add_space(6.0);

                let body = strip_tags(&slide.content);
                if body.is_empty() {
                    ui.label(RichText::new("No content yet.").italics().color(Color32::GRAY));
                } else {
                    ui.label(RichText::new(body).color(Color32::from_gray(60)));
                }
            });
        });
    }
}
