//! In-app playback view
//!
//! Runs a `runtime::Session` full-window: the slide card on the themed
//! stage, the annotation overlay uploaded as a texture, the laser dot, tool
//! buttons, the bottom navigation bar, and the slide index panel. This view
//! owns no playback logic — every input is dispatched into the session and
//! the frame is redrawn from the resulting state.

use crate::runtime::{Point, Session, Tool, LASER_RADIUS};
use crate::ui::markup::strip_tags;
use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, RichText, Rounding, Stroke, TextureHandle,
    TextureOptions, Vec2,
};

/// Result of one playback frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentAction {
    /// Leave playback and return to the editor
    Exit,
}

/// Playback view state (texture cache and pointer de-duplication).
pub struct PresentView {
    overlay_texture: Option<TextureHandle>,
    last_sent_pointer: Option<Pos2>,
}

impl PresentView {
    pub fn new() -> Self {
        Self {
            overlay_texture: None,
            last_sent_pointer: None,
        }
    }

    /// Render one frame of playback.
    pub fn show(&mut self, ctx: &egui::Context, session: &mut Session) -> Option<PresentAction> {
        let mut action = self.handle_keys(ctx, session);

        let stage_fill = session.snapshot().theme.outer_background.to_color32();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(stage_fill))
            .show(ctx, |ui| {
                let stage_rect = ui.max_rect();

                // Overlay buffer tracks the viewport 1:1; a size change
                // wipes it (and any stroke in progress with it).
                session.resize(stage_rect.width() as u32, stage_rect.height() as u32);

                self.draw_slide_card(ui, session, stage_rect);
                self.dispatch_pointer(ui, session, stage_rect);
                self.draw_overlay(ctx, ui, session, stage_rect);
            });

        self.show_tool_buttons(ctx, session, &mut action);
        self.show_nav_bar(ctx, session);
        if session.panel().is_open() {
            self.show_index_panel(ctx, session);
        }
        self.draw_laser(ctx, session);

        action
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_keys(&self, ctx: &egui::Context, session: &mut Session) -> Option<PresentAction> {
        let mut action = None;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space) {
                session.next();
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                session.prev();
            }
            if i.key_pressed(egui::Key::Escape) {
                // Escape closes the panel first; a second escape leaves
                // playback (the exported player has no mode to leave).
                if !session.handle_escape() {
                    action = Some(PresentAction::Exit);
                }
            }
        });
        action
    }

    /// Feed pointer input into the session's down/move/up protocol.
    ///
    /// Moves are de-duplicated per position: repainting the same segment
    /// every frame would re-composite translucent strokes in place.
    fn dispatch_pointer(&mut self, ui: &mut egui::Ui, session: &mut Session, stage_rect: Rect) {
        let response = ui.interact(
            stage_rect,
            ui.id().with("annotation-stage"),
            egui::Sense::click_and_drag(),
        );
        let to_surface =
            |pos: Pos2| Point::new(pos.x - stage_rect.min.x, pos.y - stage_rect.min.y);

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                session.pointer_down(to_surface(pos));
                self.last_sent_pointer = Some(pos);
            }
        }

        let track_pos = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos());
        match track_pos {
            Some(pos) => {
                if self.last_sent_pointer != Some(pos) {
                    session.pointer_moved(to_surface(pos));
                    self.last_sent_pointer = Some(pos);
                }
            }
            None => {
                session.pointer_left();
                self.last_sent_pointer = None;
            }
        }

        if response.drag_stopped() {
            session.pointer_up();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stage
    // ─────────────────────────────────────────────────────────────────────────

    fn draw_slide_card(&self, ui: &mut egui::Ui, session: &Session, stage_rect: Rect) {
        let theme = &session.snapshot().theme;
        let slide = session.current_slide();
        let painter = ui.painter();

        // Largest card that fits 90% of the stage at the theme's aspect.
        let aspect = theme.aspect_ratio();
        let max_w = stage_rect.width() * 0.9;
        let max_h = stage_rect.height() * 0.85;
        let (card_w, card_h) = if max_w / aspect <= max_h {
            (max_w, max_w / aspect)
        } else {
            (max_h * aspect, max_h)
        };
        let card_rect = Rect::from_center_size(stage_rect.center(), Vec2::new(card_w, card_h));

        painter.rect(
            card_rect,
            Rounding::same(16.0),
            theme.inner_background.to_color32(),
            Stroke::NONE,
        );

        let pad = card_w * 0.05;
        let title = if slide.title.is_empty() {
            "Untitled Slide"
        } else {
            &slide.title
        };
        let title_pos = card_rect.min + Vec2::splat(pad);
        painter.text(
            title_pos,
            Align2::LEFT_TOP,
            title,
            FontId::proportional(card_h * 0.09),
            theme.accent.to_color32(),
        );

        let body = strip_tags(&slide.content);
        if !body.is_empty() {
            let galley = painter.layout(
                body,
                FontId::proportional(card_h * 0.045),
                Color32::from_gray(55),
                card_w - 2.0 * pad,
            );
            painter.galley(
                Pos2::new(title_pos.x, title_pos.y + card_h * 0.16),
                galley,
                Color32::from_gray(55),
            );
        }
    }

    fn draw_overlay(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        session: &Session,
        stage_rect: Rect,
    ) {
        let surface = session.surface();
        if surface.width() == 0 || surface.height() == 0 {
            return;
        }
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [surface.width() as usize, surface.height() as usize],
            surface.as_rgba_bytes(),
        );
        if let Some(texture) = &mut self.overlay_texture {
            texture.set(image, TextureOptions::LINEAR);
        } else {
            self.overlay_texture =
                Some(ctx.load_texture("annotation-overlay", image, TextureOptions::LINEAR));
        }
        if let Some(texture) = &self.overlay_texture {
            ui.painter().image(
                texture.id(),
                stage_rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }

    fn draw_laser(&self, ctx: &egui::Context, session: &Session) {
        if !session.tools().laser_active() {
            return;
        }
        if let Some(pos) = session.laser().position() {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("laser-dot"),
            ));
            let center = Pos2::new(pos.x, pos.y);
            painter.circle_filled(center, LASER_RADIUS, Color32::from_rgb(239, 68, 68));
            painter.circle_stroke(center, LASER_RADIUS, Stroke::new(1.0, Color32::WHITE));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Controls
    // ─────────────────────────────────────────────────────────────────────────

    fn show_tool_buttons(
        &self,
        ctx: &egui::Context,
        session: &mut Session,
        action: &mut Option<PresentAction>,
    ) {
        egui::Area::new(egui::Id::new("playback-controls"))
            .anchor(Align2::RIGHT_CENTER, Vec2::new(-14.0, 0.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        if ui.button("✕").on_hover_text("Leave playback (Esc)").clicked() {
                            *action = Some(PresentAction::Exit);
                        }
                        if ui.button("⛶").on_hover_text("Fullscreen").clicked() {
                            let fullscreen =
                                ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
                        }
                        if ui.button("☰").on_hover_text("Slide index").clicked() {
                            session.toggle_panel();
                        }
                        ui.separator();
                        for tool in [Tool::Laser, Tool::Pen, Tool::Marker, Tool::Eraser] {
                            let active = session.tools().active() == Some(tool);
                            if ui.selectable_label(active, tool.label()).clicked() {
                                session.select_tool(tool);
                            }
                        }
                        if ui.button("Clear").on_hover_text("Wipe annotations").clicked() {
                            session.clear_annotations();
                        }
                    });
                });
            });
    }

    fn show_nav_bar(&self, ctx: &egui::Context, session: &mut Session) {
        egui::Area::new(egui::Id::new("playback-nav"))
            .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -18.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button(RichText::new("‹").size(20.0)).clicked() {
                            session.prev();
                        }
                        ui.label(RichText::new(session.page_label()).monospace().strong());
                        if ui.button(RichText::new("›").size(20.0)).clicked() {
                            session.next();
                        }
                    });
                });
            });
    }

    fn show_index_panel(&self, ctx: &egui::Context, session: &mut Session) {
        egui::Area::new(egui::Id::new("slide-index"))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-14.0, 14.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(220.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Slides").strong());
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").clicked() {
                                    session.toggle_panel();
                                }
                            },
                        );
                    });
                    ui.separator();

                    let mut jump = None;
                    egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                        for (index, slide) in session.snapshot().slides.iter().enumerate() {
                            let current = index == session.navigation().current();
                            let title = if slide.title.is_empty() {
                                "Untitled"
                            } else {
                                &slide.title
                            };
                            let label = format!("{}. {}", index + 1, title);
                            if ui.selectable_label(current, label).clicked() {
                                jump = Some(index);
                            }
                        }
                    });
                    if let Some(index) = jump {
                        session.activate_panel_entry(index);
                    }
                });
            });
    }
}

impl Default for PresentView {
    fn default() -> Self {
        Self::new()
    }
}
