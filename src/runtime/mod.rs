//! Presentation runtime for Mica
//!
//! The runtime consumes an immutable deck snapshot and owns all playback
//! state: the navigation state machine, tool selection, the annotation
//! surface, the laser pointer, and the slide index panel. It is pure state
//! plus buffer math — the playback view (`ui::present`) dispatches input
//! events into it and re-renders from the result, and the exported player
//! script mirrors the same contract.
//!
//! All transitions happen synchronously inside the caller's event handling;
//! there are no timers or background tasks here.

mod laser;
mod navigation;
mod panel;
mod surface;
mod tools;

pub use laser::{LaserPointer, LASER_RADIUS};
pub use navigation::Navigation;
pub use panel::IndexPanel;
pub use surface::{AnnotationSurface, Blend, Brush, Cap, Point};
pub use tools::{Tool, ToolState};

use crate::deck::{Snapshot, SnapshotSlide};
use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// One playback session over a snapshot.
///
/// Created fresh each time playback starts and discarded when it ends;
/// nothing here is persisted. Exactly one slide is active at a time — the
/// view derives the visible slide from `navigation().current()` each frame,
/// so slide switches are atomic from the viewer's perspective.
pub struct Session {
    snapshot: Snapshot,
    navigation: Navigation,
    tools: ToolState,
    surface: AnnotationSurface,
    laser: LaserPointer,
    panel: IndexPanel,
    stroke_active: bool,
    last_pointer: Option<Point>,
}

impl Session {
    /// Start a session sized to the current viewport.
    pub fn new(snapshot: Snapshot, viewport_width: u32, viewport_height: u32) -> Self {
        let len = snapshot.len();
        debug!(
            "Playback session started: {} slide(s), {}x{} overlay",
            len, viewport_width, viewport_height
        );
        Self {
            snapshot,
            navigation: Navigation::new(len),
            tools: ToolState::new(),
            surface: AnnotationSurface::new(viewport_width, viewport_height),
            laser: LaserPointer::new(),
            panel: IndexPanel::new(),
            stroke_active: false,
            last_pointer: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn surface(&self) -> &AnnotationSurface {
        &self.surface
    }

    pub fn laser(&self) -> &LaserPointer {
        &self.laser
    }

    pub fn panel(&self) -> &IndexPanel {
        &self.panel
    }

    /// The slide currently on stage.
    pub fn current_slide(&self) -> &SnapshotSlide {
        &self.snapshot.slides[self.navigation.current()]
    }

    /// Counter label, e.g. `3 / 12`.
    pub fn page_label(&self) -> String {
        format!(
            "{} / {}",
            self.navigation.current() + 1,
            self.navigation.len()
        )
    }

    /// Whether a stroke is currently being captured.
    pub fn is_drawing(&self) -> bool {
        self.stroke_active
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Advance to the next slide (wraps to the first after the last).
    pub fn next(&mut self) {
        self.navigation.advance(1);
        self.after_transition();
    }

    /// Step back to the previous slide (wraps to the last before the first).
    pub fn prev(&mut self) {
        self.navigation.advance(-1);
        self.after_transition();
    }

    /// Jump straight to `index`. Out-of-range requests are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if self.navigation.jump_to(index) {
            self.after_transition();
        }
    }

    /// Panel entry activation: jump and close the panel.
    pub fn activate_panel_entry(&mut self, index: usize) {
        self.jump_to(index);
        self.panel.close();
    }

    /// Annotations are scoped to the current slide view: every completed
    /// transition wipes the overlay and cancels any in-progress stroke.
    fn after_transition(&mut self) {
        self.surface.clear();
        self.stroke_active = false;
        self.last_pointer = None;
    }

    pub fn toggle_panel(&mut self) {
        self.panel.toggle();
    }

    /// Escape closes the panel when it is open.
    ///
    /// Returns `true` when the key was consumed; the caller decides what an
    /// unconsumed escape means (the desktop app leaves playback).
    pub fn handle_escape(&mut self) -> bool {
        if self.panel.is_open() {
            self.panel.close();
            true
        } else {
            false
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tools & annotation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select or toggle a tool. Any in-progress stroke ends; the laser dot
    /// disappears when the laser is no longer the active tool.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tools.select(tool);
        self.stroke_active = false;
        self.last_pointer = None;
        if !self.tools.laser_active() {
            self.laser.hide();
        }
    }

    /// Explicit clear action (the trash button).
    pub fn clear_annotations(&mut self) {
        self.surface.clear();
    }

    /// Match the overlay to a new viewport size. The resize wipes the
    /// buffer, so any in-progress stroke is invalidated with it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.stroke_active = false;
        self.last_pointer = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pointer protocol
    // ─────────────────────────────────────────────────────────────────────────
    //
    // Touch input is fed through the same three entry points; only the
    // coordinate source differs.

    /// Pointer pressed at surface coordinates `pos`.
    pub fn pointer_down(&mut self, pos: Point) {
        if self.tools.drawing_active() {
            self.stroke_active = true;
            self.last_pointer = Some(pos);
        } else if self.tools.laser_active() {
            self.laser.track(pos);
        }
    }

    /// Pointer moved to surface coordinates `pos`.
    ///
    /// While a stroke is in progress each move composites one segment
    /// immediately — there is no deferred batching.
    pub fn pointer_moved(&mut self, pos: Point) {
        if self.tools.laser_active() {
            self.laser.track(pos);
            return;
        }
        if !self.stroke_active {
            return;
        }
        if let (Some(last), Some(tool)) = (self.last_pointer, self.tools.active()) {
            if let Some(brush) = Brush::for_tool(tool, self.snapshot.theme.marker_blend) {
                self.surface.stroke_segment(last, pos, &brush);
            }
        }
        self.last_pointer = Some(pos);
    }

    /// Pointer released: the path ends until the next press.
    pub fn pointer_up(&mut self) {
        self.stroke_active = false;
        self.last_pointer = None;
    }

    /// Pointer left the surface: treated as a release, and the laser dot
    /// has nothing to follow anymore.
    pub fn pointer_left(&mut self) {
        self.pointer_up();
        self.laser.hide();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SnapshotSlide;
    use crate::theme::DeckTheme;

    fn snapshot(titles: &[&str]) -> Snapshot {
        Snapshot {
            slides: titles
                .iter()
                .map(|t| SnapshotSlide {
                    title: t.to_string(),
                    content: format!("<p>{}</p>", t),
                })
                .collect(),
            theme: DeckTheme::daylight(),
        }
    }

    fn session(titles: &[&str]) -> Session {
        Session::new(snapshot(titles), 128, 128)
    }

    #[test]
    fn test_navigation_scenario() {
        let mut s = session(&["A", "B", "C"]);
        assert_eq!(s.current_slide().title, "A");

        s.prev();
        assert_eq!(s.navigation().current(), 2);
        assert_eq!(s.current_slide().title, "C");

        s.jump_to(1);
        assert_eq!(s.current_slide().title, "B");
        assert_eq!(s.page_label(), "2 / 3");
    }

    #[test]
    fn test_jump_triggers_exactly_one_clear() {
        let mut s = session(&["A", "B", "C"]);
        let before = s.surface().clear_generation();
        s.jump_to(2);
        assert_eq!(s.surface().clear_generation(), before + 1);
    }

    #[test]
    fn test_ignored_jump_does_not_clear() {
        let mut s = session(&["A", "B"]);
        let before = s.surface().clear_generation();
        s.jump_to(9);
        assert_eq!(s.surface().clear_generation(), before);
        assert_eq!(s.navigation().current(), 0);
    }

    #[test]
    fn test_annotations_cleared_on_navigation() {
        let mut s = session(&["A", "B"]);
        s.select_tool(Tool::Pen);
        s.pointer_down(Point::new(10.0, 10.0));
        s.pointer_moved(Point::new(50.0, 50.0));
        s.pointer_up();
        assert!(!s.surface().is_blank());

        s.next();
        assert!(s.surface().is_blank());
    }

    #[test]
    fn test_stroke_capture_protocol() {
        let mut s = session(&["A"]);
        s.select_tool(Tool::Pen);

        s.pointer_down(Point::new(10.0, 10.0));
        assert!(s.is_drawing());
        s.pointer_moved(Point::new(50.0, 50.0));
        assert!(s.surface().pixel(30, 30)[3] > 0);

        // After release, further moves do not extend the path.
        s.pointer_up();
        s.pointer_moved(Point::new(100.0, 30.0));
        assert_eq!(s.surface().pixel(80, 38)[3], 0);
    }

    #[test]
    fn test_no_tool_means_inert_pointer() {
        let mut s = session(&["A"]);
        s.pointer_down(Point::new(10.0, 10.0));
        s.pointer_moved(Point::new(50.0, 50.0));
        assert!(!s.is_drawing());
        assert!(s.surface().is_blank());
    }

    #[test]
    fn test_laser_tracks_without_painting() {
        let mut s = session(&["A"]);
        s.select_tool(Tool::Laser);
        s.pointer_down(Point::new(20.0, 20.0));
        s.pointer_moved(Point::new(40.0, 40.0));

        assert_eq!(s.laser().position(), Some(Point::new(40.0, 40.0)));
        assert!(s.surface().is_blank());

        s.pointer_left();
        assert!(s.laser().position().is_none());
    }

    #[test]
    fn test_selecting_laser_ends_drawing_mode() {
        let mut s = session(&["A"]);
        s.select_tool(Tool::Pen);
        s.pointer_down(Point::new(10.0, 10.0));
        s.select_tool(Tool::Laser);

        assert_eq!(s.tools().active(), Some(Tool::Laser));
        assert!(!s.is_drawing());

        // Moves now feed the laser, not the surface.
        s.pointer_moved(Point::new(30.0, 30.0));
        assert!(s.surface().is_blank());
    }

    #[test]
    fn test_tool_toggle_round_trip() {
        let mut s = session(&["A"]);
        s.select_tool(Tool::Marker);
        s.select_tool(Tool::Marker);
        assert_eq!(s.tools().active(), None);
    }

    #[test]
    fn test_resize_invalidates_stroke_in_progress() {
        let mut s = session(&["A"]);
        s.select_tool(Tool::Pen);
        s.pointer_down(Point::new(10.0, 10.0));
        s.pointer_moved(Point::new(20.0, 20.0));

        s.resize(256, 256);
        assert!(s.surface().is_blank());
        assert!(!s.is_drawing());

        // The next move without a fresh press paints nothing.
        s.pointer_moved(Point::new(60.0, 60.0));
        assert!(s.surface().is_blank());
    }

    #[test]
    fn test_panel_activation_jumps_and_closes() {
        let mut s = session(&["A", "B", "C"]);
        s.toggle_panel();
        assert!(s.panel().is_open());

        s.activate_panel_entry(2);
        assert_eq!(s.navigation().current(), 2);
        assert!(!s.panel().is_open());
    }

    #[test]
    fn test_escape_closes_panel_first() {
        let mut s = session(&["A"]);
        s.toggle_panel();
        assert!(s.handle_escape());
        assert!(!s.panel().is_open());
        // Nothing left to consume.
        assert!(!s.handle_escape());
    }

    #[test]
    fn test_panel_state_independent_of_navigation() {
        let mut s = session(&["A", "B"]);
        s.toggle_panel();
        s.next();
        assert!(s.panel().is_open());
    }

    #[test]
    fn test_clear_annotations_button() {
        let mut s = session(&["A"]);
        s.select_tool(Tool::Marker);
        s.pointer_down(Point::new(30.0, 30.0));
        s.pointer_moved(Point::new(90.0, 30.0));
        assert!(!s.surface().is_blank());

        s.clear_annotations();
        assert!(s.surface().is_blank());
    }
}
