//! Tool selection state machine
//!
//! One tool is active at a time. Selecting the active tool again returns to
//! no tool (toggle semantics); selecting a different tool replaces the
//! previous one, which keeps the drawing tools and the laser mutually
//! exclusive without extra bookkeeping.

/// Interaction modes for the annotation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pen,
    Marker,
    Eraser,
    Laser,
}

impl Tool {
    /// Whether this tool paints onto the annotation surface.
    pub fn is_drawing(&self) -> bool {
        matches!(self, Tool::Pen | Tool::Marker | Tool::Eraser)
    }

    /// Display label for tool buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Marker => "Marker",
            Tool::Eraser => "Eraser",
            Tool::Laser => "Laser",
        }
    }
}

/// Current tool selection. `None` means pointer input is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolState {
    active: Option<Tool>,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Tool> {
        self.active
    }

    /// True when a pen/marker/eraser is active and the surface should
    /// capture pointer input.
    pub fn drawing_active(&self) -> bool {
        self.active.map(|t| t.is_drawing()).unwrap_or(false)
    }

    pub fn laser_active(&self) -> bool {
        self.active == Some(Tool::Laser)
    }

    /// Select `tool`, or deselect it if it is already active.
    ///
    /// Returns the resulting selection.
    pub fn select(&mut self, tool: Tool) -> Option<Tool> {
        self.active = if self.active == Some(tool) {
            None
        } else {
            Some(tool)
        };
        self.active
    }

    /// Drop any selection.
    pub fn deselect(&mut self) {
        self.active = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_select_toggles_off() {
        let mut tools = ToolState::new();
        assert_eq!(tools.select(Tool::Pen), Some(Tool::Pen));
        assert_eq!(tools.select(Tool::Pen), None);
    }

    #[test]
    fn test_laser_displaces_pen() {
        let mut tools = ToolState::new();
        tools.select(Tool::Pen);
        assert!(tools.drawing_active());

        assert_eq!(tools.select(Tool::Laser), Some(Tool::Laser));
        assert!(tools.laser_active());
        assert!(!tools.drawing_active());
    }

    #[test]
    fn test_pen_displaces_laser() {
        let mut tools = ToolState::new();
        tools.select(Tool::Laser);
        tools.select(Tool::Marker);
        assert_eq!(tools.active(), Some(Tool::Marker));
        assert!(!tools.laser_active());
    }

    #[test]
    fn test_families_never_coexist() {
        // Only one slot exists, so any sequence of selections leaves at
        // most one tool active.
        let mut tools = ToolState::new();
        for &tool in &[Tool::Pen, Tool::Laser, Tool::Eraser, Tool::Marker] {
            tools.select(tool);
            assert!(!(tools.drawing_active() && tools.laser_active()));
        }
    }

    #[test]
    fn test_deselect() {
        let mut tools = ToolState::new();
        tools.select(Tool::Eraser);
        tools.deselect();
        assert_eq!(tools.active(), None);
    }
}
