//! Slide index panel state
//!
//! A collapsible list with one entry per slide in deck order. Its
//! open/closed state is independent of navigation and tool state; the
//! only coupling is that activating an entry closes the panel (the jump
//! itself is dispatched by the session).

/// Open/closed state of the slide index panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexPanel {
    open: bool,
}

impl IndexPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut panel = IndexPanel::new();
        assert!(!panel.is_open());
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());

        panel.toggle();
        panel.close();
        assert!(!panel.is_open());
    }
}
