//! Full-page loading overlay state.
//!
//! The overlay is a singleton: showing it twice still renders one overlay,
//! and one hide always clears it.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderState {
    visible: bool,
}

impl LoaderState {
    /// Returns `true` if the overlay was hidden before.
    pub fn show(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Returns `true` if the overlay was showing before.
    pub fn hide(&mut self) -> bool {
        let changed = self.visible;
        self.visible = false;
        changed
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }
}
