use crate::layout::SCROLL_THRESHOLD;

/// Scroll-reactive state of the navigation bar.
///
/// `is_scrolled` mirrors `offset > 50px` exactly on every update, in both
/// directions, with no hysteresis; it drives the transparent-to-opaque bar
/// styling. `is_menu_open` is the collapsible menu flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavBarState {
    pub is_scrolled: bool,
    pub is_menu_open: bool,
}

impl NavBarState {
    /// Re-evaluate the scroll threshold against a new vertical offset.
    pub fn track_scroll(&mut self, offset: f32) {
        self.is_scrolled = offset > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    /// Selecting any menu item closes the menu.
    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_matches_offset_exactly() {
        let mut nav = NavBarState::default();

        // Cross the threshold upward, downward, then upward again; the state
        // must equal `offset > 50` at every sample.
        for offset in [0.0, 30.0, 50.0, 51.0, 240.0, 50.5, 49.0, 0.0, 800.0] {
            nav.track_scroll(offset);
            assert_eq!(nav.is_scrolled, offset > 50.0, "offset {offset}");
        }
    }

    #[test]
    fn test_exact_threshold_is_not_scrolled() {
        let mut nav = NavBarState::default();
        nav.track_scroll(50.0);
        assert!(!nav.is_scrolled);
    }

    #[test]
    fn test_menu_toggle_flips() {
        let mut nav = NavBarState::default();
        nav.toggle_menu();
        assert!(nav.is_menu_open);
        nav.toggle_menu();
        assert!(!nav.is_menu_open);
    }

    #[test]
    fn test_close_menu_is_idempotent() {
        let mut nav = NavBarState::default();
        nav.toggle_menu();
        nav.close_menu();
        nav.close_menu();
        assert!(!nav.is_menu_open);
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut nav = NavBarState::default();
        nav.toggle_menu();
        nav.track_scroll(400.0);
        assert!(nav.is_menu_open);
    }
}
