//! Mobile navigation menu and in-page anchors.

/// Open/closed state of the collapsible nav list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Creates a closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Flips the menu; returns the new state (the `aria-expanded` value).
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu, as after following a nav link.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true if open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

/// Target id of an in-page anchor (`#about` → `about`).
///
/// Returns `None` for anything that is not a non-empty fragment link.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut menu = NavMenu::new();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#work"), Some("work"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog#top"), None);
    }
}
