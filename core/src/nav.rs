//! Navigation bar state and the page theme.

use serde::{Deserialize, Serialize};

use crate::config::NAV_SCROLL_THRESHOLD_PX;
use crate::models::NavLink;

// =============================================================================
// Theme
// =============================================================================

/// Colour scheme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Value written to storage (`"light"` / `"dark"`, JSON encoded).
    pub fn to_storage(self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| "\"light\"".to_string())
    }

    /// Parse a stored value; anything unrecognised yields `None`.
    pub fn from_storage(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

// =============================================================================
// Scrolling
// =============================================================================

/// How an in-page anchor is scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl ScrollMode {
    pub fn for_motion(reduced_motion: bool) -> Self {
        if reduced_motion {
            ScrollMode::Instant
        } else {
            ScrollMode::Smooth
        }
    }
}

// =============================================================================
// Navigation bar
// =============================================================================

/// Scroll styling and mobile menu state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBar {
    scrolled: bool,
    menu_open: bool,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Record the vertical scroll offset. Returns whether `scrolled` changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > NAV_SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Keyboard handler; Escape closes an open menu. Returns whether it acted.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.menu_open {
            self.menu_open = false;
            return true;
        }
        false
    }

    /// A nav link was clicked: close the menu and return the element id to
    /// scroll to, if the link targets one.
    pub fn on_link_click(&mut self, link: &NavLink) -> Option<&'static str> {
        self.menu_open = false;
        link.target_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut nav = NavBar::new();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(51.0));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let mut nav = NavBar::new();
        assert!(!nav.on_key("Escape"));

        nav.toggle_menu();
        assert!(!nav.on_key("Enter"));
        assert!(nav.is_menu_open());
        assert!(nav.on_key("Escape"));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_link_click_closes_menu() {
        let mut nav = NavBar::new();
        nav.toggle_menu();
        let link = NavLink { label: "Plans", href: "#rental-plans" };
        assert_eq!(nav.on_link_click(&link), Some("rental-plans"));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_theme_storage_roundtrip() {
        assert_eq!(Theme::Dark.to_storage(), "\"dark\"");
        assert_eq!(Theme::from_storage("\"light\""), Some(Theme::Light));
        assert_eq!(Theme::from_storage("purple"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_scroll_mode_follows_motion() {
        assert_eq!(ScrollMode::for_motion(false), ScrollMode::Smooth);
        assert_eq!(ScrollMode::for_motion(true), ScrollMode::Instant);
    }
}
