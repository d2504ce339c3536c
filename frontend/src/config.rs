//! Application configuration.
//!
//! Page metadata, storage keys and animation timings for the Robotech
//! frontend. Widget thresholds live in `robotech::config`.

/// Product name shown in the navbar and footer.
pub const APP_NAME: &str = "Robotech";

/// Document title.
pub const PAGE_TITLE: &str = "Robotech - Rent a robot for every job";

/// `<meta name="description">` content.
pub const PAGE_DESCRIPTION: &str =
    "Flexible robot rental for homes and businesses. Pick a plan, get a robot, cancel anytime.";

/// localStorage key holding the chosen theme.
pub const THEME_STORAGE_KEY: &str = "robotech-theme";

/// Media query for the OS reduced-motion setting.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Media query for the OS dark colour scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class toggled on `<html>` for the dark theme.
pub const DARK_CLASS: &str = "dark";

/// Sections reveal once they are this far inside the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

/// Entrance animation length (ms).
pub const ENTRANCE_MS: u32 = 600;

/// Delay between staggered siblings (ms).
pub const STAGGER_MS: u32 = 100;

/// Mobile menu open/close transition (ms).
pub const MENU_TRANSITION_MS: u32 = 300;

/// FAQ answer expand/collapse transition (ms).
pub const FAQ_TRANSITION_MS: u32 = 300;

/// Console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
