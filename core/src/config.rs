//! Timings and thresholds shared by the widgets.
//!
//! These are compile-time values. The structs below bundle them per widget so
//! tests can build a widget with a different period without touching globals.

/// Carousel auto-advance period in milliseconds.
pub const AUTO_ADVANCE_MS: u32 = 8_000;

/// Horizontal drag distance (px) past which a release changes slide.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Vertical scroll offset (px) past which the navbar turns opaque.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Number of hero background videos.
pub const HERO_SLOT_COUNT: usize = 3;

/// Opacity of the active, loaded hero video.
pub const HERO_ACTIVE_OPACITY: f64 = 0.8;

/// Hero crossfade duration in milliseconds.
pub const HERO_CROSSFADE_MS: u32 = 300;

/// Plan index selected when no plan is flagged popular.
pub const DEFAULT_SELECTED_PLAN: usize = 1;

/// Carousel timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Auto-advance period.
    pub auto_advance_ms: u32,
    /// Drag distance that counts as a swipe.
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: AUTO_ADVANCE_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}

/// Hero video presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroConfig {
    /// Opacity of the visible slot.
    pub active_opacity: f64,
    /// Crossfade duration.
    pub crossfade_ms: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            active_opacity: HERO_ACTIVE_OPACITY,
            crossfade_ms: HERO_CROSSFADE_MS,
        }
    }
}
