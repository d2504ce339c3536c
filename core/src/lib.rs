//! # Robotech - landing page state and content
//!
//! Framework-free core of the Robotech landing page. Every stateful widget of
//! the page is a plain struct with explicit transitions; the Leptos frontend
//! owns one instance per widget and feeds it DOM events and timer ticks.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────────────┐
//! │  DOM event  │────▶│  state machine   │────▶│  signal update /    │
//! │  or timer   │     │  (this crate)    │     │  playback commands  │
//! └─────────────┘     └──────────────────┘     └─────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types (media, carousel, content)
//! - [`config`] - Timings and thresholds
//! - [`models`] - Static content types
//! - [`content`] - The shipped page content and its validation
//! - [`carousel`] - Customer story carousel
//! - [`hero`] - Sequential hero video player
//! - [`accordion`] - FAQ accordion
//! - [`plans`] - Billing period and plan selection
//! - [`nav`] - Navigation bar and theme
//! - [`motion`] - Reduced-motion gating and one-shot reveal

// Core modules
pub mod error;
pub mod config;
pub mod models;
pub mod content;

// Widgets
pub mod carousel;
pub mod hero;
pub mod accordion;
pub mod plans;
pub mod nav;

// Presentation helpers
pub mod motion;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CarouselError, ContentError, MediaError};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{CarouselConfig, HeroConfig};

// =============================================================================
// Re-exports - Models and content
// =============================================================================

pub use models::{
    AddOn,
    FaqEntry,
    FooterColumn,
    HeroVideoSlot,
    NavLink,
    PlanTier,
    RobotCategory,
    Slide,
    SocialLink,
    Stat,
    Step,
};

pub use content::{site_content, validate, SiteContent};

// =============================================================================
// Re-exports - Widgets
// =============================================================================

pub use carousel::{drag_opacity, Carousel, Direction, TimerKey};
pub use hero::{HeroPlayer, MediaEvent, PlaybackCommand, SlotId};
pub use accordion::Accordion;
pub use plans::{BillingPeriod, PlanSelector, PriceLabel};
pub use nav::{NavBar, ScrollMode, Theme};
pub use motion::{MotionPrefs, Reveal};
