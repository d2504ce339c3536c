//! Browser services.
//!
//! Thin wrappers over web APIs, shared by the components:
//!
//! # Services
//!
//! - [`theme`] - Theme context, persisted in localStorage
//! - [`motion`] - `prefers-reduced-motion` context
//! - [`viewport`] - IntersectionObserver for scroll reveals
//! - [`scroll`] - Anchor and back-to-top scrolling
//! - [`media`] - `<video>` playback control

pub mod theme;
pub mod motion;
pub mod viewport;
pub mod scroll;
pub mod media;

pub use theme::*;
pub use motion::*;
pub use viewport::*;
pub use scroll::*;
