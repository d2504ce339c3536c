//! UI components for the Robotech landing page.
//!
//! # Layout Components
//! - [`Navbar`] - Fixed top bar with theme toggle and mobile menu
//! - [`Footer`] - Link columns, newsletter, back-to-top
//!
//! # Sections
//! - [`Hero`] - Rotating background videos
//! - [`HowItWorks`] - Rental steps
//! - [`RobotCategories`] - Category grid with hover previews
//! - [`RentalPlans`] - Plan cards and billing toggle
//! - [`CustomerStories`] - Testimonial carousel and stats
//! - [`Faq`] - Accordion
//!
//! # Building Blocks
//! - [`FadeIn`] - Reveal-on-scroll wrapper
//! - [`SectionHeading`] - Section title and lead

mod reveal;
mod heading;
mod navbar;
mod hero;
mod steps;
mod categories;
mod plans;
mod stories;
mod faq;
mod footer;

pub use reveal::*;
pub use heading::*;
pub use navbar::*;
pub use hero::*;
pub use steps::*;
pub use categories::*;
pub use plans::*;
pub use stories::*;
pub use faq::*;
pub use footer::*;
