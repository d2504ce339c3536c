//! Robotech - Frontend Rust/Leptos Application
//!
//! A WebAssembly landing page for the Robotech robot rental service. All
//! widget state lives in the `robotech` core crate; this crate wires it to
//! the DOM, timers and browser preferences.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (meta, theme + motion contexts, router)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (scroll state, menu, theme toggle)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Home                                                       │
//! │  ├── Hero (three rotating videos)                           │
//! │  ├── HowItWorks                                             │
//! │  ├── RobotCategories                                        │
//! │  ├── RentalPlans (billing toggle, selection)                │
//! │  ├── CustomerStories (carousel, stats)                      │
//! │  └── Faq (accordion)                                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Page metadata, storage keys, timings
//! - [`types`] - Error types
//! - [`components`] - UI components
//! - [`services`] - Browser services (theme, motion, viewport, scroll, media)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{describe_js, AppError, AppResult};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = provide_theme();
    let motion = provide_motion();

    log::info!(
        "🎨 Theme: {:?}, reduced motion: {}",
        theme.theme().get_untracked(),
        motion.reduced_untracked()
    );

    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>

        <Router>
            <Routes>
                <Route path="/" view=Home/>
            </Routes>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <Navbar/>

        <main id="main-content">
            <Hero/>
            <HowItWorks/>
            <RobotCategories/>
            <RentalPlans/>
            <CustomerStories/>
            <Faq/>
        </main>

        <Footer/>
    }
}
