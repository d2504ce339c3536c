//! Reduced-motion preference.
//!
//! Read once from `prefers-reduced-motion` and kept in sync through the
//! media query's `change` event.

use leptos::*;
use robotech::MotionPrefs;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::MediaQueryList;

use crate::config::{ENTRANCE_MS, REDUCED_MOTION_QUERY, STAGGER_MS};
use crate::types::{AppError, AppResult};

/// Shared handle to the reduced-motion flag.
#[derive(Clone, Copy)]
pub struct MotionContext {
    reduced: ReadSignal<bool>,
}

impl MotionContext {
    /// Tracked read, for views and effects.
    pub fn reduced(&self) -> bool {
        self.reduced.get()
    }

    /// Untracked read, for event handlers.
    pub fn reduced_untracked(&self) -> bool {
        self.reduced.get_untracked()
    }

    pub fn prefs(&self) -> MotionPrefs {
        MotionPrefs::new(self.reduced())
    }

    /// Inline style for the `index`-th item of a staggered entrance.
    pub fn entrance(&self, index: usize) -> String {
        let prefs = self.prefs();
        format!(
            "animation-duration: {}ms; animation-delay: {}ms;",
            prefs.duration_ms(ENTRANCE_MS),
            prefs.stagger_ms(index, 0, STAGGER_MS)
        )
    }
}

/// `window.matchMedia(query)`; `None` when the browser has no answer.
pub fn media_query(query: &str) -> AppResult<Option<MediaQueryList>> {
    gloo_utils::window().match_media(query).map_err(AppError::dom)
}

/// Create the motion context for the app. Call once, near the root.
pub fn provide_motion() -> MotionContext {
    let (reduced, set_reduced) = create_signal(false);

    match media_query(REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => {
            set_reduced.set(mql.matches());

            let watched = mql.clone();
            let on_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let matches = watched.matches();
                log::debug!("Reduced motion changed: {}", matches);
                set_reduced.set(matches);
            }) as Box<dyn FnMut(_)>);

            if let Err(e) =
                mql.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            {
                log::warn!("⚠️ Could not watch reduced-motion setting: {:?}", e);
            }
            // Lives as long as the page.
            on_change.forget();
        }
        Ok(None) => log::debug!("matchMedia returned nothing for reduced motion"),
        Err(e) => log::warn!("⚠️ {}", e),
    }

    let ctx = MotionContext { reduced };
    provide_context(ctx);
    ctx
}

pub fn use_motion() -> MotionContext {
    expect_context::<MotionContext>()
}
