//! In-page scrolling.

use robotech::ScrollMode;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::types::{AppError, AppResult};

fn behavior(mode: ScrollMode) -> ScrollBehavior {
    match mode {
        ScrollMode::Smooth => ScrollBehavior::Smooth,
        ScrollMode::Instant => ScrollBehavior::Instant,
    }
}

/// Scroll the element with `id` into view.
pub fn scroll_to_id(id: &str, mode: ScrollMode) -> AppResult<()> {
    let element = gloo_utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| AppError::Dom(format!("no element with id '{}'", id)))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(behavior(mode));
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn scroll_to_top(mode: ScrollMode) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(behavior(mode));
    gloo_utils::window().scroll_to_with_scroll_to_options(&options);
}

/// Current vertical scroll offset in px.
pub fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or(0.0)
}
