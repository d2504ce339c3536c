//! Scroll-into-view detection.

use leptos::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::REVEAL_ROOT_MARGIN;
use crate::types::{AppError, AppResult};

/// Report intersection changes of `node` once it mounts.
///
/// The observer is disconnected when the calling component is disposed.
/// Errors when the browser has no IntersectionObserver.
pub fn observe_visibility(
    node: NodeRef<html::Div>,
    on_change: impl Fn(bool) + 'static,
) -> AppResult<()> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            on_change(entry.is_intersecting());
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(AppError::dom)?;

    let target = observer.clone();
    node.on_load(move |el| target.observe(&el));

    on_cleanup(move || {
        observer.disconnect();
        drop(callback);
    });
    Ok(())
}
