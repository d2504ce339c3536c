//! `<video>` playback control.

use leptos::spawn_local;
use robotech::MediaError;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use crate::types::describe_js;

pub fn pause(media: &HtmlMediaElement) {
    if let Err(e) = media.pause() {
        log::warn!("⚠️ pause() failed: {}", describe_js(&e));
    }
}

pub fn rewind(media: &HtmlMediaElement) {
    media.set_current_time(0.0);
}

/// Start playback. `on_rejected` runs if the browser refuses, e.g. under an
/// autoplay policy or when a pause interrupts the pending play.
pub fn play(media: &HtmlMediaElement, on_rejected: impl FnOnce(MediaError) + 'static) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                on_rejected(MediaError::PlayRejected(describe_js(&e)));
            }
        }),
        Err(e) => on_rejected(MediaError::PlayRejected(describe_js(&e))),
    }
}

/// The element's current error, mapped.
pub fn error_of(media: &HtmlMediaElement) -> MediaError {
    media
        .error()
        .map(|err| MediaError::from_code(err.code()))
        .unwrap_or(MediaError::Unknown(0))
}
