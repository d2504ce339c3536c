//! Light/dark theme.
//!
//! The stored choice wins; without one the OS colour scheme decides. Every
//! change is written back and mirrored as the `dark` class on `<html>`.

use leptos::*;
use robotech::Theme;

use crate::config::{DARK_CLASS, DARK_SCHEME_QUERY, THEME_STORAGE_KEY};
use crate::services::motion::media_query;
use crate::types::{AppError, AppResult};

/// Shared handle to the page theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

/// Create the theme context for the app. Call once, near the root.
pub fn provide_theme() -> ThemeContext {
    let initial = load_theme().unwrap_or_else(|e| {
        log::warn!("⚠️ Could not read saved theme: {}", e);
        Theme::default()
    });
    let theme = create_rw_signal(initial);

    create_effect(move |_| {
        let current = theme.get();
        if let Err(e) = apply_theme(current) {
            log::warn!("⚠️ Could not apply theme: {}", e);
        }
        if let Err(e) = store_theme(current) {
            log::warn!("⚠️ Could not save theme: {}", e);
        }
    });

    let ctx = ThemeContext { theme };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn local_storage() -> AppResult<web_sys::Storage> {
    gloo_utils::window()
        .local_storage()
        .map_err(AppError::storage)?
        .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
}

/// Saved theme, else the OS preference.
pub fn load_theme() -> AppResult<Theme> {
    let stored = local_storage()?
        .get_item(THEME_STORAGE_KEY)
        .map_err(AppError::storage)?;

    if let Some(theme) = stored.as_deref().and_then(Theme::from_storage) {
        return Ok(theme);
    }

    let prefers_dark = media_query(DARK_SCHEME_QUERY)?
        .map(|mql| mql.matches())
        .unwrap_or(false);
    Ok(if prefers_dark { Theme::Dark } else { Theme::Light })
}

fn store_theme(theme: Theme) -> AppResult<()> {
    local_storage()?
        .set_item(THEME_STORAGE_KEY, &theme.to_storage())
        .map_err(AppError::storage)
}

fn apply_theme(theme: Theme) -> AppResult<()> {
    gloo_utils::document_element()
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
        .map(|_| ())
        .map_err(AppError::dom)
}
