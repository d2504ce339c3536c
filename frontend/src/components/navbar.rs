use leptos::*;
use robotech::content::NAV_LINKS;
use robotech::{NavBar, NavLink, ScrollMode};

use crate::config::{APP_NAME, MENU_TRANSITION_MS};
use crate::services::{scroll_to_id, scroll_to_top, scroll_y, use_motion, use_theme};

static CTA_LINK: NavLink = NavLink {
    label: "Get Started",
    href: "#rental-plans",
};

/// Fixed top bar: logo, section links, theme toggle and the mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let motion = use_motion();
    let nav = create_rw_signal(NavBar::new());

    // Page may load already scrolled (reload, back navigation)
    nav.update(|n| {
        n.on_scroll(scroll_y());
    });

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let mut next = nav.get_untracked();
        if next.on_scroll(scroll_y()) {
            nav.set(next);
        }
    });

    let key_handle = window_event_listener(ev::keydown, move |ev| {
        if nav.with_untracked(NavBar::is_menu_open) {
            nav.update(|n| {
                if n.on_key(&ev.key()) {
                    log::debug!("Menu closed with Escape");
                }
            });
        }
    });

    on_cleanup(move || {
        scroll_handle.remove();
        key_handle.remove();
    });

    let on_link = move |ev: ev::MouseEvent, link: &'static NavLink| {
        ev.prevent_default();
        let target = nav.try_update(|n| n.on_link_click(link)).flatten();
        if let Some(id) = target {
            let mode = ScrollMode::for_motion(motion.reduced_untracked());
            if let Err(e) = scroll_to_id(id, mode) {
                log::warn!("⚠️ Could not scroll to '{}': {}", id, e);
            }
        }
    };

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a href=link.href class=class on:click=move |ev| on_link(ev, link)>
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    let menu_open = move || nav.with(NavBar::is_menu_open);
    let theme_icon = move || if theme.theme().get().is_dark() { "☀" } else { "☾" };
    let theme_label = move || {
        if theme.theme().get().is_dark() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };

    view! {
        <nav class="navbar" class:scrolled=move || nav.with(NavBar::is_scrolled)>
            <div class="navbar-inner">
                <a href="#" class="logo" on:click=move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    scroll_to_top(ScrollMode::for_motion(motion.reduced_untracked()));
                }>
                    <span class="logo-mark">"🤖"</span>
                    {APP_NAME}
                </a>

                <div class="nav-links">{links("nav-link")}</div>

                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        aria-label=theme_label
                        on:click=move |_| theme.toggle()
                    >
                        {theme_icon}
                    </button>
                    <a href=CTA_LINK.href class="btn btn-primary nav-cta" on:click=move |ev| on_link(ev, &CTA_LINK)>
                        {CTA_LINK.label}
                    </a>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| nav.update(NavBar::toggle_menu)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <div
                class="mobile-menu"
                class:open=menu_open
                aria-hidden=move || (!menu_open()).to_string()
                style:transition=move || {
                    motion.prefs().transition("max-height", MENU_TRANSITION_MS, "ease")
                }
            >
                {links("mobile-link")}
            </div>
        </nav>
    }
}
