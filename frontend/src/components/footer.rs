//! Footer component

use chrono::Datelike;
use leptos::*;
use robotech::content::{FOOTER_COLUMNS, SOCIAL_LINKS};
use robotech::ScrollMode;

use super::FadeIn;
use crate::config::APP_NAME;
use crate::services::{scroll_to_top, use_motion};

/// Copyright line for `year`.
pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, APP_NAME)
}

#[component]
pub fn Footer() -> impl IntoView {
    let motion = use_motion();
    let (email, set_email) = create_signal(String::new());
    let year = chrono::Local::now().year();

    let on_subscribe = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("📬 Newsletter signup requested for {}", email.get_untracked());
        set_email.set(String::new());
    };

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <FadeIn class="footer-brand">
                        <div class="logo">
                            <span class="logo-mark">"🤖"</span>
                            {APP_NAME}
                        </div>
                        <p class="muted">
                            "Rent cutting-edge home robots on demand. Making advanced robotics accessible to every household."
                        </p>
                        <ul class="contact-list">
                            <li>"✉ hello@robotech.example"</li>
                            <li>"☎ +1 (555) 123-4567"</li>
                            <li>"⌖ San Francisco, CA"</li>
                        </ul>
                    </FadeIn>

                    {FOOTER_COLUMNS
                        .iter()
                        .enumerate()
                        .map(|(index, column)| {
                            view! {
                                <FadeIn class="footer-column" index={index + 1}>
                                    <h3>{column.title}</h3>
                                    <ul>
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                            .collect_view()}
                                    </ul>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>

                <FadeIn class="newsletter">
                    <div>
                        <h3>"Get robot updates & tips"</h3>
                        <p class="muted">"New models, maintenance tips, and exclusive offers delivered monthly."</p>
                    </div>
                    <form class="newsletter-form" on:submit=on_subscribe>
                        <input
                            type="email"
                            required=true
                            placeholder="Enter your email"
                            aria-label="Email address"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn-primary">"Subscribe"</button>
                    </form>
                </FadeIn>

                <div class="footer-bottom">
                    <p class="muted">{copyright(year)}</p>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a href=social.href class="social-link" aria-label=social.label>
                                        {social.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <button
                class="back-to-top"
                aria-label="Scroll to top"
                on:click=move |_| scroll_to_top(ScrollMode::for_motion(motion.reduced_untracked()))
            >
                "↑"
            </button>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2026), "© 2026 Robotech. All rights reserved.");
    }
}
