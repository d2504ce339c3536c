use leptos::*;

use super::FadeIn;

/// Centered section title with a highlighted tail and a lead paragraph.
#[component]
pub fn SectionHeading(
    lead: &'static str,
    highlight: &'static str,
    #[prop(optional)] trailing: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <FadeIn class="section-heading">
            <h2>
                {lead}
                " "
                <span class="accent">{highlight}</span>
                {trailing}
            </h2>
            <p class="section-subtitle">{subtitle}</p>
        </FadeIn>
    }
}
