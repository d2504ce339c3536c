use leptos::*;
use robotech::content::STEPS;

use super::{FadeIn, SectionHeading};

/// The four rental steps, joined by a connector line on wide screens.
#[component]
pub fn HowItWorks() -> impl IntoView {
    let last = STEPS.len().saturating_sub(1);

    view! {
        <section id="how-it-works" class="section section-muted">
            <div class="container">
                <SectionHeading
                    lead="How"
                    highlight="Robotech"
                    trailing=" works"
                    subtitle="Get your personal robot assistant in four simple steps. It's easier than you think."
                />

                <div class="steps-grid">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <FadeIn class="step" index=index>
                                    <span class="step-number">{step.number}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                    <Show when=move || index < last>
                                        <span class="step-connector" aria-hidden="true"></span>
                                    </Show>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>

                <FadeIn class="section-cta" index=STEPS.len()>
                    <a href="#rental-plans" class="btn btn-primary btn-large">
                        "Start Your Free Trial"
                    </a>
                    <p class="muted">"7-day trial • No credit card required • Cancel anytime"</p>
                </FadeIn>
            </div>
        </section>
    }
}
