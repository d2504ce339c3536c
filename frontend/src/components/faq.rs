use leptos::*;
use robotech::content::FAQS;
use robotech::{Accordion, FaqEntry};

use super::{FadeIn, SectionHeading};
use crate::config::FAQ_TRANSITION_MS;
use crate::services::use_motion;

fn faq_item(faq: RwSignal<Accordion>, index: usize, entry: &'static FaqEntry) -> impl IntoView {
    let motion = use_motion();
    let body = create_node_ref::<html::Div>();
    let is_open = move || faq.with(|f| f.is_open(index));

    // Open panels size to their content so the transition has a target
    let max_height = move || {
        if !is_open() {
            return "0px".to_string();
        }
        body.get()
            .map(|el| format!("{}px", el.scroll_height()))
            .unwrap_or_else(|| "none".to_string())
    };
    let answer_id = format!("faq-answer-{}", index);

    view! {
        <FadeIn index=index>
            <div class="faq-item" class:open=is_open>
                <button
                    class="faq-question"
                    aria-expanded=move || is_open().to_string()
                    aria-controls=answer_id.clone()
                    on:click=move |_| faq.update(|f| f.toggle(index))
                >
                    <div>
                        {entry.category.map(|category| view! { <span class="faq-category">{category}</span> })}
                        <h3>{entry.question}</h3>
                    </div>
                    <span class="faq-icon" aria-hidden="true">
                        {move || if is_open() { "−" } else { "+" }}
                    </span>
                </button>
                <div
                    node_ref=body
                    id=answer_id
                    class="faq-answer"
                    role="region"
                    style:max-height=max_height
                    style:opacity=move || if is_open() { "1" } else { "0" }
                    style:transition=move || {
                        motion.prefs().transition("max-height", FAQ_TRANSITION_MS, "ease")
                    }
                >
                    <p>{entry.answer}</p>
                </div>
            </div>
        </FadeIn>
    }
}

/// Frequently asked questions; at most one answer open at a time.
#[component]
pub fn Faq() -> impl IntoView {
    let faq = create_rw_signal(Accordion::new(FAQS.len()));

    view! {
        <section id="faq" class="section">
            <div class="container container-narrow">
                <SectionHeading
                    lead="Frequently Asked"
                    highlight="Questions"
                    subtitle="Everything you need to know about renting robots with Robotech."
                />

                <div class="faq-list">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| faq_item(faq, index, entry))
                        .collect_view()}
                </div>

                <FadeIn class="faq-cta" index=FAQS.len()>
                    <h3>"Still have questions?"</h3>
                    <p class="muted">
                        "Our robot experts are here to help you find the perfect assistant for your home. "
                        "Get personalized recommendations!"
                    </p>
                    <div class="cta-row">
                        <a href="mailto:hello@robotech.example" class="btn btn-primary">"Chat with an Expert"</a>
                        <a href="#robots" class="btn btn-outline">"Visit a Showroom"</a>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}
