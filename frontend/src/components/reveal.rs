use leptos::*;
use robotech::Reveal;

use crate::services::{observe_visibility, use_motion};

/// Wrapper that fades its children in the first time it scrolls into view.
///
/// Without IntersectionObserver the content is shown straight away.
#[component]
pub fn FadeIn(
    #[prop(optional, into)] class: String,
    /// Position in a staggered group.
    #[prop(optional)]
    index: usize,
    children: Children,
) -> impl IntoView {
    let motion = use_motion();
    let latch = create_rw_signal(Reveal::default());
    let node = create_node_ref::<html::Div>();

    let observed = observe_visibility(node, move |intersecting| {
        latch.update(|reveal| {
            reveal.observe(intersecting);
        });
    });
    if let Err(e) = observed {
        log::warn!("⚠️ Scroll reveal disabled: {}", e);
        latch.update(|reveal| {
            reveal.observe(true);
        });
    }

    view! {
        <div
            node_ref=node
            class=format!("fade-in {}", class)
            class:is-visible=move || latch.with(|reveal| reveal.is_shown())
            style=move || motion.entrance(index)
        >
            {children()}
        </div>
    }
}
