use leptos::*;
use robotech::content::CATEGORIES;
use robotech::RobotCategory;

use super::{FadeIn, SectionHeading};
use crate::services::media;

/// Preview clip that plays while hovered and rewinds on leave.
#[component]
fn HoverVideo(src: &'static str, title: &'static str) -> impl IntoView {
    let node = create_node_ref::<html::Video>();

    let on_enter = move |_| {
        if let Some(video) = node.get_untracked() {
            media::play(&video, move |err| {
                log::debug!("Category preview '{}' did not play: {}", title, err);
            });
        }
    };
    let on_leave = move |_| {
        if let Some(video) = node.get_untracked() {
            media::pause(&video);
            media::rewind(&video);
        }
    };

    view! {
        <video
            node_ref=node
            class="category-video"
            src=src
            muted=true
            prop:muted=true
            playsinline=true
            preload="metadata"
            aria-label=format!("{} robots in action", title)
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:error=move |_| log::warn!("⚠️ Category preview failed to load: {}", src)
        ></video>
    }
}

fn category_card(index: usize, category: &'static RobotCategory) -> impl IntoView {
    view! {
        <FadeIn class="category-card" index=index>
            {category
                .video
                .map(|src| view! { <HoverVideo src=src title=category.title/> })}
            <div class="category-body">
                <h3>{category.title}</h3>
                <p>{category.description}</p>
                <p class="category-types">
                    <span class="muted">"Popular: "</span>
                    {category.robot_types.join(", ")}
                </p>
            </div>
        </FadeIn>
    }
}

/// Grid of robot categories.
#[component]
pub fn RobotCategories() -> impl IntoView {
    view! {
        <section id="robots" class="section">
            <div class="container">
                <SectionHeading
                    lead="Robots for every"
                    highlight="lifestyle"
                    subtitle="Browse our fleet of specialized robots, each designed to make your life easier and more enjoyable."
                />

                <div class="category-grid">
                    {CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| category_card(index, category))
                        .collect_view()}
                </div>

                <FadeIn class="section-cta" index=CATEGORIES.len()>
                    <p class="muted">"Not sure which robot is right for you?"</p>
                    <a href="#faq" class="link-button">"Take our robot quiz →"</a>
                </FadeIn>
            </div>
        </section>
    }
}
