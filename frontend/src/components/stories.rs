use gloo_timers::callback::Interval;
use leptos::*;
use robotech::content::{SLIDES, STATS};
use robotech::{drag_opacity, Carousel, Direction};
use wasm_bindgen::JsCast;

use super::{FadeIn, SectionHeading};
use crate::services::use_motion;

/// Horizontal pointer drag in progress on the story card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Drag {
    start_x: Option<f64>,
    offset_x: f64,
}

impl Drag {
    fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
        self.offset_x = 0.0;
    }

    fn track(&mut self, x: f64) {
        if let Some(start) = self.start_x {
            self.offset_x = x - start;
        }
    }

    /// Finish the gesture, returning the final offset if one was running.
    fn end(&mut self) -> Option<f64> {
        let offset = self.start_x.map(|_| self.offset_x);
        *self = Drag::default();
        offset
    }
}

fn enter_class(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "story-card enter-forward",
        Direction::Backward => "story-card enter-backward",
        Direction::Still => "story-card",
    }
}

/// Auto-advancing testimonial carousel with swipe, arrows and dots.
#[component]
pub fn CustomerStories() -> impl IntoView {
    let motion = use_motion();
    let carousel = match Carousel::new(SLIDES.len()) {
        Ok(carousel) => create_rw_signal(carousel),
        Err(e) => {
            log::error!("❌ Story carousel disabled: {}", e);
            return view! {}.into_view();
        }
    };
    let drag = create_rw_signal(Drag::default());

    let current = create_memo(move |_| carousel.with(Carousel::current_index));
    let auto_playing = create_memo(move |_| carousel.with(Carousel::is_auto_playing));
    let timer_key = create_memo(move |_| carousel.with(Carousel::timer_key));

    // One interval per (index, auto-play) state; any change rebuilds it
    create_effect(move |_| {
        let Some(key) = timer_key.get() else {
            log::debug!("Story auto-play paused");
            return;
        };
        let period = carousel.with_untracked(|c| c.config().auto_advance_ms);
        let interval = Interval::new(period, move || {
            carousel.update(|c| {
                c.on_tick(key);
            });
        });
        on_cleanup(move || drop(interval));
    });

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if let Some(target) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            _ = target.set_pointer_capture(ev.pointer_id());
        }
        drag.update(|d| d.begin(f64::from(ev.client_x())));
    };
    let on_pointer_move = move |ev: ev::PointerEvent| {
        if drag.with_untracked(|d| d.start_x.is_some()) {
            drag.update(|d| d.track(f64::from(ev.client_x())));
        }
    };
    let on_pointer_up = move |_: ev::PointerEvent| {
        if let Some(offset) = drag.try_update(Drag::end).flatten() {
            carousel.update(|c| {
                c.on_drag_end(offset);
            });
        }
    };
    let on_pointer_cancel = move |_: ev::PointerEvent| {
        drag.update(|d| {
            d.end();
        });
    };

    let card = move || {
        let index = current.get();
        let slide = &SLIDES[index];
        let class = enter_class(carousel.with_untracked(Carousel::direction));
        view! {
            <article
                class=class
                style:animation-duration=move || format!("{}ms", motion.prefs().duration_ms(400))
                style:transform=move || format!("translateX({}px)", drag.with(|d| d.offset_x))
                style:opacity=move || drag_opacity(drag.with(|d| d.offset_x)).to_string()
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            >
                <span class="quote-mark" aria-hidden="true">"“"</span>
                <div class="story-rating" aria-label=format!("{} out of 5 stars", slide.rating)>
                    {(0..slide.rating).map(|_| view! { <span class="star">"★"</span> }).collect_view()}
                </div>
                <span class="story-tag">"🤖 Using: " {slide.tag}</span>
                <p class="story-quote">"“" {slide.quote} "”"</p>
                <div class="story-author">
                    <span class="avatar avatar-large">{slide.avatar}</span>
                    <div>
                        <p class="author-name">{slide.name}</p>
                        <p class="muted">{slide.byline()}</p>
                    </div>
                </div>
            </article>
        }
    };

    view! {
        <section id="testimonials" class="section section-muted">
            <div class="container">
                <SectionHeading
                    lead="Loved by households"
                    highlight="nationwide"
                    subtitle="Real stories from real customers about how Robotech robots have transformed their daily lives."
                />

                <div
                    class="carousel"
                    aria-roledescription="carousel"
                    on:mouseenter=move |_| carousel.update(Carousel::pointer_enter)
                    on:mouseleave=move |_| carousel.update(Carousel::pointer_leave)
                >
                    <div class="carousel-stage">{card}</div>

                    <div class="carousel-arrows">
                        <button
                            class="carousel-arrow"
                            aria-label="Previous story"
                            on:click=move |_| carousel.update(|c| {
                                c.prev();
                            })
                        >
                            "‹"
                        </button>
                        <button
                            class="carousel-arrow"
                            aria-label="Next story"
                            on:click=move |_| carousel.update(|c| {
                                c.next();
                            })
                        >
                            "›"
                        </button>
                    </div>

                    <div class="carousel-dots">
                        {(0..SLIDES.len())
                            .map(|index| {
                                view! {
                                    <button
                                        class="dot"
                                        class:active=move || current.get() == index
                                        aria-label=format!("Go to story {}", index + 1)
                                        aria-current=move || (current.get() == index).to_string()
                                        on:click=move |_| carousel.update(|c| {
                                            c.go_to(index);
                                        })
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p class="autoplay-indicator muted">
                        {move || {
                            if auto_playing.get() {
                                "Auto-playing • Hover to pause"
                            } else {
                                "Paused • Move away to resume"
                            }
                        }}
                    </p>
                </div>

                <div class="stats-grid">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            view! {
                                <FadeIn class="stat" index=index>
                                    <p class="stat-value">{stat.value}</p>
                                    <p class="muted">{stat.label}</p>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_tracks_offset_from_start() {
        let mut drag = Drag::default();
        drag.track(40.0);
        assert_eq!(drag.offset_x, 0.0);

        drag.begin(300.0);
        drag.track(220.0);
        assert_eq!(drag.offset_x, -80.0);
        assert_eq!(drag.end(), Some(-80.0));
        assert_eq!(drag, Drag::default());
    }

    #[test]
    fn test_drag_end_without_start() {
        let mut drag = Drag::default();
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn test_enter_class_by_direction() {
        assert_eq!(enter_class(Direction::Forward), "story-card enter-forward");
        assert_eq!(enter_class(Direction::Backward), "story-card enter-backward");
        assert_eq!(enter_class(Direction::Still), "story-card");
    }
}
