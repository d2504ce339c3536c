use leptos::*;
use robotech::content::{HERO_AVATARS, HERO_VIDEOS};
use robotech::{HeroPlayer, MediaError, MediaEvent, PlaybackCommand, ScrollMode, SlotId};
use web_sys::HtmlMediaElement;

use crate::services::{media, scroll_to_id, use_motion};

type VideoRefs = [NodeRef<html::Video>; 3];

fn with_video(videos: &VideoRefs, slot: SlotId, f: impl FnOnce(&HtmlMediaElement)) {
    match videos.get(slot.index()).and_then(|node| node.get_untracked()) {
        Some(video) => f(&video),
        None => log::debug!("Hero {} not mounted", slot),
    }
}

/// Full-screen banner with three background videos played one after another.
///
/// Only the active video is visible, and only once it can play; the next one
/// crossfades in when it ends. Hovering a video pauses it.
#[component]
pub fn Hero() -> impl IntoView {
    let motion = use_motion();
    let player = create_rw_signal(HeroPlayer::default());
    let videos: VideoRefs = [create_node_ref(), create_node_ref(), create_node_ref()];

    let run = move |commands: Vec<PlaybackCommand>| {
        for command in commands {
            match command {
                PlaybackCommand::Pause(slot) => with_video(&videos, slot, media::pause),
                PlaybackCommand::Rewind(slot) => with_video(&videos, slot, media::rewind),
                PlaybackCommand::Play(slot) => with_video(&videos, slot, |video| {
                    media::play(video, move |err| {
                        player.with_untracked(|p| p.play_rejected(slot, &err));
                    })
                }),
            }
        }
    };

    // Kick off playback once all three elements exist
    create_effect(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !videos.iter().all(|node| node.get().is_some()) {
            return false;
        }
        log::info!("🎬 Hero videos mounted, starting rotation");
        run(player.with_untracked(HeroPlayer::start));
        true
    });

    let on_media = move |slot: SlotId, event: MediaEvent| {
        let commands = player.try_update(|p| p.handle(slot, event)).unwrap_or_default();
        run(commands);
    };

    let on_error = move |slot: SlotId| {
        let mut err = MediaError::Unknown(0);
        with_video(&videos, slot, |video| err = media::error_of(video));
        on_media(slot, MediaEvent::Error(err));
    };

    let backgrounds = HERO_VIDEOS
        .iter()
        .filter_map(|video| {
            let slot = SlotId::new(video.ordinal)?;
            let node = videos[slot.index()];
            Some(view! {
                <video
                    node_ref=node
                    class="hero-video"
                    muted=true
                    prop:muted=true
                    playsinline=true
                    preload="metadata"
                    poster=video.poster
                    title="Robot demonstration video"
                    aria-label="Background video showing robot demonstrations"
                    style:opacity=move || player.with(|p| p.opacity(slot)).to_string()
                    style:transition=move || player.with(|p| p.transition(motion.reduced()))
                    on:canplay=move |_| on_media(slot, MediaEvent::CanPlay)
                    on:loadeddata=move |_| on_media(slot, MediaEvent::LoadedData)
                    on:ended=move |_| on_media(slot, MediaEvent::Ended)
                    on:abort=move |_| on_media(slot, MediaEvent::Abort)
                    on:error=move |_| on_error(slot)
                    on:mouseenter=move |_| run(vec![player.with_untracked(|p| p.hover_enter(slot))])
                    on:mouseleave=move |_| {
                        run(player.with_untracked(|p| p.hover_leave(slot)).into_iter().collect())
                    }
                >
                    <source src=video.source type=video.mime/>
                    "Your browser does not support the video tag."
                </video>
            })
        })
        .collect_view();

    let jump = move |id: &'static str| {
        move |_: ev::MouseEvent| {
            let mode = ScrollMode::for_motion(motion.reduced_untracked());
            if let Err(e) = scroll_to_id(id, mode) {
                log::warn!("⚠️ {}", e);
            }
        }
    };

    view! {
        <section
            class="hero"
            role="banner"
            aria-label="Hero section introducing Robotech robot rental service"
        >
            <div class="hero-backgrounds">
                {backgrounds}
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <div class="hero-badge enter" style=move || motion.entrance(0)>
                    "✨ Join 50,000+ households"
                </div>

                <h1 class="hero-title enter" style=move || motion.entrance(1)>
                    "Your Personal Robot"
                    <br/>
                    <span class="gradient-text">"Assistant Awaits"</span>
                </h1>

                <p class="hero-subtitle enter" style=move || motion.entrance(2)>
                    "Rent cutting-edge home robots on demand. No commitment, no maintenance hassles. "
                    "From cleaning to companionship, discover the perfect robot for your lifestyle."
                </p>

                <div class="hero-actions enter" style=move || motion.entrance(3)>
                    <button
                        class="btn btn-primary"
                        aria-label="Browse available robots for rental"
                        on:click=jump("robots")
                    >
                        "Browse robots →"
                    </button>
                    <button
                        class="btn btn-light"
                        aria-label="Watch robot demonstrations in action"
                        on:click=jump("how-it-works")
                    >
                        "See them in action"
                    </button>
                </div>

                <div class="hero-proof enter" style=move || motion.entrance(4)>
                    <div class="proof-households">
                        <div class="avatar-stack">
                            {HERO_AVATARS
                                .iter()
                                .map(|initials| view! { <span class="avatar">{*initials}</span> })
                                .collect_view()}
                        </div>
                        <span>"50,000+ happy households"</span>
                    </div>
                    <div class="proof-rating">
                        {(0..5).map(|_| view! { <span class="star">"★"</span> }).collect_view()}
                        <span>"4.9/5 from real users"</span>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator" class:still=move || motion.reduced()>
                <span class="scroll-dot"></span>
            </div>
        </section>
    }
}
