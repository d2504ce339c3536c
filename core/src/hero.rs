//! Sequential hero video player.
//!
//! Three stacked background videos play one after another. The player keeps
//! only the rotation state and the per-slot `loaded` flag; it never touches a
//! media element. Every transition returns the [`PlaybackCommand`]s the owner
//! must apply, in order, so that at most one video plays at a time.
//!
//! Media callbacks arrive in any order relative to user input and to each
//! other, so every handler is idempotent: an `error` after a `canplay` still
//! leaves the slot unusable, and an `ended` from a slot that is no longer
//! active is ignored.

use std::fmt;

use crate::config::{HeroConfig, HERO_SLOT_COUNT};
use crate::error::MediaError;

// =============================================================================
// Slots
// =============================================================================

/// A hero slot, numbered 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u8);

impl SlotId {
    pub const FIRST: SlotId = SlotId(1);

    /// `None` unless `ordinal` is in 1..=3.
    pub fn new(ordinal: u8) -> Option<Self> {
        (1..=HERO_SLOT_COUNT as u8)
            .contains(&ordinal)
            .then_some(SlotId(ordinal))
    }

    pub fn ordinal(self) -> u8 {
        self.0
    }

    /// Zero-based position, for indexing element arrays.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// The slot after this one; 3 wraps to 1.
    pub fn next(self) -> Self {
        SlotId(self.0 % HERO_SLOT_COUNT as u8 + 1)
    }

    /// All slots in rotation order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (1..=HERO_SLOT_COUNT as u8).map(SlotId)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "video {}", self.0)
    }
}

// =============================================================================
// Events and commands
// =============================================================================

/// Media element callbacks the player reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// `canplay`: enough data to start.
    CanPlay,
    /// `loadeddata`: first frame available.
    LoadedData,
    /// `ended`: natural end of playback.
    Ended,
    /// `error`, with the element's error code mapped.
    Error(MediaError),
    /// `abort`: loading was interrupted.
    Abort,
}

/// An instruction for one media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Pause(SlotId),
    /// Seek to position 0.
    Rewind(SlotId),
    Play(SlotId),
}

// =============================================================================
// Player
// =============================================================================

/// Rotation state for the hero videos.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPlayer {
    active: SlotId,
    loaded: [bool; HERO_SLOT_COUNT],
    config: HeroConfig,
}

impl Default for HeroPlayer {
    fn default() -> Self {
        Self::new(HeroConfig::default())
    }
}

impl HeroPlayer {
    pub fn new(config: HeroConfig) -> Self {
        Self {
            active: SlotId::FIRST,
            loaded: [false; HERO_SLOT_COUNT],
            config,
        }
    }

    pub fn active(&self) -> SlotId {
        self.active
    }

    pub fn is_loaded(&self, slot: SlotId) -> bool {
        self.loaded[slot.index()]
    }

    /// Commands to run once the elements are mounted.
    pub fn start(&self) -> Vec<PlaybackCommand> {
        self.playback_for_active()
    }

    /// Apply a media callback from `slot`.
    pub fn handle(&mut self, slot: SlotId, event: MediaEvent) -> Vec<PlaybackCommand> {
        match event {
            MediaEvent::CanPlay | MediaEvent::LoadedData => {
                self.loaded[slot.index()] = true;
                Vec::new()
            }
            MediaEvent::Error(err) => {
                log::warn!("Hero {} failed to load: {}", slot, err);
                self.loaded[slot.index()] = false;
                Vec::new()
            }
            MediaEvent::Abort => {
                log::warn!("Hero {} loading aborted", slot);
                self.loaded[slot.index()] = false;
                Vec::new()
            }
            MediaEvent::Ended if slot == self.active => self.activate(slot.next()),
            MediaEvent::Ended => {
                log::debug!("Ignoring ended from inactive hero {}", slot);
                Vec::new()
            }
        }
    }

    /// A `play()` call was rejected. Logged only; rotation continues.
    pub fn play_rejected(&self, slot: SlotId, err: &MediaError) {
        log::warn!("Failed to play hero {}: {}", slot, err);
    }

    /// Make `slot` the active one and return the playback commands.
    pub fn activate(&mut self, slot: SlotId) -> Vec<PlaybackCommand> {
        log::debug!("Hero rotation: {} -> {}", self.active, slot);
        self.active = slot;
        self.playback_for_active()
    }

    /// Pointer entered `slot`: pause it.
    pub fn hover_enter(&self, slot: SlotId) -> PlaybackCommand {
        PlaybackCommand::Pause(slot)
    }

    /// Pointer left `slot`: resume it, but only if it is still the active one.
    pub fn hover_leave(&self, slot: SlotId) -> Option<PlaybackCommand> {
        (slot == self.active).then_some(PlaybackCommand::Play(slot))
    }

    /// Opacity of `slot`: visible only when active and loaded.
    pub fn opacity(&self, slot: SlotId) -> f64 {
        if slot == self.active && self.is_loaded(slot) {
            self.config.active_opacity
        } else {
            0.0
        }
    }

    /// CSS `transition` value for the crossfade.
    pub fn transition(&self, reduced_motion: bool) -> String {
        if reduced_motion {
            "none".to_string()
        } else {
            format!("opacity {}ms ease-in-out", self.config.crossfade_ms)
        }
    }

    fn playback_for_active(&self) -> Vec<PlaybackCommand> {
        let mut commands = Vec::with_capacity(HERO_SLOT_COUNT * 2);
        for slot in SlotId::all().filter(|s| *s != self.active) {
            commands.push(PlaybackCommand::Pause(slot));
            commands.push(PlaybackCommand::Rewind(slot));
        }
        commands.push(PlaybackCommand::Rewind(self.active));
        commands.push(PlaybackCommand::Play(self.active));
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(n: u8) -> SlotId {
        SlotId::new(n).unwrap()
    }

    #[test]
    fn test_slot_bounds() {
        assert!(SlotId::new(0).is_none());
        assert!(SlotId::new(4).is_none());
        assert_eq!(slot(3).next(), slot(1));
        assert_eq!(slot(2).index(), 1);
    }

    #[test]
    fn test_rotation_cycles_through_all_slots() {
        let mut player = HeroPlayer::default();
        assert_eq!(player.active(), slot(1));

        player.handle(slot(1), MediaEvent::Ended);
        assert_eq!(player.active(), slot(2));
        player.handle(slot(2), MediaEvent::Ended);
        assert_eq!(player.active(), slot(3));
        player.handle(slot(3), MediaEvent::Ended);
        assert_eq!(player.active(), slot(1));
    }

    #[test]
    fn test_ended_from_inactive_slot_ignored() {
        let mut player = HeroPlayer::default();
        let commands = player.handle(slot(3), MediaEvent::Ended);
        assert!(commands.is_empty());
        assert_eq!(player.active(), slot(1));
    }

    #[test]
    fn test_activation_pauses_others_then_plays_one() {
        let mut player = HeroPlayer::default();
        let commands = player.handle(slot(1), MediaEvent::Ended);

        assert_eq!(
            commands,
            vec![
                PlaybackCommand::Pause(slot(1)),
                PlaybackCommand::Rewind(slot(1)),
                PlaybackCommand::Pause(slot(3)),
                PlaybackCommand::Rewind(slot(3)),
                PlaybackCommand::Rewind(slot(2)),
                PlaybackCommand::Play(slot(2)),
            ]
        );
        let plays = commands
            .iter()
            .filter(|c| matches!(c, PlaybackCommand::Play(_)))
            .count();
        assert_eq!(plays, 1);
    }

    #[test]
    fn test_start_plays_first_slot() {
        let player = HeroPlayer::default();
        let commands = player.start();
        assert_eq!(commands.last(), Some(&PlaybackCommand::Play(slot(1))));
    }

    #[test]
    fn test_opacity_requires_active_and_loaded() {
        let mut player = HeroPlayer::default();
        assert_eq!(player.opacity(slot(1)), 0.0);

        player.handle(slot(1), MediaEvent::CanPlay);
        player.handle(slot(2), MediaEvent::CanPlay);
        assert_eq!(player.opacity(slot(1)), 0.8);
        assert_eq!(player.opacity(slot(2)), 0.0);
    }

    #[test]
    fn test_error_after_canplay_marks_unusable() {
        let mut player = HeroPlayer::default();
        player.handle(slot(1), MediaEvent::CanPlay);
        player.handle(slot(1), MediaEvent::Error(MediaError::Decode));
        assert!(!player.is_loaded(slot(1)));
        assert_eq!(player.opacity(slot(1)), 0.0);
    }

    #[test]
    fn test_failures_do_not_stop_rotation() {
        let mut player = HeroPlayer::default();
        player.handle(slot(2), MediaEvent::Abort);
        player.handle(slot(1), MediaEvent::Ended);
        assert_eq!(player.active(), slot(2));
        assert_eq!(player.opacity(slot(2)), 0.0);

        player.handle(slot(2), MediaEvent::Ended);
        assert_eq!(player.active(), slot(3));
    }

    #[test]
    fn test_hover_leave_only_resumes_active() {
        let mut player = HeroPlayer::default();
        assert_eq!(player.hover_enter(slot(1)), PlaybackCommand::Pause(slot(1)));
        assert_eq!(player.hover_leave(slot(1)), Some(PlaybackCommand::Play(slot(1))));

        player.activate(slot(2));
        assert_eq!(player.hover_leave(slot(1)), None);
        assert_eq!(player.active(), slot(2));
    }

    #[test]
    fn test_reduced_motion_transition() {
        let player = HeroPlayer::default();
        assert_eq!(player.transition(false), "opacity 300ms ease-in-out");
        assert_eq!(player.transition(true), "none");
    }
}
