//! Customer story carousel.
//!
//! Index arithmetic always wraps, so no sequence of `next`/`prev`/drag calls
//! can leave `[0, len)`. Auto-advance is driven from outside: the owner arms a
//! repeating timer for the current [`TimerKey`] and rebuilds it whenever the
//! key changes. A tick carrying an outdated key is dropped by [`Carousel::on_tick`].

use crate::config::CarouselConfig;
use crate::error::CarouselError;

/// Which side the incoming slide enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// -1, 0 or +1.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }

    fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::Still,
            std::cmp::Ordering::Greater => Direction::Forward,
        }
    }
}

/// Opacity of a card dragged `offset_x` px: 1.0 at rest, fading to 0.5 at
/// 200px either way.
pub fn drag_opacity(offset_x: f64) -> f64 {
    1.0 - 0.5 * (offset_x.abs() / 200.0).min(1.0)
}

/// The state an auto-advance timer was armed for.
///
/// Only exists while auto-play is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerKey {
    pub index: usize,
}

/// Indexed slide deck with auto-play.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
    direction: Direction,
    auto_playing: bool,
    config: CarouselConfig,
}

impl Carousel {
    /// Build a carousel over `len` slides, starting at slide 0 with auto-play on.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        Self::with_config(len, CarouselConfig::default())
    }

    pub fn with_config(len: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            current: 0,
            direction: Direction::Still,
            auto_playing: true,
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    /// Advance one slide, wrapping at the end. Returns whether anything changed.
    pub fn next(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        self.direction = Direction::Forward;
        self.current = (self.current + 1) % self.len;
        log::debug!("carousel: next -> {}", self.current);
        true
    }

    /// Go back one slide, wrapping at the start. Returns whether anything changed.
    pub fn prev(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        self.direction = Direction::Backward;
        self.current = (self.current + self.len - 1) % self.len;
        log::debug!("carousel: prev -> {}", self.current);
        true
    }

    /// Jump to `index`.
    ///
    /// Jumping to the current slide is a no-op, so repeated clicks on the same
    /// dot never replay the transition. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            log::warn!("carousel: go_to({}) out of range (len {})", index, self.len);
            return false;
        }
        if index == self.current {
            return false;
        }
        self.direction = Direction::between(self.current, index);
        self.current = index;
        log::debug!("carousel: go_to -> {}", self.current);
        true
    }

    /// Resolve a released drag by its horizontal offset.
    ///
    /// Dragging right past the threshold shows the previous slide, dragging
    /// left shows the next one; anything shorter snaps back.
    pub fn on_drag_end(&mut self, offset_x: f64) -> Option<Direction> {
        let threshold = self.config.swipe_threshold_px;
        if offset_x > threshold {
            self.prev().then_some(Direction::Backward)
        } else if offset_x < -threshold {
            self.next().then_some(Direction::Forward)
        } else {
            None
        }
    }

    /// Pointer entered the carousel region.
    pub fn pointer_enter(&mut self) {
        self.auto_playing = false;
    }

    /// Pointer left the carousel region.
    pub fn pointer_leave(&mut self) {
        self.auto_playing = true;
    }

    /// Key the auto-advance timer must be armed for, or `None` while paused.
    pub fn timer_key(&self) -> Option<TimerKey> {
        self.auto_playing.then_some(TimerKey {
            index: self.current,
        })
    }

    /// Handle an auto-advance tick armed for `key`.
    ///
    /// Ticks from a timer armed for an older state are discarded.
    pub fn on_tick(&mut self, key: TimerKey) -> bool {
        if self.timer_key() != Some(key) {
            log::debug!("carousel: dropping stale tick for {:?}", key);
            return false;
        }
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Repeating timer driven by a fake clock, re-armed whenever the
    /// carousel's key changes, the way the frontend rebuilds its interval.
    struct FakeInterval {
        armed: Option<(TimerKey, u64)>,
        period: u64,
    }

    impl FakeInterval {
        fn new(carousel: &Carousel, now: u64) -> Self {
            let mut timer = Self {
                armed: None,
                period: u64::from(carousel.config().auto_advance_ms),
            };
            timer.sync(carousel, now);
            timer
        }

        fn sync(&mut self, carousel: &Carousel, now: u64) {
            let key = carousel.timer_key();
            if self.armed.map(|(k, _)| k) != key {
                self.armed = key.map(|k| (k, now + self.period));
            }
        }

        /// Advance the clock to `now`, delivering due ticks.
        fn advance(&mut self, carousel: &mut Carousel, now: u64) -> usize {
            let mut fired = 0;
            while let Some((key, due)) = self.armed {
                if due > now {
                    break;
                }
                if carousel.on_tick(key) {
                    fired += 1;
                }
                self.armed = Some((key, due + self.period));
                self.sync(carousel, due);
            }
            fired
        }
    }

    #[test]
    fn test_empty_carousel_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.prev();
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn test_index_stays_in_range() {
        for len in 1..=6 {
            let mut carousel = Carousel::new(len).unwrap();
            for step in 0..40 {
                if step % 3 == 0 {
                    carousel.prev();
                } else {
                    carousel.next();
                }
                assert!(carousel.current_index() < len);
            }
        }
    }

    #[test]
    fn test_go_to_sets_direction() {
        let mut carousel = Carousel::new(5).unwrap();
        assert!(carousel.go_to(3));
        assert_eq!(carousel.direction(), Direction::Forward);
        assert!(carousel.go_to(1));
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn test_go_to_same_index_is_idempotent() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.go_to(2);
        let before = carousel.clone();
        assert!(!carousel.go_to(2));
        assert_eq!(carousel, before);
    }

    #[test]
    fn test_go_to_out_of_range_ignored() {
        let mut carousel = Carousel::new(5).unwrap();
        assert!(!carousel.go_to(5));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_single_slide_is_inert() {
        let mut carousel = Carousel::new(1).unwrap();
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert_eq!(carousel.on_drag_end(-200.0), None);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::Still);
    }

    #[test]
    fn test_drag_threshold() {
        let mut carousel = Carousel::new(5).unwrap();

        assert_eq!(carousel.on_drag_end(-40.0), None);
        assert_eq!(carousel.current_index(), 0);

        assert_eq!(carousel.on_drag_end(-60.0), Some(Direction::Forward));
        assert_eq!(carousel.current_index(), 1);

        assert_eq!(carousel.on_drag_end(60.0), Some(Direction::Backward));
        assert_eq!(carousel.current_index(), 0);

        // Exactly on the threshold snaps back
        assert_eq!(carousel.on_drag_end(50.0), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_drag_opacity() {
        assert_eq!(drag_opacity(0.0), 1.0);
        assert_eq!(drag_opacity(-100.0), 0.75);
        assert_eq!(drag_opacity(200.0), 0.5);
        assert_eq!(drag_opacity(900.0), 0.5);
    }

    #[test]
    fn test_rapid_drags_each_apply_once() {
        let mut carousel = Carousel::new(5).unwrap();
        for _ in 0..3 {
            carousel.on_drag_end(-80.0);
        }
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_timer_key_follows_index_and_pause() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.timer_key(), Some(TimerKey { index: 0 }));

        carousel.next();
        assert_eq!(carousel.timer_key(), Some(TimerKey { index: 1 }));

        carousel.pointer_enter();
        assert_eq!(carousel.timer_key(), None);
    }

    #[test]
    fn test_stale_tick_dropped() {
        let mut carousel = Carousel::new(3).unwrap();
        let stale = carousel.timer_key().unwrap();
        carousel.go_to(2);
        assert!(!carousel.on_tick(stale));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_auto_advance_every_period() {
        let mut carousel = Carousel::new(5).unwrap();
        let mut timer = FakeInterval::new(&carousel, 0);

        assert_eq!(timer.advance(&mut carousel, 7_999), 0);
        assert_eq!(timer.advance(&mut carousel, 8_000), 1);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(timer.advance(&mut carousel, 24_000), 2);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_manual_change_resets_timer() {
        let mut carousel = Carousel::new(5).unwrap();
        let mut timer = FakeInterval::new(&carousel, 0);

        // Click at 7s re-arms, so 8s passes without a double advance
        carousel.go_to(3);
        timer.sync(&carousel, 7_000);
        assert_eq!(timer.advance(&mut carousel, 8_000), 0);
        assert_eq!(carousel.current_index(), 3);

        assert_eq!(timer.advance(&mut carousel, 15_000), 1);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn test_pointer_enter_suppresses_and_leave_rearms() {
        let mut carousel = Carousel::new(5).unwrap();
        let mut timer = FakeInterval::new(&carousel, 0);

        carousel.pointer_enter();
        timer.sync(&carousel, 5_000);
        assert_eq!(timer.advance(&mut carousel, 30_000), 0);
        assert_eq!(carousel.current_index(), 0);

        carousel.pointer_leave();
        timer.sync(&carousel, 30_000);
        assert_eq!(timer.advance(&mut carousel, 37_999), 0);
        assert_eq!(timer.advance(&mut carousel, 38_000), 1);
        assert_eq!(carousel.current_index(), 1);
    }
}
