//! Reduced-motion gating and one-shot reveal.
//!
//! When the user asks for reduced motion every duration and delay collapses
//! to zero, so the end state applies immediately. The widgets' state machines
//! are not affected.

/// Animation timing, gated by the reduced-motion preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPrefs {
    pub reduced: bool,
}

impl MotionPrefs {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    pub fn duration_ms(self, ms: u32) -> u32 {
        if self.reduced {
            0
        } else {
            ms
        }
    }

    /// Delay of the `index`-th child in a staggered group.
    pub fn stagger_ms(self, index: usize, base_ms: u32, step_ms: u32) -> u32 {
        if self.reduced {
            return 0;
        }
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        base_ms.saturating_add(step_ms.saturating_mul(index))
    }

    /// CSS `transition` for `property`, or `none`.
    pub fn transition(self, property: &str, ms: u32, easing: &str) -> String {
        if self.reduced {
            "none".to_string()
        } else {
            format!("{} {}ms {}", property, ms, easing)
        }
    }
}

/// Latch for entrance animations: once seen, always shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    shown: bool,
}

impl Reveal {
    pub fn is_shown(self) -> bool {
        self.shown
    }

    /// Feed an intersection update. Returns true only on the first sighting.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.shown {
            self.shown = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_collapses_timing() {
        let reduced = MotionPrefs::new(true);
        assert_eq!(reduced.duration_ms(800), 0);
        assert_eq!(reduced.stagger_ms(3, 200, 100), 0);
        assert_eq!(reduced.transition("opacity", 300, "ease"), "none");

        let full = MotionPrefs::new(false);
        assert_eq!(full.duration_ms(800), 800);
        assert_eq!(full.stagger_ms(3, 200, 100), 500);
        assert_eq!(full.transition("opacity", 300, "ease"), "opacity 300ms ease");
    }

    #[test]
    fn test_reveal_latches_once() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
        assert!(!reveal.observe(true));
        assert!(!reveal.observe(false));
        assert!(reveal.is_shown());
    }
}
