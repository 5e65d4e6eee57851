//! Scroll position with smooth programmatic scrolling.

use std::time::{Duration, Instant};

/// Length of a programmatic smooth scroll.
pub const SMOOTH_SCROLL: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f32,
    to: f32,
    started: Instant,
}

/// Vertical scroll offset in pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollPosition {
    offset: f32,
    animation: Option<Animation>,
}

impl ScrollPosition {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start a smooth scroll from the current offset to `target`.
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        self.animation = Some(Animation {
            from: self.offset,
            to: target,
            started: now,
        });
    }

    /// Native scroll by `delta` pixels, clamped to `[0, max]`.
    /// Cancels a running animation. Returns whether the offset moved.
    pub fn scroll_by(&mut self, delta: f32, max: f32) -> bool {
        self.animation = None;
        self.set(self.offset + delta, max)
    }

    /// Jump to `offset`, clamped to `[0, max]`. Returns whether it moved.
    pub fn set(&mut self, offset: f32, max: f32) -> bool {
        let clamped = offset.clamp(0.0, max.max(0.0));
        let moved = clamped != self.offset;
        self.offset = clamped;
        moved
    }

    /// Step a running animation. Returns whether the offset moved.
    pub fn advance(&mut self, now: Instant, max: f32) -> bool {
        let Some(anim) = self.animation else {
            return false;
        };
        let t = now.saturating_duration_since(anim.started).as_secs_f32()
            / SMOOTH_SCROLL.as_secs_f32();
        if t >= 1.0 {
            self.animation = None;
            return self.set(anim.to, max);
        }
        self.set(anim.from + (anim.to - anim.from) * ease_out_cubic(t), max)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut scroll = ScrollPosition::default();
        let start = Instant::now();
        scroll.animate_to(800.0, start);

        assert!(scroll.advance(start + Duration::from_millis(300), 2000.0));
        let mid = scroll.offset();
        assert!(mid > 400.0 && mid < 800.0, "mid {mid}");

        scroll.advance(start + SMOOTH_SCROLL, 2000.0);
        assert_eq!(scroll.offset(), 800.0);
        assert!(!scroll.is_animating());
        assert!(!scroll.advance(start + SMOOTH_SCROLL * 2, 2000.0));
    }

    #[test]
    fn test_native_scroll_clamps_and_cancels() {
        let mut scroll = ScrollPosition::default();
        assert!(!scroll.scroll_by(-10.0, 500.0));
        assert!(scroll.scroll_by(600.0, 500.0));
        assert_eq!(scroll.offset(), 500.0);

        scroll.animate_to(0.0, Instant::now());
        scroll.scroll_by(-48.0, 500.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 452.0);
    }
}
