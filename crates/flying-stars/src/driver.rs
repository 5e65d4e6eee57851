//! Self-scheduling animation driver for the star field.

use std::time::{Duration, Instant};

use flying_core::{Size, StarfieldTuning, Viewport};

use crate::particle::ParticleField;
use crate::surface::Surface;

/// Linear opacity transition between hidden (0.0) and visible (1.0).
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    value: f32,
    target: f32,
    duration: Duration,
}

impl Fade {
    pub fn new(duration: Duration, visible: bool) -> Self {
        let value = if visible { 1.0 } else { 0.0 };
        Self {
            value,
            target: value,
            duration,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.target = if visible { 1.0 } else { 0.0 };
    }

    /// Move toward the target by the share of the duration `dt` covers.
    pub fn advance(&mut self, dt: Duration) {
        if self.duration.is_zero() {
            self.value = self.target;
            return;
        }
        let step = dt.as_secs_f32() / self.duration.as_secs_f32();
        if self.value < self.target {
            self.value = (self.value + step).min(self.target);
        } else {
            self.value = (self.value - step).max(self.target);
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }
}

/// Owns a [`ParticleField`], its frame schedule and its activity fade.
///
/// The field keeps twinkling while inactive; activity only fades the
/// output, so turning the field back on never restarts the animation.
#[derive(Debug)]
pub struct AnimationDriver {
    field: ParticleField,
    fade: Fade,
    active: bool,
    frame_interval: Duration,
    /// Pending frame request. `None` while stopped.
    next_frame: Option<Instant>,
    last_frame: Option<Instant>,
    frames: u64,
}

impl AnimationDriver {
    /// Create a stopped, inactive driver. The field is populated on the
    /// first tick, once the viewport size is known.
    pub fn new(tuning: StarfieldTuning, seed: u64) -> Self {
        let fade = Fade::new(tuning.fade_duration(), false);
        let frame_interval = tuning.frame_interval();
        Self {
            field: ParticleField::new(Size::default(), tuning, seed),
            fade,
            active: false,
            frame_interval,
            next_frame: None,
            last_frame: None,
            frames: 0,
        }
    }

    /// Create a driver seeded from the system clock.
    pub fn with_time_seed(tuning: StarfieldTuning) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(tuning, seed)
    }

    /// Request the first frame. No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if self.next_frame.is_none() {
            log::debug!("star field driver started");
            self.next_frame = Some(now);
            self.last_frame = None;
        }
    }

    /// Cancel the pending frame request.
    pub fn stop(&mut self) {
        if self.next_frame.take().is_some() {
            log::debug!("star field driver stopped after {} frames", self.frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_frame.is_some()
    }

    pub fn set_active(&mut self, active: bool) {
        if active != self.active {
            log::debug!("star field active: {active}");
        }
        self.active = active;
        self.fade.set_visible(active);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Produce one frame if one is due. Rebuilds the field when the
    /// viewport size changed, then advances the twinkle and the fade by
    /// exactly one step. Returns whether a frame was produced.
    pub fn tick<V: Viewport + ?Sized>(&mut self, now: Instant, viewport: &V) -> bool {
        let Some(due) = self.next_frame else {
            return false;
        };
        if now < due {
            return false;
        }

        self.field.resize(viewport.size());
        self.field.update();

        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(self.frame_interval);
        self.fade.advance(dt);

        self.last_frame = Some(now);
        self.next_frame = Some(now + self.frame_interval);
        self.frames += 1;
        log::trace!("star field frame {}", self.frames);
        true
    }

    /// Draw the current state onto `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.field.render(surface, self.fade.value());
    }

    /// Time until the next frame is due, `None` while stopped.
    pub fn next_frame_in(&self, now: Instant) -> Option<Duration> {
        self.next_frame
            .map(|due| due.saturating_duration_since(now))
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Current output opacity.
    pub fn opacity(&self) -> f32 {
        self.fade.value()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    const FRAME: Duration = Duration::from_millis(16);

    fn driver() -> AnimationDriver {
        AnimationDriver::new(StarfieldTuning::default(), 42)
    }

    #[test]
    fn test_stopped_driver_produces_no_frames() {
        let mut driver = driver();
        let now = Instant::now();
        assert!(!driver.is_running());
        assert!(!driver.tick(now, &Size::new(800.0, 600.0)));
        assert_eq!(driver.next_frame_in(now), None);
        assert!(driver.field().is_empty());
    }

    #[test]
    fn test_frames_follow_schedule() {
        let mut driver = driver();
        let start = Instant::now();
        let viewport = Size::new(800.0, 600.0);
        driver.start(start);

        assert!(driver.tick(start, &viewport));
        assert_eq!(driver.field().len(), 80);
        assert!(!driver.tick(start + Duration::from_millis(5), &viewport));
        assert_eq!(
            driver.next_frame_in(start + Duration::from_millis(5)),
            Some(Duration::from_millis(11))
        );
        assert!(driver.tick(start + FRAME, &viewport));
        assert_eq!(driver.frames(), 2);
    }

    #[test]
    fn test_late_tick_advances_one_step_only() {
        let mut driver = driver();
        let start = Instant::now();
        let viewport = Size::new(100.0, 60.0);
        driver.start(start);
        driver.tick(start, &viewport);
        let before = driver.field().particles()[0].clone();

        assert!(driver.tick(start + Duration::from_secs(1), &viewport));
        let after = &driver.field().particles()[0];
        let delta = (after.opacity - before.opacity).abs();
        assert!((delta - before.oscillation_speed.abs()).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_change_rebuilds_field() {
        let mut driver = driver();
        let start = Instant::now();
        driver.start(start);
        driver.tick(start, &Size::new(800.0, 600.0));
        driver.tick(start + FRAME, &Size::new(1200.0, 600.0));
        assert_eq!(driver.field().len(), 120);
    }

    #[test]
    fn test_keeps_animating_while_inactive() {
        let mut driver = driver();
        let start = Instant::now();
        let viewport = Size::new(100.0, 60.0);
        driver.start(start);
        driver.tick(start, &viewport);
        let before = driver.field().particles()[0].opacity;

        driver.tick(start + FRAME, &viewport);
        assert!(!driver.is_active());
        assert_ne!(driver.field().particles()[0].opacity, before);

        let mut surface = RecordingSurface::default();
        driver.draw(&mut surface);
        assert_eq!(surface.clears, 1);
        assert!(surface.circles.is_empty());
    }

    #[test]
    fn test_activation_fades_in_over_duration() {
        let mut driver = driver();
        let start = Instant::now();
        let viewport = Size::new(100.0, 60.0);
        driver.start(start);
        driver.tick(start, &viewport);
        driver.set_active(true);

        driver.tick(start + Duration::from_millis(500), &viewport);
        assert!((driver.opacity() - 0.5).abs() < 1e-3);

        driver.tick(start + Duration::from_millis(1100), &viewport);
        assert_eq!(driver.opacity(), 1.0);

        let mut surface = RecordingSurface::default();
        driver.draw(&mut surface);
        assert_eq!(surface.circles.len(), 1);
    }

    #[test]
    fn test_stop_cancels_and_restart_resumes() {
        let mut driver = driver();
        let start = Instant::now();
        let viewport = Size::new(100.0, 60.0);
        driver.start(start);
        driver.tick(start, &viewport);
        driver.stop();
        assert!(!driver.tick(start + FRAME, &viewport));

        driver.start(start + FRAME * 2);
        assert!(driver.tick(start + FRAME * 2, &viewport));
        assert_eq!(driver.frames(), 2);
    }

    #[test]
    fn test_fade_with_zero_duration_snaps() {
        let mut fade = Fade::new(Duration::ZERO, false);
        fade.set_visible(true);
        assert!(!fade.is_settled());
        fade.advance(Duration::from_millis(1));
        assert_eq!(fade.value(), 1.0);
        assert!(fade.is_settled());
    }
}
