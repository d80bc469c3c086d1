use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputSink;
use crate::color::{ColorSpace, Rgb};
use crate::math::{ease_in_out_quad, progress};

/// Time-driven crossfade between two colors
///
/// The blend is computed in a chosen [`ColorSpace`] (Oklab by default), so a
/// fade from red to blue passes through purple rather than a muddy gray.
#[derive(Debug, Clone)]
pub struct ColorTransition {
    /// Space the crossfade is interpolated in
    space: ColorSpace,
    /// Apply ease-in-out to the progress
    eased: bool,
    /// Current interpolated value
    current: Rgb,
    /// Value at the start of transition
    source: Rgb,
    /// Target value (None if no transition in progress)
    target: Option<Rgb>,
    /// Total transition duration
    duration: Duration,
    /// Time at which the transition started
    start_time: Instant,
}

impl ColorTransition {
    /// Create a new transition resting at `initial`
    pub const fn new(initial: Rgb) -> Self {
        Self {
            space: ColorSpace::Oklab,
            eased: false,
            current: initial,
            source: initial,
            target: None,
            duration: Duration::from_millis(0),
            start_time: Instant::from_millis(0),
        }
    }

    /// Set the interpolation space
    #[must_use]
    pub const fn with_space(mut self, space: ColorSpace) -> Self {
        self.space = space;
        self
    }

    /// Ease in and out of the crossfade instead of moving linearly
    #[must_use]
    pub const fn with_easing(mut self) -> Self {
        self.eased = true;
        self
    }

    /// Get current value
    pub const fn current(&self) -> Rgb {
        self.current
    }

    /// Check if a transition is in progress
    pub const fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// Start fading towards `color`
    ///
    /// A zero duration jumps immediately. A fade already in progress restarts
    /// from whatever color is showing now.
    pub fn set(&mut self, color: Rgb, duration: Duration, start_time: Instant) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[ColorTransition.set] {:?} -> {:?} over {}ms",
            self.current,
            color,
            duration.as_millis()
        );

        self.start_time = start_time;
        if duration.as_millis() == 0 {
            // Immediate
            self.current = color;
            self.source = color;
            self.target = None;
            self.duration = Duration::from_millis(0);
        } else {
            // Smooth
            self.source = self.current;
            self.target = Some(color);
            self.duration = duration;
        }
    }

    /// Update transition state
    ///
    /// Call this once per frame.
    pub fn tick(&mut self, now: Instant) {
        let Some(target) = self.target else {
            return;
        };

        // Fades scheduled in the future hold the source color
        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= self.duration {
            self.current = target;
            self.source = target;
            self.target = None;
            return;
        }

        let mut t = progress(elapsed, self.duration);
        if self.eased {
            t = ease_in_out_quad(t);
        }
        self.current = self.space.mix_unchecked(self.source, target, t);
    }

    /// Advance to `now` and write the resulting color to `sink`
    pub fn render<S: OutputSink>(&mut self, now: Instant, sink: &mut S) {
        self.tick(now);
        sink.write(self.current);
    }
}
