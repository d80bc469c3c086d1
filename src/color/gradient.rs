#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use super::{Color, ColorSpace, Rgb};
use crate::OutputSink;
use crate::error::ColorError;
use crate::math::{FULL_TURN, clamp_progress, lerp, wrap_degrees};

/// Hue direction for gradient calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueDirection {
    /// Always increase the hue angle
    Forward,
    /// Always decrease the hue angle
    Backward,
    /// Take the shorter arc around the hue circle
    #[default]
    Shortest,
}

/// Signed hue distance from `from` to `to` along `direction`, in degrees
fn hue_delta(from: f32, to: f32, direction: HueDirection) -> f32 {
    let forward = wrap_degrees(to - from);
    match direction {
        HueDirection::Forward => forward,
        HueDirection::Backward => {
            if forward == 0.0 {
                0.0
            } else {
                forward - FULL_TURN
            }
        }
        HueDirection::Shortest => {
            if forward > FULL_TURN / 2.0 {
                forward - FULL_TURN
            } else {
                forward
            }
        }
    }
}

/// Interpolate between two hue angles in degrees, wrapping into `[0, 360)`
pub fn lerp_hue(from: f32, to: f32, t: f32, direction: HueDirection) -> f32 {
    wrap_degrees(from + hue_delta(from, to, direction) * t)
}

/// Two anchors expressed in one space, ready to be sampled
#[derive(Debug, Clone, Copy)]
struct Segment {
    space: ColorSpace,
    direction: HueDirection,
    from: [f32; 3],
    to: [f32; 3],
}

impl Segment {
    fn new(
        space: ColorSpace,
        direction: HueDirection,
        mut from: [f32; 3],
        mut to: [f32; 3],
    ) -> Self {
        // Handle black/white/gray edge cases for hue
        if let Some(h) = space.hue_index() {
            let from_gray = space.is_achromatic(from);
            let to_gray = space.is_achromatic(to);
            if from_gray && !to_gray {
                from[h] = to[h];
            } else if to_gray && !from_gray {
                to[h] = from[h];
            }
        }

        Self {
            space,
            direction,
            from,
            to,
        }
    }

    fn sample(&self, t: f32) -> [f32; 3] {
        let hue = self.space.hue_index();
        let mut out = [0.0; 3];
        for (i, value) in out.iter_mut().enumerate() {
            *value = if hue == Some(i) {
                lerp_hue(self.from[i], self.to[i], t, self.direction)
            } else {
                lerp(self.from[i], self.to[i], t)
            };
        }
        out
    }

    fn color_at(&self, t: f32) -> Rgb {
        self.space.to_rgb_clamped(self.sample(t))
    }
}

impl ColorSpace {
    /// Blend two colors in this space, `t` = 0.0 gives `a` and 1.0 gives `b`
    ///
    /// `t` is clamped to 0.0-1.0; hue takes the shorter arc.
    pub fn mix(self, a: Rgb, b: Rgb, t: f32) -> Result<Rgb, ColorError> {
        Ok(self.mix_unchecked(a, b, clamp_progress(t)?))
    }

    pub(crate) fn mix_unchecked(self, a: Rgb, b: Rgb, t: f32) -> Rgb {
        if t <= 0.0 {
            return a;
        }
        if t >= 1.0 {
            return b;
        }
        Segment::new(
            self,
            HueDirection::Shortest,
            self.from_rgb(a),
            self.from_rgb(b),
        )
        .color_at(t)
    }
}

/// An `steps + 1` color gradient between two anchors
///
/// The gradient is a plain value: iterating it twice yields the same
/// colors. The first color is always the start anchor and the last the end
/// anchor, exactly as [`Color::to_rgb`] reports them.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    segment: Segment,
    first: Rgb,
    last: Rgb,
    steps: usize,
}

/// Produce the `steps + 1` colors between `start` and `end`, interpolated in
/// `space` along the shorter hue arc
pub fn interpolate(
    start: impl Into<Color>,
    end: impl Into<Color>,
    steps: usize,
    space: ColorSpace,
) -> Result<Gradient, ColorError> {
    Gradient::new(start, end, steps, space)
}

impl Gradient {
    /// Create a gradient from `start` to `end`
    pub fn new(
        start: impl Into<Color>,
        end: impl Into<Color>,
        steps: usize,
        space: ColorSpace,
    ) -> Result<Self, ColorError> {
        let start = start.into();
        let end = end.into();

        Ok(Self {
            segment: Segment::new(
                space,
                HueDirection::default(),
                start.components_in(space)?,
                end.components_in(space)?,
            ),
            first: start.to_rgb()?,
            last: end.to_rgb()?,
            steps,
        })
    }

    /// Set the hue direction
    #[must_use]
    pub fn with_direction(mut self, direction: HueDirection) -> Self {
        self.segment.direction = direction;
        self
    }

    /// Space the gradient is interpolated in
    pub fn space(&self) -> ColorSpace {
        self.segment.space
    }

    /// Number of steps between the anchors
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of colors, `steps + 1` (saturating at `usize::MAX`)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.steps.saturating_add(1)
    }

    /// Color at position `index`, or `None` past the end
    #[allow(clippy::cast_precision_loss)]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        if index == 0 {
            Some(self.first)
        } else if index == self.steps {
            Some(self.last)
        } else if index < self.steps {
            Some(self.segment.color_at(index as f32 / self.steps as f32))
        } else {
            None
        }
    }

    /// Color at a progress fraction, clamped to 0.0-1.0
    pub fn at(&self, progress: f32) -> Result<Rgb, ColorError> {
        let t = clamp_progress(progress)?;
        Ok(if t <= 0.0 {
            self.first
        } else if t >= 1.0 {
            self.last
        } else {
            self.segment.color_at(t)
        })
    }

    /// Iterate over all `steps + 1` colors
    pub fn iter(&self) -> GradientIter<'_> {
        GradientIter {
            gradient: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Spread the gradient across an LED slice
    ///
    /// The first LED gets the start anchor and the last the end anchor,
    /// independent of the step count.
    #[allow(clippy::cast_precision_loss)]
    pub fn fill(&self, leds: &mut [Rgb]) {
        let Some(last) = leds.len().checked_sub(1) else {
            return;
        };
        if last == 0 {
            leds[0] = self.first;
            return;
        }

        for (i, led) in leds.iter_mut().enumerate() {
            *led = if i == 0 {
                self.first
            } else if i == last {
                self.last
            } else {
                self.segment.color_at(i as f32 / last as f32)
            };
        }
    }

    /// Write every color of the gradient to `sink`, in order
    pub fn write_to<S: OutputSink>(&self, sink: &mut S) {
        for color in self {
            sink.write(color);
        }
    }
}

/// Iterator over the colors of a [`Gradient`]
#[derive(Debug, Clone)]
pub struct GradientIter<'a> {
    gradient: &'a Gradient,
    front: usize,
    back: usize,
}

impl Iterator for GradientIter<'_> {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        if self.front >= self.back {
            return None;
        }
        let color = self.gradient.get(self.front);
        self.front += 1;
        color
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for GradientIter<'_> {
    fn next_back(&mut self) -> Option<Rgb> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.gradient.get(self.back)
    }
}

impl ExactSizeIterator for GradientIter<'_> {}

impl<'a> IntoIterator for &'a Gradient {
    type Item = Rgb;
    type IntoIter = GradientIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Multi-stop gradient with evenly spaced stops
///
/// N is the maximum number of stops
#[derive(Debug, Clone)]
pub struct Palette<const N: usize> {
    space: ColorSpace,
    direction: HueDirection,
    stops: Vec<[f32; 3], N>,
}

impl<const N: usize> Palette<N> {
    /// Create an empty palette interpolated in `space`
    pub const fn new(space: ColorSpace) -> Self {
        Self {
            space,
            direction: HueDirection::Shortest,
            stops: Vec::new(),
        }
    }

    /// Set the hue direction
    #[must_use]
    pub fn with_direction(mut self, direction: HueDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Append a stop
    pub fn push(&mut self, color: impl Into<Color>) -> Result<(), ColorError> {
        let components = color.into().components_in(self.space)?;
        self.stops.push(components).map_err(|_| {
            #[cfg(feature = "esp32-log")]
            println!("[Palette.push] palette full ({} stops), dropping stop", N);
            ColorError::PaletteFull { capacity: N }
        })
    }

    /// Number of stops
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color at a progress fraction across all stops, clamped to 0.0-1.0
    pub fn sample(&self, progress: f32) -> Result<Rgb, ColorError> {
        let t = clamp_progress(progress)?;
        match self.stops.len() {
            0 => Err(ColorError::EmptyPalette),
            1 => Ok(self.space.to_rgb_clamped(self.stops[0])),
            _ => Ok(self.sample_unchecked(t)),
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn sample_unchecked(&self, t: f32) -> Rgb {
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f32;
        let index = (libm::floorf(scaled) as usize).min(segments - 1);
        let local = scaled - index as f32;

        Segment::new(
            self.space,
            self.direction,
            self.stops[index],
            self.stops[index + 1],
        )
        .color_at(local)
    }

    /// Spread the palette across an LED slice
    #[allow(clippy::cast_precision_loss)]
    pub fn fill(&self, leds: &mut [Rgb]) -> Result<(), ColorError> {
        if self.stops.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        let last = leds.len().saturating_sub(1).max(1);
        for (i, led) in leds.iter_mut().enumerate() {
            *led = self.sample(i as f32 / last as f32)?;
        }
        Ok(())
    }
}
