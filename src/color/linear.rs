//! Linear-light RGB
//!
//! The hub every other model converts through. Channels are nominally
//! 0.0-1.0 but are left unclamped so out-of-gamut intermediates survive until
//! the final conversion to [`Rgb`].

use super::gamma::{decode8, encode8};
use super::{ColorModel, Rgb};

/// A color in linear RGB color space (sRGB primaries, D65 white)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Returns true if every channel lies inside 0.0-1.0
    pub fn in_gamut(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Gamma-encode and clamp each channel into an 8-bit color.
    ///
    /// Never fails: NaN channels become 0.
    pub fn quantize(self) -> Rgb {
        Rgb {
            r: encode8(self.r),
            g: encode8(self.g),
            b: encode8(self.b),
        }
    }
}

impl From<Rgb> for LinearRgb {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: decode8(rgb.r),
            g: decode8(rgb.g),
            b: decode8(rgb.b),
        }
    }
}

impl ColorModel for LinearRgb {
    const NAME: &'static str = "linear rgb";

    fn from_components([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }

    fn components(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}
