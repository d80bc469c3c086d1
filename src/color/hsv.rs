//! HSV and HSL
//!
//! Both are cylindrical views of gamma-encoded sRGB and do not go through
//! linear light. Hue is in degrees `[0, 360)`, saturation, value and
//! lightness in 0.0-1.0. When saturation is zero the color is a gray and the
//! hue is reported as 0.

use super::gamma::{decode, encode, quantize};
use super::linear::LinearRgb;
use super::{ColorModel, Rgb};
use crate::error::ColorError;
use crate::math::wrap_degrees;

/// A color in HSV space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// A color in HSL space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

fn normalized(rgb: Rgb) -> [f32; 3] {
    [
        f32::from(rgb.r) / 255.0,
        f32::from(rgb.g) / 255.0,
        f32::from(rgb.b) / 255.0,
    ]
}

fn quantized([r, g, b]: [f32; 3]) -> Rgb {
    Rgb {
        r: quantize(r),
        g: quantize(g),
        b: quantize(b),
    }
}

/// Hue of an encoded RGB triple given its max channel and chroma
#[allow(clippy::float_cmp)]
fn hue_of([r, g, b]: [f32; 3], max: f32, chroma: f32) -> f32 {
    if chroma <= 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        (g - b) / chroma
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    wrap_degrees(sector * 60.0)
}

/// RGB triple with the given chroma, before the lightness offset is added.
///
/// Sector is picked by `floor(h / 60) mod 6`.
#[allow(clippy::cast_possible_truncation)]
fn from_hue(h: f32, chroma: f32) -> [f32; 3] {
    let h6 = wrap_degrees(h) / 60.0;
    let sector = libm::floorf(h6);
    let f = h6 - sector;
    let rising = chroma * f;
    let falling = chroma * (1.0 - f);

    match (sector as i32).rem_euclid(6) {
        0 => [chroma, rising, 0.0],
        1 => [falling, chroma, 0.0],
        2 => [0.0, chroma, rising],
        3 => [0.0, falling, chroma],
        4 => [rising, 0.0, chroma],
        _ => [chroma, 0.0, falling],
    }
}

fn hsv_from_encoded(rgb: [f32; 3]) -> Hsv {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    let chroma = max - min;

    Hsv {
        h: hue_of(rgb, max, chroma),
        s: if max <= 0.0 { 0.0 } else { chroma / max },
        v: max,
    }
}

fn hsv_to_encoded(hsv: Hsv) -> [f32; 3] {
    if hsv.s <= 0.0 {
        return [hsv.v; 3];
    }
    let chroma = hsv.v * hsv.s;
    let m = hsv.v - chroma;
    from_hue(hsv.h, chroma).map(|c| c + m)
}

fn hsl_from_encoded(rgb: [f32; 3]) -> Hsl {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    let chroma = max - min;
    let l = f32::midpoint(max, min);
    let denom = 1.0 - libm::fabsf(2.0 * l - 1.0);

    Hsl {
        h: hue_of(rgb, max, chroma),
        s: if chroma <= 0.0 || denom <= 0.0 {
            0.0
        } else {
            chroma / denom
        },
        l,
    }
}

fn hsl_to_encoded(hsl: Hsl) -> [f32; 3] {
    if hsl.s <= 0.0 {
        return [hsl.l; 3];
    }
    let chroma = (1.0 - libm::fabsf(2.0 * hsl.l - 1.0)) * hsl.s;
    let m = hsl.l - chroma / 2.0;
    from_hue(hsl.h, chroma).map(|c| c + m)
}

/// Convert 8-bit RGB to HSV
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    hsv_from_encoded(normalized(rgb))
}

/// Convert HSV to 8-bit RGB, clamping each channel to 0-255
pub fn hsv_to_rgb(hsv: Hsv) -> Result<Rgb, ColorError> {
    hsv.to_rgb()
}

/// Convert 8-bit RGB to HSL
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    hsl_from_encoded(normalized(rgb))
}

/// Convert HSL to 8-bit RGB, clamping each channel to 0-255
pub fn hsl_to_rgb(hsl: Hsl) -> Result<Rgb, ColorError> {
    hsl.to_rgb()
}

impl From<LinearRgb> for Hsv {
    fn from(rgb: LinearRgb) -> Self {
        hsv_from_encoded([encode(rgb.r), encode(rgb.g), encode(rgb.b)])
    }
}

impl From<Hsv> for LinearRgb {
    fn from(hsv: Hsv) -> Self {
        let [r, g, b] = hsv_to_encoded(hsv).map(decode);
        Self { r, g, b }
    }
}

impl From<LinearRgb> for Hsl {
    fn from(rgb: LinearRgb) -> Self {
        hsl_from_encoded([encode(rgb.r), encode(rgb.g), encode(rgb.b)])
    }
}

impl From<Hsl> for LinearRgb {
    fn from(hsl: Hsl) -> Self {
        let [r, g, b] = hsl_to_encoded(hsl).map(decode);
        Self { r, g, b }
    }
}

impl ColorModel for Hsv {
    const NAME: &'static str = "hsv";

    fn from_components([h, s, v]: [f32; 3]) -> Self {
        Self { h, s, v }
    }

    fn components(self) -> [f32; 3] {
        [self.h, self.s, self.v]
    }

    fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }

    fn to_rgb_clamped(self) -> Rgb {
        quantized(hsv_to_encoded(self))
    }
}

impl ColorModel for Hsl {
    const NAME: &'static str = "hsl";

    fn from_components([h, s, l]: [f32; 3]) -> Self {
        Self { h, s, l }
    }

    fn components(self) -> [f32; 3] {
        [self.h, self.s, self.l]
    }

    fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }

    fn to_rgb_clamped(self) -> Rgb {
        quantized(hsl_to_encoded(self))
    }
}
