//! YUV with BT.601 luma weights
//!
//! Operates on gamma-encoded sRGB, like analog video. Y is 0.0-1.0,
//! U is about ±0.436 and V about ±0.615.

use super::gamma::{decode, encode, quantize};
use super::linear::LinearRgb;
use super::{ColorModel, Rgb};
use crate::error::ColorError;

/// A color in YUV space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yuv {
    /// Luma
    pub y: f32,
    /// Blue-difference chroma
    pub u: f32,
    /// Red-difference chroma
    pub v: f32,
}

impl Yuv {
    pub const fn new(y: f32, u: f32, v: f32) -> Self {
        Self { y, u, v }
    }

    /// Same luma with both chroma components scaled by `amount`
    #[must_use]
    pub fn with_chroma_scale(self, amount: f32) -> Self {
        Self {
            y: self.y,
            u: self.u * amount,
            v: self.v * amount,
        }
    }
}

fn yuv_from_encoded([r, g, b]: [f32; 3]) -> Yuv {
    Yuv {
        y: 0.299 * r + 0.587 * g + 0.114 * b,
        u: -0.147 * r - 0.289 * g + 0.436 * b,
        v: 0.615 * r - 0.515 * g - 0.100 * b,
    }
}

fn yuv_to_encoded(yuv: Yuv) -> [f32; 3] {
    [
        yuv.y + 1.140 * yuv.v,
        yuv.y - 0.395 * yuv.u - 0.581 * yuv.v,
        yuv.y + 2.032 * yuv.u,
    ]
}

/// Convert 8-bit RGB to YUV
pub fn rgb_to_yuv(rgb: Rgb) -> Yuv {
    yuv_from_encoded([
        f32::from(rgb.r) / 255.0,
        f32::from(rgb.g) / 255.0,
        f32::from(rgb.b) / 255.0,
    ])
}

/// Convert YUV to 8-bit RGB, clamping each channel to 0-255
pub fn yuv_to_rgb(yuv: Yuv) -> Result<Rgb, ColorError> {
    yuv.to_rgb()
}

impl From<LinearRgb> for Yuv {
    fn from(rgb: LinearRgb) -> Self {
        yuv_from_encoded([encode(rgb.r), encode(rgb.g), encode(rgb.b)])
    }
}

impl From<Yuv> for LinearRgb {
    fn from(yuv: Yuv) -> Self {
        let [r, g, b] = yuv_to_encoded(yuv).map(decode);
        Self { r, g, b }
    }
}

impl ColorModel for Yuv {
    const NAME: &'static str = "yuv";

    fn from_components([y, u, v]: [f32; 3]) -> Self {
        Self { y, u, v }
    }

    fn components(self) -> [f32; 3] {
        [self.y, self.u, self.v]
    }

    fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_yuv(rgb)
    }

    fn to_rgb_clamped(self) -> Rgb {
        let [r, g, b] = yuv_to_encoded(self);
        Rgb {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
        }
    }
}
