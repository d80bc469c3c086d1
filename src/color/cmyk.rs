//! Subtractive CMYK
//!
//! Naive device-independent model (K = 1 - max channel), handy for palettes
//! written as ink percentages. All components are 0.0-1.0.

use super::gamma::quantize;
use super::Rgb;
use crate::error::{ColorError, ensure_all_finite};

/// A color in CMYK space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
}

impl Cmyk {
    pub const fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }

    /// Convert 8-bit RGB to CMYK; pure black is C = M = Y = 0, K = 1
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f32::from(rgb.r) / 255.0;
        let g = f32::from(rgb.g) / 255.0;
        let b = f32::from(rgb.b) / 255.0;

        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        let ink = 1.0 - k;
        Self {
            c: (1.0 - r - k) / ink,
            m: (1.0 - g - k) / ink,
            y: (1.0 - b - k) / ink,
            k,
        }
    }

    /// Convert back to 8-bit RGB, clamping each channel to 0-255
    pub fn to_rgb(self) -> Result<Rgb, ColorError> {
        ensure_all_finite([self.c, self.m, self.y, self.k], "cmyk")?;

        let white = 1.0 - self.k;
        Ok(Rgb {
            r: quantize((1.0 - self.c) * white),
            g: quantize((1.0 - self.m) * white),
            b: quantize((1.0 - self.y) * white),
        })
    }
}
