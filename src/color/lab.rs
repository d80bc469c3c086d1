//! CIELAB (L*a*b*)
//!
//! L is 0-100. The companding function uses the exact CIE constants and the
//! inverse uses the matching threshold, so forward and inverse agree on which
//! branch a value belongs to.

use super::xyz::{WhitePoint, Xyz};
use super::{ColorModel, LinearRgb, Rgb};
use crate::error::ColorError;

/// 6/29, the breakpoint of the companding function in `f(t)` space
const DELTA: f32 = 6.0 / 29.0;
/// (6/29)^3, the same breakpoint in `t` space
const EPSILON: f32 = DELTA * DELTA * DELTA;
/// 3 * (6/29)^2, the inverse slope of the linear segment
const LINEAR_SLOPE_INV: f32 = 3.0 * DELTA * DELTA;
const LINEAR_OFFSET: f32 = 4.0 / 29.0;

#[inline]
fn compand(t: f32) -> f32 {
    if t > EPSILON {
        libm::cbrtf(t)
    } else {
        t / LINEAR_SLOPE_INV + LINEAR_OFFSET
    }
}

#[inline]
fn compand_inv(t: f32) -> f32 {
    if t > DELTA {
        t * t * t
    } else {
        LINEAR_SLOPE_INV * (t - LINEAR_OFFSET)
    }
}

/// A color in CIELAB space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis, roughly -128 to 127
    pub a: f32,
    /// Blue-yellow axis, roughly -128 to 127
    pub b: f32,
}

impl Lab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

/// Convert XYZ to CIELAB relative to `white`
pub fn xyz_to_lab(xyz: Xyz, white: WhitePoint) -> Lab {
    let fx = compand(xyz.x / white.x);
    let fy = compand(xyz.y / white.y);
    let fz = compand(xyz.z / white.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIELAB back to XYZ relative to `white`
pub fn lab_to_xyz(lab: Lab, white: WhitePoint) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    Xyz {
        x: white.x * compand_inv(fx),
        y: white.y * compand_inv(fy),
        z: white.z * compand_inv(fz),
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        xyz_to_lab(xyz, WhitePoint::D65)
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        lab_to_xyz(lab, WhitePoint::D65)
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        Xyz::from(rgb).into()
    }
}

impl From<Lab> for LinearRgb {
    fn from(lab: Lab) -> Self {
        Xyz::from(lab).into()
    }
}

impl ColorModel for Lab {
    const NAME: &'static str = "lab";

    fn from_components([l, a, b]: [f32; 3]) -> Self {
        Self { l, a, b }
    }

    fn components(self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }
}

/// Convert an 8-bit sRGB color to CIELAB (D65)
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    Lab::from_rgb(rgb)
}

/// Convert CIELAB (D65) to 8-bit sRGB, clamping out-of-gamut channels
pub fn lab_to_rgb(lab: Lab) -> Result<Rgb, ColorError> {
    lab.to_rgb()
}
