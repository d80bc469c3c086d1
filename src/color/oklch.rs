//! Oklch, the polar form of Oklab
//!
//! Hue is stored in degrees, wrapped into `[0, 360)`.

use super::linear::LinearRgb;
use super::oklab::Oklab;
use super::ColorModel;
use crate::math::wrap_degrees;

/// A color in Oklch space
///
/// For achromatic colors (zero chroma) the hue is meaningless and reported
/// as whatever `atan2(0, 0)` yields, which is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness, same scale as Oklab L
    pub l: f32,
    /// Chroma: distance from the neutral axis
    pub c: f32,
    /// Hue angle in degrees
    pub h: f32,
}

impl Oklch {
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }
}

/// Cartesian to polar
pub fn oklab_to_oklch(lab: Oklab) -> Oklch {
    let c = libm::sqrtf(lab.a * lab.a + lab.b * lab.b);
    let h = wrap_degrees(libm::atan2f(lab.b, lab.a).to_degrees());
    Oklch { l: lab.l, c, h }
}

/// Polar to Cartesian
pub fn oklch_to_oklab(lch: Oklch) -> Oklab {
    let h = lch.h.to_radians();
    Oklab {
        l: lch.l,
        a: lch.c * libm::cosf(h),
        b: lch.c * libm::sinf(h),
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        oklab_to_oklch(lab)
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        oklch_to_oklab(lch)
    }
}

impl From<LinearRgb> for Oklch {
    fn from(rgb: LinearRgb) -> Self {
        Oklab::from(rgb).into()
    }
}

impl From<Oklch> for LinearRgb {
    fn from(lch: Oklch) -> Self {
        Oklab::from(lch).into()
    }
}

impl ColorModel for Oklch {
    const NAME: &'static str = "oklch";

    fn from_components([l, c, h]: [f32; 3]) -> Self {
        Self { l, c, h }
    }

    fn components(self) -> [f32; 3] {
        [self.l, self.c, self.h]
    }
}
