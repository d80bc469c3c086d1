//! Oklab perceptual color space
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>, using the 2021-01-25 matrices.

use super::linear::LinearRgb;
use super::{ColorModel, Rgb};
use crate::error::ColorError;

/// Real cube root that keeps the sign of negative inputs.
///
/// Out-of-gamut colors can produce negative LMS responses, where a plain
/// `powf(x, 1/3)` would return NaN.
#[inline]
pub fn signed_cbrt(x: f32) -> f32 {
    if x < 0.0 {
        -libm::cbrtf(-x)
    } else {
        libm::cbrtf(x)
    }
}

/// A color in Oklab space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f32,
    /// Green-red axis, roughly -0.4 to 0.4
    pub a: f32,
    /// Blue-yellow axis, roughly -0.4 to 0.4
    pub b: f32,
}

impl Oklab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance, the usual perceptual difference metric
    pub fn distance_squared(self, other: Self) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

impl From<LinearRgb> for Oklab {
    fn from(rgb: LinearRgb) -> Self {
        let l = 0.412_221_470_8 * rgb.r + 0.536_332_536_3 * rgb.g + 0.051_445_992_9 * rgb.b;
        let m = 0.211_903_498_2 * rgb.r + 0.680_699_545_1 * rgb.g + 0.107_396_956_6 * rgb.b;
        let s = 0.088_302_461_9 * rgb.r + 0.281_718_837_6 * rgb.g + 0.629_978_700_5 * rgb.b;

        let l_ = signed_cbrt(l);
        let m_ = signed_cbrt(m);
        let s_ = signed_cbrt(s);

        Self {
            l: 0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
            a: 1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
            b: 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
        }
    }
}

impl From<Oklab> for LinearRgb {
    fn from(lab: Oklab) -> Self {
        let l_ = lab.l + 0.396_337_777_4 * lab.a + 0.215_803_757_3 * lab.b;
        let m_ = lab.l - 0.105_561_345_8 * lab.a - 0.063_854_172_8 * lab.b;
        let s_ = lab.l - 0.089_484_177_5 * lab.a - 1.291_485_548_0 * lab.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        Self {
            r: 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
            g: -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
            b: -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
        }
    }
}

impl ColorModel for Oklab {
    const NAME: &'static str = "oklab";

    fn from_components([l, a, b]: [f32; 3]) -> Self {
        Self { l, a, b }
    }

    fn components(self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }
}

/// Convert an 8-bit sRGB color to Oklab
pub fn srgb_to_oklab(rgb: Rgb) -> Oklab {
    Oklab::from_rgb(rgb)
}

/// Convert Oklab to 8-bit sRGB, clamping out-of-gamut channels
pub fn oklab_to_srgb(lab: Oklab) -> Result<Rgb, ColorError> {
    lab.to_rgb()
}
