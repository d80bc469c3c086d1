//! CIE 1931 XYZ
//!
//! Y is normalized to 1.0 at the reference white. Matrix coefficients are the
//! sRGB/D65 pair published by Bruce Lindbloom; they are inverses of each other
//! up to `f32` rounding.

use super::linear::LinearRgb;
use super::ColorModel;

const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

#[inline]
fn mul3(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Reference white for relative color spaces, as XYZ with Y = 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WhitePoint {
    /// CIE standard illuminant D65, 2° observer
    pub const D65: Self = Self {
        x: 0.950_47,
        y: 1.0,
        z: 1.088_83,
    };
}

impl Default for WhitePoint {
    fn default() -> Self {
        Self::D65
    }
}

/// A color in CIE XYZ space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Convert linear RGB to XYZ
pub fn rgb_linear_to_xyz(rgb: LinearRgb) -> Xyz {
    let [x, y, z] = mul3(&RGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]);
    Xyz { x, y, z }
}

/// Convert XYZ to linear RGB, leaving out-of-gamut channels unclamped
pub fn xyz_to_rgb_linear(xyz: Xyz) -> LinearRgb {
    let [r, g, b] = mul3(&XYZ_TO_RGB, [xyz.x, xyz.y, xyz.z]);
    LinearRgb { r, g, b }
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        rgb_linear_to_xyz(rgb)
    }
}

impl From<Xyz> for LinearRgb {
    fn from(xyz: Xyz) -> Self {
        xyz_to_rgb_linear(xyz)
    }
}

impl ColorModel for Xyz {
    const NAME: &'static str = "xyz";

    fn from_components([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }

    fn components(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
