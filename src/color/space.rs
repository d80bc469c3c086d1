//! Tagged color spaces and color values
//!
//! [`ColorSpace`] picks where interpolation happens; [`Color`] carries an
//! anchor in whichever model the caller has it in.

use super::gamma::{decode, encode, quantize};
use super::{ColorModel, Hsl, Hsv, Lab, LinearRgb, Oklab, Oklch, Rgb, Xyz, Yuv};
use crate::error::{ColorError, ensure_all_finite};

/// Hues closer than this to gray are treated as undefined
const ACHROMATIC_EPSILON: f32 = 1e-4;

/// Color space used for interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Gamma-encoded sRGB, channels 0.0-1.0
    Rgb,
    /// Linear-light sRGB
    LinearRgb,
    /// CIE XYZ
    Xyz,
    /// CIELAB
    Lab,
    /// Oklab
    #[default]
    Oklab,
    /// Oklch, hue in degrees
    Oklch,
    /// HSV, hue in degrees
    Hsv,
    /// HSL, hue in degrees
    Hsl,
    /// BT.601 YUV
    Yuv,
}

impl ColorSpace {
    /// Index of the hue component, for cylindrical spaces
    pub const fn hue_index(self) -> Option<usize> {
        match self {
            Self::Hsv | Self::Hsl => Some(0),
            Self::Oklch => Some(2),
            _ => None,
        }
    }

    /// Returns true if hue is meaningless for these components
    pub fn is_achromatic(self, [c0, c1, c2]: [f32; 3]) -> bool {
        match self {
            Self::Hsv => c1 <= ACHROMATIC_EPSILON || c2 <= ACHROMATIC_EPSILON,
            Self::Hsl => {
                c1 <= ACHROMATIC_EPSILON
                    || c2 <= ACHROMATIC_EPSILON
                    || c2 >= 1.0 - ACHROMATIC_EPSILON
            }
            Self::Oklch => c1 <= ACHROMATIC_EPSILON || c0 <= ACHROMATIC_EPSILON,
            _ => false,
        }
    }

    /// Components of an 8-bit color in this space
    pub fn from_rgb(self, rgb: Rgb) -> [f32; 3] {
        match self {
            Self::Rgb => [rgb.r, rgb.g, rgb.b].map(|c| f32::from(c) / 255.0),
            Self::LinearRgb => LinearRgb::from(rgb).components(),
            Self::Xyz => Xyz::from_rgb(rgb).components(),
            Self::Lab => Lab::from_rgb(rgb).components(),
            Self::Oklab => Oklab::from_rgb(rgb).components(),
            Self::Oklch => Oklch::from_rgb(rgb).components(),
            Self::Hsv => Hsv::from_rgb(rgb).components(),
            Self::Hsl => Hsl::from_rgb(rgb).components(),
            Self::Yuv => Yuv::from_rgb(rgb).components(),
        }
    }

    /// Components of a linear color in this space
    pub fn from_linear(self, linear: LinearRgb) -> [f32; 3] {
        match self {
            Self::Rgb => linear.components().map(encode),
            Self::LinearRgb => linear.components(),
            Self::Xyz => Xyz::from(linear).components(),
            Self::Lab => Lab::from(linear).components(),
            Self::Oklab => Oklab::from(linear).components(),
            Self::Oklch => Oklch::from(linear).components(),
            Self::Hsv => Hsv::from(linear).components(),
            Self::Hsl => Hsl::from(linear).components(),
            Self::Yuv => Yuv::from(linear).components(),
        }
    }

    /// Convert components in this space to linear light
    pub fn to_linear(self, components: [f32; 3]) -> LinearRgb {
        match self {
            Self::Rgb => LinearRgb::from_components(components.map(decode)),
            Self::LinearRgb => LinearRgb::from_components(components),
            Self::Xyz => Xyz::from_components(components).into(),
            Self::Lab => Lab::from_components(components).into(),
            Self::Oklab => Oklab::from_components(components).into(),
            Self::Oklch => Oklch::from_components(components).into(),
            Self::Hsv => Hsv::from_components(components).into(),
            Self::Hsl => Hsl::from_components(components).into(),
            Self::Yuv => Yuv::from_components(components).into(),
        }
    }

    /// Convert components in this space to 8-bit sRGB
    pub fn to_rgb(self, components: [f32; 3]) -> Result<Rgb, ColorError> {
        ensure_all_finite(components, "components")?;
        Ok(self.to_rgb_clamped(components))
    }

    /// Convert components to 8-bit sRGB, clamping without validation
    pub(crate) fn to_rgb_clamped(self, components: [f32; 3]) -> Rgb {
        match self {
            Self::Rgb => {
                let [r, g, b] = components.map(quantize);
                Rgb { r, g, b }
            }
            Self::LinearRgb => LinearRgb::from_components(components).to_rgb_clamped(),
            Self::Xyz => Xyz::from_components(components).to_rgb_clamped(),
            Self::Lab => Lab::from_components(components).to_rgb_clamped(),
            Self::Oklab => Oklab::from_components(components).to_rgb_clamped(),
            Self::Oklch => Oklch::from_components(components).to_rgb_clamped(),
            Self::Hsv => Hsv::from_components(components).to_rgb_clamped(),
            Self::Hsl => Hsl::from_components(components).to_rgb_clamped(),
            Self::Yuv => Yuv::from_components(components).to_rgb_clamped(),
        }
    }
}

/// A color value in any supported model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Linear(LinearRgb),
    Xyz(Xyz),
    Lab(Lab),
    Oklab(Oklab),
    Oklch(Oklch),
    Hsv(Hsv),
    Hsl(Hsl),
    Yuv(Yuv),
}

impl Color {
    /// The model this color is expressed in
    pub const fn space(self) -> ColorSpace {
        match self {
            Self::Rgb(_) => ColorSpace::Rgb,
            Self::Linear(_) => ColorSpace::LinearRgb,
            Self::Xyz(_) => ColorSpace::Xyz,
            Self::Lab(_) => ColorSpace::Lab,
            Self::Oklab(_) => ColorSpace::Oklab,
            Self::Oklch(_) => ColorSpace::Oklch,
            Self::Hsv(_) => ColorSpace::Hsv,
            Self::Hsl(_) => ColorSpace::Hsl,
            Self::Yuv(_) => ColorSpace::Yuv,
        }
    }

    /// Raw components in this color's own model
    fn native_components(self) -> [f32; 3] {
        match self {
            Self::Rgb(rgb) => ColorSpace::Rgb.from_rgb(rgb),
            Self::Linear(c) => c.components(),
            Self::Xyz(c) => c.components(),
            Self::Lab(c) => c.components(),
            Self::Oklab(c) => c.components(),
            Self::Oklch(c) => c.components(),
            Self::Hsv(c) => c.components(),
            Self::Hsl(c) => c.components(),
            Self::Yuv(c) => c.components(),
        }
    }

    /// Convert to 8-bit sRGB, clamping out-of-gamut channels
    pub fn to_rgb(self) -> Result<Rgb, ColorError> {
        match self {
            Self::Rgb(rgb) => Ok(rgb),
            Self::Linear(c) => c.to_rgb(),
            Self::Xyz(c) => c.to_rgb(),
            Self::Lab(c) => c.to_rgb(),
            Self::Oklab(c) => c.to_rgb(),
            Self::Oklch(c) => c.to_rgb(),
            Self::Hsv(c) => c.to_rgb(),
            Self::Hsl(c) => c.to_rgb(),
            Self::Yuv(c) => c.to_rgb(),
        }
    }

    /// Express this color in `space`
    ///
    /// Colors already in `space` are returned untouched, so a hue given by
    /// the caller survives even for grays.
    pub fn components_in(self, space: ColorSpace) -> Result<[f32; 3], ColorError> {
        let own = self.space();
        let native = ensure_all_finite(self.native_components(), "color")?;
        if own == space {
            return Ok(native);
        }
        Ok(match self {
            Self::Rgb(rgb) => space.from_rgb(rgb),
            _ => space.from_linear(own.to_linear(native)),
        })
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

macro_rules! impl_from_model {
    ($($model:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$model> for Color {
                fn from(color: $model) -> Self {
                    Self::$variant(color)
                }
            }
        )*
    };
}

impl_from_model!(
    LinearRgb => Linear,
    Xyz => Xyz,
    Lab => Lab,
    Oklab => Oklab,
    Oklch => Oklch,
    Hsv => Hsv,
    Hsl => Hsl,
    Yuv => Yuv,
);
