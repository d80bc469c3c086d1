pub mod gamma;

mod cmyk;
mod gradient;
mod hsv;
mod kelvin;
mod lab;
mod linear;
mod oklab;
mod oklch;
mod space;
mod wavelength;
mod xyz;
mod yuv;

use smart_leds::RGB8;

use crate::error::{ColorError, ensure_all_finite};

pub use cmyk::Cmyk;
pub use gradient::{Gradient, GradientIter, HueDirection, Palette, interpolate, lerp_hue};
pub use hsv::{Hsl, Hsv, hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use kelvin::{MAX_KELVIN, MIN_KELVIN, kelvin_to_rgb};
pub use lab::{Lab, lab_to_rgb, lab_to_xyz, rgb_to_lab, xyz_to_lab};
pub use linear::LinearRgb;
pub use oklab::{Oklab, oklab_to_srgb, signed_cbrt, srgb_to_oklab};
pub use oklch::{Oklch, oklab_to_oklch, oklch_to_oklab};
pub use space::{Color, ColorSpace};
pub use wavelength::{VISIBLE_MAX_NM, VISIBLE_MIN_NM, wavelength_to_rgb};
pub use xyz::{WhitePoint, Xyz, rgb_linear_to_xyz, xyz_to_rgb_linear};
pub use yuv::{Yuv, rgb_to_yuv, yuv_to_rgb};

pub type Rgb = RGB8;

/// A three-component color model convertible to and from linear RGB
///
/// Float models never clamp their own components; clamping happens only on
/// the way out to [`Rgb`].
pub trait ColorModel: Copy + From<LinearRgb> + Into<LinearRgb> {
    /// Short name used in error messages
    const NAME: &'static str;

    /// Build from raw components, in declaration order
    fn from_components(components: [f32; 3]) -> Self;

    /// Raw components, in declaration order
    fn components(self) -> [f32; 3];

    /// Convert an 8-bit sRGB color into this model
    fn from_rgb(rgb: Rgb) -> Self {
        LinearRgb::from(rgb).into()
    }

    /// Convert to 8-bit sRGB without validating, clamping each channel.
    ///
    /// Non-finite channels come out as 0.
    fn to_rgb_clamped(self) -> Rgb {
        let linear: LinearRgb = self.into();
        linear.quantize()
    }

    /// Convert to 8-bit sRGB, clamping each channel to 0-255
    ///
    /// Fails if any component is NaN or infinite.
    fn to_rgb(self) -> Result<Rgb, ColorError> {
        ensure_all_finite(self.components(), Self::NAME)?;
        Ok(self.to_rgb_clamped())
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
