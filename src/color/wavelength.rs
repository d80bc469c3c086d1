use super::Rgb;
use super::gamma::quantize;
use crate::error::{ColorError, ensure_finite};

/// Shortest visible wavelength, in nanometres
pub const VISIBLE_MIN_NM: f32 = 380.0;
/// Longest visible wavelength, in nanometres
pub const VISIBLE_MAX_NM: f32 = 750.0;

/// Approximate the color of monochromatic light
///
/// Piecewise linear ramps between the spectral hues, dimmed towards both
/// ends of the visible range. Wavelengths outside 380-750 nm are black.
pub fn wavelength_to_rgb(nanometres: f32) -> Result<Rgb, ColorError> {
    let w = ensure_finite(nanometres, "wavelength")?;

    let (r, g, b) = if !(VISIBLE_MIN_NM..=VISIBLE_MAX_NM).contains(&w) {
        (0.0, 0.0, 0.0)
    } else if w <= 440.0 {
        let attenuation = 0.3 + 0.7 * (w - 380.0) / 60.0;
        ((440.0 - w) / 60.0 * attenuation, 0.0, attenuation)
    } else if w <= 490.0 {
        (0.0, (w - 440.0) / 50.0, 1.0)
    } else if w <= 510.0 {
        (0.0, 1.0, (510.0 - w) / 20.0)
    } else if w <= 580.0 {
        ((w - 510.0) / 70.0, 1.0, 0.0)
    } else if w <= 645.0 {
        (1.0, (645.0 - w) / 65.0, 0.0)
    } else {
        (0.3 + 0.7 * (750.0 - w) / 105.0, 0.0, 0.0)
    };

    Ok(Rgb {
        r: quantize(r),
        g: quantize(g),
        b: quantize(b),
    })
}
