use super::Rgb;
use super::gamma::quantize;
use crate::error::{ColorError, ensure_finite};

/// Lowest supported color temperature
pub const MIN_KELVIN: f32 = 1_000.0;
/// Highest supported color temperature
pub const MAX_KELVIN: f32 = 40_000.0;

/// Convert a blackbody color temperature to an RGB color
///
/// Uses Tanner Helland's curve fit. Temperatures outside 1000K-40000K are
/// clamped into that range.
pub fn kelvin_to_rgb(kelvin: f32) -> Result<Rgb, ColorError> {
    let temp = ensure_finite(kelvin, "kelvin")?.clamp(MIN_KELVIN, MAX_KELVIN) / 100.0;

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698_73 * libm::powf(temp - 60.0, -0.133_204_76)
    };

    let green = if temp <= 66.0 {
        99.470_8 * libm::logf(temp) - 161.119_57
    } else {
        288.122_17 * libm::powf(temp - 60.0, -0.075_514_85)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.517_73 * libm::logf(temp - 10.0) - 305.044_8
    };

    Ok(Rgb {
        r: quantize(red / 255.0),
        g: quantize(green / 255.0),
        b: quantize(blue / 255.0),
    })
}
