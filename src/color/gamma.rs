//! sRGB transfer function
//!
//! Piecewise IEC 61966-2-1 curve. Both directions are pure `f32 -> f32`
//! functions: negative or NaN inputs are the caller's problem.

/// Linear-light threshold below which the encode curve is linear
pub const LINEAR_THRESHOLD: f32 = 0.003_130_8;

/// Encoded threshold below which the decode curve is linear
pub const ENCODED_THRESHOLD: f32 = 0.040_45;

const SLOPE: f32 = 12.92;
const OFFSET: f32 = 0.055;
const EXPONENT: f32 = 2.4;

/// Apply the sRGB OETF to a linear channel value (0.0-1.0)
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear <= LINEAR_THRESHOLD {
        SLOPE * linear
    } else {
        (1.0 + OFFSET) * libm::powf(linear, 1.0 / EXPONENT) - OFFSET
    }
}

/// Invert [`encode`], returning linear light (0.0-1.0)
#[inline]
pub fn decode(encoded: f32) -> f32 {
    if encoded <= ENCODED_THRESHOLD {
        encoded / SLOPE
    } else {
        libm::powf((encoded + OFFSET) / (1.0 + OFFSET), EXPONENT)
    }
}

/// Decode an 8-bit sRGB channel to linear light
#[inline]
pub fn decode8(channel: u8) -> f32 {
    decode(f32::from(channel) / 255.0)
}

/// Encode linear light into an 8-bit sRGB channel, clamping to 0-255
#[inline]
pub fn encode8(linear: f32) -> u8 {
    quantize(encode(linear))
}

/// Scale an encoded 0.0-1.0 value to 0-255 with rounding and clamping
///
/// NaN maps to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[inline]
pub fn quantize(value: f32) -> u8 {
    libm::roundf(value * 255.0).clamp(0.0, 255.0) as u8
}
