use embassy_time::Duration;

use crate::error::{ColorError, ensure_finite};

/// Full circle in degrees
pub const FULL_TURN: f32 = 360.0;

/// Linear interpolation between two values
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Calculate progress (0.0-1.0) based on elapsed time and duration
#[allow(clippy::cast_precision_loss)]
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.as_millis() == 0 || elapsed.as_millis() >= duration.as_millis() {
        return 1.0;
    }

    elapsed.as_millis() as f32 / duration.as_millis() as f32
}

/// Validate a caller-supplied progress fraction and clamp it to 0.0-1.0
pub fn clamp_progress(t: f32) -> Result<f32, ColorError> {
    Ok(ensure_finite(t, "progress")?.clamp(0.0, 1.0))
}

/// Ease in out quadratic over 0.0-1.0
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Wrap an angle in degrees into `[0, 360)`
pub fn wrap_degrees(degrees: f32) -> f32 {
    let mut h = libm::fmodf(degrees, FULL_TURN);
    if h < 0.0 {
        h += FULL_TURN;
    }
    // -tiny + 360 rounds up to exactly 360 in f32
    if h >= FULL_TURN { 0.0 } else { h }
}
