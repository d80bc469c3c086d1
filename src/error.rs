//! Error type for color conversions
//!
//! Numeric edge cases (black chromaticity, negative cube roots, out-of-gamut
//! values) are handled in place. Only caller contract violations surface here.

use core::fmt;

/// Error returned by fallible color operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// A NaN or infinite value was passed where a real number is required
    NonFinite {
        /// Name of the offending input
        input: &'static str,
    },
    /// A palette already holds as many stops as it can
    PaletteFull {
        /// Maximum number of stops
        capacity: usize,
    },
    /// A palette without stops was sampled
    EmptyPalette,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { input } => {
                write!(f, "non-finite value passed as {}", input)
            }
            Self::PaletteFull { capacity } => {
                write!(f, "palette is full ({} stops)", capacity)
            }
            Self::EmptyPalette => write!(f, "palette has no stops"),
        }
    }
}

impl core::error::Error for ColorError {}

/// Check that a scalar input is finite
pub(crate) fn ensure_finite(value: f32, input: &'static str) -> Result<f32, ColorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::NonFinite { input })
    }
}

/// Check that every component of a color is finite
pub(crate) fn ensure_all_finite<const N: usize>(
    components: [f32; N],
    input: &'static str,
) -> Result<[f32; N], ColorError> {
    if components.iter().all(|c| c.is_finite()) {
        Ok(components)
    } else {
        Err(ColorError::NonFinite { input })
    }
}
