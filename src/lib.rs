#![no_std]

pub mod classify;
pub mod color;
pub mod error;
pub mod math;
pub mod transition;

pub use classify::{
    AMBER_ZONE, Chromaticity, HalfPlane, Region, SRGB_GAMUT, is_amber, is_in_region,
    rgb_to_chromaticity,
};
pub use color::{
    Color, ColorModel, ColorSpace, Gradient, HueDirection, Palette, Rgb, interpolate,
};
pub use error::ColorError;
pub use transition::ColorTransition;

pub use embassy_time::{Duration, Instant};

/// Abstract output sink trait
///
/// Implement this trait to drive an LED (PWM pins, a smart-LED strip, a
/// simulator). Colors handed over are always within 0-255 per channel; any
/// common-anode inversion or duty-cycle scaling belongs to the sink.
pub trait OutputSink {
    /// Show a color
    fn write(&mut self, color: Rgb);

    /// Set output brightness (0-255), if the sink supports it
    fn set_brightness(&mut self, _brightness: u8) {}
}
