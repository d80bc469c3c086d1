//! Chromaticity classification
//!
//! Projects a color onto the CIE 1931 (x, y) plane and checks membership in
//! fixed regions described as linear inequalities or polygons.

use crate::color::{LinearRgb, Rgb, rgb_linear_to_xyz};

/// CIE 1931 chromaticity coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    pub x: f32,
    pub y: f32,
}

impl Chromaticity {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// D65 reference white
    pub const D65: Self = Self::new(0.312_7, 0.329_0);
}

/// Chromaticity of an 8-bit sRGB color
///
/// Black has no chromaticity; it is reported as (0, 0).
pub fn rgb_to_chromaticity(rgb: Rgb) -> Chromaticity {
    let xyz = rgb_linear_to_xyz(LinearRgb::from(rgb));
    let sum = xyz.x + xyz.y + xyz.z;
    if sum <= 0.0 {
        return Chromaticity::new(0.0, 0.0);
    }
    Chromaticity::new(xyz.x / sum, xyz.y / sum)
}

/// The inequality `a * x + b * y <= c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl HalfPlane {
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    pub fn contains(self, point: Chromaticity) -> bool {
        self.a * point.x + self.b * point.y <= self.c
    }
}

/// A region of the chromaticity plane
#[derive(Debug, Clone, Copy)]
pub enum Region<'a> {
    /// Intersection of half-planes
    HalfPlanes(&'a [HalfPlane]),
    /// Simple polygon, vertices in order
    Polygon(&'a [Chromaticity]),
}

impl Region<'_> {
    /// Returns true if `point` lies inside the region.
    ///
    /// Non-finite points are never inside.
    pub fn contains(&self, point: Chromaticity) -> bool {
        if !point.x.is_finite() || !point.y.is_finite() {
            return false;
        }
        match self {
            Self::HalfPlanes(bounds) => bounds.iter().all(|bound| bound.contains(point)),
            Self::Polygon(vertices) => polygon_contains(vertices, point),
        }
    }
}

/// Even-odd ray casting
fn polygon_contains(vertices: &[Chromaticity], point: Chromaticity) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let cross_x = vi.x + (point.y - vi.y) * (vj.x - vi.x) / (vj.y - vi.y);
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Amber signal-light limits, adapted to what an sRGB LED can reach.
///
/// Toward red `y >= 0.39` (as in ECE R48). Toward green `y <= x`, and toward
/// white `y >= 0.66 - 0.5 x`.
const AMBER_BOUNDS: [HalfPlane; 3] = [
    HalfPlane::new(-1.0, 1.0, 0.0),
    HalfPlane::new(0.0, -1.0, -0.39),
    HalfPlane::new(-0.5, -1.0, -0.66),
];

/// Amber zone
pub const AMBER_ZONE: Region<'static> = Region::HalfPlanes(&AMBER_BOUNDS);

const SRGB_PRIMARIES: [Chromaticity; 3] = [
    Chromaticity::new(0.64, 0.33),
    Chromaticity::new(0.30, 0.60),
    Chromaticity::new(0.15, 0.06),
];

/// Triangle spanned by the sRGB primaries
pub const SRGB_GAMUT: Region<'static> = Region::Polygon(&SRGB_PRIMARIES);

/// Returns true if `point` lies inside `region`
///
/// This is a plain predicate: a NaN or infinite point is reported as outside
/// rather than as a [`ColorError`](crate::ColorError).
pub fn is_in_region(point: Chromaticity, region: &Region<'_>) -> bool {
    region.contains(point)
}

/// Returns true if an 8-bit color reads as amber
pub fn is_amber(rgb: Rgb) -> bool {
    AMBER_ZONE.contains(rgb_to_chromaticity(rgb))
}
