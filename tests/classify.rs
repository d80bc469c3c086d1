mod tests {
    use approx::assert_abs_diff_eq;
    use myrtio_color_space::{
        AMBER_ZONE, Chromaticity, HalfPlane, Region, Rgb, SRGB_GAMUT, is_amber, is_in_region,
        rgb_to_chromaticity,
    };

    const AMBER: Rgb = Rgb {
        r: 255,
        g: 191,
        b: 0,
    };

    #[test]
    fn test_chromaticity_of_primaries() {
        let red = rgb_to_chromaticity(Rgb { r: 255, g: 0, b: 0 });
        assert_abs_diff_eq!(red.x, 0.64, epsilon = 1e-3);
        assert_abs_diff_eq!(red.y, 0.33, epsilon = 1e-3);

        let white = rgb_to_chromaticity(Rgb {
            r: 255,
            g: 255,
            b: 255,
        });
        assert_abs_diff_eq!(white.x, Chromaticity::D65.x, epsilon = 1e-3);
        assert_abs_diff_eq!(white.y, Chromaticity::D65.y, epsilon = 1e-3);
    }

    #[test]
    fn test_black_has_no_chromaticity() {
        let black = Rgb { r: 0, g: 0, b: 0 };
        assert_eq!(rgb_to_chromaticity(black), Chromaticity::new(0.0, 0.0));
        assert!(!is_amber(black));
    }

    #[test]
    fn test_amber() {
        let point = rgb_to_chromaticity(AMBER);
        assert!(is_in_region(point, &AMBER_ZONE), "{:?}", point);
        assert!(is_amber(AMBER));
        assert!(is_amber(Rgb {
            r: 255,
            g: 180,
            b: 0
        }));
    }

    #[test]
    fn test_not_amber() {
        assert!(!is_amber(Rgb { r: 0, g: 255, b: 0 }));
        assert!(!is_amber(Rgb { r: 255, g: 0, b: 0 }));
        assert!(!is_amber(Rgb {
            r: 255,
            g: 255,
            b: 0
        }));
        assert!(!is_amber(Rgb {
            r: 255,
            g: 255,
            b: 255
        }));
        assert!(!is_in_region(Chromaticity::new(0.3, 0.6), &AMBER_ZONE));
    }

    #[test]
    fn test_srgb_gamut() {
        assert!(SRGB_GAMUT.contains(Chromaticity::D65));
        assert!(!SRGB_GAMUT.contains(Chromaticity::new(0.7, 0.29)));
        assert!(!SRGB_GAMUT.contains(Chromaticity::new(0.1, 0.8)));
    }

    #[test]
    fn test_non_finite_point_is_outside() {
        let point = Chromaticity::new(f32::NAN, 0.4);
        assert!(!AMBER_ZONE.contains(point));
        assert!(!SRGB_GAMUT.contains(point));
        assert!(!is_in_region(
            Chromaticity::new(0.5, f32::INFINITY),
            &AMBER_ZONE
        ));
    }

    #[test]
    fn test_custom_regions() {
        let bounds = [HalfPlane::new(1.0, 0.0, 0.5), HalfPlane::new(0.0, 1.0, 0.5)];
        let lower_left = Region::HalfPlanes(&bounds);
        assert!(lower_left.contains(Chromaticity::new(0.2, 0.2)));
        assert!(!lower_left.contains(Chromaticity::new(0.6, 0.2)));

        let square = [
            Chromaticity::new(0.2, 0.2),
            Chromaticity::new(0.4, 0.2),
            Chromaticity::new(0.4, 0.4),
            Chromaticity::new(0.2, 0.4),
        ];
        let region = Region::Polygon(&square);
        assert!(region.contains(Chromaticity::new(0.3, 0.3)));
        assert!(!region.contains(Chromaticity::new(0.5, 0.3)));

        let degenerate = Region::Polygon(&square[..2]);
        assert!(!degenerate.contains(Chromaticity::new(0.3, 0.2)));
    }
}
