mod tests {
    use approx::assert_abs_diff_eq;
    use embassy_time::Duration;
    use myrtio_color_space::ColorError;
    use myrtio_color_space::math::{clamp_progress, ease_in_out_quad, lerp, progress, wrap_degrees};

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(-2.0, 2.0, 0.5), 0.0);
    }

    #[test]
    fn test_progress() {
        assert_eq!(
            progress(Duration::from_millis(0), Duration::from_millis(100)),
            0.0
        );
        assert_eq!(
            progress(Duration::from_millis(50), Duration::from_millis(100)),
            0.5
        );
        assert_eq!(
            progress(Duration::from_millis(150), Duration::from_millis(100)),
            1.0
        );
        assert_eq!(
            progress(Duration::from_millis(10), Duration::from_millis(0)),
            1.0
        );
    }

    #[test]
    fn test_clamp_progress() {
        assert_eq!(clamp_progress(0.25), Ok(0.25));
        assert_eq!(clamp_progress(-1.0), Ok(0.0));
        assert_eq!(clamp_progress(3.0), Ok(1.0));
        assert_eq!(
            clamp_progress(f32::NAN),
            Err(ColorError::NonFinite { input: "progress" })
        );
        assert!(clamp_progress(f32::INFINITY).is_err());
    }

    #[test]
    fn test_ease_in_out_quad() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(0.25), 0.125);
        assert!(ease_in_out_quad(0.75) > 0.75);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_abs_diff_eq!(wrap_degrees(-10.0), 350.0, epsilon = 1e-4);
        assert_abs_diff_eq!(wrap_degrees(725.0), 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(wrap_degrees(-720.0), 0.0, epsilon = 1e-4);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-1e-6), 0.0);
        assert_eq!(wrap_degrees(90.0), 90.0);
    }
}
