mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_color_space::{ColorSpace, ColorTransition, OutputSink, Rgb};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    struct LastColor(Option<Rgb>);

    impl OutputSink for LastColor {
        fn write(&mut self, color: Rgb) {
            self.0 = Some(color);
        }
    }

    #[test]
    fn test_new_is_idle() {
        let transition = ColorTransition::new(RED);
        assert_eq!(transition.current(), RED);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_immediate_set() {
        let mut transition = ColorTransition::new(RED);
        transition.set(BLUE, Duration::from_millis(0), Instant::from_millis(0));
        assert_eq!(transition.current(), BLUE);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_crossfade() {
        let mut transition = ColorTransition::new(BLACK).with_space(ColorSpace::Rgb);
        transition.set(WHITE, Duration::from_millis(100), Instant::from_millis(0));
        assert!(transition.is_transitioning());

        transition.tick(Instant::from_millis(0));
        assert_eq!(transition.current(), BLACK);

        transition.tick(Instant::from_millis(50));
        assert_eq!(
            transition.current(),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert!(transition.is_transitioning());

        transition.tick(Instant::from_millis(100));
        assert_eq!(transition.current(), WHITE);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_eased_crossfade() {
        let mut transition = ColorTransition::new(BLACK)
            .with_space(ColorSpace::Rgb)
            .with_easing();
        transition.set(WHITE, Duration::from_millis(100), Instant::from_millis(0));

        // 2 * 0.25^2 = 0.125
        transition.tick(Instant::from_millis(25));
        assert_eq!(transition.current(), Rgb { r: 32, g: 32, b: 32 });
    }

    #[test]
    fn test_retarget_starts_from_current() {
        let mut transition = ColorTransition::new(BLACK).with_space(ColorSpace::Rgb);
        transition.set(WHITE, Duration::from_millis(100), Instant::from_millis(0));
        transition.tick(Instant::from_millis(50));
        let halfway = transition.current();

        transition.set(BLACK, Duration::from_millis(100), Instant::from_millis(50));
        transition.tick(Instant::from_millis(50));
        assert_eq!(transition.current(), halfway);

        transition.tick(Instant::from_millis(200));
        assert_eq!(transition.current(), BLACK);
    }

    #[test]
    fn test_oklab_crossfade_stays_saturated() {
        let mut transition = ColorTransition::new(RED);
        transition.set(BLUE, Duration::from_millis(100), Instant::from_millis(0));
        transition.tick(Instant::from_millis(50));

        let middle = transition.current();
        assert!(middle.r > 100 && middle.b > 100, "{:?}", middle);
        assert!(middle.g < middle.r, "{:?}", middle);
    }

    #[test]
    fn test_future_start_holds_source() {
        let mut transition = ColorTransition::new(BLUE).with_space(ColorSpace::Rgb);
        transition.set(RED, Duration::from_millis(100), Instant::from_millis(1000));

        transition.tick(Instant::from_millis(500));
        assert_eq!(transition.current(), BLUE);
        assert!(transition.is_transitioning());

        transition.tick(Instant::from_millis(1100));
        assert_eq!(transition.current(), RED);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_render_writes_to_sink() {
        let mut transition = ColorTransition::new(RED);
        let mut sink = LastColor(None);

        transition.render(Instant::from_millis(10), &mut sink);
        assert_eq!(sink.0, Some(RED));

        transition.set(BLUE, Duration::from_millis(100), Instant::from_millis(10));
        transition.render(Instant::from_millis(500), &mut sink);
        assert_eq!(sink.0, Some(BLUE));
    }
}
