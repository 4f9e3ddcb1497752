mod tests {
    use myrtio_key_heatmap::color::{BlendingMode, Hsl, Rgb, hsl_to_rgb};
    use myrtio_key_heatmap::heatmap::{max_count, render_frame, usage_color, usage_ratio};
    use myrtio_key_heatmap::Gradient;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn hue_color(hue: f32) -> Rgb {
        hsl_to_rgb(Hsl::new(hue, 100, 50))
    }

    #[test]
    fn test_max_count_floor() {
        assert_eq!(max_count(&[]), 1);
        assert_eq!(max_count(&[0, 0, 0]), 1);
        assert_eq!(max_count(&[0, 10, 5]), 10);
    }

    #[test]
    fn test_usage_ratio() {
        assert_eq!(usage_ratio(0, 1), 0.0);
        assert_eq!(usage_ratio(5, 10), 0.5);
        assert_eq!(usage_ratio(10, 10), 1.0);
        assert_eq!(usage_ratio(3, 0), 1.0);
    }

    #[test]
    fn test_all_zero_counts_render_cold() {
        let gradient = Gradient::default().with_hues(240, 0);
        let mut pixels = [BLACK; 4];

        render_frame(&[0, 0, 0, 0], &[0, 1, 2, 3], &gradient, &mut pixels);

        assert_eq!(pixels, [hue_color(240.0); 4]);
    }

    #[test]
    fn test_three_slot_gradient() {
        let gradient = Gradient::default().with_hues(200, 20);
        let mut pixels = [BLACK; 8];

        render_frame(&[0, 10, 5], &[5, 6, 7], &gradient, &mut pixels);

        assert_eq!(pixels[..5], [BLACK; 5]);
        assert_eq!(pixels[5], hue_color(200.0));
        assert_eq!(pixels[6], hue_color(20.0));
        assert_eq!(pixels[7], hue_color(110.0));
    }

    #[test]
    fn test_single_hot_slot() {
        let gradient = Gradient::default().with_hues(120, 0);
        let mut pixels = [BLACK; 3];

        render_frame(&[0, 7, 0], &[0, 1, 2], &gradient, &mut pixels);

        assert_eq!(pixels, [hue_color(120.0), hue_color(0.0), hue_color(120.0)]);
    }

    #[test]
    fn test_tied_maximum_slots_are_all_hot() {
        let gradient = Gradient::default().with_hues(240, 0);
        let mut pixels = [BLACK; 3];

        render_frame(&[4, 4, 0], &[0, 1, 2], &gradient, &mut pixels);

        assert_eq!(pixels[0], hue_color(0.0));
        assert_eq!(pixels[1], hue_color(0.0));
        assert_eq!(pixels[2], hue_color(240.0));
    }

    #[test]
    fn test_pixel_map_reorders_output() {
        let gradient = Gradient::default().with_hues(240, 0);
        let mut pixels = [BLACK; 2];

        render_frame(&[1, 0], &[1, 0], &gradient, &mut pixels);

        assert_eq!(pixels, [hue_color(240.0), hue_color(0.0)]);
    }

    #[test]
    fn test_render_blends_with_existing_pixels() {
        let gradient = Gradient::default()
            .with_hues(0, 120)
            .with_blending_mode(BlendingMode::Add);
        let mut pixels = [Rgb::new(10, 10, 10); 2];

        render_frame(&[0, 0], &[0, 1], &gradient, &mut pixels);

        assert_eq!(pixels, [Rgb::new(255, 10, 10); 2]);
    }

    #[test]
    fn test_render_is_repeatable() {
        let gradient = Gradient::default().with_hues(300, 60);
        let counts = [3, 9, 1, 0];
        let map = [0, 1, 2, 3];
        let mut first = [BLACK; 4];
        let mut second = [BLACK; 4];

        render_frame(&counts, &map, &gradient, &mut first);
        render_frame(&counts, &map, &gradient, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_destinations_outside_buffer_are_skipped() {
        let gradient = Gradient::default();
        let mut pixels = [BLACK; 2];

        render_frame(&[1, 1], &[0, 99], &gradient, &mut pixels);

        assert_eq!(pixels[0], usage_color(&gradient, 1.0));
        assert_eq!(pixels[1], BLACK);
    }
}
