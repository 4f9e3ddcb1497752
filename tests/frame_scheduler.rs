mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_key_heatmap::color::Rgb;
    use myrtio_key_heatmap::{
        ConfigError, Effect, FrameRequester, FrameRequests, FrameScheduler, Gradient, Heatmap, HeatmapConfig,
        OutputDriver,
    };

    const KEYMAP: [usize; 2] = [0, 1];

    #[derive(Default)]
    struct RecordingDriver {
        writes: usize,
        last: [Rgb; 4],
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.writes += 1;
            self.last[..colors.len()].copy_from_slice(colors);
        }
    }

    struct Solid(Rgb);

    impl Effect for Solid {
        fn is_active(&self) -> bool {
            true
        }

        fn render(&self, pixels: &mut [Rgb]) {
            pixels.fill(self.0);
        }
    }

    #[test]
    fn test_requests_coalesce() {
        let frames = FrameRequests::new();
        frames.request_frames(1);
        frames.request_frames(1);
        frames.request_frames(1);
        assert_eq!(frames.pending(), 1);

        frames.request_frames(3);
        frames.request_frames(2);
        assert_eq!(frames.pending(), 3);

        assert!(frames.take());
        assert!(frames.take());
        assert!(frames.take());
        assert!(!frames.take());
    }

    #[test]
    fn test_tick_without_request_does_not_render() {
        let frames = FrameRequests::new();
        let mut scheduler = FrameScheduler::<_, 4>::new(RecordingDriver::default());

        let result = scheduler.tick(Instant::from_millis(0), &frames, &Solid(Rgb::new(1, 2, 3)));

        assert!(!result.rendered);
        assert_eq!(scheduler.output().writes, 0);
    }

    #[test]
    fn test_tick_renders_requested_frame_once() {
        let frames = FrameRequests::new();
        let color = Rgb::new(1, 2, 3);
        let mut scheduler = FrameScheduler::<_, 4>::new(RecordingDriver::default());
        frames.request_frames(1);

        let first = scheduler.tick(Instant::from_millis(0), &frames, &Solid(color));
        let second = scheduler.tick(Instant::from_millis(20), &frames, &Solid(color));

        assert!(first.rendered);
        assert!(!second.rendered);
        assert_eq!(scheduler.output().writes, 1);
        assert_eq!(scheduler.output().last, [color; 4]);
    }

    #[test]
    fn test_frame_pacing_and_drift() {
        let frames = FrameRequests::new();
        let mut scheduler = FrameScheduler::<_, 4>::with_frame_duration(
            RecordingDriver::default(),
            Duration::from_millis(16),
        );
        let effect = Solid(Rgb::default());

        let result = scheduler.tick(Instant::from_millis(0), &frames, &effect);
        assert_eq!(result.next_deadline, Instant::from_millis(16));
        assert_eq!(result.sleep_duration, Duration::from_millis(16));

        let result = scheduler.tick(Instant::from_millis(20), &frames, &effect);
        assert_eq!(result.next_deadline, Instant::from_millis(32));
        assert_eq!(result.sleep_duration, Duration::from_millis(12));

        // Long stall: the backlog is dropped
        let result = scheduler.tick(Instant::from_millis(500), &frames, &effect);
        assert_eq!(result.next_deadline, Instant::from_millis(516));
        assert_eq!(result.sleep_duration, Duration::from_millis(16));
    }

    #[test]
    fn test_scheduler_rejects_map_past_buffer() {
        let scheduler = FrameScheduler::<_, 4>::new(RecordingDriver::default());
        let inside: HeatmapConfig<4> = HeatmapConfig::new(&[0, 3], Gradient::default()).unwrap();
        let outside: HeatmapConfig<4> = HeatmapConfig::new(&[0, 4], Gradient::default()).unwrap();

        assert_eq!(scheduler.check_config(&inside), Ok(()));
        assert_eq!(
            scheduler.check_config(&outside),
            Err(ConfigError::PixelOutOfRange {
                pixel: 4,
                num_pixels: 4
            })
        );
    }

    #[test]
    fn test_heatmap_frame_over_background() {
        let frames = FrameRequests::new();
        let background = Rgb::new(9, 9, 9);
        let mut scheduler =
            FrameScheduler::<_, 4>::new(RecordingDriver::default()).with_background(background);
        let config: HeatmapConfig<4> =
            HeatmapConfig::new(&[1, 3], Gradient::default().with_hues(240, 0)).unwrap();
        let mut heatmap = Heatmap::init(config, &KEYMAP, &frames).unwrap();

        heatmap.on_activate();
        let result = scheduler.tick(Instant::from_millis(0), &frames, &heatmap);
        assert!(result.rendered);

        let cold = Rgb::new(0, 0, 255);
        assert_eq!(scheduler.frame(), &[background, cold, background, cold]);

        heatmap.record_press(1).unwrap();
        let result = scheduler.tick(Instant::from_millis(16), &frames, &heatmap);
        assert!(result.rendered);

        let hot = Rgb::new(255, 0, 0);
        assert_eq!(scheduler.output().last, [background, cold, background, hot]);
        assert_eq!(scheduler.output().writes, 2);
    }
}
