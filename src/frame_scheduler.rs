//! Frame requests and frame pacing.
//!
//! Effects never render on their own: they ask for frames through a
//! [`FrameRequester`] and the [`FrameScheduler`] decides when a frame is
//! actually drawn. The caller is responsible for sleeping between ticks.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

use crate::color::Rgb;
use crate::config::HeatmapConfig;
use crate::error::ConfigError;
use crate::{Effect, OutputDriver};

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Fire-and-forget hint that more frames should be rendered soon.
pub trait FrameRequester {
    /// Ask for at least `count` more frames.
    fn request_frames(&self, count: u32);
}

/// Pending frame counter shared between event handlers and the render loop.
///
/// Requests coalesce: the pending count is the largest outstanding request,
/// not the sum, so a burst of key presses still costs one frame.
pub struct FrameRequests {
    pending: Mutex<Cell<u32>>,
}

impl FrameRequests {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(0)),
        }
    }

    /// Number of frames still owed.
    pub fn pending(&self) -> u32 {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }

    /// Consume one pending frame.
    ///
    /// Returns `false` if nothing was requested.
    pub fn take(&self) -> bool {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            match pending.get() {
                0 => false,
                n => {
                    pending.set(n - 1);
                    true
                }
            }
        })
    }
}

impl Default for FrameRequests {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRequester for FrameRequests {
    fn request_frames(&self, count: u32) {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            pending.set(pending.get().max(count));
        });
    }
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Whether a frame was drawn and written to the output.
    pub rendered: bool,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Frame scheduler owning the shared pixel buffer.
///
/// On every tick with a pending frame request, the buffer is reset to the
/// background color, the effect composites into it, and the result goes to
/// the output driver. Ticks without a request leave the last frame on the
/// LEDs.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::<_, 64>::new(driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now(), &FRAME_REQUESTS, &heatmaps);
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, const PIXELS: usize> {
    output: O,
    frame: [Rgb; PIXELS],
    background: Rgb,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver, const PIXELS: usize> FrameScheduler<O, PIXELS> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) and a black background.
    pub fn new(driver: O) -> Self {
        Self::with_frame_duration(driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(driver: O, frame_duration: Duration) -> Self {
        Self {
            output: driver,
            frame: [Rgb::default(); PIXELS],
            background: Rgb::default(),
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Set the color lower layers start from.
    #[must_use]
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Process one frame slot and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders and writes a frame if one was requested
    /// 3. Returns the deadline for the next frame
    pub fn tick<E: Effect + ?Sized>(
        &mut self,
        now: Instant,
        requests: &FrameRequests,
        effect: &E,
    ) -> FrameResult {
        // Skip the backlog after long stalls instead of bursting
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let rendered = requests.take();
        if rendered {
            self.frame.fill(self.background);
            effect.render(&mut self.frame);
            self.output.write(&self.frame);
        }

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            rendered,
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Reject a heatmap configuration that maps slots past this buffer.
    pub fn check_config<const SLOTS: usize>(
        &self,
        config: &HeatmapConfig<SLOTS>,
    ) -> Result<(), ConfigError> {
        config.check_pixels(PIXELS)
    }

    /// Last composed frame.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
