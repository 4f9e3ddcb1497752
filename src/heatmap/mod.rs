//! Key usage heatmap effect
//!
//! Counts how often every tracked key is pressed and paints each key's pixel
//! on a cold-to-hot hue gradient scaled to the most pressed key.

mod gate;
mod renderer;
mod set;
mod tracker;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use gate::Activity;
pub use renderer::{max_count, render_frame, usage_color, usage_ratio};
pub use set::{DispatchSummary, HeatmapSet};
pub use tracker::UsageTracker;

use crate::color::Rgb;
use crate::config::HeatmapConfig;
use crate::error::{ConfigError, HeatmapError};
use crate::event::{EventStatus, KeyPositionMap, KeyboardEvent};
use crate::frame_scheduler::FrameRequester;
use crate::Effect;

/// One heatmap device instance
///
/// Calls into an instance are expected to be serialized by the owner. Use
/// an [`EventQueue`](crate::event_queue::EventQueue) to hand events over
/// from interrupt context.
pub struct Heatmap<'a, K: KeyPositionMap + ?Sized, R: FrameRequester + ?Sized, const SLOTS: usize>
{
    // External dependencies and configuration
    config: HeatmapConfig<SLOTS>,
    keymap: &'a K,
    frames: &'a R,

    // Internal state
    tracker: UsageTracker<SLOTS>,
    activity: Activity,
}

impl<'a, K, R, const SLOTS: usize> Heatmap<'a, K, R, SLOTS>
where
    K: KeyPositionMap + ?Sized,
    R: FrameRequester + ?Sized,
{
    /// Create an inactive heatmap with every count at zero
    pub fn init(
        config: HeatmapConfig<SLOTS>,
        keymap: &'a K,
        frames: &'a R,
    ) -> Result<Self, ConfigError> {
        let tracker = UsageTracker::new(config.len())?;
        Ok(Self {
            config,
            keymap,
            frames,
            tracker,
            activity: Activity::default(),
        })
    }

    /// Handle an event from the keyboard event bus
    ///
    /// Only key presses are counted. Releases, and everything received while
    /// inactive, are ignored. Events of other types are not applicable.
    pub fn on_key_event(&mut self, event: &KeyboardEvent) -> Result<EventStatus, HeatmapError> {
        if !self.is_active() {
            return Ok(EventStatus::Ignored);
        }
        let Some(state) = event.as_position_state() else {
            return Ok(EventStatus::NotApplicable);
        };
        if !state.pressed {
            return Ok(EventStatus::Ignored);
        }

        let slot = self
            .keymap
            .slot_for_position(state.position)
            .ok_or(HeatmapError::UnmappedPosition(state.position))
            .map_err(rejected)?;
        self.record_press(slot).map_err(rejected)?;

        Ok(EventStatus::Recorded)
    }

    /// Count one press of `slot` and ask for a frame
    ///
    /// Does nothing while inactive.
    pub fn record_press(&mut self, slot: usize) -> Result<(), HeatmapError> {
        if !self.is_active() {
            return Ok(());
        }
        self.tracker.record_press(slot)?;
        self.frames.request_frames(1);
        Ok(())
    }

    /// Composite the current heatmap into `pixels`
    pub fn on_frame_render(&self, pixels: &mut [Rgb]) {
        render_frame(
            self.tracker.counts(),
            self.config.pixel_map(),
            self.config.gradient(),
            pixels,
        );
    }

    /// Become the visible effect and request the first frame
    pub fn on_activate(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[Heatmap.on_activate] tracking {} keys", self.tracker.len());
        self.activity.start();
        self.frames.request_frames(1);
    }

    /// Stop counting and rendering, the last frame stays as is
    pub fn on_deactivate(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[Heatmap.on_deactivate]");
        self.activity.stop();
    }

    pub fn is_active(&self) -> bool {
        self.activity.is_active()
    }

    /// Press count of every slot
    pub fn counts(&self) -> &[u32] {
        self.tracker.counts()
    }

    /// Usage ratio of `slot` relative to the most pressed key
    pub fn usage(&self, slot: usize) -> Option<f32> {
        let counts = self.tracker.counts();
        let count = *counts.get(slot)?;
        Some(usage_ratio(count, max_count(counts)))
    }

    pub fn config(&self) -> &HeatmapConfig<SLOTS> {
        &self.config
    }
}

impl<K, R, const SLOTS: usize> Effect for Heatmap<'_, K, R, SLOTS>
where
    K: KeyPositionMap + ?Sized,
    R: FrameRequester + ?Sized,
{
    fn is_active(&self) -> bool {
        Heatmap::is_active(self)
    }

    fn render(&self, pixels: &mut [Rgb]) {
        if self.is_active() {
            self.on_frame_render(pixels);
        }
    }
}

fn rejected(error: HeatmapError) -> HeatmapError {
    #[cfg(feature = "esp32-log")]
    println!("[Heatmap.on_key_event] rejected event: {}", error);
    error
}
