#![no_std]

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod event_queue;
pub mod frame_scheduler;
pub mod heatmap;

pub use config::{Gradient, HeatmapConfig};
pub use error::{ConfigError, HeatmapError};
pub use event::{EventStatus, KeyPositionMap, KeyboardEvent, PositionState};
pub use event_queue::{EventPublisher, EventQueue, EventSubscriber};
pub use frame_scheduler::{FrameRequester, FrameRequests, FrameScheduler};
pub use heatmap::{DispatchSummary, Heatmap, HeatmapSet};

pub use color::{BlendingMode, Hsl, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// A lighting layer composited into the shared pixel buffer
pub trait Effect {
    /// Whether the effect currently wants to be drawn
    fn is_active(&self) -> bool;

    /// Composite the effect into `pixels`, blending with what is there
    fn render(&self, pixels: &mut [Rgb]);
}
