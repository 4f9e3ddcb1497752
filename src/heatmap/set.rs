use heapless::Vec;

use super::Heatmap;
use crate::color::Rgb;
use crate::config::HeatmapConfig;
use crate::error::{ConfigError, HeatmapError};
use crate::event::{EventStatus, KeyPositionMap, KeyboardEvent};
use crate::event_queue::EventSubscriber;
use crate::frame_scheduler::FrameRequester;
use crate::Effect;

/// Tally of per-instance outcomes for dispatched events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub recorded: usize,
    pub ignored: usize,
    pub not_applicable: usize,
    pub rejected: usize,
}

impl DispatchSummary {
    fn add(&mut self, result: Result<EventStatus, HeatmapError>) {
        match result {
            Ok(EventStatus::Recorded) => self.recorded += 1,
            Ok(EventStatus::Ignored) => self.ignored += 1,
            Ok(EventStatus::NotApplicable) => self.not_applicable += 1,
            Err(_) => self.rejected += 1,
        }
    }

    fn merge(&mut self, other: Self) {
        self.recorded += other.recorded;
        self.ignored += other.ignored;
        self.not_applicable += other.not_applicable;
        self.rejected += other.rejected;
    }
}

/// Independent heatmap instances sharing one key map and frame requester
///
/// Every instance sees every dispatched event, like listeners subscribed to
/// the same event bus.
pub struct HeatmapSet<
    'a,
    K: KeyPositionMap + ?Sized,
    R: FrameRequester + ?Sized,
    const SLOTS: usize,
    const INSTANCES: usize,
> {
    instances: Vec<Heatmap<'a, K, R, SLOTS>, INSTANCES>,
}

impl<'a, K, R, const SLOTS: usize, const INSTANCES: usize> HeatmapSet<'a, K, R, SLOTS, INSTANCES>
where
    K: KeyPositionMap + ?Sized,
    R: FrameRequester + ?Sized,
{
    /// Build one heatmap per configuration record
    pub fn from_configs(
        configs: &[HeatmapConfig<SLOTS>],
        keymap: &'a K,
        frames: &'a R,
    ) -> Result<Self, ConfigError> {
        if configs.len() > INSTANCES {
            return Err(ConfigError::TooManyInstances {
                len: configs.len(),
                capacity: INSTANCES,
            });
        }

        let mut instances = Vec::new();
        for config in configs {
            let heatmap = Heatmap::init(config.clone(), keymap, frames)?;
            if instances.push(heatmap).is_err() {
                return Err(ConfigError::TooManyInstances {
                    len: configs.len(),
                    capacity: INSTANCES,
                });
            }
        }
        Ok(Self { instances })
    }

    /// Deliver one event to every instance
    ///
    /// A rejection by one instance does not stop delivery to the others.
    pub fn dispatch(&mut self, event: &KeyboardEvent) -> DispatchSummary {
        let mut summary = DispatchSummary::default();
        for heatmap in &mut self.instances {
            summary.add(heatmap.on_key_event(event));
        }
        summary
    }

    /// Drain queued events and dispatch them in order
    pub fn dispatch_pending<const QUEUE: usize>(
        &mut self,
        events: EventSubscriber<'_, QUEUE>,
    ) -> DispatchSummary {
        let mut summary = DispatchSummary::default();
        while let Ok(event) = events.try_receive() {
            summary.merge(self.dispatch(&event));
        }
        summary
    }

    pub fn get(&self, index: usize) -> Option<&Heatmap<'a, K, R, SLOTS>> {
        self.instances.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Heatmap<'a, K, R, SLOTS>> {
        self.instances.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Heatmap<'a, K, R, SLOTS>> {
        self.instances.iter()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<K, R, const SLOTS: usize, const INSTANCES: usize> Effect
    for HeatmapSet<'_, K, R, SLOTS, INSTANCES>
where
    K: KeyPositionMap + ?Sized,
    R: FrameRequester + ?Sized,
{
    fn is_active(&self) -> bool {
        self.instances.iter().any(Effect::is_active)
    }

    /// Active instances composite in configuration order
    fn render(&self, pixels: &mut [Rgb]) {
        for heatmap in &self.instances {
            Effect::render(heatmap, pixels);
        }
    }
}
