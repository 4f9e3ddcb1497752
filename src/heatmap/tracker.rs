use heapless::Vec;

use crate::error::{ConfigError, HeatmapError};

/// Per-slot key press counters
///
/// Counts only ever grow. They saturate at `u32::MAX` rather than wrap.
#[derive(Debug, Clone)]
pub struct UsageTracker<const SLOTS: usize> {
    counts: Vec<u32, SLOTS>,
}

impl<const SLOTS: usize> UsageTracker<SLOTS> {
    /// Create `len` zeroed counters
    pub fn new(len: usize) -> Result<Self, ConfigError> {
        let mut counts = Vec::new();
        counts
            .resize(len, 0)
            .map_err(|()| ConfigError::TooManySlots {
                len,
                capacity: SLOTS,
            })?;
        Ok(Self { counts })
    }

    /// Count one press of `slot`
    pub fn record_press(&mut self, slot: usize) -> Result<(), HeatmapError> {
        let len = self.counts.len();
        let count = self
            .counts
            .get_mut(slot)
            .ok_or(HeatmapError::SlotOutOfRange { slot, len })?;
        *count = count.saturating_add(1);
        Ok(())
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
