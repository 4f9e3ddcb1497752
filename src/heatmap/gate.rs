/// Whether the heatmap is the selected effect
///
/// Starts inactive. Only `start` and `stop` change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Activity {
    #[default]
    Inactive,
    Active,
}

impl Activity {
    /// Switch to active
    pub fn start(&mut self) {
        *self = Self::Active;
    }

    /// Switch to inactive
    pub fn stop(&mut self) {
        *self = Self::Inactive;
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
