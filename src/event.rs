//! Keyboard events delivered to the heatmap

/// A physical key changed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionState {
    /// Logical key position in the keyboard matrix
    pub position: u32,
    /// `true` on press, `false` on release
    pub pressed: bool,
}

impl PositionState {
    pub const fn pressed(position: u32) -> Self {
        Self {
            position,
            pressed: true,
        }
    }

    pub const fn released(position: u32) -> Self {
        Self {
            position,
            pressed: false,
        }
    }
}

/// Events published by the keyboard's event system
///
/// Every listener receives every event and picks the ones it understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEvent {
    /// Physical key press or release
    PositionStateChanged(PositionState),
    /// HID keycode press or release
    KeycodeStateChanged { keycode: u16, pressed: bool },
    /// Keymap layer toggled
    LayerStateChanged { layer: u8, active: bool },
}

impl KeyboardEvent {
    /// Position state carried by the event, if any
    pub const fn as_position_state(&self) -> Option<PositionState> {
        match self {
            Self::PositionStateChanged(state) => Some(*state),
            _ => None,
        }
    }
}

/// Outcome of a key event that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// A key press was counted
    Recorded,
    /// Understood but not counted (release, or heatmap inactive)
    Ignored,
    /// The event type is not handled by the heatmap
    NotApplicable,
}

/// Translates key positions into heatmap slots
///
/// Owned by the keyboard layout, shared by every heatmap instance.
pub trait KeyPositionMap {
    /// Slot tracking `position`, `None` if the key has no slot
    fn slot_for_position(&self, position: u32) -> Option<usize>;
}

/// Lookup table indexed by key position, holding slot indices
impl KeyPositionMap for [usize] {
    fn slot_for_position(&self, position: u32) -> Option<usize> {
        self.get(usize::try_from(position).ok()?).copied()
    }
}

impl<const K: usize> KeyPositionMap for [usize; K] {
    fn slot_for_position(&self, position: u32) -> Option<usize> {
        self.as_slice().slot_for_position(position)
    }
}
