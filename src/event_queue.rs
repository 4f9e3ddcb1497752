//! Bounded key event queue for `no_std` environments.
//!
//! Key events usually arrive from a matrix scan interrupt while frames are
//! rendered from the main loop. Publishing into this queue and draining it
//! from the render task keeps every heatmap mutation on one thread of
//! execution. Access is guarded by critical sections.

use core::cell::RefCell;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use critical_section::Mutex;
use heapless::Deque;

use crate::event::KeyboardEvent;

/// The queue was full, the event is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub KeyboardEvent);

/// The queue holds no events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEmpty;

/// A bounded queue of keyboard events.
pub struct EventQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<KeyboardEvent, SIZE>>>,
}

impl<const SIZE: usize> EventQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the event source side.
    pub const fn publisher(&self) -> EventPublisher<'_, SIZE> {
        EventPublisher { queue: self }
    }

    /// Handle for the render task side.
    pub const fn subscriber(&self) -> EventSubscriber<'_, SIZE> {
        EventSubscriber { queue: self }
    }

    /// Append an event.
    ///
    /// Returns `Err(QueueFull(event))` if the queue is full.
    pub fn try_publish(&self, event: KeyboardEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(|event| {
                #[cfg(feature = "esp32-log")]
                println!("[EventQueue.try_publish] queue full, dropping {:?}", event);
                QueueFull(event)
            })
        })
    }

    /// Take the oldest event.
    pub fn try_receive(&self) -> Result<KeyboardEvent, QueueEmpty> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(QueueEmpty)
        })
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishing handle for an [`EventQueue`].
#[derive(Clone, Copy)]
pub struct EventPublisher<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventPublisher<'_, SIZE> {
    pub fn try_publish(&self, event: KeyboardEvent) -> Result<(), QueueFull> {
        self.queue.try_publish(event)
    }
}

/// Draining handle for an [`EventQueue`].
#[derive(Clone, Copy)]
pub struct EventSubscriber<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventSubscriber<'_, SIZE> {
    pub fn try_receive(&self) -> Result<KeyboardEvent, QueueEmpty> {
        self.queue.try_receive()
    }
}
