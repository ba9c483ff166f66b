//! Inbound module events
//!
//! Input handlers (wire interaction, bomb activation) run outside the
//! render loop. They push [`ModuleEvent`]s into an [`EventQueue`], and the
//! [`EventProcessor`] applies them to the module on the next frame. Every
//! cut carries the instant it happened, so it is judged at that instant and
//! not at the frame that processes it.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;
use heapless::Deque;

use crate::WireAdapter;
use crate::module::{BinaryLedsModule, CutOutcome};
use crate::wire::WireSlot;

/// Event coming from the host or the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleEvent {
    /// The bomb was armed
    Activate,
    /// The player interacted with the wire in `slot` at `at`
    WireInteracted { slot: WireSlot, at: Instant },
}

/// Error returned when the queue has no room left. Gives the event back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub ModuleEvent);

/// A bounded event queue, safe to push into from interrupts
///
/// Backed by a fixed-size `heapless::Deque` behind a critical section.
pub struct EventQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ModuleEvent, SIZE>>>,
}

impl<const SIZE: usize> EventQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue
    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { queue: self }
    }

    /// Get a receiver handle for this queue
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { queue: self }
    }

    pub fn push(&self, event: ModuleEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(QueueFull)
        })
    }

    pub fn pop(&self) -> Option<ModuleEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

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

/// Handle used by input handlers to report events
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    pub fn send(&self, event: ModuleEvent) -> Result<(), QueueFull> {
        self.queue.push(event)
    }

    /// Report the activation signal
    pub fn activate(&self) -> Result<(), QueueFull> {
        self.send(ModuleEvent::Activate)
    }

    /// Report a wire interaction at `at`
    pub fn wire_interacted(&self, slot: WireSlot, at: Instant) -> Result<(), QueueFull> {
        self.send(ModuleEvent::WireInteracted { slot, at })
    }
}

/// Handle the event processor drains the queue through
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<ModuleEvent> {
        self.queue.pop()
    }
}

/// Summary of one `process_pending` pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessedEvents {
    /// Number of events taken from the queue
    pub count: usize,
    /// Outcome of the last cut in this pass, if any
    pub last_cut: Option<CutOutcome>,
}

/// Applies queued events to a module
pub struct EventProcessor<'a, const SIZE: usize> {
    events: EventReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> EventProcessor<'a, SIZE> {
    pub const fn new(events: EventReceiver<'a, SIZE>) -> Self {
        Self { events }
    }

    /// Apply all pending events in arrival order (non-blocking)
    pub fn process_pending<A: WireAdapter + ?Sized>(
        &mut self,
        module: &mut BinaryLedsModule,
        adapter: &mut A,
    ) -> ProcessedEvents {
        let mut processed = ProcessedEvents::default();

        while let Some(event) = self.events.try_receive() {
            processed.count += 1;
            match event {
                ModuleEvent::Activate => module.activate(),
                ModuleEvent::WireInteracted { slot, at } => {
                    processed.last_cut = Some(module.cut(slot, at, adapter));
                }
            }
        }

        processed
    }
}
