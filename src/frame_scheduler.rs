//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::WireAdapter;
use crate::display::DisplayDriver;
use crate::event::{EventProcessor, ProcessedEvents};
use crate::module::BinaryLedsModule;

/// Default target frame rate (90 FPS).
pub const DEFAULT_FPS: u32 = 90;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Events applied to the module during this frame.
    pub events: ProcessedEvents,
}

/// Portable frame scheduler that drives a module without async.
///
/// Every frame it:
/// - Applies queued input events to the module
/// - Refreshes the lamps
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(module, display, adapter, EVENTS.receiver());
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, D: DisplayDriver, A: WireAdapter, const EVENT_QUEUE_SIZE: usize> {
    module: BinaryLedsModule,
    display: D,
    adapter: A,
    events: EventProcessor<'a, EVENT_QUEUE_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, D: DisplayDriver, A: WireAdapter, const EVENT_QUEUE_SIZE: usize>
    FrameScheduler<'a, D, A, EVENT_QUEUE_SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (90 FPS) for frame timing.
    pub fn new(
        module: BinaryLedsModule,
        display: D,
        adapter: A,
        events: EventProcessor<'a, EVENT_QUEUE_SIZE>,
    ) -> Self {
        Self::with_frame_duration(module, display, adapter, events, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        module: BinaryLedsModule,
        display: D,
        adapter: A,
        events: EventProcessor<'a, EVENT_QUEUE_SIZE>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            module,
            display,
            adapter,
            events,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after long stalls instead of bursting to catch up
        let max_drift = self.frame_duration.as_ticks() * 2;
        if now.as_ticks() > self.next_frame.as_ticks() + max_drift {
            self.next_frame = now;
        }

        let events = self
            .events
            .process_pending(&mut self.module, &mut self.adapter);
        self.module.tick(now, &mut self.display);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            events,
        }
    }

    pub fn module(&self) -> &BinaryLedsModule {
        &self.module
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }
}
