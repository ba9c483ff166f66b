#![no_std]

pub mod blink;
pub mod color;
pub mod display;
pub mod event;
pub mod frame_scheduler;
pub mod module;
pub mod module_id;
pub mod sequence;
pub mod time_index;
pub mod wire;

pub use blink::BlinkDelay;
pub use display::{DisplayDriver, LampPattern, LedDisplay, LedDisplayConfig};
pub use event::{EventProcessor, EventQueue, EventReceiver, EventSender, ModuleEvent, QueueFull};
pub use frame_scheduler::FrameScheduler;
pub use module::{BinaryLedsModule, CutOutcome, ModuleConfig, ModuleSetup, ModuleState};
pub use module_id::ModuleId;
pub use sequence::{SequenceId, SequenceTable};
pub use wire::{ColorAssignment, WireColor, WireSlot, WireState};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`LedDisplay`] is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Outbound effects of a wire cut
///
/// Implemented by the host. Every call is fire-and-forget.
pub trait WireAdapter {
    /// Show the wire in `slot` as cut
    fn sever(&mut self, slot: WireSlot);

    /// Play the snip sound and the interaction punch
    fn play_cut_cue(&mut self);

    /// Give the bomb a strike
    fn report_strike(&mut self);

    /// Mark the module as solved
    fn report_pass(&mut self);
}
