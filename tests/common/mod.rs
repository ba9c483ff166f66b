#![allow(dead_code)]

use binary_leds::{
    BinaryLedsModule, ColorAssignment, DisplayDriver, LampPattern, ModuleConfig, ModuleId,
    ModuleSetup, SequenceId, WireAdapter, WireColor, WireSlot,
};
use embassy_time::Instant;

/// Everything the module asked the host to do, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Sever(WireSlot),
    CutCue,
    Strike,
    Pass,
}

#[derive(Debug, Default)]
pub struct RecordingAdapter {
    pub calls: Vec<HostCall>,
}

impl RecordingAdapter {
    pub fn strikes(&self) -> usize {
        self.calls.iter().filter(|c| **c == HostCall::Strike).count()
    }

    pub fn passes(&self) -> usize {
        self.calls.iter().filter(|c| **c == HostCall::Pass).count()
    }
}

impl WireAdapter for RecordingAdapter {
    fn sever(&mut self, slot: WireSlot) {
        self.calls.push(HostCall::Sever(slot));
    }

    fn play_cut_cue(&mut self) {
        self.calls.push(HostCall::CutCue);
    }

    fn report_strike(&mut self) {
        self.calls.push(HostCall::Strike);
    }

    fn report_pass(&mut self) {
        self.calls.push(HostCall::Pass);
    }
}

/// Last thing shown on the lamps; `None` means blank
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub shown: Option<Option<LampPattern>>,
    pub frames: usize,
}

impl DisplayDriver for RecordingDisplay {
    fn show(&mut self, pattern: LampPattern) {
        self.shown = Some(Some(pattern));
        self.frames += 1;
    }

    fn blank(&mut self) {
        self.shown = Some(None);
        self.frames += 1;
    }
}

/// Sequence 0, wires in red/green/blue order, clock started at zero
pub fn first_sequence_module(offset: usize, config: ModuleConfig) -> BinaryLedsModule {
    let setup = ModuleSetup::new(
        SequenceId::from_raw(0).unwrap(),
        offset,
        ColorAssignment::from_colors([WireColor::Red, WireColor::Green, WireColor::Blue]).unwrap(),
    )
    .unwrap();
    BinaryLedsModule::with_setup(ModuleId::from_raw(1), setup, config, Instant::from_millis(0))
}
