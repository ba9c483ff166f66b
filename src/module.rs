//! Binary LEDs module state machine
//!
//! Owns the randomized setup (sequence, offset, wire colors), the wire
//! states and the difficulty. `tick` drives the lamps, `cut` evaluates a
//! wire cut against the solution table at the moment it happens.

use embassy_time::{Duration, Instant};
use rand::Rng;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::WireAdapter;
use crate::blink::BlinkDelay;
use crate::display::{DisplayDriver, LampPattern};
use crate::module_id::ModuleId;
use crate::sequence::{SEQUENCE_COUNT, SEQUENCE_LENGTH, SequenceId, SequenceTable};
use crate::time_index;
use crate::wire::{ColorAssignment, WIRE_COUNT, WireColor, WireSlot, WireState};

/// Wrong cuts after which the safety valve solves the module
pub const SAFETY_VALVE_THRESHOLD: u8 = 3;

/// Lit share of every step when the lamps never blink, in thousandths
pub const FULLY_SHOWN: u16 = 1000;

/// Behavior switches of the module
#[derive(Debug, Clone)]
pub struct ModuleConfig {
    /// Solve the module once [`SAFETY_VALVE_THRESHOLD`] wrong cuts happened
    pub safety_valve: bool,
    /// Keep the lamps dark until the module is armed
    pub dark_until_armed: bool,
    /// Lit share of every step in thousandths. The lamps are dark for the
    /// rest of the step.
    pub shown_fraction: u16,
}

impl ModuleConfig {
    /// Plain module: lamps run from the start, no safety valve
    pub const fn classic() -> Self {
        Self {
            safety_valve: false,
            dark_until_armed: false,
            shown_fraction: FULLY_SHOWN,
        }
    }

    /// Module with the safety valve, dark until armed
    pub const fn extended() -> Self {
        Self {
            safety_valve: true,
            dark_until_armed: true,
            shown_fraction: FULLY_SHOWN,
        }
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self::extended()
    }
}

/// The randomized part of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleSetup {
    sequence: SequenceId,
    initial_offset: usize,
    assignment: ColorAssignment,
}

impl ModuleSetup {
    /// Returns `None` if `initial_offset` is not a sequence position
    pub const fn new(
        sequence: SequenceId,
        initial_offset: usize,
        assignment: ColorAssignment,
    ) -> Option<Self> {
        if initial_offset >= SEQUENCE_LENGTH {
            return None;
        }
        Some(Self {
            sequence,
            initial_offset,
            assignment,
        })
    }

    /// Draw sequence, offset and wire colors uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sequence = SequenceId::ALL[rng.gen_range(0..SEQUENCE_COUNT)];
        let initial_offset = rng.gen_range(0..SEQUENCE_LENGTH);
        let assignment = ColorAssignment::shuffled(rng);
        Self {
            sequence,
            initial_offset,
            assignment,
        }
    }

    pub const fn sequence(&self) -> SequenceId {
        self.sequence
    }

    pub const fn initial_offset(&self) -> usize {
        self.initial_offset
    }

    pub const fn assignment(&self) -> ColorAssignment {
        self.assignment
    }
}

/// Where the module is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// Waiting for the activation signal; every cut is a strike
    Unarmed,
    /// Cuts are evaluated against the solution table
    Armed,
    /// Terminal. Lamps are dark and cuts are no longer evaluated.
    Solved,
}

/// Result of a cut, as reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutOutcome {
    /// Cut at the right moment; the module is solved
    Pass,
    /// Wrong moment, or the module was not armed yet
    Strike,
    /// Wrong cut that tripped the safety valve: a strike followed by a pass
    Released,
    /// The wire was cut before. Nothing happened.
    AlreadyCut,
    /// The module was solved already; the cut was not evaluated
    Ignored,
}

/// Binary LEDs puzzle module
#[derive(Debug, Clone)]
pub struct BinaryLedsModule {
    id: ModuleId,
    config: ModuleConfig,
    setup: ModuleSetup,
    start: Instant,

    wires: [WireState; WIRE_COUNT],
    armed: bool,
    solved: bool,
    blink_delay: BlinkDelay,
    wrong_cuts: u8,
}

impl BinaryLedsModule {
    /// Create a module with a random setup, starting its clock at `now`
    pub fn new<R: Rng + ?Sized>(rng: &mut R, config: ModuleConfig, now: Instant) -> Self {
        Self::with_setup(ModuleId::next(), ModuleSetup::random(rng), config, now)
    }

    /// Create a module from an explicit setup
    pub fn with_setup(id: ModuleId, setup: ModuleSetup, config: ModuleConfig, now: Instant) -> Self {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Binary LEDs {}] Using sequence number {} with offset {}",
            id,
            setup.sequence.as_raw(),
            setup.initial_offset
        );

        let colors = setup.assignment.colors();
        Self {
            id,
            config,
            setup,
            start: now,
            wires: colors.map(WireState::new),
            armed: false,
            solved: false,
            blink_delay: BlinkDelay::default(),
            wrong_cuts: 0,
        }
    }

    /// Handle the activation signal of the host
    pub fn activate(&mut self) {
        self.armed = true;
    }

    /// Refresh the lamps
    pub fn tick<D: DisplayDriver + ?Sized>(&self, now: Instant, display: &mut D) {
        if self.solved || (self.config.dark_until_armed && !self.armed) {
            display.blank();
            return;
        }

        let step = self.step_duration();
        if !time_index::is_lit(now, self.start, step, self.config.shown_fraction) {
            display.blank();
            return;
        }

        let value = self.value_at(now);
        let pattern = LampPattern::new(value).unwrap_or_else(|| {
            #[cfg(feature = "esp32-log")]
            println!("[Binary LEDs {}] Error, number out of range: {}", self.id, value);
            LampPattern::OFF
        });
        display.show(pattern);
    }

    /// Cut the wire in `slot` at `now`
    ///
    /// A wire can only be cut once; later cuts of the same wire return
    /// [`CutOutcome::AlreadyCut`] without touching the adapter or the state.
    pub fn cut<A: WireAdapter + ?Sized>(
        &mut self,
        slot: WireSlot,
        now: Instant,
        adapter: &mut A,
    ) -> CutOutcome {
        let wire = &mut self.wires[slot.index()];
        if !wire.cut() {
            return CutOutcome::AlreadyCut;
        }
        let color = wire.color();
        adapter.sever(slot);

        let outcome = self.evaluate_cut(color, now);
        match outcome {
            CutOutcome::Pass => adapter.report_pass(),
            CutOutcome::Strike => adapter.report_strike(),
            CutOutcome::Released => {
                adapter.report_strike();
                adapter.report_pass();
            }
            CutOutcome::AlreadyCut | CutOutcome::Ignored => {}
        }

        adapter.play_cut_cue();
        outcome
    }

    fn evaluate_cut(&mut self, color: WireColor, now: Instant) -> CutOutcome {
        if self.solved {
            return CutOutcome::Ignored;
        }

        let required = SequenceTable::solution(self.setup.sequence, color);
        let current = self.position_at(now);
        #[cfg(feature = "esp32-log")]
        println!(
            "[Binary LEDs {}] Cutting wire {}. Required time index is {}, current time is {}",
            self.id,
            color.as_str(),
            required,
            current
        );

        if !self.armed {
            #[cfg(feature = "esp32-log")]
            println!("[Binary LEDs {}] Cut wire before module has been activated!", self.id);
            return self.strike();
        }

        if current == required {
            self.solved = true;
            return CutOutcome::Pass;
        }

        self.strike()
    }

    fn strike(&mut self) -> CutOutcome {
        self.blink_delay = self.blink_delay.escalate();
        self.wrong_cuts = self.wrong_cuts.saturating_add(1);

        if self.config.safety_valve && self.wrong_cuts >= SAFETY_VALVE_THRESHOLD {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Binary LEDs {}] {} wrong cuts, releasing the module",
                self.id, self.wrong_cuts
            );
            self.solved = true;
            return CutOutcome::Released;
        }

        CutOutcome::Strike
    }

    /// Sequence position displayed at `now`
    ///
    /// Also valid for instants in the future, assuming no further wrong cut
    /// changes the blink delay.
    pub fn position_at(&self, now: Instant) -> usize {
        time_index::position(
            now,
            self.start,
            self.setup.initial_offset,
            self.step_duration(),
            SEQUENCE_LENGTH,
        )
    }

    /// Sequence value displayed at `now`
    pub fn value_at(&self, now: Instant) -> u8 {
        SequenceTable::value_at(self.setup.sequence, self.position_at(now))
    }

    /// Steps until `value` shows up, counting from `skip` steps after `now`
    pub fn steps_until_value(&self, value: u8, now: Instant, skip: u32) -> Option<u32> {
        time_index::steps_until_value(
            SequenceTable::sequence(self.setup.sequence).values(),
            value,
            now,
            self.start,
            self.setup.initial_offset,
            self.step_duration(),
            skip,
        )
    }

    pub const fn state(&self) -> ModuleState {
        if self.solved {
            ModuleState::Solved
        } else if self.armed {
            ModuleState::Armed
        } else {
            ModuleState::Unarmed
        }
    }

    pub const fn id(&self) -> ModuleId {
        self.id
    }

    pub const fn config(&self) -> &ModuleConfig {
        &self.config
    }

    pub const fn sequence_id(&self) -> SequenceId {
        self.setup.sequence
    }

    pub const fn initial_offset(&self) -> usize {
        self.setup.initial_offset
    }

    pub const fn assignment(&self) -> ColorAssignment {
        self.setup.assignment
    }

    pub const fn start(&self) -> Instant {
        self.start
    }

    pub const fn wire(&self, slot: WireSlot) -> WireState {
        self.wires[slot.index()]
    }

    pub const fn wires(&self) -> &[WireState; WIRE_COUNT] {
        &self.wires
    }

    /// Slot holding the wire of `color`
    pub fn slot_of(&self, color: WireColor) -> WireSlot {
        self.setup.assignment.slot_of(color)
    }

    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    pub const fn wrong_cuts(&self) -> u8 {
        self.wrong_cuts
    }

    pub const fn blink_delay(&self) -> BlinkDelay {
        self.blink_delay
    }

    /// Time each sequence position stays on the lamps
    pub const fn step_duration(&self) -> Duration {
        self.blink_delay.duration()
    }
}
