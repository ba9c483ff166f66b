//! Lamp display
//!
//! The module shows a 5-bit value on five on/off lamps. [`DisplayDriver`] is
//! the boundary the module talks to; [`LedDisplay`] implements it on top of
//! an LED strip [`OutputDriver`].

use crate::OutputDriver;
use crate::color::{LAMP_LIT, LAMP_UNLIT, Rgb};
use crate::sequence::MAX_VALUE;

/// Number of lamps on the module
pub const LAMP_COUNT: usize = 5;

/// Receives the value to show once per tick
pub trait DisplayDriver {
    /// Show a pattern on the lamps
    fn show(&mut self, pattern: LampPattern);

    /// Turn every lamp off
    fn blank(&mut self);
}

/// Five lamp states decoded from a value in `0..=31`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LampPattern(u8);

impl LampPattern {
    /// All lamps off
    pub const OFF: Self = Self(0);

    /// Returns `None` for values that do not fit into five lamps
    pub const fn new(value: u8) -> Option<Self> {
        if value > MAX_VALUE {
            return None;
        }
        Some(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Lamp states, most significant bit first
    pub const fn lamps(self) -> [bool; LAMP_COUNT] {
        let mut lamps = [false; LAMP_COUNT];
        let mut i = 0;
        while i < LAMP_COUNT {
            let bit = LAMP_COUNT - 1 - i;
            lamps[i] = (self.0 >> bit) & 1 == 1;
            i += 1;
        }
        lamps
    }

    pub const fn is_lit(self, lamp: usize) -> bool {
        if lamp >= LAMP_COUNT {
            return false;
        }
        (self.0 >> (LAMP_COUNT - 1 - lamp)) & 1 == 1
    }
}

/// Colors used to draw lamps on an LED strip
#[derive(Debug, Clone, Copy)]
pub struct LedDisplayConfig {
    pub lit: Rgb,
    pub unlit: Rgb,
}

impl Default for LedDisplayConfig {
    fn default() -> Self {
        Self {
            lit: LAMP_LIT,
            unlit: LAMP_UNLIT,
        }
    }
}

/// Lamp display drawn on five pixels of an LED strip
pub struct LedDisplay<O: OutputDriver> {
    output: O,
    config: LedDisplayConfig,
    frame_buffer: [Rgb; LAMP_COUNT],
}

impl<O: OutputDriver> LedDisplay<O> {
    pub fn new(output: O, config: LedDisplayConfig) -> Self {
        Self {
            output,
            config,
            frame_buffer: [config.unlit; LAMP_COUNT],
        }
    }

    /// Last frame written to the output
    pub fn frame(&self) -> &[Rgb; LAMP_COUNT] {
        &self.frame_buffer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: OutputDriver> DisplayDriver for LedDisplay<O> {
    fn show(&mut self, pattern: LampPattern) {
        for (pixel, lit) in self.frame_buffer.iter_mut().zip(pattern.lamps()) {
            *pixel = if lit {
                self.config.lit
            } else {
                self.config.unlit
            };
        }
        self.output.write(&self.frame_buffer);
    }

    fn blank(&mut self) {
        self.frame_buffer = [self.config.unlit; LAMP_COUNT];
        self.output.write(&self.frame_buffer);
    }
}
