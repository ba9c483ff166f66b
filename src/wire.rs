//! Wires, their colors and the per-module color assignment

use rand::Rng;

const WIRE_NAME_RED: &str = "red";
const WIRE_NAME_GREEN: &str = "green";
const WIRE_NAME_BLUE: &str = "blue";

const WIRE_ID_RED: u8 = 0;
const WIRE_ID_GREEN: u8 = 1;
const WIRE_ID_BLUE: u8 = 2;

/// Number of physical wires on the module
pub const WIRE_COUNT: usize = 3;

/// Wire color. The discriminant indexes the solution triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireColor {
    Red = WIRE_ID_RED,
    Green = WIRE_ID_GREEN,
    Blue = WIRE_ID_BLUE,
}

impl WireColor {
    pub const COUNT: usize = 3;

    pub const ALL: [Self; Self::COUNT] = [Self::Red, Self::Green, Self::Blue];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            WIRE_ID_RED => Self::Red,
            WIRE_ID_GREEN => Self::Green,
            WIRE_ID_BLUE => Self::Blue,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => WIRE_NAME_RED,
            Self::Green => WIRE_NAME_GREEN,
            Self::Blue => WIRE_NAME_BLUE,
        }
    }

    /// Parse a color name, accepting the one-letter short forms as well
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            WIRE_NAME_RED | "r" => Some(Self::Red),
            WIRE_NAME_GREEN | "g" => Some(Self::Green),
            WIRE_NAME_BLUE | "b" => Some(Self::Blue),
            _ => None,
        }
    }
}

/// Physical position of a wire on the module, counted from the top
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WireSlot(u8);

impl WireSlot {
    pub const ALL: [Self; WIRE_COUNT] = [Self(0), Self(1), Self(2)];

    pub const fn from_raw(value: u8) -> Option<Self> {
        if (value as usize) < WIRE_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bijection from wire slots to colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorAssignment([WireColor; WIRE_COUNT]);

impl Default for ColorAssignment {
    fn default() -> Self {
        Self(WireColor::ALL)
    }
}

impl ColorAssignment {
    /// Build an assignment from explicit colors, one per slot
    ///
    /// Returns `None` if any color repeats.
    pub fn from_colors(colors: [WireColor; WIRE_COUNT]) -> Option<Self> {
        let mut seen = [false; WireColor::COUNT];
        for color in colors {
            let flag = &mut seen[color as usize];
            if *flag {
                return None;
            }
            *flag = true;
        }
        Some(Self(colors))
    }

    /// Draw a uniformly random assignment
    ///
    /// Fisher-Yates: every slot swaps with a slot drawn from the
    /// not yet placed suffix. `gen_range` never returns its exclusive
    /// upper bound, so no re-roll is needed.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut colors = WireColor::ALL;
        for i in 0..colors.len() {
            let chosen = rng.gen_range(i..colors.len());
            colors.swap(i, chosen);
        }
        Self(colors)
    }

    pub const fn color_of(&self, slot: WireSlot) -> WireColor {
        self.0[slot.index()]
    }

    /// Slot holding the wire of `color`
    pub fn slot_of(&self, color: WireColor) -> WireSlot {
        let index = self.0.iter().position(|c| *c == color).unwrap_or(0);
        WireSlot::ALL[index]
    }

    pub const fn colors(&self) -> [WireColor; WIRE_COUNT] {
        self.0
    }
}

/// Runtime state of one wire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WireState {
    color: WireColor,
    is_cut: bool,
}

impl WireState {
    pub(crate) const fn new(color: WireColor) -> Self {
        Self {
            color,
            is_cut: false,
        }
    }

    pub const fn color(&self) -> WireColor {
        self.color
    }

    pub const fn is_cut(&self) -> bool {
        self.is_cut
    }

    /// Mark the wire as cut
    ///
    /// Returns `false` if it was cut already.
    pub(crate) fn cut(&mut self) -> bool {
        if self.is_cut {
            return false;
        }
        self.is_cut = true;
        true
    }
}
