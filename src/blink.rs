//! Blink delay: how long each sequence position stays on the lamps
//!
//! Every wrong cut makes the module faster, in two stages.

use embassy_time::Duration;

const NORMAL_MS: u64 = 1000;
const QUICK_MS: u64 = 660;
const FASTEST_MS: u64 = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum BlinkDelay {
    /// Initial speed, one position per second
    #[default]
    Normal,
    /// After the first wrong cut
    Quick,
    /// After any further wrong cut. Never gets faster than this.
    Fastest,
}

impl BlinkDelay {
    pub const fn duration(self) -> Duration {
        match self {
            Self::Normal => Duration::from_millis(NORMAL_MS),
            Self::Quick => Duration::from_millis(QUICK_MS),
            Self::Fastest => Duration::from_millis(FASTEST_MS),
        }
    }

    /// Next, faster stage
    #[must_use]
    pub const fn escalate(self) -> Self {
        match self {
            Self::Normal => Self::Quick,
            Self::Quick | Self::Fastest => Self::Fastest,
        }
    }
}
