//! Time index calculator
//!
//! Maps wall-clock time onto a position in a sequence. The position walks
//! the sequence forward and then back again ("ping-pong"), so it stays
//! bounded no matter how long the module has been running.
//!
//! All arithmetic is done on integer ticks: a step boundary is exactly
//! where `(now - start) / step` truncates, with no float rounding.

use embassy_time::{Duration, Instant};

/// How many steps ahead [`steps_until_value`] looks before giving up.
///
/// Covers one full ping-pong period of a 14 value sequence (26 steps).
pub const PREDICTION_WINDOW: u32 = 28;

/// Number of whole steps since `start`, shifted by `offset`
///
/// The offset is added after truncation: it moves the module to another
/// logical step, not to another phase within a step. Times before `start`
/// count as zero elapsed time.
pub fn elapsed_steps(now: Instant, start: Instant, offset: usize, step: Duration) -> u64 {
    let elapsed = now.saturating_duration_since(start).as_ticks();
    let step = step.as_ticks().max(1);
    elapsed / step + offset as u64
}

/// Fold a step count into a position of a sequence of `length` values
///
/// Even cycles of `length - 1` steps count up from 0, odd cycles count
/// down from `length - 1`.
#[allow(clippy::cast_possible_truncation)]
pub const fn ping_pong(elapsed: u64, length: usize) -> usize {
    if length < 2 {
        return 0;
    }
    let span = (length - 1) as u64;
    let cycle = elapsed / span;
    let rem = elapsed % span;

    if cycle % 2 == 0 {
        rem as usize
    } else {
        (span - rem) as usize
    }
}

/// Sequence position to show at `now`
pub fn position(
    now: Instant,
    start: Instant,
    offset: usize,
    step: Duration,
    length: usize,
) -> usize {
    ping_pong(elapsed_steps(now, start, offset, step), length)
}

/// Whether `now` falls into the lit part of its step
///
/// `shown_permille` is the lit share of every step in thousandths. The
/// lamps go dark once the progress through the current step exceeds it.
pub fn is_lit(now: Instant, start: Instant, step: Duration, shown_permille: u16) -> bool {
    let elapsed = now.saturating_duration_since(start).as_ticks();
    let step = step.as_ticks().max(1);
    let phase = elapsed % step;

    u128::from(phase) * 1000 <= u128::from(step) * u128::from(shown_permille)
}

/// Number of steps until `value` is displayed
///
/// Looks at the steps starting `skip` steps after the one active at `now`
/// and returns how many further steps pass before `values` shows `value`.
/// Returns `None` if it does not appear within [`PREDICTION_WINDOW`] steps.
pub fn steps_until_value(
    values: &[u8],
    value: u8,
    now: Instant,
    start: Instant,
    offset: usize,
    step: Duration,
    skip: u32,
) -> Option<u32> {
    let base = elapsed_steps(now, start, offset, step) + u64::from(skip);
    (0..PREDICTION_WINDOW).find(|i| {
        let position = ping_pong(base + u64::from(*i), values.len());
        values.get(position) == Some(&value)
    })
}
