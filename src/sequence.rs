//! Sequence table
//!
//! Eight fixed LED sequences of fourteen 5-bit values each, together with
//! the solution triple (one target position per wire color) for every
//! sequence. The table is `const` data and never changes at runtime.

use crate::wire::WireColor;

/// Number of predefined sequences
pub const SEQUENCE_COUNT: usize = 8;

/// Number of values in every sequence
pub const SEQUENCE_LENGTH: usize = 14;

/// Largest value the five lamps can show
pub const MAX_VALUE: u8 = 0b1_1111;

/// One row of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    values: [u8; SEQUENCE_LENGTH],
    solutions: SolutionTriple,
}

/// Target positions indexed by wire color (red, green, blue)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionTriple([u8; WireColor::COUNT]);

impl SolutionTriple {
    /// Position at which the wire of `color` must be cut
    pub const fn position(self, color: WireColor) -> usize {
        self.0[color as usize] as usize
    }
}

impl Sequence {
    const fn new(values: [u8; SEQUENCE_LENGTH], solutions: [u8; WireColor::COUNT]) -> Self {
        Self {
            values,
            solutions: SolutionTriple(solutions),
        }
    }

    /// All values of the sequence in display order
    pub const fn values(&self) -> &[u8; SEQUENCE_LENGTH] {
        &self.values
    }

    pub const fn solutions(&self) -> SolutionTriple {
        self.solutions
    }
}

static SEQUENCES: [Sequence; SEQUENCE_COUNT] = [
    Sequence::new([17, 15, 6, 2, 24, 8, 26, 25, 21, 24, 1, 15, 18, 8], [5, 3, 7]),
    Sequence::new([18, 15, 19, 31, 12, 6, 19, 21, 11, 16, 19, 2, 1, 29], [11, 8, 4]),
    Sequence::new([8, 25, 1, 15, 20, 15, 9, 3, 6, 24, 1, 24, 5, 26], [9, 1, 2]),
    Sequence::new([21, 27, 6, 12, 27, 20, 7, 1, 19, 15, 3, 13, 9, 28], [8, 12, 7]),
    Sequence::new([3, 21, 14, 22, 7, 28, 16, 27, 22, 17, 26, 2, 31, 15], [10, 5, 8]),
    Sequence::new([8, 22, 30, 19, 1, 25, 31, 16, 9, 7, 6, 13, 9, 7], [0, 10, 6]),
    Sequence::new([5, 18, 12, 7, 5, 12, 31, 16, 10, 15, 17, 9, 12, 25], [2, 5, 9]),
    Sequence::new([4, 20, 18, 25, 20, 4, 24, 29, 17, 16, 12, 16, 29, 19], [9, 5, 10]),
];

/// Index of a sequence in the table
///
/// Can only be created for valid indices, so table lookups never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceId(u8);

impl SequenceId {
    /// Every sequence id in table order
    pub const ALL: [Self; SEQUENCE_COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        if (value as usize) < SEQUENCE_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn as_raw(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Read-only access to the sequence table
pub struct SequenceTable;

impl SequenceTable {
    /// Number of sequences in the table
    pub const fn sequence_count() -> usize {
        SEQUENCE_COUNT
    }

    pub fn sequence(id: SequenceId) -> &'static Sequence {
        &SEQUENCES[id.index()]
    }

    /// Value shown at `position` of the sequence
    ///
    /// `position` must be below [`SEQUENCE_LENGTH`]; the time index
    /// calculator never produces anything else.
    pub fn value_at(id: SequenceId, position: usize) -> u8 {
        SEQUENCES[id.index()].values[position]
    }

    /// Position at which the wire of `color` must be cut
    pub fn solution(id: SequenceId, color: WireColor) -> usize {
        SEQUENCES[id.index()].solutions.position(color)
    }
}
