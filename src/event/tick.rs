//! Musical time as integer ticks.
//!
//! All sequencing is done in ticks so repeats never accumulate rounding
//! error; conversion to seconds happens only when reporting durations.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

use serde::Serialize;

/// Ticks per quarter note in encoded MIDI files.
pub const TICKS_PER_QUARTER: u16 = 480;

/// Ticks per VPAL beat: one eighth note at [`TICKS_PER_QUARTER`] resolution.
pub const DEFAULT_TICKS_PER_BEAT: u32 = TICKS_PER_QUARTER as u32 / 2;

/// An absolute position in a rendered sequence, in ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Tick {
    ticks: u64,
}

impl Tick {
    /// The start of the sequence.
    pub const ZERO: Tick = Tick { ticks: 0 };

    pub fn from_ticks(ticks: u64) -> Self {
        Self { ticks }
    }

    /// Position of the start of beat `index` at `ticks_per_beat` resolution.
    ///
    /// Saturates at `u64::MAX` rather than wrapping.
    pub fn from_beats(index: u64, ticks_per_beat: u32) -> Self {
        Self {
            ticks: index.saturating_mul(u64::from(ticks_per_beat)),
        }
    }

    pub fn ticks(self) -> u64 {
        self.ticks
    }

    /// Wall-clock seconds from zero at `bpm` quarter notes per minute.
    pub fn to_seconds(self, bpm: u32) -> f64 {
        if bpm == 0 {
            return 0.0;
        }
        self.ticks as f64 * 60.0 / (TICKS_PER_QUARTER as f64 * bpm as f64)
    }
}

impl Ord for Tick {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ticks.cmp(&other.ticks)
    }
}

impl PartialOrd for Tick {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<u64> for Tick {
    type Output = Self;

    fn add(self, rhs: u64) -> Self {
        Self {
            ticks: self.ticks.saturating_add(rhs),
        }
    }
}

impl Sub for Tick {
    type Output = u64;

    /// Distance between two positions, saturating at zero.
    fn sub(self, rhs: Self) -> u64 {
        self.ticks.saturating_sub(rhs.ticks)
    }
}
