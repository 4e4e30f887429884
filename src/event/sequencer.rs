//! Event sequencer — expands a [`Score`] into start/stop events.
//!
//! A tick cursor advances by one beat's worth of ticks per beat, silent
//! beats included, across all repeats. Within a beat every start is emitted
//! before any stop, and the stops are spread across the beat so that the
//! emitted ticks never go backwards.

use std::fmt;
use std::num::NonZeroU32;

use super::tick::{Tick, DEFAULT_TICKS_PER_BEAT};
use super::types::TimedEvent;
use crate::dsl::{Beat, Score};

/// [`DEFAULT_TICKS_PER_BEAT`] as a resolution.
pub const DEFAULT_RESOLUTION: NonZeroU32 = match NonZeroU32::new(DEFAULT_TICKS_PER_BEAT) {
    Some(n) => n,
    None => panic!("DEFAULT_TICKS_PER_BEAT must be non-zero"),
};

/// Everything needed to render a score.
#[derive(Debug, Clone, Copy)]
pub struct RenderSpec<'a> {
    pub score: &'a Score,
    pub tempo_bpm: u32,
    pub repeat_count: u32,
    pub ticks_per_beat: NonZeroU32,
}

impl<'a> RenderSpec<'a> {
    /// A spec at the default resolution of [`DEFAULT_TICKS_PER_BEAT`].
    pub fn new(score: &'a Score, tempo_bpm: u32, repeat_count: u32) -> Self {
        Self {
            score,
            tempo_bpm,
            repeat_count,
            ticks_per_beat: DEFAULT_RESOLUTION,
        }
    }

    pub fn with_ticks_per_beat(mut self, ticks_per_beat: NonZeroU32) -> Self {
        self.ticks_per_beat = ticks_per_beat;
        self
    }
}

/// An error that prevents a score from being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Tempo below one beat per minute.
    InvalidTempo { bpm: u32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidTempo { bpm } => {
                write!(f, "tempo {bpm} is too slow: it must be at least 1 BPM")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// A rendered, tick-ordered event stream plus the timing it was rendered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    tempo_bpm: u32,
    ticks_per_beat: u32,
    length: Tick,
    events: Vec<TimedEvent>,
}

impl Sequence {
    pub fn tempo_bpm(&self) -> u32 {
        self.tempo_bpm
    }

    pub fn ticks_per_beat(&self) -> u32 {
        self.ticks_per_beat
    }

    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// End of the last rendered beat, silent beats included.
    pub fn length(&self) -> Tick {
        self.length
    }

    /// Wall-clock length of the sequence at its tempo.
    pub fn duration_secs(&self) -> f64 {
        self.length.to_seconds(self.tempo_bpm)
    }
}

/// Render a score into a [`Sequence`].
pub fn render(spec: &RenderSpec<'_>) -> Result<Sequence, RenderError> {
    if spec.tempo_bpm < 1 {
        return Err(RenderError::InvalidTempo {
            bpm: spec.tempo_bpm,
        });
    }

    let ticks_per_beat = spec.ticks_per_beat.get();
    let beats = spec.score.beats();
    let total_beats = (beats.len() as u64).saturating_mul(u64::from(spec.repeat_count));

    let hits_per_repeat = spec.score.hit_count();
    let capacity = (hits_per_repeat * 2)
        .checked_mul(spec.repeat_count as usize)
        .unwrap_or(0);
    let mut events = Vec::with_capacity(capacity);
    let mut cursor = Tick::ZERO;

    for _ in 0..spec.repeat_count {
        for beat in beats {
            emit_beat(beat, cursor, ticks_per_beat, &mut events);
            cursor = cursor + u64::from(ticks_per_beat);
        }
    }

    Ok(Sequence {
        tempo_bpm: spec.tempo_bpm,
        ticks_per_beat,
        length: Tick::from_beats(total_beats, ticks_per_beat),
        events,
    })
}

/// Emit one beat starting at `at`: all starts, then staggered stops.
///
/// With `n` hits, hit `j` stops `(j + 1) * ticks_per_beat / n` ticks after
/// the beat starts, never later than the end of the beat.
fn emit_beat(beat: &Beat, at: Tick, ticks_per_beat: u32, events: &mut Vec<TimedEvent>) {
    let hits = beat.hits();
    if hits.is_empty() {
        return;
    }

    events.extend(hits.iter().map(|&hit| TimedEvent::start(hit, at)));

    let step = (ticks_per_beat / hits.len() as u32).max(1) as u64;
    for (j, &hit) in hits.iter().enumerate() {
        let offset = ((j as u64 + 1) * step).min(ticks_per_beat as u64);
        events.push(TimedEvent::stop(hit, at + offset));
    }
}
