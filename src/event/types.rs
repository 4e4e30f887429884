//! Event data model — the start and stop of every percussion hit.

use serde::Serialize;

use super::tick::Tick;
use crate::dsl::{Hit, SoundId, Volume};

/// Whether an event starts or stops a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Start,
    Stop,
}

/// A single start or stop at an absolute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimedEvent {
    pub kind: EventKind,
    pub sound: SoundId,
    pub volume: Volume,
    /// Offset from the start of the whole sequence.
    pub tick: Tick,
}

impl TimedEvent {
    /// Start `hit` at `tick`.
    pub fn start(hit: Hit, tick: Tick) -> Self {
        Self {
            kind: EventKind::Start,
            sound: hit.sound,
            volume: hit.volume,
            tick,
        }
    }

    /// Stop `hit` at `tick`.
    pub fn stop(hit: Hit, tick: Tick) -> Self {
        Self {
            kind: EventKind::Stop,
            sound: hit.sound,
            volume: hit.volume,
            tick,
        }
    }

    pub fn is_start(&self) -> bool {
        self.kind == EventKind::Start
    }
}
