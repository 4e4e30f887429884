//! Parsed VPAL notation: a score of beats, each a set of simultaneous hits.

use serde::Serialize;

use super::hit::Hit;

/// All hits that sound together at one rhythmic position, in line order.
///
/// An empty beat is a silent position: it still takes up time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Beat {
    hits: Vec<Hit>,
}

impl Beat {
    pub fn new(hits: Vec<Hit>) -> Self {
        Self { hits }
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether every line rests at this position.
    pub fn is_silent(&self) -> bool {
        self.hits.is_empty()
    }
}

/// A parsed piece of notation: one [`Beat`] per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Score {
    beats: Vec<Beat>,
}

impl Score {
    pub fn new(beats: Vec<Beat>) -> Self {
        Self { beats }
    }

    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    /// Number of beats (columns).
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Total number of hits across all beats.
    pub fn hit_count(&self) -> usize {
        self.beats.iter().map(Beat::len).sum()
    }
}
