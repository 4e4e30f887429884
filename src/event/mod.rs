//! Event stream — expands a parsed score into timed start/stop events.
//!
//! The [`render`] function sits between the notation layer and the MIDI
//! encoder. It is a pure function of its [`RenderSpec`]: tick offsets come
//! only from beat positions, never from the tempo, which the encoder
//! attaches as metadata.

pub mod sequencer;
pub mod tick;
pub mod types;

pub use sequencer::{render, RenderError, RenderSpec, Sequence, DEFAULT_RESOLUTION};
pub use tick::{Tick, DEFAULT_TICKS_PER_BEAT, TICKS_PER_QUARTER};
pub use types::{EventKind, TimedEvent};
