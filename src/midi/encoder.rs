//! Standard MIDI File encoder for rendered sequences.
//!
//! Produces a format 1 file with two tracks:
//! - track 0 carries the tempo and the sequence name;
//! - track 1 carries the percussion notes on channel 10 (index 9).

use std::fmt;
use std::path::Path;

use midly::num::{u15, u24, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

use crate::event::{EventKind, Sequence, Tick, TimedEvent, TICKS_PER_QUARTER};

/// General MIDI percussion channel (zero-based).
pub const PERCUSSION_CHANNEL: u8 = 9;

/// Largest tempo value a MIDI tempo meta event can hold.
const MAX_MICROS_PER_QUARTER: u32 = 0x00FF_FFFF;

/// Largest delta time a variable-length MIDI quantity can hold.
const MAX_DELTA: u64 = 0x0FFF_FFFF;

/// Names written into the file's meta events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderOptions {
    pub sequence_name: String,
    pub track_name: String,
    pub instrument_name: String,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            sequence_name: "Vocal Percussion Assembly".to_string(),
            track_name: "Percussion".to_string(),
            instrument_name: "Drum Kit".to_string(),
        }
    }
}

/// An error while encoding or writing a MIDI file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The gap between two events does not fit a MIDI delta time.
    TickOverflow { delta: u64 },
    /// Writing the encoded bytes failed.
    Io(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::TickOverflow { delta } => {
                write!(f, "delta of {delta} ticks is too large for a MIDI file")
            }
            EncodeError::Io(msg) => write!(f, "failed to write MIDI file: {msg}"),
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        EncodeError::Io(err.to_string())
    }
}

/// Convert a tempo in BPM to microseconds per quarter note, clamped to the
/// 24-bit range of the tempo meta event.
pub fn bpm_to_micros_per_quarter(bpm: u32) -> u32 {
    if bpm == 0 {
        return MAX_MICROS_PER_QUARTER;
    }
    (60_000_000 / bpm).min(MAX_MICROS_PER_QUARTER)
}

/// Encode a sequence into Standard MIDI File bytes.
pub fn encode(sequence: &Sequence, options: &EncoderOptions) -> Result<Vec<u8>, EncodeError> {
    let header = Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    );

    let tempo = bpm_to_micros_per_quarter(sequence.tempo_bpm());
    let meta_track = vec![
        meta(MetaMessage::Tempo(u24::new(tempo))),
        meta(MetaMessage::TrackName(options.sequence_name.as_bytes())),
        meta(MetaMessage::EndOfTrack),
    ];

    let mut percussion = Vec::with_capacity(sequence.len() + 3);
    percussion.push(meta(MetaMessage::TrackName(options.track_name.as_bytes())));
    percussion.push(meta(MetaMessage::InstrumentName(
        options.instrument_name.as_bytes(),
    )));

    let mut previous = Tick::ZERO;
    for event in sequence.events() {
        let delta = event.tick - previous;
        previous = event.tick;
        percussion.push(note_event(event, delta)?);
    }
    percussion.push(meta(MetaMessage::EndOfTrack));

    let smf = Smf {
        header,
        tracks: vec![meta_track, percussion],
    };

    let mut bytes = Vec::new();
    smf.write_std(&mut bytes)?;
    Ok(bytes)
}

/// Encode a sequence and write it to `path`.
///
/// The file is only touched once encoding has succeeded.
pub fn write_file<P: AsRef<Path>>(
    path: P,
    sequence: &Sequence,
    options: &EncoderOptions,
) -> Result<(), EncodeError> {
    let bytes = encode(sequence, options)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn meta(message: MetaMessage<'_>) -> TrackEvent<'_> {
    TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(message),
    }
}

fn note_event(event: &TimedEvent, delta: u64) -> Result<TrackEvent<'static>, EncodeError> {
    if delta > MAX_DELTA {
        return Err(EncodeError::TickOverflow { delta });
    }
    let delta = u28::new(delta as u32);

    let key = u7::new(event.sound.key());
    let vel = u7::new(event.volume.velocity());
    let message = match event.kind {
        EventKind::Start => MidiMessage::NoteOn { key, vel },
        EventKind::Stop => MidiMessage::NoteOff { key, vel },
    };

    Ok(TrackEvent {
        delta,
        kind: TrackEventKind::Midi {
            channel: u4::new(PERCUSSION_CHANNEL),
            message,
        },
    })
}
