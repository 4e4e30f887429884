//! MIDI output — serializes rendered sequences as Standard MIDI Files.

pub mod encoder;

pub use encoder::{encode, write_file, EncodeError, EncoderOptions, PERCUSSION_CHANNEL};
