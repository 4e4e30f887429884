//! VPAL — Vocal Percussion Assembly Language.
//!
//! Compiles lines of percussion notation into Standard MIDI Files:
//!
//! ```
//! let sequence = vpal::compile("BOOM . tik .\nchik chik chik chik", 120, 2).unwrap();
//! assert_eq!(sequence.len(), 2 * 2 * (2 + 4));
//! ```

pub mod config;
pub mod dsl;
pub mod error;
pub mod event;
pub mod midi;
pub mod rhythm;

use std::path::Path;

pub use config::VpalConfig;
pub use error::{Error, Result};
pub use event::Sequence;
pub use midi::EncoderOptions;

use event::RenderSpec;

/// Parse notation and render it `repeat` times at `tempo` BPM.
pub fn compile(text: &str, tempo: u32, repeat: u32) -> Result<Sequence> {
    let score = dsl::parse(text)?;
    Ok(event::render(&RenderSpec::new(&score, tempo, repeat))?)
}

/// Compile notation text and write the MIDI file to `output`.
///
/// Nothing is written unless parsing, rendering and encoding all succeed.
pub fn compile_to_file<P: AsRef<Path>>(
    text: &str,
    tempo: u32,
    repeat: u32,
    output: P,
    options: &EncoderOptions,
) -> Result<Sequence> {
    let sequence = compile(text, tempo, repeat)?;
    midi::write_file(output, &sequence, options)?;
    Ok(sequence)
}

/// Read a notation file, compile it, and write the MIDI file to `output`.
pub fn compile_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    tempo: u32,
    repeat: u32,
    output: Q,
    options: &EncoderOptions,
) -> Result<Sequence> {
    let text = std::fs::read_to_string(input)?;
    compile_to_file(&text, tempo, repeat, output, options)
}
