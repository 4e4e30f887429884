//! Sound table — maps VPAL sound names to General MIDI percussion keys.

use serde::Serialize;

use super::error::ParseError;

/// The token that marks a rest: a position with no sound.
pub const REST_TOKEN: &str = ".";

/// A percussion timbre, identified by its General MIDI drum key.
///
/// Only obtainable through the sound table, so every `SoundId` in a
/// [`Score`](super::Score) names a registered sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SoundId(u8);

impl SoundId {
    /// MIDI key number on the percussion channel.
    pub fn key(self) -> u8 {
        self.0
    }
}

/// Every registered sound, grouped roughly by drum family.
const SOUNDS: &[(&str, u8)] = &[
    // bass drum
    ("doom", 35),
    ("boom", 36),
    // snare
    ("tik", 37),
    ("rik", 38),
    // clap / hit
    ("pah", 39),
    ("kah", 40),
    // hi-hat
    ("chik", 42),
    ("pss", 44),
    ("wsh", 46),
    // cymbals
    ("krsh", 49),
    ("psh", 51),
    ("dang", 53),
    ("ash", 52),
    // toms
    ("dee", 50),
    ("dih", 48),
    ("dah", 47),
    ("doh", 45),
    ("doo", 43),
    ("duh", 41),
    // agogo
    ("ding", 67),
    ("dong", 68),
    // bongo
    ("bum", 63),
    ("bom", 64),
    ("plik", 54), // tambourine
    ("shik", 70), // maracas
    ("goh", 56),  // cowbell
    ("dddd", 58), // vibraslap
    // whistle
    ("twih", 71),
    ("twee", 72),
    // guiro
    ("gih", 73),
    ("grrr", 74),
    ("dink", 75), // claves
    // wood block
    ("nik", 76),
    ("nok", 77),
    // cuica
    ("uhh", 78),
    ("err", 79),
    // triangle
    ("twik", 80),
    ("tink", 81),
];

/// Look up a sound by name, ignoring case. Returns `None` for unregistered
/// names and for the rest token.
pub fn lookup(name: &str) -> Option<SoundId> {
    let lower = name.to_lowercase();
    SOUNDS
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|&(_, key)| SoundId(key))
}

/// Resolve a sound name, ignoring case.
///
/// The rest token resolves to `Ok(None)`. Any other unregistered name is an
/// [`ParseError::UnknownSound`] carrying `name` as written.
pub fn resolve_name(name: &str) -> Result<Option<SoundId>, ParseError> {
    if name == REST_TOKEN {
        return Ok(None);
    }
    lookup(name)
        .map(Some)
        .ok_or_else(|| ParseError::unknown_sound(name))
}

/// Iterate over all registered `(name, sound)` pairs in table order.
pub fn all_sounds() -> impl Iterator<Item = (&'static str, SoundId)> {
    SOUNDS.iter().map(|&(name, key)| (name, SoundId(key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bass_drums() {
        assert_eq!(lookup("doom").map(SoundId::key), Some(35));
        assert_eq!(lookup("boom").map(SoundId::key), Some(36));
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup("CHIK"), lookup("chik"));
        assert_eq!(lookup("Tink").map(SoundId::key), Some(81));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(lookup("zzz"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn rest_is_not_a_sound() {
        assert_eq!(lookup(REST_TOKEN), None);
        assert_eq!(resolve_name(REST_TOKEN), Ok(None));
    }

    #[test]
    fn resolve_unknown_keeps_original_spelling() {
        assert_eq!(resolve_name("ZzZ"), Err(ParseError::unknown_sound("ZzZ")));
    }

    #[test]
    fn resolve_known() {
        assert_eq!(resolve_name("KAH").unwrap().map(SoundId::key), Some(40));
    }

    #[test]
    fn names_and_keys_are_unique() {
        let names: HashSet<_> = all_sounds().map(|(n, _)| n).collect();
        let keys: HashSet<_> = all_sounds().map(|(_, s)| s.key()).collect();
        assert_eq!(names.len(), SOUNDS.len());
        assert_eq!(keys.len(), SOUNDS.len());
    }

    #[test]
    fn table_names_are_lowercase() {
        for (name, _) in all_sounds() {
            assert_eq!(name, name.to_lowercase());
        }
    }

    #[test]
    fn keys_are_in_gm_percussion_range() {
        for (_, sound) in all_sounds() {
            assert!((35..=81).contains(&sound.key()));
        }
    }
}
