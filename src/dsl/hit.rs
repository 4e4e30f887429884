//! Hit resolution — turns one VPAL token into a sound and a volume.

use serde::Serialize;

use super::error::ParseError;
use super::sound::{self, SoundId, REST_TOKEN};

/// How loud a hit is. Selected by the casing of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Volume {
    /// Written entirely in lowercase, e.g. `boom`.
    Normal,
    /// Any uppercase letter, e.g. `BOOM`, `Boom`, `bOOm`.
    Accented,
}

impl Volume {
    /// MIDI velocity for this volume level.
    pub fn velocity(self) -> u8 {
        match self {
            Volume::Normal => 40,
            Volume::Accented => 80,
        }
    }
}

/// A single resolved sound within a beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub sound: SoundId,
    pub volume: Volume,
}

/// Resolve a notation token.
///
/// Returns `Ok(None)` for the rest token. Unregistered sounds fail with
/// [`ParseError::UnknownSound`] carrying the token as written.
pub fn resolve_token(token: &str) -> Result<Option<Hit>, ParseError> {
    if token == REST_TOKEN {
        return Ok(None);
    }

    let lower = token.to_lowercase();
    let sound = sound::lookup(&lower).ok_or_else(|| ParseError::unknown_sound(token))?;

    let volume = if token == lower {
        Volume::Normal
    } else {
        Volume::Accented
    };

    Ok(Some(Hit { sound, volume }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(token: &str) -> Hit {
        resolve_token(token).unwrap().unwrap()
    }

    #[test]
    fn lowercase_is_normal() {
        let h = hit("doom");
        assert_eq!(h.volume, Volume::Normal);
        assert_eq!(h.sound.key(), 35);
    }

    #[test]
    fn any_uppercase_is_accented() {
        let normal = hit("doom");
        for token in ["DOOM", "Doom", "dOOM", "dooM"] {
            let h = hit(token);
            assert_eq!(h.volume, Volume::Accented, "{token}");
            assert_eq!(h.sound, normal.sound, "{token}");
        }
    }

    #[test]
    fn rest_yields_no_hit() {
        assert_eq!(resolve_token("."), Ok(None));
    }

    #[test]
    fn unknown_token_reports_original() {
        assert_eq!(resolve_token("zzz"), Err(ParseError::unknown_sound("zzz")));
        assert_eq!(resolve_token("ZZZ"), Err(ParseError::unknown_sound("ZZZ")));
    }

    #[test]
    fn double_dot_is_not_a_rest() {
        assert_eq!(resolve_token(".."), Err(ParseError::unknown_sound("..")));
    }

    #[test]
    fn velocities() {
        assert_eq!(Volume::Normal.velocity(), 40);
        assert_eq!(Volume::Accented.velocity(), 80);
    }
}
