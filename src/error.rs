//! Crate-level error type for file-to-file compilation.

use std::fmt;

use crate::dsl::ParseError;
use crate::event::RenderError;
use crate::midi::EncodeError;

/// Any failure between reading notation and writing a MIDI file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Parse(ParseError),
    Render(RenderError),
    Encode(EncodeError),
    /// Reading an input or config file failed.
    Io(String),
    /// YAML that does not match [`VpalConfig`](crate::config::VpalConfig), or
    /// output that could not be serialized.
    Yaml(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{e}"),
            Error::Render(e) => write!(f, "{e}"),
            Error::Encode(e) => write!(f, "{e}"),
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Yaml(msg) => write!(f, "YAML error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Render(e) => Some(e),
            Error::Encode(e) => Some(e),
            Error::Io(_) | Error::Yaml(_) => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Error::Render(err)
    }
}

impl From<EncodeError> for Error {
    fn from(err: EncodeError) -> Self {
        Error::Encode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err.to_string())
    }
}

/// Result alias for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn wraps_parse_errors_verbatim() {
        let err: Error = ParseError::unknown_sound("zzz").into();
        assert_eq!(err.to_string(), "\"zzz\" is not a valid percussive sound");
        assert!(err.source().is_some());
    }

    #[test]
    fn wraps_render_errors() {
        let err: Error = RenderError::InvalidTempo { bpm: 0 }.into();
        assert!(matches!(err, Error::Render(RenderError::InvalidTempo { bpm: 0 })));
    }

    #[test]
    fn io_errors_become_messages() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io.into();
        assert_eq!(err.to_string(), "I/O error: no such file");
        assert!(err.source().is_none());
    }

    #[test]
    fn yaml_errors_are_reported() {
        let yaml = serde_yaml::from_str::<u32>("[not, a, number]").unwrap_err();
        let err: Error = yaml.into();
        assert!(matches!(err, Error::Yaml(_)));
    }
}
