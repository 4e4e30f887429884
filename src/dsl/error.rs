//! Error types for the VPAL notation parser.

use std::fmt;

/// An error that occurred while parsing VPAL notation.
///
/// Both variants are input-validation errors: the parse is abandoned and
/// no partial [`Score`](super::Score) is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that is neither a registered sound nor the rest marker.
    UnknownSound { token: String },
    /// A line whose token count differs from the first line's.
    MisalignedNotation {
        expected: usize,
        actual: usize,
        /// 1-based line number of the offending line.
        line: usize,
    },
}

impl ParseError {
    pub fn unknown_sound(token: impl Into<String>) -> Self {
        Self::UnknownSound {
            token: token.into(),
        }
    }

    pub fn misaligned(expected: usize, actual: usize, line: usize) -> Self {
        Self::MisalignedNotation {
            expected,
            actual,
            line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownSound { token } => {
                write!(f, "\"{token}\" is not a valid percussive sound")
            }
            ParseError::MisalignedNotation {
                expected,
                actual,
                line,
            } => write!(
                f,
                "the first line has {expected} beats, but line {line} has {actual}"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sound_message_quotes_token() {
        let err = ParseError::unknown_sound("zzz");
        assert_eq!(err.to_string(), "\"zzz\" is not a valid percussive sound");
    }

    #[test]
    fn misaligned_message_reports_counts_and_line() {
        let err = ParseError::misaligned(2, 1, 2);
        assert_eq!(
            err.to_string(),
            "the first line has 2 beats, but line 2 has 1"
        );
    }

    #[test]
    fn variants_compare_structurally() {
        assert_eq!(
            ParseError::misaligned(4, 3, 5),
            ParseError::MisalignedNotation {
                expected: 4,
                actual: 3,
                line: 5
            }
        );
        assert_ne!(ParseError::unknown_sound("a"), ParseError::unknown_sound("b"));
    }
}
