//! Parser for VPAL notation.
//!
//! Each line of input is one voice; whitespace-separated tokens line up in
//! columns, and each column becomes one [`Beat`]. Every line must have the
//! same number of tokens as the first.

use super::ast::{Beat, Score};
use super::error::ParseError;
use super::hit::resolve_token;

/// Parse VPAL notation into a [`Score`].
///
/// Alignment of all lines is checked before any token is resolved. Trailing
/// lines without tokens are ignored, so a final newline is harmless.
pub fn parse(text: &str) -> Result<Score, ParseError> {
    let mut lines: Vec<Vec<&str>> = text
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();

    while lines.last().is_some_and(|tokens| tokens.is_empty()) {
        lines.pop();
    }

    let Some(first) = lines.first() else {
        return Ok(Score::default());
    };
    let width = first.len();

    for (idx, tokens) in lines.iter().enumerate() {
        if tokens.len() != width {
            return Err(ParseError::misaligned(width, tokens.len(), idx + 1));
        }
    }

    let mut beats = Vec::with_capacity(width);
    for column in 0..width {
        let mut hits = Vec::with_capacity(lines.len());
        for tokens in &lines {
            if let Some(hit) = resolve_token(tokens[column])? {
                hits.push(hit);
            }
        }
        beats.push(Beat::new(hits));
    }

    Ok(Score::new(beats))
}
