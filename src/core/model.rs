//! Lookup model
//!
//! Transient values built from the command line for a single lookup.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing a `--range` value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Invalid range format. Expected 'begin:end', got '{0}'")]
    Format(String),

    #[error("Invalid range bound '{bound}' in '{input}'")]
    Bound { bound: String, input: String },
}

/// 1-based inclusive window of result positions to display.
///
/// No ordering or sign checks are applied: a window with `begin > end`, or
/// with bounds below 1, is valid and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRange {
    pub begin: i64,
    pub end: i64,
}

impl DisplayRange {
    pub fn new(begin: i64, end: i64) -> Self {
        Self { begin, end }
    }

    /// Whether the 1-based `position` falls inside the window
    pub fn contains(&self, position: usize) -> bool {
        let position = position as i64;
        self.begin <= position && position <= self.end
    }
}

impl Default for DisplayRange {
    fn default() -> Self {
        Self::new(1, 3)
    }
}

impl fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.begin, self.end)
    }
}

impl FromStr for DisplayRange {
    type Err = RangeError;

    /// Parse `"begin:end"`. A bare `"n"` is shorthand for `"n:n"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RangeError::Format(s.to_string()));
        }

        let (begin, end) = match trimmed.split_once(':') {
            Some((begin, end)) => (begin, end),
            None => (trimmed, trimmed),
        };

        let parse_bound = |bound: &str| {
            bound.trim().parse::<i64>().map_err(|_| RangeError::Bound {
                bound: bound.to_string(),
                input: s.to_string(),
            })
        };

        Ok(Self::new(parse_bound(begin)?, parse_bound(end)?))
    }
}

/// The word(s) to look up, joined by single spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
