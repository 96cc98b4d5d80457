//! Terminal styling
//!
//! Maps each kind of printed segment to its ANSI style and carries the
//! command-line options that shape the output.

use colored::{ColoredString, Colorize};

use crate::core::model::DisplayRange;

/// The kind of text segment being printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// List index labels ("1.", "2.", ...)
    Label,
    Headword,
    Attribute,
    WordClass,
    Suggestion,
}

/// Style a segment. Every styled segment ends with a reset code.
pub fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Label => text.black().bold(),
        Tone::Headword => text.red().bold(),
        Tone::Attribute => text.yellow().bold(),
        Tone::WordClass | Tone::Suggestion => text.blue().bold(),
    }
}

/// Lookup configuration combining display window and color options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupConfig {
    pub range: DisplayRange,
    pub color: bool,
}

impl LookupConfig {
    pub fn new(range: DisplayRange, color: bool) -> Self {
        Self { range, color }
    }

    /// Install the color preference process-wide.
    ///
    /// Colors stay on auto-detection (off when stdout is not a terminal)
    /// unless they were explicitly disabled.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new(DisplayRange::default(), true)
    }
}
