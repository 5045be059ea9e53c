use std::fmt;

use serde::{Deserialize, Serialize};

// @module: Common timed-text model shared by every parser

// @struct: Single timed subtitle entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedText {
    // @field: Subtitle text, trimmed of markup
    pub text: String,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,
}

impl TimedText {
    /// Creates a new timed-text entry - used by tests and external consumers
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        TimedText {
            text: text.into(),
            start,
            end,
        }
    }

    /// True when the text is empty or whitespace only.
    ///
    /// Such entries are dropped by the parsers rather than reported
    /// as errors.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for TimedText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:.3} --> {:.3}", self.start, self.end)?;
        writeln!(f, "{}", self.text)
    }
}
