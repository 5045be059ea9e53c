/*!
 * Error types for the timedtext library.
 *
 * This module contains custom error types for the parsing pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parsers::SubtitleFormat;

/// Errors that can occur when converting a textual timecode to seconds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    /// The timecode did not split into 3 or 4 components
    #[error("expected 3 or 4 timecode components, found {0}")]
    PartCount(usize),

    /// The sub-second component was neither 2 nor 3 digits wide
    #[error("fractional component must be 2 or 3 digits, found {0}")]
    FractionWidth(usize),

    /// A component failed to parse as a non-negative integer
    #[error("non-numeric timecode component: {0:?}")]
    NotNumeric(String),

    /// A component parsed but fell outside its valid range
    #[error("{component} value {value} is out of range")]
    OutOfRange {
        /// Name of the offending component (seconds, minutes, ...)
        component: &'static str,
        /// The parsed value
        value: u64,
    },
}

/// Errors that can occur during subtitle parsing.
///
/// A parse either yields the complete entry sequence or one of these;
/// partial results are never surfaced.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The subtitle file could not be opened or read
    #[error("failed to read subtitle file {path}: {source}")]
    Unopenable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The file extension did not match any supported format
    #[error("unsupported subtitle format: {0:?}")]
    UnsupportedFormat(String),

    /// The file violated the structural rules of its format
    #[error("{format} parser: {reason} (line {line})")]
    Structural {
        /// Format whose parser rejected the file
        format: SubtitleFormat,
        /// 1-based line number where the violation was seen
        line: usize,
        /// Human-readable description of the violation
        reason: String,
    },

    /// A timestamp inside the file failed timecode conversion
    #[error("{format} parser: invalid timecode at line {line}: {source}")]
    Timecode {
        /// Format whose parser hit the bad timecode
        format: SubtitleFormat,
        /// 1-based line number of the timing line
        line: usize,
        /// The conversion failure
        source: TimecodeError,
    },
}

impl ParseError {
    /// Shorthand for a structural error at a given line
    pub(crate) fn structural(
        format: SubtitleFormat,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        ParseError::Structural {
            format,
            line,
            reason: reason.into(),
        }
    }
}
