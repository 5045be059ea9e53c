use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;
use crate::line_reader::LineCursor;
use crate::parsers::SubtitleFormat;
use crate::timecode::{timecode_to_seconds, SRT_SEPARATORS};
use crate::timed_text::TimedText;

// @module: SubRip (.srt) parser

const TIMING_ARROW: &str = "-->";

// @const: SRT markup regex: <b></b> <i></i> <u></u>, the {b}{/b}
// equivalents, and ASS-style {\a#} alignment overrides
static MARKUP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[biu]>|\{/?[biu]\}|\{\\a\d\}").unwrap());

/// Cue with its original sequence position.
///
/// The position is parse-only bookkeeping used to break start-time
/// ties; it is discarded once the common entries are emitted.
struct SrtCue {
    position: u64,
    entry: TimedText,
}

/// Parses SRT subtitle content.
///
/// The file is a repeating sequence of records: a numeric position
/// line, a `start --> end` timing line, and one or more text lines
/// terminated by a blank line or the end of the file.
pub fn parse(content: &str) -> Result<Vec<TimedText>, ParseError> {
    const FORMAT: SubtitleFormat = SubtitleFormat::Srt;
    let mut cursor = LineCursor::new(content);
    let mut cues: Vec<SrtCue> = Vec::new();

    while let Some(position_line) = cursor.next_line() {
        // Get the position
        let position: u64 = position_line.trim().parse().map_err(|_| {
            ParseError::structural(
                FORMAT,
                cursor.line_number(),
                format!("invalid position {:?}", position_line.trim()),
            )
        })?;

        // Get the timings
        let Some(timing_line) = cursor.next_line() else {
            return Err(ParseError::structural(
                FORMAT,
                cursor.line_number(),
                "unexpected file end after position",
            ));
        };
        let line_number = cursor.line_number();
        let timing: Vec<&str> = timing_line.split_whitespace().collect();
        if timing.len() != 3 {
            return Err(ParseError::structural(FORMAT, line_number, "invalid timing line"));
        }
        if timing[1] != TIMING_ARROW {
            return Err(ParseError::structural(FORMAT, line_number, "missing timing arrow"));
        }
        let start =
            timecode_to_seconds(timing[0], SRT_SEPARATORS).map_err(|source| {
                ParseError::Timecode {
                    format: FORMAT,
                    line: line_number,
                    source,
                }
            })?;
        let end =
            timecode_to_seconds(timing[2], SRT_SEPARATORS).map_err(|source| {
                ParseError::Timecode {
                    format: FORMAT,
                    line: line_number,
                    source,
                }
            })?;
        if end < start {
            return Err(ParseError::structural(
                FORMAT,
                line_number,
                "end time precedes start time",
            ));
        }

        // The record must carry at least one text line; a file ending
        // right after the timings is truncated, not empty
        let Some(first_text) = cursor.next_line() else {
            return Err(ParseError::structural(
                FORMAT,
                line_number,
                "unexpected file end after timings",
            ));
        };
        cursor.push_back(first_text);

        // Accumulate text lines until a blank line or end of file
        let mut lines: Vec<&str> = Vec::new();
        while let Some(line) = cursor.next_line() {
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }
        let raw_text = lines.join("\n");

        // Filter out SRT formatting
        let text = MARKUP_REGEX.replace_all(&raw_text, "").into_owned();

        let entry = TimedText { text, start, end };

        // Don't add if the subtitle is only whitespace
        if entry.is_blank() {
            debug!("SRT parser: dropping whitespace-only cue {position}");
            continue;
        }
        cues.push(SrtCue { position, entry });
    }

    // The numeric position is the authoritative tie-break for equal
    // start times
    cues.sort_by(|lhs, rhs| {
        lhs.entry
            .start
            .total_cmp(&rhs.entry.start)
            .then_with(|| lhs.position.cmp(&rhs.position))
    });

    Ok(cues.into_iter().map(|cue| cue.entry).collect())
}
