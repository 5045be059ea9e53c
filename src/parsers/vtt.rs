use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;
use crate::line_reader::LineCursor;
use crate::parsers::SubtitleFormat;
use crate::timecode::{timecode_to_seconds, VTT_SEPARATORS};
use crate::timed_text::TimedText;

// @module: WebVTT (.vtt) parser

const VTT_HEADER: &str = "WEBVTT";
const TIMING_ARROW: &str = "-->";

/// Block keywords that introduce non-cue sections
const NON_CUE_SECTIONS: &[&str] = &["NOTE", "STYLE", "REGION"];

// @const: Angle-bracket markup such as <b>, <c.classname> or <00:01:02.000>
static ANGLE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Parses WebVTT subtitle content.
///
/// The file must open with a `WEBVTT` header. `NOTE`, `STYLE` and
/// `REGION` blocks are skipped. A cue block may begin with an optional
/// identifier line before its timing line; tokens after the end
/// timestamp are cue settings and are ignored.
pub fn parse(content: &str) -> Result<Vec<TimedText>, ParseError> {
    const FORMAT: SubtitleFormat = SubtitleFormat::Vtt;
    let mut cursor = LineCursor::new(content);

    // Exit if the file is empty or missing the header
    let Some(first_line) = cursor.next_line() else {
        return Err(ParseError::structural(FORMAT, 1, "empty file"));
    };
    if !first_line.starts_with(VTT_HEADER) {
        return Err(ParseError::structural(
            FORMAT,
            1,
            format!("missing {VTT_HEADER} header"),
        ));
    }

    // Skip past header info up to the first blank line
    while let Some(line) = cursor.next_line() {
        if line.trim().is_empty() {
            break;
        }
    }

    let mut entries = Vec::new();
    while let Some(line) = cursor.next_line() {
        let trimmed = line.trim();
        // Skip empty lines between blocks
        if trimmed.is_empty() {
            continue;
        }

        // Skip non-cue sections wholesale
        let first_token = trimmed.split_whitespace().next().unwrap_or_default();
        if NON_CUE_SECTIONS.contains(&first_token) {
            while let Some(section_line) = cursor.next_line() {
                if section_line.trim().is_empty() {
                    break;
                }
            }
            continue;
        }

        // The block starts here; hand the line back so the cue reader
        // sees it as either the identifier or the timing line
        cursor.push_back(line);
        let (start, end) = read_cue_timing(&mut cursor)?;

        // The cue must carry at least one text line; a file ending
        // right after the timings is truncated, not empty
        let Some(first_text) = cursor.next_line() else {
            return Err(ParseError::structural(
                FORMAT,
                cursor.line_number(),
                "unexpected file end after timings",
            ));
        };
        cursor.push_back(first_text);

        // Accumulate text lines until a blank line or end of file
        let mut lines: Vec<&str> = Vec::new();
        while let Some(text_line) = cursor.next_line() {
            if text_line.trim().is_empty() {
                break;
            }
            lines.push(text_line);
        }
        let raw_text = lines.join("\n");

        // Filter out angle-bracket formatting
        let text = ANGLE_TAG_REGEX.replace_all(&raw_text, "").into_owned();

        let entry = TimedText { text, start, end };

        // Don't add if the subtitle is only whitespace
        if entry.is_blank() {
            debug!(
                "VTT parser: dropping whitespace-only cue ending at line {}",
                cursor.line_number()
            );
            continue;
        }
        entries.push(entry);
    }

    // Stable sort keeps encounter order for equal start times
    entries.sort_by(|lhs, rhs| lhs.start.total_cmp(&rhs.start));
    Ok(entries)
}

/// Reads the timing line of a cue block, tolerating one optional cue
/// identifier line before it.
fn read_cue_timing(cursor: &mut LineCursor) -> Result<(f64, f64), ParseError> {
    const FORMAT: SubtitleFormat = SubtitleFormat::Vtt;

    let Some(line) = cursor.next_line() else {
        // Cannot happen while callers push the block's first line back
        return Err(ParseError::structural(
            FORMAT,
            cursor.line_number(),
            "unexpected end of cue block",
        ));
    };
    let mut timing: Vec<&str> = line.split_whitespace().collect();
    if !is_timing_line(&timing) {
        // Must have been a cue identifier; the timing line follows
        let Some(next) = cursor.next_line() else {
            return Err(ParseError::structural(
                FORMAT,
                cursor.line_number(),
                "unexpected file end after cue identifier",
            ));
        };
        timing = next.split_whitespace().collect();
        if !is_timing_line(&timing) {
            return Err(ParseError::structural(
                FORMAT,
                cursor.line_number(),
                "invalid timing line",
            ));
        }
    }
    let line_number = cursor.line_number();

    let start = timecode_to_seconds(timing[0], VTT_SEPARATORS).map_err(|source| {
        ParseError::Timecode {
            format: FORMAT,
            line: line_number,
            source,
        }
    })?;
    let end = timecode_to_seconds(timing[2], VTT_SEPARATORS).map_err(|source| {
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
    Ok((start, end))
}

/// A timing line has at least three tokens with the arrow in the
/// middle; anything after the end timestamp is cue settings
fn is_timing_line(tokens: &[&str]) -> bool {
    tokens.len() >= 3 && tokens[1] == TIMING_ARROW
}
