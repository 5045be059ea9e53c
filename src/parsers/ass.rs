use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;
use crate::line_reader::LineCursor;
use crate::parsers::SubtitleFormat;
use crate::timecode::{timecode_to_seconds, ASS_SEPARATORS};
use crate::timed_text::TimedText;

// @module: Advanced SubStation Alpha (.ass) parser

const SCRIPT_INFO_HEADER: &str = "[Script Info]";
const EVENTS_HEADER: &str = "[Events]";
const FORMAT_PREFIX: &str = "Format: ";
const DIALOGUE_PREFIX: &str = "Dialogue: ";

const START_FIELD: &str = "Start";
const END_FIELD: &str = "End";
const TEXT_FIELD: &str = "Text";

// @const: ASS override block regex, e.g. {\an8} or {\k20\1c&HFF&}
static OVERRIDE_BLOCK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\\.*?\}").unwrap());

// @const: Literal \n and \N escape sequences
static NEWLINE_ESCAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\n|\\N").unwrap());

/// Parses ASS subtitle content.
///
/// The file must open with a `[Script Info]` header line. A file
/// without an `[Events]` section is odd but valid and yields zero
/// entries. Within `[Events]`, the first line must be the `Format:`
/// declaration; `Dialogue:` lines are read until the first blank line
/// ends the section.
pub fn parse(content: &str) -> Result<Vec<TimedText>, ParseError> {
    const FORMAT: SubtitleFormat = SubtitleFormat::Ass;
    let mut cursor = LineCursor::new(content);

    // Check for the header
    let Some(first_line) = cursor.next_line() else {
        return Err(ParseError::structural(FORMAT, 1, "empty file"));
    };
    if first_line.trim() != SCRIPT_INFO_HEADER {
        return Err(ParseError::structural(
            FORMAT,
            1,
            format!("missing {SCRIPT_INFO_HEADER} header"),
        ));
    }

    // Skip to the [Events] section
    loop {
        match cursor.next_line() {
            Some(line) if line.trim() == EVENTS_HEADER => break,
            Some(_) => continue,
            // No [Events] section. This is odd but valid.
            None => return Ok(Vec::new()),
        }
    }

    // The format declaration must come first in the section
    let Some(format_line) = cursor.next_line() else {
        return Err(ParseError::structural(
            FORMAT,
            cursor.line_number(),
            "missing Format line in the [Events] section",
        ));
    };
    if !format_line.starts_with(FORMAT_PREFIX) {
        return Err(ParseError::structural(
            FORMAT,
            cursor.line_number(),
            "missing Format line in the [Events] section",
        ));
    }

    let fields: Vec<&str> = format_line[FORMAT_PREFIX.len()..].split(',').collect();
    let columns = FieldColumns::locate(&fields, cursor.line_number())?;

    // Read dialogue lines until the section ends at a blank line
    let mut entries = Vec::new();
    while let Some(line) = cursor.next_line() {
        if line.trim().is_empty() {
            break;
        }
        if !line.starts_with(DIALOGUE_PREFIX) {
            continue;
        }
        let line_number = cursor.line_number();

        let dialogue: Vec<&str> = line[DIALOGUE_PREFIX.len()..].split(',').collect();
        if dialogue.len() < fields.len() {
            return Err(ParseError::structural(
                FORMAT,
                line_number,
                "Dialogue-Format mismatch",
            ));
        }

        let start = timecode_to_seconds(dialogue[columns.start], ASS_SEPARATORS).map_err(
            |source| ParseError::Timecode {
                format: FORMAT,
                line: line_number,
                source,
            },
        )?;
        let end = timecode_to_seconds(dialogue[columns.end], ASS_SEPARATORS).map_err(
            |source| ParseError::Timecode {
                format: FORMAT,
                line: line_number,
                source,
            },
        )?;
        if end < start {
            return Err(ParseError::structural(
                FORMAT,
                line_number,
                "end time precedes start time",
            ));
        }

        // The text column may itself contain commas; rejoin the tail
        let text = dialogue[columns.text..].join(",");
        let text = OVERRIDE_BLOCK_REGEX.replace_all(&text, "");
        let text = NEWLINE_ESCAPE_REGEX.replace_all(&text, "\n").into_owned();

        let entry = TimedText { text, start, end };

        // Throw out empty subtitles
        if entry.is_blank() {
            debug!("ASS parser: dropping whitespace-only dialogue at line {line_number}");
            continue;
        }
        entries.push(entry);
    }

    // Stable sort keeps encounter order for equal start times
    entries.sort_by(|lhs, rhs| lhs.start.total_cmp(&rhs.start));
    Ok(entries)
}

/// Column indices of the timing and text fields within a Format line
struct FieldColumns {
    start: usize,
    end: usize,
    text: usize,
}

impl FieldColumns {
    fn locate(fields: &[&str], line_number: usize) -> Result<Self, ParseError> {
        const FORMAT: SubtitleFormat = SubtitleFormat::Ass;
        let mut start = None;
        let mut end = None;
        let mut text = None;

        for (i, field) in fields.iter().enumerate() {
            let slot = match field.trim() {
                START_FIELD => &mut start,
                END_FIELD => &mut end,
                TEXT_FIELD => &mut text,
                _ => continue,
            };
            if slot.replace(i).is_some() {
                return Err(ParseError::structural(
                    FORMAT,
                    line_number,
                    format!("{} format redefinition", field.trim()),
                ));
            }
        }

        let missing = |name| {
            ParseError::structural(
                FORMAT,
                line_number,
                format!("Format line does not declare a {name} field"),
            )
        };
        Ok(FieldColumns {
            start: start.ok_or_else(|| missing(START_FIELD))?,
            end: end.ok_or_else(|| missing(END_FIELD))?,
            text: text.ok_or_else(|| missing(TEXT_FIELD))?,
        })
    }
}
