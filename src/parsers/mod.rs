/*!
 * Subtitle format detection and the parsing pipeline entry point.
 *
 * Each supported format has a line-oriented parser in its own
 * submodule. The format is selected by file extension alone; there is
 * no content sniffing across formats.
 */

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::compress::compress_timeline;
use crate::errors::ParseError;
use crate::timed_text::TimedText;

pub mod ass;
pub mod srt;
pub mod vtt;

/// Supported subtitle file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubtitleFormat {
    /// Advanced SubStation Alpha (`.ass`)
    Ass,
    /// SubRip (`.srt`)
    Srt,
    /// WebVTT (`.vtt`)
    Vtt,
}

impl SubtitleFormat {
    /// Detects the format from a file path by case-insensitive
    /// extension match
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let extension = path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "ass" => Ok(SubtitleFormat::Ass),
            "srt" => Ok(SubtitleFormat::Srt),
            "vtt" => Ok(SubtitleFormat::Vtt),
            _ => Err(ParseError::UnsupportedFormat(extension)),
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubtitleFormat::Ass => write!(f, "ASS"),
            SubtitleFormat::Srt => write!(f, "SRT"),
            SubtitleFormat::Vtt => write!(f, "VTT"),
        }
    }
}

/// Parses a subtitle file into timed-text entries.
///
/// The parser is selected by file extension. The returned entries are
/// sorted ascending by start time; if `compress` is set, overlapping
/// entries are merged into a non-overlapping timeline.
///
/// `Ok(vec![])` means the file was valid but contained no subtitles,
/// which is distinct from every `Err` case.
pub fn parse_subtitles<P: AsRef<Path>>(
    path: P,
    compress: bool,
) -> Result<Vec<TimedText>, ParseError> {
    let path = path.as_ref();
    let format = SubtitleFormat::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|source| ParseError::Unopenable {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_string(&content, format)?;
    debug!(
        "Parsed {} entries from {} ({})",
        entries.len(),
        path.display(),
        format
    );

    if compress {
        Ok(compress_timeline(entries))
    } else {
        Ok(entries)
    }
}

/// Parses subtitle content already loaded in memory
pub fn parse_string(content: &str, format: SubtitleFormat) -> Result<Vec<TimedText>, ParseError> {
    match format {
        SubtitleFormat::Ass => ass::parse(content),
        SubtitleFormat::Srt => srt::parse(content),
        SubtitleFormat::Vtt => vtt::parse(content),
    }
}
