/*!
 * Tests for the WebVTT (.vtt) parser
 */

use timedtext::errors::ParseError;
use timedtext::parsers::vtt;

use crate::common::assert_seconds_eq;

#[test]
fn test_parse_withWellFormedFile_shouldExtractEntries() {
    let content = "WEBVTT\n\
                   \n\
                   00:00:01.000 --> 00:00:04.000\n\
                   Hello there.\n\
                   \n\
                   00:00:05.500 --> 00:00:07.250\n\
                   Two lines\n\
                   of text.\n";

    let entries = vtt::parse(content).unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].text, "Hello there.");
    assert_seconds_eq(entries[0].start, 1.0);
    assert_seconds_eq(entries[0].end, 4.0);

    assert_eq!(entries[1].text, "Two lines\nof text.");
    assert_seconds_eq(entries[1].start, 5.5);
    assert_seconds_eq(entries[1].end, 7.25);
}

#[test]
fn test_parse_withHeaderOnly_shouldReturnZeroEntries() {
    let entries = vtt::parse("WEBVTT\n\n").unwrap();
    assert!(entries.is_empty());

    // Header without even the blank line is still a valid empty file
    let entries = vtt::parse("WEBVTT\n").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_parse_withHeaderMetadata_shouldSkipToFirstBlankLine() {
    let content = "WEBVTT - This file has metadata\n\
                   Kind: captions\n\
                   Language: en\n\
                   \n\
                   00:00:01.000 --> 00:00:02.000\n\
                   Hello.\n";

    let entries = vtt::parse(content).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Hello.");
}

#[test]
fn test_parse_withEmptyContent_shouldFail() {
    assert!(vtt::parse("").is_err());
}

#[test]
fn test_parse_withMissingHeader_shouldFail() {
    let content = "00:00:01.000 --> 00:00:02.000\nHello.\n";
    let result = vtt::parse(content);
    assert!(matches!(result, Err(ParseError::Structural { line: 1, .. })));
}

#[test]
fn test_parse_withCueIdentifier_shouldReadTimingFromNextLine() {
    let content = "WEBVTT\n\
                   \n\
                   intro-cue\n\
                   00:00:01.000 --> 00:00:02.000\n\
                   Hello.\n";

    let entries = vtt::parse(content).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Hello.");
}

#[test]
fn test_parse_withNonCueSections_shouldSkipThem() {
    let content = "WEBVTT\n\
                   \n\
                   NOTE This is a comment\n\
                   spanning two lines\n\
                   \n\
                   STYLE\n\
                   ::cue { color: yellow; }\n\
                   \n\
                   REGION\n\
                   id:bill width:40%\n\
                   \n\
                   00:00:01.000 --> 00:00:02.000\n\
                   Visible.\n";

    let entries = vtt::parse(content).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Visible.");
}

#[test]
fn test_parse_withCueSettings_shouldIgnoreTrailingTokens() {
    let content = "WEBVTT\n\
                   \n\
                   00:00:01.000 --> 00:00:02.000 align:start position:0%\n\
                   Positioned.\n";

    let entries = vtt::parse(content).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Positioned.");
}

#[test]
fn test_parse_withAngleTags_shouldStripThem() {
    let content = "WEBVTT\n\
                   \n\
                   00:00:01.000 --> 00:00:02.000\n\
                   <c.yellow>Colored</c> and <00:00:01.500>timed <b>bold</b>\n";

    let entries = vtt::parse(content).unwrap();
    assert_eq!(entries[0].text, "Colored and timed bold");
}

#[test]
fn test_parse_withTagOnlyText_shouldDropEntrySilently() {
    let content = "WEBVTT\n\
                   \n\
                   00:00:01.000 --> 00:00:02.000\n\
                   <c></c>\n\
                   \n\
                   00:00:03.000 --> 00:00:04.000\n\
                   Kept.\n";

    let entries = vtt::parse(content).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Kept.");
}

#[test]
fn test_parse_withInvalidTimingAfterIdentifier_shouldFail() {
    let content = "WEBVTT\n\
                   \n\
                   some-cue\n\
                   this is not a timing line\n\
                   Text.\n";

    assert!(vtt::parse(content).is_err());
}

#[test]
fn test_parse_withFileEndAfterTimings_shouldFail() {
    // A file ending right after a timing line is truncated, not a
    // valid empty one
    let content = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\n";
    let result = vtt::parse(content);
    assert!(matches!(result, Err(ParseError::Structural { .. })));
}

#[test]
fn test_parse_withFileEndAfterIdentifier_shouldFail() {
    let content = "WEBVTT\n\
                   \n\
                   orphan-cue";

    assert!(vtt::parse(content).is_err());
}

#[test]
fn test_parse_withSrtStyleCommaFraction_shouldFail() {
    // Comma is not a VTT timecode separator
    let content = "WEBVTT\n\
                   \n\
                   00:00:01,000 --> 00:00:02,000\n\
                   Text.\n";

    let result = vtt::parse(content);
    assert!(matches!(result, Err(ParseError::Timecode { .. })));
}

#[test]
fn test_parse_withEndBeforeStart_shouldFail() {
    let content = "WEBVTT\n\
                   \n\
                   00:00:05.000 --> 00:00:01.000\n\
                   Text.\n";

    assert!(vtt::parse(content).is_err());
}

#[test]
fn test_parse_withUnsortedCues_shouldSortByStart() {
    let content = "WEBVTT\n\
                   \n\
                   00:00:10.000 --> 00:00:12.000\n\
                   Later.\n\
                   \n\
                   00:00:01.000 --> 00:00:02.000\n\
                   Earlier.\n";

    let entries = vtt::parse(content).unwrap();
    assert_eq!(entries[0].text, "Earlier.");
    assert_eq!(entries[1].text, "Later.");
}
