use crate::errors::TimecodeError;

// @module: Textual timecode to seconds conversion

const SECONDS_IN_HOUR: f64 = 3600.0;
const SECONDS_IN_MINUTE: f64 = 60.0;
const SECONDS_IN_MILLISECOND: f64 = 0.001;
const SECONDS_IN_HUNDREDTH: f64 = 0.01;

/// Separators accepted by SRT timing lines (`HH:MM:SS,mmm`)
pub const SRT_SEPARATORS: &[char] = &[':', '.', ','];
/// Separators accepted by VTT timing lines (`HH:MM:SS.mmm`)
pub const VTT_SEPARATORS: &[char] = &[':', '.'];
/// Separators accepted by ASS timestamps (`H:MM:SS.cc`)
pub const ASS_SEPARATORS: &[char] = &[':', '.'];

/// Converts a textual timecode into seconds.
///
/// The timecode is split on any of the given separators. Hours are
/// optional, so `MM:SS.fff` and `HH:MM:SS.fff` shapes are both valid.
/// A 2-digit fraction is read as hundredths and a 3-digit fraction as
/// milliseconds. Seconds and minutes must be 0-59; hours have no upper
/// bound.
pub fn timecode_to_seconds(timecode: &str, separators: &[char]) -> Result<f64, TimecodeError> {
    let mut parts: Vec<&str> = timecode.trim().split(separators).collect();
    parts.reverse();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(TimecodeError::PartCount(parts.len()));
    }

    let mut seconds = 0.0;

    // Sub-second component: width decides the unit
    let fraction = parse_component(parts[0])?;
    match parts[0].len() {
        2 => seconds += fraction as f64 * SECONDS_IN_HUNDREDTH,
        3 => seconds += fraction as f64 * SECONDS_IN_MILLISECOND,
        width => return Err(TimecodeError::FractionWidth(width)),
    }

    let secs = parse_component(parts[1])?;
    if secs > 59 {
        return Err(TimecodeError::OutOfRange {
            component: "seconds",
            value: secs,
        });
    }
    seconds += secs as f64;

    let minutes = parse_component(parts[2])?;
    if minutes > 59 {
        return Err(TimecodeError::OutOfRange {
            component: "minutes",
            value: minutes,
        });
    }
    seconds += minutes as f64 * SECONDS_IN_MINUTE;

    // Hours only appear in the 4-part shape and are unbounded
    if parts.len() == 4 {
        let hours = parse_component(parts[3])?;
        seconds += hours as f64 * SECONDS_IN_HOUR;
    }

    Ok(seconds)
}

/// Parse one timecode component as a non-negative integer
fn parse_component(part: &str) -> Result<u64, TimecodeError> {
    part.parse::<u64>()
        .map_err(|_| TimecodeError::NotNumeric(part.to_string()))
}
