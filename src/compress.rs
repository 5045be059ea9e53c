use log::debug;

use crate::timed_text::TimedText;

// @module: Sweep-line compression of overlapping subtitle timelines

/// Merges temporally-overlapping entries into a non-overlapping timeline.
///
/// The input must already be sorted ascending by start time, which is
/// what every parser in this crate produces. Entries active at the same
/// instant are merged into one record whose text is the newline-joined
/// concatenation of the active texts in arrival order. Output boundaries
/// fall exactly on input start/end timestamps; entries whose ends
/// coincide expire together in a single flush.
///
/// Compressing an already non-overlapping sequence returns it unchanged.
pub fn compress_timeline(entries: Vec<TimedText>) -> Vec<TimedText> {
    let mut compressed: Vec<TimedText> = Vec::with_capacity(entries.len());

    // Entries currently on screen, in arrival order
    let mut active: Vec<&TimedText> = Vec::new();
    let mut earliest_end = 0.0_f64;
    let mut latest_end = 0.0_f64;

    for entry in &entries {
        // Flush every batch that expires before this entry starts
        while !active.is_empty() && earliest_end <= entry.start {
            flush_batch(&mut active, &mut earliest_end, &mut latest_end, &mut compressed);
        }

        if active.is_empty() {
            earliest_end = entry.end;
            latest_end = entry.end;
        }
        active.push(entry);
    }

    // Drain whatever is still active once the input is exhausted
    while !active.is_empty() {
        flush_batch(&mut active, &mut earliest_end, &mut latest_end, &mut compressed);
    }

    debug!(
        "Compressed {} subtitle entries into {}",
        entries.len(),
        compressed.len()
    );
    compressed
}

/// Emits one merged record for the current active set, then removes
/// every entry that expires at the current earliest end.
fn flush_batch(
    active: &mut Vec<&TimedText>,
    earliest_end: &mut f64,
    latest_end: &mut f64,
    compressed: &mut Vec<TimedText>,
) {
    let text = active
        .iter()
        .map(|sub| sub.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    compressed.push(TimedText {
        text,
        start: active[0].start,
        end: *latest_end,
    });

    // Entries ending exactly at the earliest end expire together
    let expired = *earliest_end;
    active.retain(|sub| sub.end != expired);

    // Recompute the window over the survivors
    let mut next_earliest = f64::INFINITY;
    for sub in active.iter() {
        if sub.end < next_earliest {
            next_earliest = sub.end;
        }
        if sub.end > *latest_end {
            *latest_end = sub.end;
        }
    }
    if next_earliest.is_finite() {
        *earliest_end = next_earliest;
    }
}
