// @module: Line cursor with single-line pushback

/// Forward-only line cursor over subtitle file content.
///
/// Supports one line of pushback, which the VTT parser needs to retry
/// a timing-line parse after reading past an optional cue identifier.
/// Line numbers are 1-based and track the position of the line most
/// recently returned by [`next_line`](Self::next_line).
pub struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    pushed: Option<&'a str>,
    line_number: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor over the full file content
    pub fn new(content: &'a str) -> Self {
        LineCursor {
            lines: content.lines(),
            pushed: None,
            line_number: 0,
        }
    }

    /// Returns the next line, or `None` at end of content.
    ///
    /// Line terminators are stripped; trailing whitespace is left
    /// untouched.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.pushed.take().or_else(|| self.lines.next())?;
        self.line_number += 1;
        Some(line)
    }

    /// Pushes the last returned line back onto the cursor.
    ///
    /// Only one line of pushback is held; pushing twice without an
    /// intervening read replaces the held line.
    pub fn push_back(&mut self, line: &'a str) {
        if self.pushed.replace(line).is_none() {
            self.line_number = self.line_number.saturating_sub(1);
        }
    }

    /// 1-based number of the line most recently returned
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
