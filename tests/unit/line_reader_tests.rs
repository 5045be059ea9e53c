/*!
 * Tests for the line cursor with pushback
 */

use timedtext::line_reader::LineCursor;

#[test]
fn test_next_line_withMultipleLines_shouldIterateInOrder() {
    let mut cursor = LineCursor::new("first\nsecond\nthird");

    assert_eq!(cursor.next_line(), Some("first"));
    assert_eq!(cursor.line_number(), 1);
    assert_eq!(cursor.next_line(), Some("second"));
    assert_eq!(cursor.line_number(), 2);
    assert_eq!(cursor.next_line(), Some("third"));
    assert_eq!(cursor.line_number(), 3);
    assert_eq!(cursor.next_line(), None);
}

#[test]
fn test_next_line_withEmptyContent_shouldReturnNone() {
    let mut cursor = LineCursor::new("");
    assert_eq!(cursor.next_line(), None);
}

#[test]
fn test_next_line_withTrailingNewline_shouldNotYieldExtraLine() {
    let mut cursor = LineCursor::new("only\n");
    assert_eq!(cursor.next_line(), Some("only"));
    assert_eq!(cursor.next_line(), None);
}

#[test]
fn test_push_back_withReadLine_shouldReturnItAgain() {
    let mut cursor = LineCursor::new("alpha\nbeta");

    let line = cursor.next_line().unwrap();
    assert_eq!(line, "alpha");
    cursor.push_back(line);
    assert_eq!(cursor.line_number(), 0);

    assert_eq!(cursor.next_line(), Some("alpha"));
    assert_eq!(cursor.line_number(), 1);
    assert_eq!(cursor.next_line(), Some("beta"));
    assert_eq!(cursor.line_number(), 2);
}

#[test]
fn test_push_back_withBlankLines_shouldPreserveThem() {
    let mut cursor = LineCursor::new("one\n\ntwo");

    assert_eq!(cursor.next_line(), Some("one"));
    assert_eq!(cursor.next_line(), Some(""));
    assert_eq!(cursor.next_line(), Some("two"));
    assert_eq!(cursor.next_line(), None);
}
