//! Line-oriented cursor over note map source text.

use std::ops::Range;

/// A cursor that yields the source one line at a time, tracking the byte
/// index for warning spans.
pub struct Cursor<'a> {
    /// The byte index position.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub const fn new(source: &'a str) -> Self {
        Self { index: 0, source }
    }

    /// Returns true when no lines remain.
    pub const fn is_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Determine the end of the current line and handle CRLF (\r\n) correctly.
    ///
    /// Returns a tuple `(remaining_end, line_end_index)` where:
    /// - `remaining_end` is the byte offset from current `index` to the first `\n` if any,
    ///   otherwise the remaining source length from `index` to the end.
    /// - `line_end_index` is the absolute byte index where the line content ends (exclusive).
    ///   If CRLF is detected right before the `\n`, the `\r` will be excluded from the line
    ///   content so that callers get a clean line without the trailing `\r`.
    fn current_line_bounds(&self) -> (usize, usize) {
        let remaining_end = self.source[self.index..]
            .find('\n')
            .unwrap_or(self.source[self.index..].len());

        let newline_index = self.index + remaining_end;
        let line_end_index = if newline_index > self.index
            && self.source.get(newline_index - 1..=newline_index) == Some("\r\n")
        {
            newline_index - 1
        } else {
            newline_index
        };

        (remaining_end, line_end_index)
    }

    /// Move cursor, through and return the next line with its byte range.
    ///
    /// The range covers the line content only, without the terminator.
    pub fn next_line_with_range(&mut self) -> Option<(Range<usize>, &'a str)> {
        if self.is_end() {
            return None;
        }
        let (remaining_end, line_end_index) = self.current_line_bounds();
        let range = self.index..line_end_index;
        let content = &self.source[self.index..line_end_index];
        self.index += remaining_end;
        if self.index < self.source.len() {
            // Step over the line feed itself.
            self.index += 1;
        }
        Some((range, content))
    }

    /// Move cursor, through and return the next line.
    pub fn next_line(&mut self) -> Option<&'a str> {
        self.next_line_with_range().map(|(_, line)| line)
    }

    /// Returns the current byte index in the source string.
    pub const fn index(&self) -> usize {
        self.index
    }
}

#[test]
fn test_lf_lines() {
    let mut cursor = Cursor::new("2 140 4\n1 0 1 0\n2222\n");

    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.next_line(), Some("2 140 4"));
    assert_eq!(cursor.index(), 8);
    assert_eq!(cursor.next_line(), Some("1 0 1 0"));
    assert_eq!(cursor.next_line(), Some("2222"));
    assert!(cursor.is_end());
    assert_eq!(cursor.next_line(), None);
}

#[test]
fn test_crlf_lines() {
    let mut cursor = Cursor::new("1 120 6\r\n10\r\n");

    let (range, line) = cursor.next_line_with_range().unwrap();
    assert_eq!(line, "1 120 6");
    assert_eq!(range, 0..7);

    let (range, line) = cursor.next_line_with_range().unwrap();
    assert_eq!(line, "10");
    assert_eq!(range, 9..11);

    assert_eq!(cursor.next_line_with_range(), None);
}

#[test]
fn test_no_trailing_newline() {
    let mut cursor = Cursor::new("1 90 2\n11");

    assert_eq!(cursor.next_line(), Some("1 90 2"));
    assert_eq!(cursor.next_line(), Some("11"));
    assert!(cursor.is_end());
    assert_eq!(cursor.next_line(), None);
}

#[test]
fn test_empty_lines() {
    let mut cursor = Cursor::new("\n\nend");

    let (range, line) = cursor.next_line_with_range().unwrap();
    assert_eq!(line, "");
    assert_eq!(range, 0..0);
    assert_eq!(cursor.next_line(), Some(""));
    assert_eq!(cursor.next_line(), Some("end"));
    assert_eq!(cursor.next_line(), None);
}

#[test]
fn test_empty_source() {
    let mut cursor = Cursor::new("");

    assert!(cursor.is_end());
    assert_eq!(cursor.next_line(), None);
    assert_eq!(cursor.index(), 0);
}

#[test]
fn test_lone_carriage_return_is_not_a_terminator() {
    let mut cursor = Cursor::new("10\r01\n");

    assert_eq!(cursor.next_line(), Some("10\r01"));
    assert_eq!(cursor.next_line(), None);
}
