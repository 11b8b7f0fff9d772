//! Streaming reader over the text format
//!
//! The reader parses the header eagerly and then yields one entry per
//! non-blank line, so callers can build any storage without this crate
//! allocating.

use super::entry::Entry;
use super::header::MatrixHeader;
use crate::validation::is_blank;
use crate::{Result, SpmatError};
use core::iter::Enumerate;
use core::str::Lines;

/// Iterator over the entries of a textual matrix description
#[derive(Debug, Clone)]
pub struct EntryReader<'a> {
    lines: Enumerate<Lines<'a>>,
    header: MatrixHeader,
}

impl<'a> EntryReader<'a> {
    /// Read the header from `text`
    ///
    /// Fails with [`SpmatError::FormatError`] when fewer than two non-blank
    /// lines are present, pointing at the line after the end of the input.
    pub fn new(text: &'a str) -> Result<Self> {
        let mut lines = text.lines().enumerate();
        let missing = || SpmatError::FormatError {
            line: text.lines().count() + 1,
        };

        let (rows_no, rows_line) = next_content_line(&mut lines).ok_or_else(missing)?;
        let (cols_no, cols_line) = next_content_line(&mut lines).ok_or_else(missing)?;

        let header = MatrixHeader::parse(rows_line, rows_no, cols_line, cols_no)?;

        Ok(Self { lines, header })
    }

    pub fn header(&self) -> MatrixHeader {
        self.header
    }
}

impl Iterator for EntryReader<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line_no, line) = next_content_line(&mut self.lines)?;
        Some(Entry::parse(line, line_no, &self.header))
    }
}

/// Next non-blank line with its 1-based line number
fn next_content_line<'a>(lines: &mut Enumerate<Lines<'a>>) -> Option<(usize, &'a str)> {
    lines
        .find(|(_, line)| !is_blank(line))
        .map(|(index, line)| (index + 1, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_header_and_entries() {
        let text = "rows=2\ncols=3\n(0,0,1)\n(1,2,-4)\n";
        let reader = EntryReader::new(text).unwrap();
        assert_eq!(reader.header().dimensions(), (2, 3));

        let entries: Vec<_> = reader.collect();
        assert_eq!(entries, vec![Ok(Entry::new(0, 0, 1)), Ok(Entry::new(1, 2, -4))]);
    }

    #[test]
    fn test_skips_blank_lines() {
        let text = "\n  \nrows=2\n\ncols=2\n \t\n(1,1,3)\n\n\n";
        let reader = EntryReader::new(text).unwrap();
        assert_eq!(reader.header().dimensions(), (2, 2));

        let entries: Vec<_> = reader.collect();
        assert_eq!(entries, vec![Ok(Entry::new(1, 1, 3))]);
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            EntryReader::new("").unwrap_err(),
            SpmatError::FormatError { line: 1 }
        );
        assert_eq!(
            EntryReader::new("rows=2\n\n").unwrap_err(),
            SpmatError::FormatError { line: 3 }
        );
    }

    #[test]
    fn test_reports_original_line_numbers() {
        let text = "rows=2\ncols=2\n\n(0,0,1)\n(1,2)\n";
        let results: Vec<_> = EntryReader::new(text).unwrap().collect();
        assert_eq!(results[0], Ok(Entry::new(0, 0, 1)));
        assert_eq!(results[1], Err(SpmatError::FormatError { line: 5 }));
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "rows=1\r\ncols=1\r\n(0,0,8)\r\n";
        let entries: Vec<_> = EntryReader::new(text).unwrap().collect();
        assert_eq!(entries, vec![Ok(Entry::new(0, 0, 8))]);
    }
}
