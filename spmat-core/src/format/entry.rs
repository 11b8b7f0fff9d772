//! Entry lines: `(row, col, value)`

use super::constants::{ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR};
use super::header::MatrixHeader;
use crate::validation::{parse_integer, validate_index};
use crate::{Result, SpmatError};

/// A single matrix element with its coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Parse an entry line and check it against the header's dimensions
    ///
    /// Syntax problems are reported as [`SpmatError::FormatError`] with
    /// `line_no`; coordinates outside the header's dimensions as
    /// [`SpmatError::RangeError`]. A zero value is returned as-is.
    pub fn parse(line: &str, line_no: usize, header: &MatrixHeader) -> Result<Self> {
        let malformed = SpmatError::FormatError { line: line_no };

        let inner = line
            .trim()
            .strip_prefix(ENTRY_OPEN)
            .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
            .ok_or(malformed)?;

        let mut fields = [0i64; ENTRY_FIELDS];
        let mut count = 0;

        for token in inner.split(FIELD_SEPARATOR) {
            if count == ENTRY_FIELDS {
                return Err(malformed);
            }
            fields[count] = parse_integer(token).ok_or(malformed)?;
            count += 1;
        }

        if count != ENTRY_FIELDS {
            return Err(malformed);
        }

        let [row, col, value] = fields;
        let (row, col) = validate_index(row, col, header.nrows(), header.ncols())?;

        Ok(Self { row, col, value })
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}
