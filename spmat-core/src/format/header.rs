//! Matrix header: the `rows=` and `cols=` lines

use super::constants::{COLS_PREFIX, ROWS_PREFIX};
use crate::validation::{parse_integer, strip_prefix_ignoring_whitespace, validate_dimensions};
use crate::{Result, SpmatError};

/// Validated matrix dimensions as declared by a header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixHeader {
    /// Number of rows
    nrows: usize,
    /// Number of columns
    ncols: usize,
}

impl MatrixHeader {
    /// Create a header, rejecting zero rows or columns
    pub fn new(nrows: usize, ncols: usize) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(SpmatError::InvalidDimensions {
                rows: saturating_i64(nrows),
                cols: saturating_i64(ncols),
            });
        }
        Ok(Self { nrows, ncols })
    }

    /// Parse the two header lines
    ///
    /// Line numbers are 1-based positions in the original text and are only
    /// used for error reporting.
    pub fn parse(
        rows_line: &str,
        rows_line_no: usize,
        cols_line: &str,
        cols_line_no: usize,
    ) -> Result<Self> {
        let rows = parse_field(rows_line, ROWS_PREFIX).ok_or(SpmatError::FormatError {
            line: rows_line_no,
        })?;
        let cols = parse_field(cols_line, COLS_PREFIX).ok_or(SpmatError::FormatError {
            line: cols_line_no,
        })?;

        let (nrows, ncols) = validate_dimensions(rows, cols)?;
        Ok(Self { nrows, ncols })
    }

    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

fn parse_field(line: &str, prefix: &str) -> Option<i64> {
    strip_prefix_ignoring_whitespace(line, prefix).and_then(parse_integer)
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl core::fmt::Display for MatrixHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{ROWS_PREFIX}{}\n{COLS_PREFIX}{}", self.nrows, self.ncols)
    }
}
