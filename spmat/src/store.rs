//! Sparse matrix storage
//!
//! Only non-zero values are kept, in a row-major two-level map: row index to
//! a per-row map of column index to value. Absent entries read as zero.
//!
//! Invariants upheld by [`SparseMatrix::set`], the only mutation path:
//! - every stored value is non-zero, and rows left empty are pruned
//! - stored coordinates lie within `num_rows x num_cols`
//! - dimensions never change after construction

use hashbrown::HashMap;
use spmat_core::{Entry, EntryReader, MatrixHeader, MatrixView, Result, SpmatError};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Non-zero values of one row, keyed by column
pub type Row = HashMap<usize, i64>;

/// Sparse matrix of signed integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    header: MatrixHeader,
    data: HashMap<usize, Row>,
}

impl SparseMatrix {
    /// Create an empty matrix
    ///
    /// Fails with [`SpmatError::InvalidDimensions`] if either count is zero.
    pub fn new(num_rows: usize, num_cols: usize) -> Result<Self> {
        let header = MatrixHeader::new(num_rows, num_cols)?;
        Ok(Self::from_header(header))
    }

    /// Create an empty matrix with already validated dimensions
    pub fn from_header(header: MatrixHeader) -> Self {
        Self {
            header,
            data: HashMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Unlike [`set`](Self::set), out-of-range coordinates are reported as
    /// [`SpmatError::RangeError`]. Later triples overwrite earlier ones.
    pub fn from_entries<I>(num_rows: usize, num_cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = Self::new(num_rows, num_cols)?;

        for (row, col, value) in entries {
            if row >= num_rows || col >= num_cols {
                return Err(SpmatError::RangeError {
                    row: i64::try_from(row).unwrap_or(i64::MAX),
                    col: i64::try_from(col).unwrap_or(i64::MAX),
                    rows: num_rows,
                    cols: num_cols,
                });
            }
            matrix.set(row, col, value);
        }

        Ok(matrix)
    }

    /// Decode the text format
    ///
    /// Parsing is all-or-nothing: the first malformed or out-of-range line
    /// aborts and no matrix is returned. Entries are applied through
    /// [`set`](Self::set), so zero values are dropped and duplicate
    /// coordinates keep the last value.
    pub fn parse(text: &str) -> Result<Self> {
        let reader = EntryReader::new(text)?;
        let mut matrix = Self::from_header(reader.header());

        for entry in reader {
            let entry = entry?;
            matrix.set(entry.row, entry.col, entry.value);
        }

        debug!(
            rows = matrix.num_rows(),
            cols = matrix.num_cols(),
            nnz = matrix.nnz(),
            "parsed sparse matrix"
        );
        Ok(matrix)
    }

    pub fn num_rows(&self) -> usize {
        self.header.nrows()
    }

    pub fn num_cols(&self) -> usize {
        self.header.ncols()
    }

    /// Dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.header.dimensions()
    }

    pub fn header(&self) -> MatrixHeader {
        self.header
    }

    /// Get the value at `(row, col)`
    ///
    /// Returns `0` for absent entries and for coordinates outside the
    /// matrix; reading out of bounds is never an error.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data
            .get(&row)
            .and_then(|cols| cols.get(&col))
            .copied()
            .unwrap_or(0)
    }

    /// Set the value at `(row, col)`
    ///
    /// Out-of-bounds coordinates are silently ignored. Writing `0` removes
    /// the entry, and the row too once it holds nothing else.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        if row >= self.num_rows() || col >= self.num_cols() {
            return;
        }

        if value == 0 {
            if let Some(cols) = self.data.get_mut(&row) {
                cols.remove(&col);
                if cols.is_empty() {
                    self.data.remove(&row);
                }
            }
            return;
        }

        self.data.entry(row).or_default().insert(col, value);
    }

    /// Number of stored non-zero values
    pub fn nnz(&self) -> usize {
        self.data.values().map(Row::len).sum()
    }

    /// Whether no non-zero values are stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `row` holds at least one non-zero value
    pub fn has_row(&self, row: usize) -> bool {
        self.data.contains_key(&row)
    }

    /// Non-zero `(col, value)` pairs of one row, in no particular order
    ///
    /// Rows without entries, including out-of-range rows, yield nothing.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.data
            .get(&row)
            .into_iter()
            .flat_map(|cols| cols.iter().map(|(&col, &value)| (col, value)))
    }

    /// Indices of rows holding non-zero values, in no particular order
    pub fn stored_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.keys().copied()
    }

    /// Indices of rows holding non-zero values, ascending
    pub fn row_indices(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.stored_rows().collect();
        rows.sort_unstable();
        rows
    }

    /// All `(row, col, value)` triples, in no particular order
    pub fn nonzeros(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.data.iter().flat_map(|(&row, cols)| {
            cols.iter().map(move |(&col, &value)| (row, col, value))
        })
    }

    /// All entries ordered by ascending row, then ascending column
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.row_indices().into_iter().flat_map(move |row| {
            let mut cols: Vec<(usize, i64)> = self.row(row).collect();
            cols.sort_unstable_by_key(|&(col, _)| col);
            cols.into_iter()
                .map(move |(col, value)| Entry::new(row, col, value))
        })
    }

    /// Encode the text format
    ///
    /// Emits the `rows=`/`cols=` header and one line per entry in row-major
    /// order, each terminated by a newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl MatrixView for SparseMatrix {
    fn get_element(&self, row: usize, col: usize) -> i64 {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for entry in self.entries() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl FromStr for SparseMatrix {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SparseMatrix {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let entries: Vec<Entry> = self.entries().collect();
        let mut state = serializer.serialize_struct("SparseMatrix", 3)?;
        state.serialize_field("rows", &self.num_rows())?;
        state.serialize_field("cols", &self.num_cols())?;
        state.serialize_field("entries", &entries)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SQUARE: &str = "rows=2\ncols=2\n(0,0,1)\n(0,1,2)\n(1,0,3)\n(1,1,4)";

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> SparseMatrix {
        let mut matrix = SparseMatrix::new(rows, cols).unwrap();
        for _ in 0..nnz {
            let value = rng.gen_range(-9..=9);
            matrix.set(rng.gen_range(0..rows), rng.gen_range(0..cols), value);
        }
        matrix
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            SparseMatrix::new(0, 3),
            Err(SpmatError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            SparseMatrix::new(3, 0),
            Err(SpmatError::InvalidDimensions { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn test_empty_matrix_reads_zero_everywhere() {
        let matrix = SparseMatrix::new(3, 4).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.nnz(), 0);

        for row in 0..5 {
            for col in 0..6 {
                assert_eq!(matrix.get(row, col), 0);
            }
        }
        assert_eq!(matrix.get(usize::MAX, usize::MAX), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut matrix = SparseMatrix::new(3, 3).unwrap();
        matrix.set(1, 2, 7);
        matrix.set(0, 0, -4);
        assert_eq!(matrix.get(1, 2), 7);
        assert_eq!(matrix.get(0, 0), -4);
        assert_eq!(matrix.nnz(), 2);

        matrix.set(1, 2, 9);
        assert_eq!(matrix.get(1, 2), 9);
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut matrix = SparseMatrix::new(2, 2).unwrap();
        matrix.set(2, 0, 5);
        matrix.set(0, 2, 5);
        matrix.set(100, 100, 5);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_set_zero_prunes_row() {
        let mut matrix = SparseMatrix::new(3, 3).unwrap();
        matrix.set(1, 0, 3);
        matrix.set(1, 2, 4);

        matrix.set(1, 0, 0);
        assert_eq!(matrix.get(1, 0), 0);
        assert!(matrix.has_row(1));

        matrix.set(1, 2, 0);
        assert_eq!(matrix.get(1, 2), 0);
        assert!(!matrix.has_row(1));
        assert!(matrix.is_empty());

        // Clearing an absent entry is a no-op
        matrix.set(2, 2, 0);
        assert!(!matrix.has_row(2));
    }

    #[test]
    fn test_parse() {
        let matrix = SparseMatrix::parse(SQUARE).unwrap();
        assert_eq!(matrix.dimensions(), (2, 2));
        assert_eq!(matrix.nnz(), 4);
        assert_eq!(matrix.get(0, 1), 2);
        assert_eq!(matrix.get(1, 0), 3);
    }

    #[test]
    fn test_parse_drops_zero_values() {
        let matrix = SparseMatrix::parse("rows=1\ncols=1\n(0,0,0)").unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.render(), "rows=1\ncols=1\n");
    }

    #[test]
    fn test_parse_last_write_wins() {
        let matrix = SparseMatrix::parse("rows=2\ncols=2\n(0,0,1)\n(0,0,5)").unwrap();
        assert_eq!(matrix.get(0, 0), 5);

        let matrix = SparseMatrix::parse("rows=2\ncols=2\n(0,0,1)\n(0,0,0)").unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_parse_ignores_whitespace_and_blank_lines() {
        let text = "\n rows = 2 \n\n cols=3\n\n( 1 , 2 , - 6 )\n   \n\n";
        let matrix = SparseMatrix::parse(text).unwrap();
        assert_eq!(matrix.dimensions(), (2, 3));
        assert_eq!(matrix.get(1, 2), -6);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            SparseMatrix::parse("rows=2\ncols=3\n(1,2)"),
            Err(SpmatError::FormatError { line: 3 })
        );
        assert_eq!(
            SparseMatrix::parse("rows=2"),
            Err(SpmatError::FormatError { line: 2 })
        );
        assert_eq!(
            SparseMatrix::parse("cols=2\nrows=2"),
            Err(SpmatError::FormatError { line: 1 })
        );
        assert_eq!(
            SparseMatrix::parse("rows=0\ncols=2"),
            Err(SpmatError::InvalidDimensions { rows: 0, cols: 2 })
        );
        assert_eq!(
            SparseMatrix::parse("rows=2\ncols=2\n(0,0,1)\n(2,0,1)"),
            Err(SpmatError::RangeError {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_from_str() {
        let matrix: SparseMatrix = SQUARE.parse().unwrap();
        assert_eq!(matrix, SparseMatrix::parse(SQUARE).unwrap());
    }

    #[test]
    fn test_from_entries() {
        let matrix = SparseMatrix::from_entries(2, 3, [(0, 2, 5), (1, 1, 0), (1, 0, -2)]).unwrap();
        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get(0, 2), 5);
        assert_eq!(matrix.get(1, 0), -2);

        assert_eq!(
            SparseMatrix::from_entries(2, 3, [(0, 3, 1)]),
            Err(SpmatError::RangeError {
                row: 0,
                col: 3,
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn test_render_is_row_major() {
        let matrix =
            SparseMatrix::from_entries(3, 3, [(2, 1, 6), (0, 2, 3), (2, 0, 5), (0, 0, 1)]).unwrap();
        assert_eq!(
            matrix.render(),
            "rows=3\ncols=3\n(0, 0, 1)\n(0, 2, 3)\n(2, 0, 5)\n(2, 1, 6)\n"
        );
    }

    #[test]
    fn test_row_accessors() {
        let matrix = SparseMatrix::parse(SQUARE).unwrap();
        let mut row: Vec<_> = matrix.row(1).collect();
        row.sort_unstable();
        assert_eq!(row, vec![(0, 3), (1, 4)]);
        assert_eq!(matrix.row(5).count(), 0);
        assert_eq!(matrix.row_indices(), vec![0, 1]);
        assert_eq!(matrix.nonzeros().count(), 4);
    }

    #[test]
    fn test_render_parse_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let rows = rng.gen_range(1..12);
            let cols = rng.gen_range(1..12);
            let matrix = random_matrix(&mut rng, rows, cols, 30);

            let parsed = SparseMatrix::parse(&matrix.render()).unwrap();
            assert_eq!(parsed, matrix);
        }
    }

    #[test]
    fn test_matrix_view() {
        let matrix = SparseMatrix::parse(SQUARE).unwrap();
        let view: &dyn MatrixView = &matrix;
        assert_eq!(view.get_element(1, 1), 4);
        assert_eq!(view.nnz(), 4);
        assert!((view.density() - 1.0).abs() < f64::EPSILON);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let matrix = SparseMatrix::from_entries(2, 2, [(1, 0, 3), (0, 1, -1)]).unwrap();
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rows": 2,
                "cols": 2,
                "entries": [
                    {"row": 0, "col": 1, "value": -1},
                    {"row": 1, "col": 0, "value": 3}
                ]
            })
        );
    }
}
