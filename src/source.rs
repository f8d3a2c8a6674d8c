//! The tabular data source consumed by the grid.
//!
//! A [`TabularSource`] is an immutable, already-parsed columnar table. The
//! grid only ever reads from it. By convention, logical row 0 of the source
//! holds the header; data rows start at 1, so a source reporting `r` rows
//! exposes `r - 1` rows to the renderer.

use thiserror::Error;

use crate::cell::CellValue;

/// Failure while reading from a tabular source.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SourceError {
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} table")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("failed to read cell ({row}, {col}): {reason}")]
    Read {
        row: usize,
        col: usize,
        reason: String,
    },
}

/// Read-only columnar table with zero or more index levels followed by zero
/// or more named value columns.
pub trait TabularSource: Send + Sync {
    /// Number of leading index levels.
    fn index_levels(&self) -> usize;

    /// Number of named value columns.
    fn value_columns(&self) -> usize;

    /// Header title of the value column at `col` (0-based among value
    /// columns only).
    fn column_title(&self, col: usize) -> Option<String>;

    /// `(rows, cols)` dimensions, where row 0 is the header row.
    fn dimensions(&self) -> (usize, usize);

    /// The value stored at `(row, col)`, or an error for an invalid
    /// coordinate or an unreadable cell.
    fn get_cell(&self, row: usize, col: usize) -> Result<CellValue, SourceError>;
}

/// An in-memory [`TabularSource`], used by the tests and the demo.
#[derive(Clone, Debug, Default)]
pub struct MemSource {
    index_levels: usize,
    titles: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl MemSource {
    pub fn new(index_levels: usize, titles: &[&str]) -> Self {
        Self {
            index_levels,
            titles: titles.iter().map(|title| (*title).to_owned()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row. The row must hold one value per index level
    /// followed by one value per value column.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), SourceError> {
        let expected = self.index_levels + self.titles.len();
        if row.len() != expected {
            return Err(SourceError::Read {
                row: self.rows.len() + 1,
                col: 0,
                reason: format!("expected {expected} values, got {}", row.len()),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Convenience constructor from text-only rows.
    pub fn from_rows(index_levels: usize, titles: &[&str], rows: &[&[&str]]) -> Self {
        let mut source = Self::new(index_levels, titles);
        for row in rows {
            let values = row.iter().map(|text| CellValue::from(*text)).collect();
            // Row shape is fixed by the constructor arguments.
            source.push_row(values).unwrap_or_else(|err| {
                panic!("malformed row: {err}");
            });
        }
        source
    }
}

impl TabularSource for MemSource {
    fn index_levels(&self) -> usize {
        self.index_levels
    }

    fn value_columns(&self) -> usize {
        self.titles.len()
    }

    fn column_title(&self, col: usize) -> Option<String> {
        self.titles.get(col).cloned()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows.len() + 1, self.index_levels + self.titles.len())
    }

    fn get_cell(&self, row: usize, col: usize) -> Result<CellValue, SourceError> {
        let (rows, cols) = self.dimensions();
        if row >= rows || col >= cols {
            return Err(SourceError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
        if row == 0 {
            // Header row: index levels have no title.
            return Ok(match col.checked_sub(self.index_levels) {
                Some(value_col) => CellValue::Text(self.titles[value_col].clone()),
                None => CellValue::Empty,
            });
        }
        Ok(self.rows[row - 1][col].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemSource {
        MemSource::from_rows(
            1,
            &["a", "b"],
            &[&["0", "x", "1"], &["1", "y", "2"], &["2", "z", "3"]],
        )
    }

    #[test]
    fn dimensions_include_header_row() {
        let source = sample();
        assert_eq!(source.dimensions(), (4, 3));
    }

    #[test]
    fn header_row_holds_titles_after_index_levels() {
        let source = sample();
        assert_eq!(source.get_cell(0, 0), Ok(CellValue::Empty));
        assert_eq!(source.get_cell(0, 1), Ok(CellValue::Text("a".into())));
        assert_eq!(source.get_cell(0, 2), Ok(CellValue::Text("b".into())));
    }

    #[test]
    fn data_rows_start_at_one() {
        let source = sample();
        assert_eq!(source.get_cell(1, 1), Ok(CellValue::Text("x".into())));
        assert_eq!(source.get_cell(3, 2), Ok(CellValue::Text("3".into())));
    }

    #[test]
    fn out_of_bounds_reads_fail() {
        let source = sample();
        assert!(matches!(
            source.get_cell(4, 0),
            Err(SourceError::OutOfBounds { .. })
        ));
        assert!(matches!(
            source.get_cell(0, 3),
            Err(SourceError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn push_row_rejects_wrong_arity() {
        let mut source = MemSource::new(0, &["only"]);
        assert!(source.push_row(vec![]).is_err());
        assert!(source.push_row(vec![CellValue::Empty]).is_ok());
    }
}
