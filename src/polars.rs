//! [`TabularSource`] adapter for polars data frames.
//!
//! A `DataFrame` carries no index levels; its header is synthesized as
//! logical row 0, so a frame of `n` rows reports `n + 1` source rows.

use crate::cell::CellValue;
use crate::source::{SourceError, TabularSource};

use ::polars::prelude::{AnyValue, DataFrame};

impl TabularSource for DataFrame {
    fn index_levels(&self) -> usize {
        0
    }

    fn value_columns(&self) -> usize {
        self.width()
    }

    fn column_title(&self, col: usize) -> Option<String> {
        self.get_column_names().get(col).map(|name| name.to_string())
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.height() + 1, self.width())
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
            return Ok(match self.column_title(col) {
                Some(title) => CellValue::Text(title),
                None => CellValue::Empty,
            });
        }
        let column = self.get_columns().get(col).ok_or(SourceError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        })?;
        match column.get(row - 1) {
            Ok(AnyValue::Null) => Ok(CellValue::Empty),
            Ok(AnyValue::Boolean(flag)) => Ok(CellValue::Bool(flag)),
            // AnyValue's Display quotes strings; unpack them instead.
            Ok(AnyValue::String(text)) => Ok(CellValue::Text(text.to_owned())),
            Ok(AnyValue::StringOwned(text)) => Ok(CellValue::Text(text.to_string())),
            Ok(value) => Ok(CellValue::Text(value.to_string())),
            Err(err) => Err(SourceError::Read {
                row,
                col,
                reason: err.to_string(),
            }),
        }
    }
}
