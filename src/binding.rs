//! Binding between a tabular source and the grid renderer.
//!
//! A [`GridBinding`] captures the derived column list, the renderable row
//! count, and the source itself, and resolves `(col, row)` coordinates into
//! cells on demand. Virtualized renderers request cells out of order, at
//! high frequency, and repeatedly; resolution is a pure function of the
//! binding, so that is safe.

use std::sync::Arc;

use crate::cell::{CellKind, GridCell};
use crate::columns::{derive_columns, with_column_width, ColumnSpec};
use crate::source::TabularSource;

/// A `(column, row)` coordinate in renderer space: columns index the derived
/// column list, rows index data rows (the source's header row excluded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellCoord {
    pub col: usize,
    pub row: usize,
}

/// Derived state for one source: columns, row count, and the cell resolver.
///
/// Rebuilt only when the source identity changes; column widths are the one
/// piece that mutates afterwards, via [`GridBinding::resize_column`].
#[derive(Clone)]
pub struct GridBinding {
    source: Arc<dyn TabularSource>,
    columns: Vec<ColumnSpec>,
    num_rows: usize,
}

impl GridBinding {
    pub fn new(source: Arc<dyn TabularSource>) -> Self {
        let columns = derive_columns(source.as_ref());
        let (rows, _) = source.dimensions();
        // Row 0 of the source is the header.
        let num_rows = rows.saturating_sub(1);
        Self {
            source,
            columns,
            num_rows,
        }
    }

    /// True if `source` is the same table this binding was derived from.
    pub fn is_same_source(&self, source: &Arc<dyn TabularSource>) -> bool {
        Arc::ptr_eq(&self.source, source)
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Rows exposed to the renderer (header excluded).
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Resolve one cell. Out-of-bounds coordinates and failed reads degrade
    /// to the column's empty template; this never panics into the renderer.
    pub fn resolve_cell(&self, coord: CellCoord) -> GridCell {
        let Some(column) = self.columns.get(coord.col) else {
            return CellKind::Text.template();
        };
        let template = column.kind.template();
        if coord.row >= self.num_rows {
            return template;
        }
        // +1 skips the source's header row.
        match self.source.get_cell(coord.row + 1, coord.col) {
            Ok(value) => template.filled(value),
            Err(err) => {
                log::warn!(
                    "cell read failed at row {}, col {}: {err}",
                    coord.row,
                    coord.col
                );
                template
            }
        }
    }

    /// Apply a user resize gesture: overlay `width` onto the column with the
    /// given id. Unknown ids are ignored.
    pub fn resize_column(&mut self, id: &str, width: f32) {
        self.columns = with_column_width(&self.columns, id, width);
    }
}
