//! Deriving grid column descriptors from a source schema.

use crate::cell::CellKind;
use crate::sizing::DEFAULT_COLUMN_WIDTH;
use crate::source::TabularSource;

/// Metadata for one grid column: stable id, display title, menu flag,
/// current width, and the kind of cell it produces.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSpec {
    pub id: String,
    pub title: String,
    pub has_menu: bool,
    pub width: f32,
    pub kind: CellKind,
}

impl ColumnSpec {
    fn index(level: usize) -> Self {
        Self {
            id: format!("index-{level}"),
            title: String::new(),
            has_menu: false,
            width: DEFAULT_COLUMN_WIDTH,
            kind: CellKind::Id,
        }
    }

    fn value(col: usize, title: String) -> Self {
        Self {
            id: format!("column-{col}"),
            title,
            has_menu: false,
            width: DEFAULT_COLUMN_WIDTH,
            kind: CellKind::Text,
        }
    }
}

/// Map the source schema to an ordered column list: index levels first,
/// value columns after, in source order.
///
/// A source without any columns yields a single synthetic identifier column,
/// since the table engine cannot render an empty column list.
pub fn derive_columns(source: &dyn TabularSource) -> Vec<ColumnSpec> {
    let index_levels = source.index_levels();
    let value_columns = source.value_columns();
    if index_levels == 0 && value_columns == 0 {
        return vec![ColumnSpec::index(0)];
    }

    let mut columns = Vec::with_capacity(index_levels + value_columns);
    for level in 0..index_levels {
        columns.push(ColumnSpec::index(level));
    }
    for col in 0..value_columns {
        let title = source.column_title(col).unwrap_or_default();
        columns.push(ColumnSpec::value(col, title));
    }
    columns
}

/// Overlay `width` onto the column whose id is `id`, leaving everything else
/// untouched. Produces a fresh list so resolver state held elsewhere stays
/// consistent. An unknown id leaves the list unchanged.
pub fn with_column_width(columns: &[ColumnSpec], id: &str, width: f32) -> Vec<ColumnSpec> {
    columns
        .iter()
        .map(|column| {
            if column.id == id {
                ColumnSpec {
                    width,
                    ..column.clone()
                }
            } else {
                column.clone()
            }
        })
        .collect()
}
