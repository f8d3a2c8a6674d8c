//! tabula — a read-only, virtualized data grid widget for egui.
//!
//! The crate binds an immutable columnar table (anything implementing
//! [`TabularSource`]) to `egui_extras`' virtualized table: it derives grid
//! columns from the source schema, resolves cells lazily as the engine asks
//! for them, tracks user column resizes, and sizes the widget to its
//! rendered content after the first paint.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tabula::{DataGrid, MemSource};
//!
//! # fn demo(ui: &mut tabula::egui::Ui) {
//! let source = Arc::new(MemSource::from_rows(
//!     1,
//!     &["name", "count"],
//!     &[&["0", "alpha", "3"], &["1", "beta", "7"]],
//! ));
//! DataGrid::new(source).width(600.0).show(ui);
//! # }
//! ```

pub mod binding;
pub mod cell;
pub mod columns;
pub mod grid;
pub mod sizing;
pub mod source;

#[cfg(feature = "polars")]
pub mod polars;

pub use binding::{CellCoord, GridBinding};
pub use cell::{CellKind, CellValue, GridCell};
pub use columns::{derive_columns, with_column_width, ColumnSpec};
pub use grid::{DataGrid, FeatureFlags, GridOutput, SMOOTH_SCROLL_ROW_LIMIT};
pub use source::{MemSource, SourceError, TabularSource};

pub use egui;
