//! The grid widget: wires a [`GridBinding`] into the table engine.
//!
//! `DataGrid` renders a read-only [`TabularSource`] through
//! `egui_extras::TableBuilder`, which virtualizes rows and owns scrolling
//! and column drag-resizing. The widget renders at the requested width on
//! its first frame, measures the bounds of the first and last cell of the
//! top row, and settles on the tight content width for the rest of its
//! lifetime (or until the source changes). Widths the user drags are
//! mirrored back into the binding's column descriptors.

use std::sync::Arc;

use egui::{vec2, Align, Layout, Rect, Response, RichText, TextEdit, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::binding::{CellCoord, GridBinding};
use crate::cell::CellKind;
use crate::columns::ColumnSpec;
use crate::sizing;
use crate::source::TabularSource;

/// Row count above which vertical scroll smoothing is turned off.
pub const SMOOTH_SCROLL_ROW_LIMIT: usize = 100_000;

/// The frozen feature bundle handed to the table engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    pub row_select: bool,
    pub row_markers: bool,
    pub vertical_borders: bool,
    pub search: bool,
    pub smooth_scroll_x: bool,
    pub smooth_scroll_y: bool,
}

impl FeatureFlags {
    /// The grid is read-only: no selection, no row markers, vertical borders
    /// and search on. Vertical smoothing is gated on the row count so huge
    /// tables stay responsive.
    pub fn for_rows(num_rows: usize) -> Self {
        Self {
            row_select: false,
            row_markers: false,
            vertical_borders: true,
            search: true,
            smooth_scroll_x: true,
            smooth_scroll_y: num_rows < SMOOTH_SCROLL_ROW_LIMIT,
        }
    }
}

/// What the hosting container needs from a rendered grid.
pub struct GridOutput {
    pub response: Response,
    /// Width the grid rendered at this frame (never above the request).
    pub width: f32,
    pub height: f32,
    /// Resize floor for the hosting container.
    pub min_height: f32,
}

/// Per-widget state carried across frames.
#[derive(Clone)]
struct GridState {
    binding: GridBinding,
    effective_width: Option<f32>,
    query: String,
}

/// Bounds of the first and last cell of the top rendered row, captured
/// while the body paints.
#[derive(Clone, Copy, Default)]
struct MeasuredBounds {
    first: Option<Rect>,
    last: Option<Rect>,
}

/// A read-only data grid over a [`TabularSource`].
#[must_use = "You should call .show(ui)"]
pub struct DataGrid {
    source: Arc<dyn TabularSource>,
    width: Option<f32>,
    height: Option<f32>,
}

impl DataGrid {
    pub fn new(source: Arc<dyn TabularSource>) -> Self {
        Self {
            source,
            width: None,
            height: None,
        }
    }

    /// Requested width. Defaults to the available width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Requested height. Defaults to a row-count based height capped at
    /// [`sizing::MAX_DEFAULT_HEIGHT`].
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn show(self, ui: &mut Ui) -> GridOutput {
        let state_id = ui.id().with("data_grid_state");
        let mut state = ui
            .data_mut(|data| data.get_temp::<GridState>(state_id))
            .filter(|state| state.binding.is_same_source(&self.source))
            .unwrap_or_else(|| GridState {
                binding: GridBinding::new(self.source.clone()),
                effective_width: None,
                query: String::new(),
            });

        let requested_width = self.width.unwrap_or_else(|| ui.available_width());
        let width = match state.effective_width {
            Some(effective) => effective.min(requested_width),
            None => requested_width,
        };
        let num_rows = state.binding.num_rows();
        let height = sizing::grid_height(self.height, num_rows);
        let flags = FeatureFlags::for_rows(num_rows);

        let mut measured = MeasuredBounds::default();
        let response = ui
            .allocate_ui_with_layout(vec2(width, height), Layout::top_down(Align::Min), |ui| {
                ui.set_width(width);
                ui.set_max_height(height);
                if !flags.smooth_scroll_y {
                    ui.style_mut().animation_time = 0.0;
                }
                if flags.search {
                    ui.horizontal(|ui| {
                        ui.label("Search");
                        ui.add(TextEdit::singleline(&mut state.query).desired_width(160.0));
                    });
                    ui.add_space(2.0);
                }
                render_table(ui, &mut state.binding, &state.query, &mut measured);
            })
            .response;

        // First paint done: settle the width once. A missing measurement
        // (zero rows) settles on the requested width.
        if state.effective_width.is_none() {
            let effective = sizing::effective_width(measured.first, measured.last, requested_width);
            state.effective_width = Some(effective);
            if effective != width {
                ui.ctx().request_repaint();
            }
        }
        ui.data_mut(|data| data.insert_temp(state_id, state));

        GridOutput {
            response,
            width,
            height,
            min_height: sizing::MIN_HEIGHT,
        }
    }
}

fn render_table(
    ui: &mut Ui,
    binding: &mut GridBinding,
    query: &str,
    measured: &mut MeasuredBounds,
) {
    let columns: Vec<ColumnSpec> = binding.columns().to_vec();
    let num_rows = binding.num_rows();
    let query = query.trim().to_lowercase();

    let mut builder = TableBuilder::new(ui)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in &columns {
        builder = builder.column(
            TableColumn::initial(column.width)
                .at_least(sizing::MIN_COLUMN_WIDTH)
                .at_most(sizing::MAX_COLUMN_WIDTH)
                .clip(true),
        );
    }

    // The engine owns drag-resizing; mirror the widths it rendered back
    // into the descriptors after the frame.
    let mut resized: Vec<(String, f32)> = Vec::new();
    builder
        .header(sizing::ROW_HEIGHT, |mut header| {
            for column in &columns {
                header.col(|ui| {
                    let rendered = ui.max_rect().width();
                    if (rendered - column.width).abs() > 0.5 {
                        resized.push((column.id.clone(), rendered));
                    }
                    ui.label(RichText::new(&column.title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(sizing::ROW_HEIGHT, num_rows, |mut row| {
                let row_index = row.index();
                for (col_index, column) in columns.iter().enumerate() {
                    row.col(|ui| {
                        if row_index == 0 {
                            if col_index == 0 {
                                measured.first = Some(ui.max_rect());
                            }
                            if col_index + 1 == columns.len() {
                                measured.last = Some(ui.max_rect());
                            }
                        }
                        let cell = binding.resolve_cell(CellCoord {
                            col: col_index,
                            row: row_index,
                        });
                        let text = cell.display();
                        if !query.is_empty() && text.to_lowercase().contains(&query) {
                            ui.painter()
                                .rect_filled(ui.max_rect(), 0.0, ui.visuals().faint_bg_color);
                        }
                        let text = match cell.kind {
                            CellKind::Id => RichText::new(text).monospace(),
                            CellKind::Text => RichText::new(text),
                        };
                        ui.label(text);
                    });
                }
            });
        });

    for (id, width) in resized {
        binding.resize_column(&id, width);
    }
}
