//! Widget sizing: effective width from measured cell bounds, deterministic
//! height from the row count.
//!
//! The table engine cannot report its summed column width cheaply before the
//! first paint, so the grid renders optimistically at the requested width,
//! measures the bounds of the first and last rendered cell once, and shrinks
//! to fit when the content turns out narrower. It never grows beyond the
//! requested width.
//!
//! All values here are presentation tuning constants, not derived from any
//! measured property.

use egui::Rect;

/// Height of every row, header included, in points.
pub const ROW_HEIGHT: f32 = 35.0;

/// Cap for the computed height when the caller does not request one.
pub const MAX_DEFAULT_HEIGHT: f32 = 400.0;

/// Horizontal slack added to the measured content width for the border.
pub const WIDTH_PADDING: f32 = 2.0;

/// Vertical slack added to the row stack for the border.
pub const HEIGHT_PADDING: f32 = 3.0;

/// Resize floor exposed to the hosting container: header plus one row.
pub const MIN_HEIGHT: f32 = 2.0 * ROW_HEIGHT + HEIGHT_PADDING;

/// Width given to freshly derived columns.
pub const DEFAULT_COLUMN_WIDTH: f32 = 100.0;

/// Narrowest a column may be dragged.
pub const MIN_COLUMN_WIDTH: f32 = 50.0;

/// Widest a column may be dragged.
pub const MAX_COLUMN_WIDTH: f32 = 500.0;

/// The width the grid container settles on after the first paint.
///
/// With both cell bounds available this is the tight bounding width of the
/// rendered content (plus border padding) when that is narrower than the
/// requested width. With either bound missing (zero rows, measurement race)
/// the requested width is adopted unconditionally. The result never exceeds
/// `requested`.
pub fn effective_width(first: Option<Rect>, last: Option<Rect>, requested: f32) -> f32 {
    match (first, last) {
        (Some(first), Some(last)) => {
            let full = last.max.x - first.min.x + WIDTH_PADDING;
            if full < requested {
                full
            } else {
                requested
            }
        }
        _ => requested,
    }
}

/// The grid height: the caller's request verbatim, or header plus `num_rows`
/// rows, capped at [`MAX_DEFAULT_HEIGHT`].
pub fn grid_height(requested: Option<f32>, num_rows: usize) -> f32 {
    requested.unwrap_or_else(|| {
        ((num_rows + 1) as f32 * ROW_HEIGHT + HEIGHT_PADDING).min(MAX_DEFAULT_HEIGHT)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    fn rect(x: f32, width: f32) -> Rect {
        Rect::from_min_max(pos2(x, 0.0), pos2(x + width, ROW_HEIGHT))
    }

    #[test]
    fn narrow_content_shrinks_to_fit() {
        let first = rect(10.0, 100.0);
        let last = rect(210.0, 50.0);
        // 260 - 10 + 2
        assert_eq!(effective_width(Some(first), Some(last), 600.0), 252.0);
    }

    #[test]
    fn wide_content_is_clamped_to_the_request() {
        let first = rect(0.0, 400.0);
        let last = rect(400.0, 400.0);
        assert_eq!(effective_width(Some(first), Some(last), 600.0), 600.0);
    }

    #[test]
    fn missing_measurement_falls_back_to_the_request() {
        assert_eq!(effective_width(None, None, 300.0), 300.0);
        assert_eq!(effective_width(Some(rect(0.0, 10.0)), None, 300.0), 300.0);
        assert_eq!(effective_width(None, Some(rect(0.0, 10.0)), 300.0), 300.0);
    }

    #[test]
    fn effective_width_never_exceeds_the_request() {
        for requested in [0.0, 50.0, 251.9, 252.0, 1000.0] {
            let width = effective_width(Some(rect(10.0, 100.0)), Some(rect(210.0, 50.0)), requested);
            assert!(width <= requested);
        }
    }

    #[test]
    fn default_height_counts_the_header_and_caps() {
        assert_eq!(grid_height(None, 0), 38.0);
        assert_eq!(grid_height(None, 5), 6.0 * ROW_HEIGHT + HEIGHT_PADDING);
        assert_eq!(grid_height(None, 200), MAX_DEFAULT_HEIGHT);
    }

    #[test]
    fn requested_height_wins_over_the_cap() {
        assert_eq!(grid_height(Some(900.0), 200), 900.0);
        assert_eq!(grid_height(Some(20.0), 0), 20.0);
    }

    #[test]
    fn min_height_is_two_rows_plus_border() {
        assert_eq!(MIN_HEIGHT, 73.0);
    }
}
