//! Drives the grid widget through headless egui frames and checks the
//! deferred width measurement, height policy, and source-change behavior.

use std::sync::Arc;

use tabula::egui::{self, pos2, vec2, RawInput, Rect};
use tabula::{DataGrid, GridOutput, MemSource};

const REQUESTED_WIDTH: f32 = 800.0;

fn sample_source() -> Arc<MemSource> {
    Arc::new(MemSource::from_rows(
        1,
        &["a", "b"],
        &[&["0", "x", "1"], &["1", "y", "2"], &["2", "z", "3"]],
    ))
}

fn show_grid(ctx: &egui::Context, source: &Arc<MemSource>, height: Option<f32>) -> GridOutput {
    let screen = Rect::from_min_size(pos2(0.0, 0.0), vec2(1024.0, 768.0));
    let input = RawInput {
        screen_rect: Some(screen),
        ..Default::default()
    };
    let mut output = None;
    ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut grid = DataGrid::new(source.clone()).width(REQUESTED_WIDTH);
            if let Some(height) = height {
                grid = grid.height(height);
            }
            output = Some(grid.show(ui));
        });
    });
    output.expect("the grid should have rendered")
}

#[test]
fn width_settles_to_content_after_first_paint() {
    let ctx = egui::Context::default();
    let source = sample_source();

    let first = show_grid(&ctx, &source, None);
    assert_eq!(first.width, REQUESTED_WIDTH);

    // Three ~100pt columns are far narrower than the requested 800pt.
    let second = show_grid(&ctx, &source, None);
    assert!(second.width < REQUESTED_WIDTH, "width = {}", second.width);
    assert!(second.width > 200.0, "width = {}", second.width);

    // The settled width does not move on later frames.
    let third = show_grid(&ctx, &source, None);
    assert_eq!(third.width, second.width);
}

#[test]
fn empty_body_keeps_the_requested_width() {
    let ctx = egui::Context::default();
    let source = Arc::new(MemSource::new(1, &["a"]));

    show_grid(&ctx, &source, None);
    let settled = show_grid(&ctx, &source, None);
    assert_eq!(settled.width, REQUESTED_WIDTH);
    // Header only: one row of height plus the border.
    assert_eq!(settled.height, 38.0);
}

#[test]
fn height_follows_row_count_and_exposes_the_floor() {
    let ctx = egui::Context::default();
    let source = sample_source();

    let output = show_grid(&ctx, &source, None);
    assert_eq!(output.height, 4.0 * 35.0 + 3.0);
    assert_eq!(output.min_height, 73.0);

    let output = show_grid(&ctx, &source, Some(600.0));
    assert_eq!(output.height, 600.0);
}

#[test]
fn replacing_the_source_restarts_measurement() {
    let ctx = egui::Context::default();
    let narrow = sample_source();

    show_grid(&ctx, &narrow, None);
    let settled = show_grid(&ctx, &narrow, None);
    assert!(settled.width < REQUESTED_WIDTH);

    // A different table identity renders optimistically wide again.
    let replacement = sample_source();
    let fresh = show_grid(&ctx, &replacement, None);
    assert_eq!(fresh.width, REQUESTED_WIDTH);
}
