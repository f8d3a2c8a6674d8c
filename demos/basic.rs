//! Minimal eframe app showing a `DataGrid` over an in-memory table.
//!
//! Run with `cargo run --example basic`.

use std::sync::Arc;

use eframe::egui;
use tabula::{CellValue, DataGrid, MemSource};

struct Demo {
    source: Arc<MemSource>,
}

impl eframe::App for Demo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("tabula");
            ui.add_space(8.0);
            DataGrid::new(self.source.clone()).show(ui);
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let cities: &[(&str, f64)] = &[
        ("Tokyo", 37.0),
        ("Delhi", 32.9),
        ("Shanghai", 29.2),
        ("Dhaka", 23.2),
        ("Cairo", 22.2),
        ("Mexico City", 22.1),
        ("Beijing", 21.8),
        ("Mumbai", 21.3),
    ];
    let mut source = MemSource::new(1, &["city", "population (millions)"]);
    for (index, (city, population)) in cities.iter().enumerate() {
        source
            .push_row(vec![
                CellValue::Text(index.to_string()),
                CellValue::Text((*city).to_owned()),
                CellValue::Number(*population),
            ])
            .expect("row matches the declared columns");
    }

    eframe::run_native(
        "tabula demo",
        eframe::NativeOptions::default(),
        Box::new(|_cc| {
            Ok(Box::new(Demo {
                source: Arc::new(source),
            }))
        }),
    )
}
