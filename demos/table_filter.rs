//! Example: Cross-filtered table columns with per-column histograms
//!
//! What it demonstrates
//! - One histogram per numeric column, each editing its own selection while
//!   the visible row set honors every column's filter at once.
//! - Overlay bars showing only the rows that survive all filters.
//! - `focused_value` highlighting the bucket of the table row under the
//!   pointer.
//! - Custom label formatters with units.
//!
//! How to run
//! ```bash
//! cargo run --example table_filter
//! ```

use eframe::{egui, NativeOptions};
use rangehist::RangeHistogram;

struct Row {
    name: String,
    speed: f64,
    weight: f64,
}

/// A deterministic fleet, spread enough that both columns bin nicely.
fn fleet() -> Vec<Row> {
    (0..80)
        .map(|i| Row {
            name: format!("unit-{i:02}"),
            speed: 90.0 + 60.0 * (i as f64 * 0.739).sin(),
            weight: 1200.0 + 450.0 * (i as f64 * 0.311).cos(),
        })
        .collect()
}

fn passes(value: f64, selection: Option<(f64, f64)>) -> bool {
    selection.map_or(true, |(lo, hi)| value >= lo && value <= hi)
}

struct DemoApp {
    rows: Vec<Row>,
    speed_selection: Option<(f64, f64)>,
    weight_selection: Option<(f64, f64)>,
    hovered_row: Option<usize>,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            rows: fleet(),
            speed_selection: None,
            weight_selection: None,
            hovered_row: None,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Cross-filtered columns");
            ui.add_space(8.0);

            let speeds: Vec<f64> = self.rows.iter().map(|r| r.speed).collect();
            let weights: Vec<f64> = self.rows.iter().map(|r| r.weight).collect();
            let visible: Vec<usize> = (0..self.rows.len())
                .filter(|&i| {
                    passes(self.rows[i].speed, self.speed_selection)
                        && passes(self.rows[i].weight, self.weight_selection)
                })
                .collect();
            let visible_speeds: Vec<f64> = visible.iter().map(|&i| self.rows[i].speed).collect();
            let visible_weights: Vec<f64> = visible.iter().map(|&i| self.rows[i].weight).collect();
            let focused = self.hovered_row.map(|i| (self.rows[i].speed, self.rows[i].weight));

            let mut speed_hist =
                RangeHistogram::new(&speeds, &visible_speeds, &mut self.speed_selection)
                    .max_width(200.0)
                    .short_format(|v| format!("{v:.0}"));
            let mut weight_hist =
                RangeHistogram::new(&weights, &visible_weights, &mut self.weight_selection)
                    .max_width(200.0)
                    .short_format(|v| format!("{v:.0} kg"));
            if let Some((speed, weight)) = focused {
                speed_hist = speed_hist.focused_value(speed);
                weight_hist = weight_hist.focused_value(weight);
            }

            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.strong("Speed (km/h)");
                    ui.add(speed_hist);
                });
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    ui.strong("Weight (kg)");
                    ui.add(weight_hist);
                });
            });

            ui.add_space(4.0);
            ui.label(format!("{} of {} rows visible", visible.len(), self.rows.len()));
            if ui.button("Reset filters").clicked() {
                self.speed_selection = None;
                self.weight_selection = None;
            }
            ui.separator();

            let mut hovered = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("fleet_rows")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("name");
                        ui.strong("speed");
                        ui.strong("weight");
                        ui.end_row();
                        for &i in &visible {
                            let row = &self.rows[i];
                            let response =
                                ui.selectable_label(self.hovered_row == Some(i), &row.name);
                            if response.hovered() {
                                hovered = Some(i);
                            }
                            ui.label(format!("{:.0}", row.speed));
                            ui.label(format!("{:.0} kg", row.weight));
                            ui.end_row();
                        }
                    });
            });
            self.hovered_row = hovered;
        });
    }
}

fn main() -> eframe::Result<()> {
    let app = DemoApp::new();
    eframe::run_native(
        "rangehist table filter demo",
        NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
