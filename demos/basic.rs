//! Example: A histogram with a range slider filtering a synthetic sample
//!
//! What it demonstrates
//! - Driving `RangeHistogram` from plain `Vec<f64>` samples.
//! - Re-deriving the filtered subset from the selection every frame, so the
//!   overlay bars always show exactly what passes the filter.
//!
//! How to run
//! ```bash
//! cargo run --example basic
//! ```

use eframe::{egui, NativeOptions};
use rangehist::RangeHistogram;

/// Two clusters with deterministic jitter, so the bars have some shape.
fn bimodal_sample() -> Vec<f64> {
    let mut out = Vec::with_capacity(400);
    for i in 0..250 {
        out.push(35.0 + 12.0 * (i as f64 * 0.613).sin());
    }
    for i in 0..150 {
        out.push(78.0 + 7.0 * (i as f64 * 0.471).cos());
    }
    out
}

struct DemoApp {
    sample: Vec<f64>,
    selection: Option<(f64, f64)>,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            sample: bimodal_sample(),
            selection: None,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Range-filtered histogram");
            ui.add_space(8.0);

            let filtered: Vec<f64> = match self.selection {
                Some((lo, hi)) => self
                    .sample
                    .iter()
                    .copied()
                    .filter(|v| (lo..=hi).contains(v))
                    .collect(),
                None => self.sample.clone(),
            };

            ui.add(
                RangeHistogram::new(&self.sample, &filtered, &mut self.selection)
                    .max_width(300.0),
            );

            ui.add_space(8.0);
            match self.selection {
                Some((lo, hi)) => {
                    ui.label(format!(
                        "Selection: {lo:.1} ..= {hi:.1}  ({} of {} values)",
                        filtered.len(),
                        self.sample.len()
                    ));
                }
                None => {
                    ui.label(format!("No filter ({} values)", self.sample.len()));
                }
            }
            if ui.button("Clear filter").clicked() {
                self.selection = None;
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    let app = DemoApp::new();
    eframe::run_native(
        "rangehist basic demo",
        NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
