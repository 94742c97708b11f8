//! egui widgets: the histogram itself and the range slider it embeds.

pub mod histogram;
pub mod range_slider;

pub use histogram::RangeHistogram;
pub use range_slider::{clamp_thumb, snap_to_step, translate_span, RangeSlider};
