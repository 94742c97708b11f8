//! rangehist crate root: re-exports and module wiring.
//!
//! An interactive histogram widget for egui: a numeric sample is binned
//! adaptively into bars, a filtered subset is overlaid in an accent color
//! over the same buckets, and a dual-thumb slider under the bars edits a
//! selection interval in data units.
//!
//! The implementation is split into cohesive modules:
//! - `data`: binning, scales, per-frame model derivation, label formatting
//! - `widgets`: the [`RangeHistogram`] widget and the [`RangeSlider`] it
//!   embeds
//! - `style`: colors and geometry, overridable per widget
//!
//! The typical loop: keep a `Vec<f64>` sample and an
//! `Option<(f64, f64)>` selection, re-derive the filtered subset whenever
//! the widget reports a change, and pass all three back in next frame.

pub mod data;
pub mod style;
pub mod widgets;

// Public re-exports for a compact external API
pub use data::bins::{
    adaptive_partition, bucket_index_of, bucket_target_for_width, distinct_value_partition,
    equal_width_partition, overlay_counts, sample_extent, sorted_distinct, Bucket,
    DEFAULT_BUCKET_TARGET, MAX_BUCKET_TARGET, REFINEMENT_DISTINCT_LIMIT, REFINEMENT_SAMPLE_LIMIT,
};
pub use data::format::{default_long_format, default_short_format};
pub use data::model::{DistributedModel, HistogramModel, FULL_RANGE};
pub use data::scale::LinearScale;
pub use style::HistogramStyle;
pub use widgets::{clamp_thumb, snap_to_step, translate_span, RangeHistogram, RangeSlider};
