//! Per-frame derivation of everything the widget draws.
//!
//! [`HistogramModel::compute`] turns the caller's inputs (full sample,
//! filtered subset, current selection, optional focus value and width hint)
//! into plain display values: buckets, overlay counts, the two scales and the
//! slider geometry. The widget itself holds no state; it recomputes this
//! model every frame from whatever the caller passes in.

use crate::data::bins::{self, Bucket};
use crate::data::scale::LinearScale;

/// Slider positions meaning "no filter": both thumbs at the extremes.
pub const FULL_RANGE: [f64; 2] = [0.0, 100.0];

/// Slider step when the partition cannot provide a bucket pitch.
const STEP_FALLBACK: f64 = 50.0;

/// What the widget should draw for the given inputs.
///
/// The three variants are mutually exclusive: a sample either has nothing in
/// it, collapses to one repeated value, or spreads over a real interval. Only
/// the last case carries buckets and scales; the degenerate cases never
/// attempt binning.
#[derive(Debug, Clone, PartialEq)]
pub enum HistogramModel {
    /// No finite values at all; draw nothing.
    Empty,
    /// Every finite value equals this one; draw a single text readout.
    SingleValue(f64),
    /// A real distribution with derived display values.
    Distributed(DistributedModel),
}

/// Display values for a sample whose extent has nonzero width.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributedModel {
    /// The adaptive partition with full-sample counts.
    pub buckets: Vec<Bucket>,
    /// Filtered-subset counts over the same edges, index-aligned with
    /// `buckets`.
    pub filtered_counts: Vec<usize>,
    /// Data domain onto `[0, 100]` slider space. The domain runs from the
    /// partition's first bucket edge to the sample maximum.
    pub x_scale: LinearScale,
    /// Counts onto `[0, 100]` bar height. The domain top is the tallest
    /// full-sample bucket.
    pub y_scale: LinearScale,
    /// Thumb positions in slider space. [`FULL_RANGE`] when no selection is
    /// active.
    pub range_positions: [f64; 2],
    /// Slider step: one bucket pitch in slider space, at least `1.0`.
    pub step_size: f64,
    /// Whether the thumbs sit anywhere other than the exact extremes.
    pub is_filtered: bool,
    /// Index of the bucket containing the focus value, if any.
    pub focused_bucket: Option<usize>,
}

impl HistogramModel {
    /// Derive the model for one frame.
    ///
    /// `selection` is the caller's current filter interval in data units;
    /// `focused_value` highlights the bucket containing it; `max_width`
    /// feeds the bucket-count heuristic (see
    /// [`bins::bucket_target_for_width`]).
    pub fn compute(
        original: &[f64],
        filtered: &[f64],
        selection: Option<(f64, f64)>,
        focused_value: Option<f64>,
        max_width: Option<f32>,
    ) -> Self {
        let Some((min, max)) = bins::sample_extent(original) else {
            return HistogramModel::Empty;
        };
        if min == max {
            return HistogramModel::SingleValue(min);
        }

        let buckets = bins::adaptive_partition(original, max_width);
        let filtered_counts = bins::overlay_counts(&buckets, filtered);

        let x_min = buckets.first().map_or(min, |b| b.x0);
        let x_scale = LinearScale::percent((x_min, max));
        let peak = buckets.iter().map(|b| b.count).max().unwrap_or(0);
        let y_scale = LinearScale::percent((0.0, peak as f64));

        let range_positions = match selection {
            Some((lo, hi)) => [x_scale.map(lo), x_scale.map(hi)],
            None => FULL_RANGE,
        };
        let is_filtered = range_positions != FULL_RANGE;
        let focused_bucket = focused_value.and_then(|v| bins::bucket_index_of(&buckets, v));
        let step_size = step_size(&buckets, &x_scale);

        HistogramModel::Distributed(DistributedModel {
            buckets,
            filtered_counts,
            x_scale,
            y_scale,
            range_positions,
            step_size,
            is_filtered,
            focused_bucket,
        })
    }
}

impl DistributedModel {
    /// Convert slider positions back into a selection in data units.
    ///
    /// The exact full range reports `None`, clearing the filter instead of
    /// pinning it to `(min, max)`.
    pub fn selection_from_positions(&self, positions: [f64; 2]) -> Option<(f64, f64)> {
        if positions == FULL_RANGE {
            return None;
        }
        Some((
            self.x_scale.invert(positions[0]),
            self.x_scale.invert(positions[1]),
        ))
    }
}

/// One bucket pitch in slider space, measured between the first two upper
/// edges. Falls back to [`STEP_FALLBACK`] for single-bucket partitions and
/// never drops below `1.0`.
fn step_size(buckets: &[Bucket], x_scale: &LinearScale) -> f64 {
    let step = if buckets.len() > 1 {
        let pitch = x_scale.map(buckets[1].x1) - x_scale.map(buckets[0].x1);
        if pitch == 0.0 {
            STEP_FALLBACK
        } else {
            pitch
        }
    } else {
        STEP_FALLBACK
    };
    step.max(1.0)
}
