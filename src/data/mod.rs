//! Pure data layer: binning, scales, derived display values and formatting.
//!
//! Nothing in here touches egui; every function is deterministic on its
//! inputs, which is what makes the widget safe to recompute every frame.

pub mod bins;
pub mod format;
pub mod model;
pub mod scale;

pub use bins::{
    adaptive_partition, bucket_index_of, bucket_target_for_width, distinct_value_partition,
    equal_width_partition, overlay_counts, sample_extent, sorted_distinct, Bucket,
    DEFAULT_BUCKET_TARGET, MAX_BUCKET_TARGET, REFINEMENT_DISTINCT_LIMIT, REFINEMENT_SAMPLE_LIMIT,
};
pub use format::{default_long_format, default_short_format};
pub use model::{DistributedModel, HistogramModel, FULL_RANGE};
pub use scale::LinearScale;
