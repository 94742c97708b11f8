//! Adaptive bucket partitioning and per-bucket counting.
//!
//! A partition is a gap-free run of buckets covering the sample extent. Every
//! bucket is half-open `[x0, x1)` except the last, which is closed so the
//! sample maximum has a home. All counting paths (full sample, filtered
//! overlay, focus lookup) resolve values through the same
//! [`bucket_index_of`] search, so they can never disagree about edges.

use serde::{Deserialize, Serialize};

/// Bucket count targeted when no width hint is available.
pub const DEFAULT_BUCKET_TARGET: usize = 11;

/// Upper bound on the width-derived bucket target, so an absurd width hint
/// cannot request a partition with millions of buckets.
pub const MAX_BUCKET_TARGET: usize = 4096;

/// Samples at least this large skip the small-cardinality refinement.
pub const REFINEMENT_SAMPLE_LIMIT: usize = 200;

/// The refinement only applies when the number of distinct values is below
/// this bound.
pub const REFINEMENT_DISTINCT_LIMIT: usize = 12;

/// A contiguous interval of the data domain together with the number of
/// sample values that fall inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Inclusive lower edge.
    pub x0: f64,
    /// Upper edge. Exclusive, except on the last bucket of a partition.
    pub x1: f64,
    /// Number of sample values inside the bucket.
    pub count: usize,
}

impl Bucket {
    /// Width of the bucket in domain units. Zero for the collapsed final
    /// bucket of a distinct-value partition.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// Bucket count targeted for `max_width` points of horizontal space.
///
/// Roughly one bucket per six points, thinned to 55% so bars keep visible
/// gaps, and capped at [`MAX_BUCKET_TARGET`]. Non-finite widths fall back to
/// [`DEFAULT_BUCKET_TARGET`].
///
/// ```
/// assert_eq!(rangehist::bucket_target_for_width(300.0), 27);
/// ```
pub fn bucket_target_for_width(max_width: f32) -> usize {
    if !max_width.is_finite() {
        return DEFAULT_BUCKET_TARGET;
    }
    (((max_width as f64) / 6.0).floor() * 0.55).clamp(0.0, MAX_BUCKET_TARGET as f64) as usize
}

/// Minimum and maximum of the finite values in `values`, or `None` when
/// there are none.
pub fn sample_extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    (min <= max).then_some((min, max))
}

/// Sorted, deduplicated finite values of the sample.
pub fn sorted_distinct(values: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out.dedup();
    out
}

/// Whether consecutive distinct values all sit the same distance apart.
/// Uses exact differences; near-regular spacing does not count.
fn equally_spaced(distinct: &[f64]) -> bool {
    if distinct.len() < 2 {
        return true;
    }
    let first = distinct[1] - distinct[0];
    distinct.windows(2).all(|w| w[1] - w[0] == first)
}

/// Partition the sample extent into `target` equal-width buckets (at least
/// one) and count the values into them.
///
/// A zero-width extent yields a single collapsed bucket holding every finite
/// value. An empty (or all non-finite) sample yields no buckets.
pub fn equal_width_partition(values: &[f64], target: usize) -> Vec<Bucket> {
    let Some((min, max)) = sample_extent(values) else {
        return Vec::new();
    };
    let n = target.max(1);
    let span = max - min;
    if span == 0.0 {
        let count = values.iter().filter(|v| v.is_finite()).count();
        return vec![Bucket { x0: min, x1: max, count }];
    }
    let mut buckets: Vec<Bucket> = (0..n)
        .map(|i| Bucket {
            x0: min + span * i as f64 / n as f64,
            // Land exactly on the sample maximum instead of accumulating
            // rounding into the last edge.
            x1: if i + 1 == n {
                max
            } else {
                min + span * (i + 1) as f64 / n as f64
            },
            count: 0,
        })
        .collect();
    count_into(&mut buckets, values);
    buckets
}

/// Partition with one bucket per distinct value: edges sit exactly on the
/// `distinct` values and the final bucket collapses to the closed point
/// `[v_max, v_max]`.
///
/// `distinct` must be the sorted distinct values of `values`, as produced by
/// [`sorted_distinct`].
pub fn distinct_value_partition(values: &[f64], distinct: &[f64]) -> Vec<Bucket> {
    let k = distinct.len();
    if k == 0 {
        return Vec::new();
    }
    let mut buckets: Vec<Bucket> = (0..k)
        .map(|i| Bucket {
            x0: distinct[i],
            x1: distinct[(i + 1).min(k - 1)],
            count: 0,
        })
        .collect();
    count_into(&mut buckets, values);
    buckets
}

/// Decide the partition for a sample given the available width.
///
/// Starts from the width heuristic (or [`DEFAULT_BUCKET_TARGET`] without a
/// width), then refines small samples with few distinct values:
///
/// * equally spaced distinct values get exactly one bucket per value, so
///   integer-like data never splits a value across bars;
/// * otherwise, if the heuristic produced more buckets than distinct values,
///   the partition is rebuilt with one equal-width bucket per distinct value.
pub fn adaptive_partition(original: &[f64], max_width: Option<f32>) -> Vec<Bucket> {
    let target = max_width
        .map(bucket_target_for_width)
        .unwrap_or(DEFAULT_BUCKET_TARGET);
    let mut buckets = equal_width_partition(original, target);

    if original.len() < REFINEMENT_SAMPLE_LIMIT {
        let distinct = sorted_distinct(original);
        let k = distinct.len();
        if k > 1 && k < REFINEMENT_DISTINCT_LIMIT {
            if equally_spaced(&distinct) {
                buckets = distinct_value_partition(original, &distinct);
            } else if buckets.len() > k {
                buckets = equal_width_partition(original, k);
            }
        }
    }
    buckets
}

/// Index of the bucket containing `value`, honoring the half-open edges and
/// the closed final bucket. `None` for values outside the partition or not
/// finite.
pub fn bucket_index_of(buckets: &[Bucket], value: f64) -> Option<usize> {
    if buckets.is_empty() || !value.is_finite() {
        return None;
    }
    // First bucket whose lower edge lies beyond the value, minus one.
    let idx = buckets.partition_point(|b| b.x0 <= value);
    if idx == 0 {
        return None;
    }
    let i = idx - 1;
    let bucket = &buckets[i];
    let last = i + 1 == buckets.len();
    if value < bucket.x1 || (last && value <= bucket.x1) {
        Some(i)
    } else {
        None
    }
}

/// Count `filtered` values over the exact edges of an existing partition.
///
/// The result lines up index-for-index with `buckets`; values outside the
/// partition are dropped rather than clamped into the end buckets.
pub fn overlay_counts(buckets: &[Bucket], filtered: &[f64]) -> Vec<usize> {
    let mut counts = vec![0usize; buckets.len()];
    for &v in filtered {
        if let Some(i) = bucket_index_of(buckets, v) {
            counts[i] += 1;
        }
    }
    counts
}

fn count_into(buckets: &mut [Bucket], values: &[f64]) {
    for &v in values {
        if let Some(i) = bucket_index_of(buckets, v) {
            buckets[i].count += 1;
        }
    }
}
