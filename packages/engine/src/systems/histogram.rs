//! Speed distribution bucketing for the per-class histograms

/// Upper edge of the speed axis
pub const DEFAULT_MAX_SPEED: f64 = 1.0;
pub const DEFAULT_SPEED_BINS: usize = 20;

/// Count speeds per interval of `[0, max_speed)` split into `bins` equal
/// intervals. Speeds at or above `max_speed` land in the last bin; negative
/// and NaN speeds are ignored.
pub fn speed_frequencies(speeds: &[f64], max_speed: f64, bins: usize) -> Vec<u32> {
    let mut counts = vec![0u32; bins];
    if bins == 0 || !(max_speed > 0.0) {
        return counts;
    }

    let width = max_speed / bins as f64;
    for &s in speeds {
        if s.is_nan() || s < 0.0 {
            continue;
        }
        let bin = ((s / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }
    counts
}

/// Lower edge of every bin plus the final upper edge (`bins + 1` values)
pub fn bin_edges(max_speed: f64, bins: usize) -> Vec<f64> {
    let width = max_speed / bins.max(1) as f64;
    (0..=bins).map(|i| i as f64 * width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_interval() {
        let counts = speed_frequencies(&[0.0, 0.04, 0.05, 0.51, 0.99], 1.0, 20);
        assert_eq!(counts.len(), 20);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 1);
        assert_eq!(counts[10], 1);
        assert_eq!(counts[19], 1);
        assert_eq!(counts.iter().sum::<u32>(), 5);
    }

    #[test]
    fn overflow_goes_to_last_bin_and_garbage_is_dropped() {
        let counts = speed_frequencies(&[1.0, 7.5, f64::INFINITY, -0.1, f64::NAN], 1.0, 4);
        assert_eq!(counts, vec![0, 0, 0, 3]);
    }

    #[test]
    fn degenerate_axes_return_zeroes() {
        assert!(speed_frequencies(&[0.5], 1.0, 0).is_empty());
        assert_eq!(speed_frequencies(&[0.5], 0.0, 3), vec![0, 0, 0]);
    }

    #[test]
    fn edges_cover_the_axis() {
        let edges = bin_edges(1.0, 4);
        assert_eq!(edges, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
