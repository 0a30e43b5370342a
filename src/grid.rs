// src/grid.rs
//! Grid construction for the heatmap axes
//!
//! The heatmap is evaluated over the cross product of two discrete axes
//! derived from the user's scalar inputs:
//!
//! - **Expiry axis**: up to 7 day-counts sampled from `days_to_expiry`
//!   down toward expiry.
//! - **Spot axis**: up to 19 underlying prices spanning a percentage
//!   window around the current spot.
//!
//! Both axes are ordered ascending. The spot axis and its percentage
//! labels are derived from one shared offset list so rows and labels can
//! never fall out of alignment.

use crate::math_utils::round2;

/// Discrete evaluation grid: ascending day-counts and ascending spot prices
///
/// `offsets_pct[i]` is the integer percentage offset that produced
/// `spots[i]`, i.e. `spots[i] = spot * (1 + offsets_pct[i]/100)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub expiry_days: Vec<u32>,
    pub offsets_pct: Vec<i64>,
    pub spots: Vec<f64>,
}

impl Grid {
    /// Build the full grid from the three inputs that shape it
    ///
    /// Caller contract: `days >= 1`, `spot > 0`, `range_pct` in [1, 455].
    /// The engine validates these before calling in.
    pub fn build(spot: f64, days: u32, range_pct: u32) -> Grid {
        let expiry_days = build_expiry_axis(days);
        let (offsets_pct, spots) = build_spot_axis(spot, range_pct);
        Grid {
            expiry_days,
            offsets_pct,
            spots,
        }
    }

    /// Spot prices rounded to 2 decimals, for axis labeling
    pub fn spot_labels(&self) -> Vec<f64> {
        self.spots.iter().map(|&s| round2(s)).collect()
    }

    /// Grid shape as (spot rows, expiry columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.spots.len(), self.expiry_days.len())
    }
}

/// Build the ascending day-count axis
///
/// For fewer than 7 days to expiry every remaining day is shown:
/// `[1, 2, ..., days]`. Otherwise 7 samples are taken at multiples of
/// `ceil(days/7)` below `days`; samples that land at or below zero are
/// dropped (a zero-day cell has no defined Black-Scholes value), so the
/// axis may hold fewer than 7 entries, e.g. 30 days -> `[5, 10, 15, 20,
/// 25, 30]`.
pub fn build_expiry_axis(days: u32) -> Vec<u32> {
    if days < 7 {
        return (1..=days).collect();
    }
    let step = (days + 6) / 7;
    let mut axis: Vec<u32> = (0..7u32)
        .filter_map(|n| {
            let offset = n * step;
            if offset < days {
                Some(days - offset)
            } else {
                None
            }
        })
        .collect();
    axis.reverse();
    axis
}

/// Build the ascending spot axis and its percentage-offset labels
///
/// The window is `[-negative_bound, +positive_bound]` percent around
/// `spot`, where both bounds start at `range_pct` and the negative bound
/// is clamped to 98 once `range_pct` reaches 100 so that the lowest spot
/// price stays positive. Offsets run from `-negative_bound` up to (but
/// excluding) `+positive_bound` in steps of
/// `ceil((negative_bound + positive_bound) / 18)`, which caps the axis at
/// 19 points.
pub fn build_spot_axis(spot: f64, range_pct: u32) -> (Vec<i64>, Vec<f64>) {
    let positive_bound = range_pct as i64;
    let negative_bound = if range_pct >= 100 {
        98
    } else {
        range_pct as i64
    };

    // Integer ceiling; both bounds are >= 1 so the sum is at least 2,
    // but the step is still floored at 1 as a guard.
    let step = ((negative_bound + positive_bound + 17) / 18).max(1);

    let mut offsets = Vec::new();
    let mut offset = -negative_bound;
    while offset < positive_bound {
        offsets.push(offset);
        offset += step;
    }

    let spots = offsets
        .iter()
        .map(|&p| spot + spot * (p as f64 / 100.0))
        .collect();
    (offsets, spots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_axis_under_seven_days() {
        assert_eq!(build_expiry_axis(3), vec![1, 2, 3]);
        assert_eq!(build_expiry_axis(1), vec![1]);
        assert_eq!(build_expiry_axis(6), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_expiry_axis_seven_days() {
        // step = ceil(7/7) = 1, all seven days survive
        assert_eq!(build_expiry_axis(7), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_expiry_axis_drops_non_positive_samples() {
        // step = ceil(30/7) = 5 -> 30, 25, ..., 5, 0; the 0 is dropped
        assert_eq!(build_expiry_axis(30), vec![5, 10, 15, 20, 25, 30]);
        // step = ceil(8/7) = 2 -> 8, 6, 4, 2, 0, -2, -4 -> [2, 4, 6, 8]
        assert_eq!(build_expiry_axis(8), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_expiry_axis_large() {
        assert_eq!(
            build_expiry_axis(365),
            vec![47, 100, 153, 206, 259, 312, 365]
        );
        assert_eq!(build_expiry_axis(455).len(), 7);
    }

    #[test]
    fn test_spot_axis_narrow_range() {
        let (offsets, spots) = build_spot_axis(100.0, 20);
        // step = ceil(40/18) = 3, offsets -20..19
        assert_eq!(offsets.first(), Some(&-20));
        assert_eq!(offsets.last(), Some(&19));
        assert_eq!(offsets.len(), 14);
        assert!(spots.len() <= 19);
        assert!(spots.windows(2).all(|w| w[0] < w[1]));
        assert!(spots.iter().all(|&s| s > 0.0));
        // Window is centered near the current spot
        let mid = (spots.first().unwrap() + spots.last().unwrap()) / 2.0;
        assert!((mid - 100.0).abs() < 5.0);
    }

    #[test]
    fn test_spot_axis_clamps_negative_bound() {
        let (offsets, spots) = build_spot_axis(100.0, 150);
        // negative bound clamped to 98, step = ceil(248/18) = 14
        assert_eq!(offsets.first(), Some(&-98));
        assert_eq!(spots.first().map(|&s| s), Some(2.0));
        assert!(spots.iter().all(|&s| s > 0.0));
        assert_eq!(offsets.len(), 18);
    }

    #[test]
    fn test_spot_axis_minimal_range() {
        // Smallest legal range still yields a non-empty, positive-step axis
        let (offsets, spots) = build_spot_axis(100.0, 1);
        assert_eq!(offsets, vec![-1, 0]);
        assert_eq!(spots, vec![99.0, 100.0]);
    }

    #[test]
    fn test_spot_axis_widest_range() {
        let (offsets, spots) = build_spot_axis(50.0, 455);
        assert_eq!(offsets.first(), Some(&-98));
        assert!(offsets.len() <= 19);
        assert!(spots.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn test_offsets_and_spots_stay_parallel() {
        let grid = Grid::build(250.0, 45, 120);
        assert_eq!(grid.offsets_pct.len(), grid.spots.len());
        for (p, s) in grid.offsets_pct.iter().zip(&grid.spots) {
            let expected = 250.0 + 250.0 * (*p as f64 / 100.0);
            assert!((s - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spot_labels_rounded() {
        let grid = Grid::build(33.333, 10, 20);
        for label in grid.spot_labels() {
            assert!((label * 100.0 - (label * 100.0).round()).abs() < 1e-9);
        }
    }
}
