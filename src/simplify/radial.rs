//! Radial distance vertex reduction.
//!
//! A single O(n) pass that drops points lying within a given distance of the
//! last kept point. Used as the pre-filter ahead of Douglas-Peucker to strip
//! near-duplicate vertices and bound the recursive work.

use crate::primitives::Point2;
use num_traits::Float;

/// Removes points within `tolerance` of the previously kept point.
///
/// The first and last points are always preserved. An interior point is kept
/// only when its distance to the last kept point strictly exceeds `tolerance`,
/// so exact duplicates are removed even at zero tolerance.
///
/// # Example
///
/// ```
/// use polyline_codec::simplify::radial;
/// use polyline_codec::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.1, 0.0),  // Too close, removed
///     Point2::new(0.2, 0.0),  // Too close, removed
///     Point2::new(1.0, 0.0),  // Far enough, kept
///     Point2::new(1.05, 0.0), // Too close, removed
///     Point2::new(2.0, 0.0),  // Last, kept
/// ];
///
/// let reduced = radial(&points, 0.5);
/// assert_eq!(reduced.len(), 3);
/// ```
pub fn radial<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<Point2<F>> {
    radial_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Returns indices of points kept by radial vertex reduction, in order.
///
/// Paths of two points or fewer are returned whole.
pub fn radial_indices<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let sq_tolerance = tolerance * tolerance;
    let mut indices = Vec::with_capacity(n);

    indices.push(0);
    let mut last_kept = points[0];

    for (i, &point) in points.iter().enumerate().take(n - 1).skip(1) {
        if point.distance_squared(last_kept) > sq_tolerance {
            indices.push(i);
            last_kept = point;
        }
    }

    indices.push(n - 1);
    indices
}
