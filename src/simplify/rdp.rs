//! Ramer-Douglas-Peucker polyline simplification.
//!
//! Keeps the first and last points, then repeatedly splits each open range at
//! the interior point farthest from the chord joining its ends, as long as
//! that point deviates by more than the tolerance. Ranges are processed from
//! an explicit work stack, so native stack depth stays constant however
//! unbalanced the splits are.
//!
//! Distances are compared squared throughout; no square roots are taken.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::primitives::{Point2, Segment2};
use log::trace;
use num_traits::Float;

/// Simplifies a polyline using the Ramer-Douglas-Peucker algorithm.
///
/// Returns a new vector containing only the points that remain after
/// simplification. The first and last points are always preserved and the
/// output keeps the input order.
///
/// # Example
///
/// ```
/// use polyline_codec::{Point2, simplify::rdp};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1),  // Close to the line, will be removed
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 2.0),  // Far from line, will be kept
///     Point2::new(4.0, 0.0),
/// ];
///
/// let simplified = rdp(&points, 0.5);
/// assert!(simplified.len() < points.len());
/// ```
pub fn rdp<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<Point2<F>> {
    rdp_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Simplifies a polyline and returns the indices of retained points.
///
/// The indices are in ascending order and always include `0` and the last
/// index. Paths of two points or fewer are returned whole.
pub fn rdp_indices<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let sq_tolerance = tolerance * tolerance;

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0, n - 1)];

    while let Some((first, last)) = stack.pop() {
        let Some(index) = farthest_beyond(points, first, last, sq_tolerance) else {
            continue;
        };

        trace!("rdp split [{first}, {last}] at {index}");
        keep[index] = true;

        if index - first > 1 {
            stack.push((first, index));
        }
        if last - index > 1 {
            stack.push((index, last));
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect()
}

/// Finds the interior point of `first..=last` farthest from the chord.
///
/// Returns `None` unless that point's squared distance strictly exceeds
/// `sq_tolerance`. Ties go to the lowest index.
fn farthest_beyond<F: Float>(
    points: &[Point2<F>],
    first: usize,
    last: usize,
    sq_tolerance: F,
) -> Option<usize> {
    let chord = Segment2::new(points[first], points[last]);
    let mut max_sq_dist = sq_tolerance;
    let mut max_idx = None;

    for (i, &point) in points.iter().enumerate().take(last).skip(first + 1) {
        let sq_dist = chord.distance_squared_to_point(point);
        if sq_dist > max_sq_dist {
            max_sq_dist = sq_dist;
            max_idx = Some(i);
        }
    }

    max_idx
}
