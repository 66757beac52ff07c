//! Polyline and polygon-ring simplification.
//!
//! [`simplify`] runs two stages: a radial vertex-reduction pass that strips
//! near-duplicate neighbours, then Ramer-Douglas-Peucker on what remains.
//! Both stages are exposed on their own as well.

mod radial;
mod rdp;

pub use radial::{radial, radial_indices};
pub use rdp::{rdp, rdp_indices};

use crate::error::PolylineError;
use crate::primitives::Point2;
use crate::validate::{check_points, check_tolerance};
use log::debug;
use num_traits::Float;

/// Simplifies a path with vertex reduction followed by Douglas-Peucker.
///
/// Paths of two points or fewer come back unchanged. Otherwise the output
/// keeps the input order and always starts and ends with the input's first
/// and last points.
///
/// Non-finite coordinates give an unspecified (but non-panicking) result;
/// use [`simplify_checked`] to reject them.
///
/// # Example
///
/// ```
/// use polyline_codec::simplify::simplify;
/// use polyline_codec::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 0.00001),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let simplified = simplify(&points, 0.001);
/// assert_eq!(simplified, vec![Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)]);
/// ```
pub fn simplify<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<Point2<F>> {
    simplify_with(points, tolerance, false)
}

/// Simplifies a path, optionally skipping the vertex-reduction pass.
///
/// With `high_quality` set, Douglas-Peucker runs directly on the input. This
/// is slower on dense paths but never drops a point purely for sitting close
/// to its predecessor.
pub fn simplify_with<F: Float>(
    points: &[Point2<F>],
    tolerance: F,
    high_quality: bool,
) -> Vec<Point2<F>> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    simplify_indices(points, tolerance, high_quality)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Returns the indices into `points` that survive [`simplify_with`].
pub fn simplify_indices<F: Float>(
    points: &[Point2<F>],
    tolerance: F,
    high_quality: bool,
) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    if high_quality {
        let kept = rdp_indices(points, tolerance);
        debug!("simplify: {} -> {} points (high quality)", n, kept.len());
        return kept;
    }

    let reduced = radial_indices(points, tolerance);
    let reduced_points: Vec<Point2<F>> = reduced.iter().map(|&i| points[i]).collect();
    let kept: Vec<usize> = rdp_indices(&reduced_points, tolerance)
        .into_iter()
        .map(|i| reduced[i])
        .collect();

    debug!(
        "simplify: {} -> {} after vertex reduction -> {} points",
        n,
        reduced.len(),
        kept.len()
    );
    kept
}

/// Like [`simplify_with`], but rejects non-finite coordinates and negative or
/// non-finite tolerances.
pub fn simplify_checked<F: Float>(
    points: &[Point2<F>],
    tolerance: F,
    high_quality: bool,
) -> Result<Vec<Point2<F>>, PolylineError> {
    check_tolerance(tolerance)?;
    check_points(points)?;
    Ok(simplify_with(points, tolerance, high_quality))
}
