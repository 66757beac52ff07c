//! Input checks for the fallible entry points.
//!
//! The plain simplify and encode functions accept any input and leave
//! non-finite values undefined. These checks back the `*_checked` variants
//! and the pipeline, which fail fast instead.

use crate::error::PolylineError;
use crate::primitives::Point2;
use num_traits::Float;

/// Ensures every coordinate in `points` is finite.
///
/// Reports the index of the first offending point.
pub fn check_points<F: Float>(points: &[Point2<F>]) -> Result<(), PolylineError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(PolylineError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

/// Ensures `tolerance` is finite and non-negative.
pub fn check_tolerance<F: Float>(tolerance: F) -> Result<(), PolylineError> {
    if tolerance.is_finite() && tolerance >= F::zero() {
        Ok(())
    } else {
        Err(PolylineError::InvalidTolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_points() {
        let good: Vec<Point2<f64>> = vec![Point2::new(0.0, 0.0), Point2::new(1.0, -1.0)];
        assert!(check_points(&good).is_ok());
        assert!(check_points::<f64>(&[]).is_ok());

        let bad = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(f64::NAN, 1.0),
            Point2::new(f64::INFINITY, 1.0),
        ];
        assert_eq!(
            check_points(&bad),
            Err(PolylineError::NonFiniteCoordinate { index: 2 })
        );
    }

    #[test]
    fn test_check_tolerance() {
        assert!(check_tolerance(0.0_f64).is_ok());
        assert!(check_tolerance(1.5_f32).is_ok());
        assert_eq!(check_tolerance(-0.1_f64), Err(PolylineError::InvalidTolerance));
        assert_eq!(check_tolerance(f64::NAN), Err(PolylineError::InvalidTolerance));
        assert_eq!(
            check_tolerance(f64::INFINITY),
            Err(PolylineError::InvalidTolerance)
        );
    }
}
