//! 2D point type for path vertices.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point representing a path vertex.
///
/// The type is axis-agnostic: `x` and `y` are whatever axes the caller fixed
/// before handing the path over. The pipeline uses latitude-first order, so
/// `x` holds latitude and `y` holds longitude unless the caller says otherwise.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (self - other).magnitude_squared()
    }

    /// Returns the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let half = F::one() / (F::one() + F::one());
        self.lerp(other, half)
    }

    /// Returns the point with its axes exchanged.
    ///
    /// Converts between longitude-first (GeoJSON) and latitude-first order.
    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_distance_to_self() {
        let a: Point2<f64> = Point2::new(38.5, -120.2);
        assert_eq!(a.distance_squared(a), 0.0);
    }

    #[test]
    fn test_lerp_and_midpoint() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 20.0);
        let q = a.lerp(b, 0.25);
        assert_relative_eq!(q.x, 2.5, epsilon = 1e-12);
        assert_relative_eq!(q.y, 5.0, epsilon = 1e-12);

        let m = a.midpoint(b);
        assert_eq!(m, Point2::new(5.0, 10.0));
    }

    #[test]
    fn test_swapped() {
        let lng_lat: Point2<f64> = Point2::new(-120.2, 38.5);
        assert_eq!(lng_lat.swapped(), Point2::new(38.5, -120.2));
        assert_eq!(lng_lat.swapped().swapped(), lng_lat);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point2::new(1.0_f64, 2.0).is_finite());
        assert!(!Point2::new(f64::NAN, 2.0).is_finite());
        assert!(!Point2::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_conversions() {
        let from_tuple: Point2<f64> = (1.0, 2.0).into();
        let from_array: Point2<f64> = [1.0, 2.0].into();
        assert_eq!(from_tuple, from_array);
        assert_eq!(Point2::<f32>::default(), Point2::origin());
    }
}
