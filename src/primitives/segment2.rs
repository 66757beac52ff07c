//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns `true` if start and end coincide exactly.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.direction().is_zero()
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// The point is projected onto the infinite line through the segment and
    /// the projection parameter `t` is clamped: `t > 1` snaps to `end`,
    /// `0 < t <= 1` interpolates, anything else snaps to `start`. A degenerate
    /// segment always yields `start`.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();

        // Degenerate segment (start == end)
        if v.is_zero() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / v.magnitude_squared();

        if t > F::one() {
            (self.end, F::one())
        } else if t > F::zero() {
            (self.start + v * t, t)
        } else {
            (self.start, F::zero())
        }
    }

    /// Computes the squared distance from a point to this segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
