//! Encoded polyline strings.
//!
//! Each coordinate is scaled by `10^precision`, rounded half away from zero,
//! and written as the zig-zag delta from the previous point's value on the
//! same axis. The first axis of every point is written before the second.
//!
//! ```
//! use polyline_codec::encoding::{decode, encode};
//! use polyline_codec::Point2;
//!
//! let path = vec![
//!     Point2::new(38.5, -120.2),
//!     Point2::new(40.7, -120.95),
//!     Point2::new(43.252, -126.453),
//! ];
//!
//! let encoded = encode(&path);
//! assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//! assert_eq!(decode(&encoded).unwrap().len(), 3);
//! ```

use super::chunk::{decode_unsigned, encode_unsigned};
use super::signed::{decode_signed, encode_signed};
use crate::config::Precision;
use crate::error::PolylineError;
use crate::primitives::Point2;
use crate::validate::check_points;
use num_traits::Float;

/// Largest scaled magnitude [`encode_checked`] accepts.
///
/// Beyond 2^53 an `f64` no longer represents every integer.
const MAX_SCALED: f64 = 9_007_199_254_740_992.0;

/// Encodes a path at the standard precision of five decimal digits.
///
/// An empty path yields an empty string.
pub fn encode<F: Float>(points: &[Point2<F>]) -> String {
    encode_with_precision(points, Precision::FIVE)
}

/// Encodes a path at the given precision.
///
/// Total over all input: non-finite or out-of-range coordinates are
/// saturated to the `i64` range (NaN becomes zero) rather than rejected.
/// Use [`encode_checked`] to reject them instead.
pub fn encode_with_precision<F: Float>(points: &[Point2<F>], precision: Precision) -> String {
    let factor = precision.factor();
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_x: i64 = 0;
    let mut prev_y: i64 = 0;

    for p in points {
        let x = scale(p.x, factor);
        let y = scale(p.y, factor);

        encode_unsigned(encode_signed(x.wrapping_sub(prev_x)), &mut out);
        encode_unsigned(encode_signed(y.wrapping_sub(prev_y)), &mut out);

        prev_x = x;
        prev_y = y;
    }

    out
}

/// Encodes a path, rejecting non-finite coordinates and coordinates whose
/// scaled magnitude exceeds 2^53.
pub fn encode_checked<F: Float>(
    points: &[Point2<F>],
    precision: Precision,
) -> Result<String, PolylineError> {
    check_points(points)?;

    let factor = precision.factor();
    let in_range = |c: F| c.to_f64().is_some_and(|c| (c * factor).abs() <= MAX_SCALED);
    if let Some(index) = points.iter().position(|p| !(in_range(p.x) && in_range(p.y))) {
        return Err(PolylineError::CoordinateOutOfRange { index });
    }

    Ok(encode_with_precision(points, precision))
}

/// Decodes a string produced at the standard precision of five digits.
pub fn decode(encoded: &str) -> Result<Vec<Point2<f64>>, PolylineError> {
    decode_with_precision(encoded, Precision::FIVE)
}

/// Decodes a string produced at the given precision.
///
/// Fails with [`PolylineError::InvalidEncoding`] when a byte lies outside
/// `[63, 126]`, a chunk is cut short, or the string holds an odd number of
/// values.
pub fn decode_with_precision(
    encoded: &str,
    precision: Precision,
) -> Result<Vec<Point2<f64>>, PolylineError> {
    let bytes = encoded.as_bytes();
    let factor = precision.factor();
    let mut points = Vec::new();
    let mut pos = 0;
    let mut x: i64 = 0;
    let mut y: i64 = 0;

    while pos < bytes.len() {
        x = x.wrapping_add(decode_signed(decode_unsigned(bytes, &mut pos)?));
        if pos >= bytes.len() {
            return Err(PolylineError::InvalidEncoding { position: pos });
        }
        y = y.wrapping_add(decode_signed(decode_unsigned(bytes, &mut pos)?));

        points.push(Point2::new(x as f64 / factor, y as f64 / factor));
    }

    Ok(points)
}

#[inline]
fn scale<F: Float>(coordinate: F, factor: f64) -> i64 {
    let c = coordinate.to_f64().unwrap_or(f64::NAN);
    (c * factor).round() as i64
}
