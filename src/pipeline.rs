//! Simplify-then-encode pipeline for boundary paths.
//!
//! This is the entry point map renderers call: hand over a boundary ring in a
//! known axis order, get back the string to embed as `path=enc:<...>`.
//!
//! ```
//! use polyline_codec::config::{AxisOrder, PolylineConfig};
//! use polyline_codec::pipeline::{encode_path, static_map_path_value};
//! use polyline_codec::Point2;
//!
//! // GeoJSON rings are longitude-first
//! let ring = vec![
//!     Point2::new(-120.2, 38.5),
//!     Point2::new(-120.95, 40.7),
//!     Point2::new(-126.453, 43.252),
//! ];
//! let config = PolylineConfig::default().with_axis_order(AxisOrder::LngLat);
//!
//! let encoded = encode_path(&ring, &config).unwrap();
//! assert_eq!(static_map_path_value(&encoded), "enc:_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//! ```

use crate::config::{AxisOrder, PolylineConfig};
use crate::encoding::encode_checked;
use crate::error::PolylineError;
use crate::primitives::Point2;
use crate::simplify::simplify_with;
use crate::validate::check_points;
use log::debug;
use num_traits::Float;

/// Validates, reorders, simplifies and encodes a single path.
///
/// Points in [`AxisOrder::LngLat`] are swapped so the encoded string is always
/// latitude-first. Fails fast on non-finite coordinates, an invalid
/// configuration, or coordinates too large for the configured precision.
pub fn encode_path<F: Float>(
    points: &[Point2<F>],
    config: &PolylineConfig,
) -> Result<String, PolylineError> {
    config.validate()?;
    check_points(points)?;

    let tolerance = F::from(config.tolerance).ok_or(PolylineError::InvalidTolerance)?;

    let lat_lng: Vec<Point2<F>> = match config.axis_order {
        AxisOrder::LatLng => points.to_vec(),
        AxisOrder::LngLat => points.iter().map(|p| p.swapped()).collect(),
    };

    let simplified = simplify_with(&lat_lng, tolerance, config.high_quality);
    let encoded = encode_checked(&simplified, config.precision)?;

    debug!(
        "encoded path: {} points -> {} points -> {} bytes at precision {}",
        points.len(),
        simplified.len(),
        encoded.len(),
        config.precision
    );
    Ok(encoded)
}

/// Flattens rings in order and runs the result through [`encode_path`].
///
/// Used for multi-polygon outer rings. Rings are concatenated as given; the
/// jump from one ring's last point to the next ring's first is encoded like
/// any other edge.
pub fn encode_rings<F, R>(rings: &[R], config: &PolylineConfig) -> Result<String, PolylineError>
where
    F: Float,
    R: AsRef<[Point2<F>]>,
{
    let flattened: Vec<Point2<F>> = rings
        .iter()
        .flat_map(|ring| ring.as_ref().iter().copied())
        .collect();

    debug!(
        "flattened {} rings into {} points",
        rings.len(),
        flattened.len()
    );
    encode_path(&flattened, config)
}

/// Formats an encoded path as the value of a static-map `path` parameter.
pub fn static_map_path_value(encoded: &str) -> String {
    format!("enc:{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Precision;
    use crate::encoding::{decode, decode_with_precision, encode};
    use approx::assert_relative_eq;

    fn reference_lat_lng() -> Vec<Point2<f64>> {
        vec![
            Point2::new(38.5, -120.2),
            Point2::new(40.7, -120.95),
            Point2::new(43.252, -126.453),
        ]
    }

    #[test]
    fn test_lat_lng_passthrough() {
        let encoded = encode_path(&reference_lat_lng(), &PolylineConfig::default()).unwrap();
        assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn test_lng_lat_is_swapped() {
        let lng_lat: Vec<Point2<f64>> = reference_lat_lng().iter().map(|p| p.swapped()).collect();
        let config = PolylineConfig::default().with_axis_order(AxisOrder::LngLat);
        assert_eq!(
            encode_path(&lng_lat, &config).unwrap(),
            encode(&reference_lat_lng())
        );
    }

    #[test]
    fn test_simplifies_before_encoding() {
        let dense: Vec<Point2<f64>> = (0..=100)
            .map(|i| Point2::new(10.0, 20.0 + i as f64 * 0.01))
            .collect();
        let encoded = encode_path(&dense, &PolylineConfig::default()).unwrap();
        let decoded = decode(&encoded).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_relative_eq!(decoded[1].y, 21.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_path() {
        let empty: Vec<Point2<f64>> = vec![];
        assert_eq!(encode_path(&empty, &PolylineConfig::default()), Ok(String::new()));
    }

    #[test]
    fn test_precision_is_honored() {
        let config = PolylineConfig::default().with_precision(Precision::SIX);
        let encoded = encode_path(&reference_lat_lng(), &config).unwrap();
        let decoded = decode_with_precision(&encoded, Precision::SIX).unwrap();
        assert_relative_eq!(decoded[2].x, 43.252, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_bad_input() {
        let bad = vec![Point2::new(0.0, 0.0), Point2::new(f64::INFINITY, 0.0)];
        let err = encode_path(&bad, &PolylineConfig::default()).unwrap_err();
        assert!(err.is_invalid_input());

        let config = PolylineConfig::default().with_tolerance(-1.0);
        assert!(matches!(
            encode_path(&reference_lat_lng(), &config),
            Err(PolylineError::Config(_))
        ));
    }

    #[test]
    fn test_encode_rings_concatenates() {
        let first = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        let second = vec![
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 6.0),
            Point2::new(6.0, 6.0),
            Point2::new(5.0, 5.0),
        ];
        let config = PolylineConfig::default().with_tolerance(0.0);

        let joined: Vec<Point2<f64>> = first.iter().chain(second.iter()).copied().collect();
        assert_eq!(
            encode_rings(&[first, second], &config).unwrap(),
            encode(&joined)
        );
    }

    #[test]
    fn test_static_map_path_value() {
        assert_eq!(static_map_path_value("abc"), "enc:abc");
        assert_eq!(static_map_path_value(""), "enc:");
    }
}
