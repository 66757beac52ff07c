//! Pipeline configuration.
//!
//! A [`PolylineConfig`] carries everything [`crate::pipeline::encode_path`]
//! needs besides the points themselves. It can be built in code or read from
//! JSON, where every field is optional:
//!
//! ```
//! use polyline_codec::config::{AxisOrder, PolylineConfig};
//!
//! let config = PolylineConfig::from_json(r#"{ "tolerance": 0.001, "axis_order": "lng_lat" }"#)
//!     .unwrap();
//! assert_eq!(config.tolerance, 0.001);
//! assert_eq!(config.axis_order, AxisOrder::LngLat);
//! assert_eq!(config.precision.digits(), 5);
//! ```

use crate::error::PolylineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal digits kept when coordinates are scaled to integers.
///
/// Five digits (factor `1e5`) is the standard polyline precision; six is the
/// other common choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Precision(u32);

impl Precision {
    /// Standard polyline precision, factor `1e5`.
    pub const FIVE: Precision = Precision(5);

    /// High precision, factor `1e6`.
    pub const SIX: Precision = Precision(6);

    /// Largest supported digit count.
    pub const MAX_DIGITS: u32 = 10;

    /// Creates a precision of `digits` decimal places.
    pub fn new(digits: u32) -> Result<Self, PolylineError> {
        if digits > Self::MAX_DIGITS {
            return Err(PolylineError::Config(format!(
                "precision must be at most {} digits, got {}",
                Self::MAX_DIGITS,
                digits
            )));
        }
        Ok(Precision(digits))
    }

    /// Returns the number of decimal digits.
    #[inline]
    pub fn digits(self) -> u32 {
        self.0
    }

    /// Returns the scale factor, `10^digits`.
    #[inline]
    pub fn factor(self) -> f64 {
        10f64.powi(self.0 as i32)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::FIVE
    }
}

impl TryFrom<u32> for Precision {
    type Error = PolylineError;

    fn try_from(digits: u32) -> Result<Self, Self::Error> {
        Precision::new(digits)
    }
}

impl From<Precision> for u32 {
    fn from(precision: Precision) -> u32 {
        precision.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1e{}", self.0)
    }
}

/// Axis order of the points handed to the pipeline.
///
/// The encoder always emits latitude first. Input in longitude-first order
/// (the GeoJSON convention) is swapped before simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrder {
    /// `x` is latitude, `y` is longitude.
    #[default]
    LatLng,
    /// `x` is longitude, `y` is latitude.
    LngLat,
}

/// Settings for the simplify-then-encode pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolylineConfig {
    /// Maximum deviation a removed vertex may introduce, in coordinate units.
    pub tolerance: f64,
    /// Skip the vertex-reduction pre-pass and run Douglas-Peucker on the raw path.
    pub high_quality: bool,
    /// Decimal digits kept by the encoder.
    pub precision: Precision,
    /// Axis order of the input points.
    pub axis_order: AxisOrder,
}

impl PolylineConfig {
    /// Default tolerance, roughly 11 m when coordinates are degrees.
    pub const DEFAULT_TOLERANCE: f64 = 0.0001;

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, PolylineError> {
        let config: PolylineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive the pipeline.
    pub fn validate(&self) -> Result<(), PolylineError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(PolylineError::Config(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_high_quality(mut self, high_quality: bool) -> Self {
        self.high_quality = high_quality;
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_axis_order(mut self, axis_order: AxisOrder) -> Self {
        self.axis_order = axis_order;
        self
    }
}

impl Default for PolylineConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            high_quality: false,
            precision: Precision::default(),
            axis_order: AxisOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PolylineConfig::default();
        assert_eq!(config.tolerance, 0.0001);
        assert!(!config.high_quality);
        assert_eq!(config.precision, Precision::FIVE);
        assert_eq!(config.axis_order, AxisOrder::LatLng);
    }

    #[test]
    fn test_precision_factor() {
        assert_eq!(Precision::FIVE.factor(), 1e5);
        assert_eq!(Precision::SIX.factor(), 1e6);
        assert_eq!(Precision::new(0).unwrap().factor(), 1.0);
        assert_eq!(Precision::SIX.to_string(), "1e6");
    }

    #[test]
    fn test_precision_limit() {
        assert!(Precision::new(10).is_ok());
        assert!(matches!(Precision::new(11), Err(PolylineError::Config(_))));
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = PolylineConfig::from_json("{}").unwrap();
        assert_eq!(config, PolylineConfig::default());
    }

    #[test]
    fn test_from_json_all_fields() {
        let config = PolylineConfig::from_json(
            r#"{ "tolerance": 0.5, "high_quality": true, "precision": 6, "axis_order": "lng_lat" }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            PolylineConfig::default()
                .with_tolerance(0.5)
                .with_high_quality(true)
                .with_precision(Precision::SIX)
                .with_axis_order(AxisOrder::LngLat)
        );
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            PolylineConfig::from_json(r#"{ "tolerance": -1.0 }"#),
            Err(PolylineError::Config(_))
        ));
        assert!(matches!(
            PolylineConfig::from_json(r#"{ "precision": 42 }"#),
            Err(PolylineError::Config(_))
        ));
        assert!(matches!(
            PolylineConfig::from_json(r#"{ "axis_order": "xy" }"#),
            Err(PolylineError::Config(_))
        ));
        assert!(matches!(
            PolylineConfig::from_json("not json"),
            Err(PolylineError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = PolylineConfig::default().with_precision(Precision::SIX);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PolylineConfig::from_json(&json).unwrap(), config);
    }
}
