//! polyline-codec - Boundary path simplification and polyline encoding
//!
//! Reduces a boundary ring to the vertices that matter at a given tolerance,
//! then packs it into the compact printable string static-map renderers take
//! as `path=enc:<...>`.
//!
//! ```
//! use polyline_codec::{encode, simplify, Point2};
//!
//! let ring = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 0.00001),
//!     Point2::new(0.0, 1.0),
//! ];
//! assert_eq!(encode(&simplify(&ring, 0.001)), "???_ibE");
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod pipeline;
pub mod primitives;
pub mod simplify;
pub mod validate;

pub use config::{AxisOrder, PolylineConfig, Precision};
pub use encoding::{decode, encode};
pub use error::PolylineError;
pub use pipeline::encode_path;
pub use primitives::{Point2, Segment2, Vec2};
pub use simplify::simplify;
