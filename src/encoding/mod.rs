//! Compact ASCII encoding of coordinate paths.
//!
//! Implements the polyline encoding used by static-map and routing services:
//! cumulative scaled deltas, zig-zag signed, written as 5-bit printable
//! groups. The building blocks are public for callers that need to encode
//! single values.

mod chunk;
mod polyline;
mod signed;

pub use chunk::{decode_unsigned, encode_unsigned};
pub use polyline::{decode, decode_with_precision, encode, encode_checked, encode_with_precision};
pub use signed::{decode_signed, encode_signed};
