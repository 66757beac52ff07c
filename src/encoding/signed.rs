//! Zig-zag mapping between signed deltas and unsigned values.
//!
//! Small magnitudes of either sign map to small unsigned values:
//! `0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...`

/// Maps a signed delta to its zig-zag unsigned form.
///
/// The value is shifted left one bit and, when negative, bitwise inverted.
#[inline]
pub fn encode_signed(delta: i64) -> u64 {
    let shifted = (delta << 1) as u64;
    if delta < 0 {
        !shifted
    } else {
        shifted
    }
}

/// Recovers the signed delta from its zig-zag unsigned form.
#[inline]
pub fn decode_signed(value: u64) -> i64 {
    let magnitude = (value >> 1) as i64;
    if value & 1 == 1 {
        !magnitude
    } else {
        magnitude
    }
}
