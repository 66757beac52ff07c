//! Variable-length printable encoding of unsigned values.
//!
//! A value is split into 5-bit groups, least significant first. Every group
//! but the last carries the `0x20` continuation bit, and each is offset by 63
//! so the output stays within the printable range `[63, 126]`.

use crate::error::PolylineError;

const CONTINUATION: u64 = 0x20;
const GROUP_MASK: u64 = 0x1f;
const OFFSET: u8 = 63;
const MAX_BYTE: u8 = 126;

/// Appends the printable chunk for `value` to `out`.
pub fn encode_unsigned(mut value: u64, out: &mut String) {
    while value >= CONTINUATION {
        let group = ((CONTINUATION | (value & GROUP_MASK)) as u8) + OFFSET;
        out.push(char::from(group));
        value >>= 5;
    }
    out.push(char::from(value as u8 + OFFSET));
}

/// Reads one chunk from `bytes` starting at `*pos`, advancing `*pos` past it.
///
/// Fails with [`PolylineError::InvalidEncoding`] on a byte outside
/// `[63, 126]` or when the input ends before the final group, and with
/// [`PolylineError::Overflow`] when the chunk does not fit in 64 bits.
pub fn decode_unsigned(bytes: &[u8], pos: &mut usize) -> Result<u64, PolylineError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes
            .get(*pos)
            .ok_or(PolylineError::InvalidEncoding { position: *pos })?;
        if !(OFFSET..=MAX_BYTE).contains(&byte) {
            return Err(PolylineError::InvalidEncoding { position: *pos });
        }

        let chunk = u64::from(byte - OFFSET);
        let group = chunk & GROUP_MASK;
        if shift >= u64::BITS || (group << shift) >> shift != group {
            return Err(PolylineError::Overflow { position: *pos });
        }

        result |= group << shift;
        shift += 5;
        *pos += 1;

        if chunk & CONTINUATION == 0 {
            return Ok(result);
        }
    }
}
