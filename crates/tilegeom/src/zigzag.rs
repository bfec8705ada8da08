//! # ZigZag Parameter Encoding
//!
//! Command parameters are signed deltas, but the wire carries them as
//! unsigned 32-bit integers. ZigZag encoding interleaves negative and
//! positive values so that deltas of small magnitude stay small:
//!
//! | signed | wire |
//! |--------|------|
//! | 0      | 0    |
//! | -1     | 1    |
//! | 1      | 2    |
//! | -2     | 3    |
//! | 2      | 4    |
//!
//! ## Range
//!
//! Parameters are carried in 32-bit fields, so only deltas in
//! `[-2^31, 2^31)` survive a round trip. [`encode`] truncates anything
//! outside that range to its low 32 bits, exactly as the wire format
//! would; callers that cannot guarantee the range use [`try_encode`].

use crate::error::Error;

/// Smallest delta that can be zigzag-encoded without loss.
pub const MIN_DELTA: i64 = i32::MIN as i64;

/// Largest delta that can be zigzag-encoded without loss.
pub const MAX_DELTA: i64 = i32::MAX as i64;

/// Encodes a signed delta into its wire representation.
///
/// Computes `(n << 1) ^ (n >> 63)` and keeps the low 32 bits. Values
/// outside [`MIN_DELTA`]..=[`MAX_DELTA`] are truncated and will not
/// decode back to `n`.
pub fn encode(n: i64) -> u32 {
    ((n << 1) ^ (n >> 63)) as u32
}

/// Encodes a signed delta, rejecting values that would be truncated.
///
/// ## Returns
/// * `Ok(word)` - The wire representation of `n`
/// * `Err(Error::DeltaOutOfRange)` - If `n` does not fit in 32 zigzag bits
pub fn try_encode(n: i64) -> Result<u32, Error> {
    if !(MIN_DELTA..=MAX_DELTA).contains(&n) {
        return Err(Error::DeltaOutOfRange { delta: n });
    }

    Ok(encode(n))
}

/// Decodes a wire parameter into a signed delta.
///
/// Computes `(u >> 1) ^ -(u & 1)` and sign-extends the 32-bit result.
pub fn decode(u: u32) -> i64 {
    let magnitude = (u >> 1) as i32;
    let sign = -((u & 1) as i32);
    (magnitude ^ sign) as i64
}
