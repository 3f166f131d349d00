pub mod bitpacked;
pub mod bitstream;
pub mod delta_bitpacked;
pub mod hybrid_rle;
pub mod levels;
pub mod uleb128;
pub mod zigzag_leb128;

pub use crate::parquet_bridge::Encoding;

use crate::error::{Error, Result};

/// Returns the ceil of `value / 8`.
#[inline]
pub fn ceil8(value: usize) -> usize {
    value / 8 + ((value % 8 != 0) as usize)
}

/// Returns the number of bits needed to represent `value`; 0 iff `value == 0`.
#[inline]
pub fn num_required_bits(value: u64) -> u32 {
    64 - value.leading_zeros()
}

/// Reads the 4-byte little-endian length prefixing a level stream.
#[inline]
pub fn get_length(values: &[u8]) -> Result<u32> {
    values
        .get(0..4)
        .map(|slice| u32::from_le_bytes(slice.try_into().unwrap()))
        .ok_or(Error::BufferUnderrun)
}
