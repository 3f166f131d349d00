//! Repetition and definition levels inside a v1 data page are serialized
//! as RLE/bit-packed hybrid data behind a 4-byte little-endian length
//! prefix. A leaf whose maximum level is 0 has no level stream at all.
use super::{get_length, hybrid_rle, num_required_bits};
use crate::error::{Error, Result};

/// The number of bits needed to encode levels bounded by `max_level`.
#[inline]
pub fn get_bit_width(max_level: i16) -> u32 {
    num_required_bits(max_level as u64)
}

/// Encodes `levels` into `buffer`: a reserved 4-byte length, the hybrid
/// RLE data, and the length backfilled. Writes nothing when
/// `max_level == 0`.
pub fn encode<I: Iterator<Item = u32>>(
    buffer: &mut Vec<u8>,
    levels: I,
    max_level: i16,
) -> Result<()> {
    if max_level == 0 {
        return Ok(());
    }
    let start = buffer.len();
    buffer.extend_from_slice(&[0; 4]);
    hybrid_rle::encode(buffer, levels, get_bit_width(max_level))?;
    let length = buffer.len() - start - 4;
    let length = u32::try_from(length)
        .map_err(|_| Error::OutOfSpec("level stream longer than 2^32 bytes".to_string()))?;
    buffer[start..start + 4].copy_from_slice(&length.to_le_bytes());
    Ok(())
}

/// Returns a decoder over `num_values` levels of an already-carved level
/// slice.
pub fn decode(values: &[u8], max_level: i16, num_values: usize) -> Result<hybrid_rle::HybridRleDecoder> {
    hybrid_rle::HybridRleDecoder::try_new(values, get_bit_width(max_level), num_values)
}

/// Splits a v1 data page buffer into its repetition level, definition
/// level and values slices, using the 4-byte length prefixes.
pub fn split_buffer(buffer: &[u8], max_rep_level: i16, max_def_level: i16) -> Result<(&[u8], &[u8], &[u8])> {
    let (rep, buffer) = if max_rep_level > 0 {
        let length = get_length(buffer)? as usize;
        let buffer = &buffer[4..];
        if length > buffer.len() {
            return Err(Error::BufferUnderrun);
        }
        (&buffer[..length], &buffer[length..])
    } else {
        (&[] as &[u8], buffer)
    };

    let (def, buffer) = if max_def_level > 0 {
        let length = get_length(buffer)? as usize;
        let buffer = &buffer[4..];
        if length > buffer.len() {
            return Err(Error::BufferUnderrun);
        }
        (&buffer[..length], &buffer[length..])
    } else {
        (&[] as &[u8], buffer)
    };

    Ok((rep, def, buffer))
}
