use std::io::Write;

use crate::encoding::hybrid_rle::bitpacked_encode;
use crate::error::{Error, Result};
use crate::types::NativeType;

/// Encodes fixed-size native values back to back, little-endian.
pub fn encode_native<T: NativeType>(values: &[T], buffer: &mut Vec<u8>) {
    buffer.reserve(values.len() * std::mem::size_of::<T>());
    for value in values {
        buffer.extend_from_slice(value.to_le_bytes().as_ref());
    }
}

/// Encodes booleans as a bitmap, LSB-first, `ceil8(n)` bytes for `n`
/// values.
pub fn encode_boolean<W: Write, I: Iterator<Item = bool>>(
    writer: &mut W,
    iterator: I,
) -> Result<()> {
    Ok(bitpacked_encode(writer, iterator)?)
}

/// Encodes byte arrays, each prefixed by its 4-byte little-endian length.
pub fn encode_binary<'a, I: Iterator<Item = &'a [u8]>>(
    iterator: I,
    buffer: &mut Vec<u8>,
) -> Result<()> {
    for value in iterator {
        let length = u32::try_from(value.len())
            .map_err(|_| Error::OutOfSpec("a byte array longer than 2^32 bytes".to_string()))?;
        buffer.extend_from_slice(&length.to_le_bytes());
        buffer.extend_from_slice(value);
    }
    Ok(())
}

/// Encodes fixed length byte arrays back to back; a value whose length
/// differs from `size` is an error.
pub fn encode_fixed_len<'a, I: Iterator<Item = &'a [u8]>>(
    iterator: I,
    size: usize,
    buffer: &mut Vec<u8>,
) -> Result<()> {
    for value in iterator {
        if value.len() != size {
            return Err(Error::OutOfSpec(format!(
                "fixed length value of {} bytes in a column of length {}",
                value.len(),
                size
            )));
        }
        buffer.extend_from_slice(value);
    }
    Ok(())
}
