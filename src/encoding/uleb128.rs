use crate::error::{Error, Result};

/// Decodes an ULEB128-encoded integer from the start of `values`, returning
/// it together with the number of bytes consumed.
pub fn decode(values: &[u8]) -> Result<(u64, usize)> {
    let mut result = 0;
    let mut shift = 0;

    let mut consumed = 0;
    for byte in values {
        consumed += 1;
        if shift == 63 && *byte > 1 {
            return Err(Error::OutOfSpec(
                "ULEB128 overflows a 64 bit integer".to_string(),
            ));
        };

        result |= u64::from(byte & 0x7f) << shift;

        if byte & 0x80 == 0 {
            return Ok((result, consumed));
        }

        shift += 7;
    }
    Err(Error::BufferUnderrun)
}

/// Encodes `value` into `container`, returning the number of bytes used.
/// # Panics
/// Panics iff `container` is too small (10 bytes always suffice).
pub fn encode(mut value: u64, container: &mut [u8]) -> usize {
    let mut consumed = 0;
    while value >= 0x80 {
        container[consumed] = (value as u8) | 0x80;
        value >>= 7;
        consumed += 1;
    }
    container[consumed] = value as u8;
    consumed + 1
}
