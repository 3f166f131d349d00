use crate::encoding::{bitpacked, ceil8};
use crate::error::{Error, Result};

/// Reads bit-packed values from a byte slice; the mirror of
/// [`BitWriter`](super::BitWriter).
///
/// A 64-bit word buffers the bytes around the cursor and is refilled on
/// crossing. Failed reads do not advance the cursor.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    // byte of `data` at which `buffered` starts
    byte_offset: usize,
    // bits of `buffered` already consumed, < 64
    bit_offset: usize,
    buffered: u64,
}

#[inline]
fn mask(num_bits: usize) -> u64 {
    if num_bits == 64 {
        u64::MAX
    } else {
        (1u64 << num_bits) - 1
    }
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        let mut reader = Self {
            data,
            byte_offset: 0,
            bit_offset: 0,
            buffered: 0,
        };
        reader.reload();
        reader
    }

    #[inline]
    fn reload(&mut self) {
        let end = std::cmp::min(self.byte_offset + 8, self.data.len());
        let mut word = [0u8; 8];
        if self.byte_offset < end {
            word[..end - self.byte_offset].copy_from_slice(&self.data[self.byte_offset..end]);
        }
        self.buffered = u64::from_le_bytes(word);
    }

    /// The number of bits not yet consumed.
    #[inline]
    fn bits_left(&self) -> usize {
        self.data.len() * 8 - self.byte_offset * 8 - self.bit_offset
    }

    /// The number of whole bytes not yet consumed; a partially consumed
    /// byte counts as consumed.
    #[inline]
    pub fn bytes_left(&self) -> usize {
        self.data.len() - self.byte_offset - ceil8(self.bit_offset)
    }

    /// Reads the next `num_bits` bits.
    /// # Panics
    /// Panics iff `num_bits > 32`.
    pub fn get_bits(&mut self, num_bits: usize) -> Result<u32> {
        assert!(num_bits <= 32);
        if self.bits_left() < num_bits {
            return Err(Error::BufferUnderrun);
        }

        let mut value = (self.buffered >> self.bit_offset) & mask(num_bits);
        self.bit_offset += num_bits;
        if self.bit_offset >= 64 {
            self.byte_offset += 8;
            self.bit_offset -= 64;
            self.reload();
            if self.bit_offset != 0 {
                value |= (self.buffered & mask(self.bit_offset)) << (num_bits - self.bit_offset);
            }
        }
        Ok(value as u32)
    }

    /// Reads up to `values.len()` values of `num_bits` each, returning how
    /// many were read. Full groups of 32 aligned values go through the
    /// per-width unpackers; head and tail fall back to bit-at-a-time reads.
    /// # Panics
    /// Panics iff `num_bits > 32`.
    pub fn get_batch(&mut self, num_bits: usize, values: &mut [u32]) -> Result<usize> {
        assert!(num_bits <= 32);
        if num_bits == 0 {
            values.iter_mut().for_each(|value| *value = 0);
            return Ok(values.len());
        }
        let available = self.bits_left() / num_bits;
        let to_read = std::cmp::min(values.len(), available);

        let mut read = 0;
        // consume until the cursor sits on a byte boundary
        while read < to_read && self.bit_offset % 8 != 0 {
            values[read] = self.get_bits(num_bits)?;
            read += 1;
        }

        let mut position = self.byte_offset + self.bit_offset / 8;
        let group_bytes = ceil8(bitpacked::PACK_LENGTH * num_bits);
        while to_read - read >= bitpacked::PACK_LENGTH {
            let group: &mut [u32; bitpacked::PACK_LENGTH] =
                (&mut values[read..read + bitpacked::PACK_LENGTH])
                    .try_into()
                    .unwrap();
            bitpacked::unpack32(&self.data[position..position + group_bytes], group, num_bits);
            position += group_bytes;
            read += bitpacked::PACK_LENGTH;
        }
        if position != self.byte_offset + self.bit_offset / 8 {
            self.byte_offset = position;
            self.bit_offset = 0;
            self.reload();
        }

        while read < to_read {
            values[read] = self.get_bits(num_bits)?;
            read += 1;
        }
        Ok(read)
    }

    /// Aligns the cursor to the next byte boundary, then reads `num_bytes`
    /// little-endian bytes.
    pub fn get_aligned(&mut self, num_bytes: usize) -> Result<u64> {
        debug_assert!(num_bytes <= 8);
        let aligned = self.byte_offset + ceil8(self.bit_offset);
        if aligned + num_bytes > self.data.len() {
            return Err(Error::BufferUnderrun);
        }
        let mut word = [0u8; 8];
        word[..num_bytes].copy_from_slice(&self.data[aligned..aligned + num_bytes]);
        self.byte_offset = aligned + num_bytes;
        self.bit_offset = 0;
        self.reload();
        Ok(u64::from_le_bytes(word))
    }

    /// Reads a byte-aligned ULEB128-encoded `u32`; more than 5 bytes is
    /// out of spec.
    pub fn get_vlq(&mut self) -> Result<u32> {
        let mut aligned = self.byte_offset + ceil8(self.bit_offset);
        let mut value = 0u64;
        let mut shift = 0;
        loop {
            let byte = *self.data.get(aligned).ok_or(Error::BufferUnderrun)?;
            aligned += 1;
            value |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
            if shift >= 35 {
                return Err(Error::OutOfSpec(
                    "VLQ-encoded u32 longer than 5 bytes".to_string(),
                ));
            }
        }
        if value > u32::MAX as u64 {
            return Err(Error::OutOfSpec(
                "VLQ-encoded value overflows a u32".to_string(),
            ));
        }
        self.byte_offset = aligned;
        self.bit_offset = 0;
        self.reload();
        Ok(value as u32)
    }

    /// Reads a byte-aligned zigzag ULEB128-encoded `i32`.
    pub fn get_zigzag_vlq(&mut self) -> Result<i32> {
        let zigzag = self.get_vlq()?;
        Ok((zigzag >> 1) as i32 ^ -((zigzag & 1) as i32))
    }
}
