// See https://github.com/apache/parquet-format/blob/master/Encodings.md#run-length-encoding--bit-packing-hybrid-rle--3
mod bitmap;
mod decoder;
mod encoder;

pub use bitmap::{bitpacked_encode, BitmapIter};
pub use decoder::Decoder;
pub use encoder::encode;

use super::bitpacked;
use crate::error::{Error, Result};

/// A single run of an RLE/bit-packed hybrid slice.
#[derive(Debug, PartialEq, Eq)]
pub enum HybridEncoded<'a> {
    /// A bit-packed slice; its length is a multiple of `num_bits` bytes,
    /// one byte per group of 8 values.
    Bitpacked(&'a [u8]),
    /// A repeated value (`ceil8(num_bits)` little-endian bytes) and the
    /// number of repetitions.
    Rle(&'a [u8], usize),
}

#[derive(Debug, Clone)]
enum State<'a> {
    None,
    Bitpacked(bitpacked::Decoder<'a, u32>),
    Rle { value: u32, length: usize },
}

/// A [`Iterator`] of `u32` over the values of an RLE/bit-packed hybrid
/// slice, re-entering the run decoder at each run boundary.
///
/// A `num_bits` of 0 is the degenerate stream of `num_values` zeros and
/// consumes no bytes.
#[derive(Debug, Clone)]
pub struct HybridRleDecoder<'a> {
    decoder: Decoder<'a>,
    state: State<'a>,
    remaining: usize,
}

impl<'a> HybridRleDecoder<'a> {
    /// Returns a new [`HybridRleDecoder`].
    pub fn try_new(data: &'a [u8], num_bits: u32, num_values: usize) -> Result<Self> {
        if num_bits > 32 {
            return Err(Error::OutOfSpec(format!(
                "bit width {} exceeds the maximum of 32",
                num_bits
            )));
        }
        Ok(Self {
            decoder: Decoder::new(data, num_bits),
            state: State::None,
            remaining: num_values,
        })
    }

    /// The number of values this decoder still yields.
    #[inline]
    pub fn len(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_run(&mut self) -> Result<bool> {
        if self.decoder.num_bits() == 0 {
            // the stream has no bytes; every value is zero
            self.state = State::Rle {
                value: 0,
                length: self.remaining,
            };
            return Ok(true);
        }
        match self.decoder.next() {
            Some(Ok(HybridEncoded::Bitpacked(compressed))) => {
                let num_bits = self.decoder.num_bits() as usize;
                // a pack has at most `compressed.len() * 8 / num_bits` values
                let length = std::cmp::min(compressed.len() * 8 / num_bits, self.remaining);
                self.state = State::Bitpacked(bitpacked::Decoder::new(compressed, num_bits, length));
                Ok(true)
            }
            Some(Ok(HybridEncoded::Rle(pack, length))) => {
                let mut bytes = [0u8; 4];
                pack.iter().zip(bytes.iter_mut()).for_each(|(src, dst)| *dst = *src);
                let value = u32::from_le_bytes(bytes);
                self.state = State::Rle { value, length };
                Ok(true)
            }
            Some(Err(e)) => Err(e),
            None => {
                self.state = State::None;
                Ok(false)
            }
        }
    }

    /// Reads up to `values.len()` values, returning how many were read;
    /// fewer than `values.len()` iff the stream is exhausted.
    pub fn get_batch(&mut self, values: &mut [u32]) -> Result<usize> {
        let mut read = 0;
        while read < values.len() {
            match self.next() {
                Some(Ok(value)) => {
                    values[read] = value;
                    read += 1;
                }
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }
        Ok(read)
    }
}

impl<'a> Iterator for HybridRleDecoder<'a> {
    type Item = Result<u32>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            match &mut self.state {
                State::Bitpacked(decoder) => {
                    if let Some(value) = decoder.next() {
                        self.remaining -= 1;
                        return Some(Ok(value));
                    }
                }
                State::Rle { value, length } => {
                    if *length > 0 {
                        *length -= 1;
                        self.remaining -= 1;
                        return Some(Ok(*value));
                    }
                }
                State::None => {}
            }
            match self.load_run() {
                Ok(true) => {}
                Ok(false) => return Some(Err(Error::BufferUnderrun)),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
