use std::collections::HashMap;

use super::plain;
use crate::encoding::{hybrid_rle, num_required_bits};
use crate::error::{Error, Result};
use crate::types::NativeType;

/// Dictionaries larger than this many entries ask for a `PLAIN` fallback.
pub const MAX_DICT_ENTRIES: usize = 1 << 20;
/// Dictionaries holding more than this many value bytes ask for a `PLAIN`
/// fallback.
pub const MAX_DICT_BYTES: usize = 1024 * 1024;

/// The bit width of indices into a dictionary of `num_entries` values;
/// never 0, even for a single-entry dictionary.
#[inline]
fn indices_bit_width(num_entries: usize) -> u32 {
    std::cmp::max(num_required_bits(num_entries.saturating_sub(1) as u64), 1)
}

fn write_indices(indices: &[u32], num_entries: usize, buffer: &mut Vec<u8>) -> Result<()> {
    let num_bits = indices_bit_width(num_entries);
    let num_bits_byte =
        u8::try_from(num_bits).map_err(|_| Error::OutOfSpec("bit width above 255".to_string()))?;
    buffer.push(num_bits_byte);
    hybrid_rle::encode(buffer, indices.iter().copied(), num_bits)
}

/// A column-chunk-scoped dictionary of native values.
///
/// `push` interns a value and buffers its index; [`DictEncoder::write_indices`]
/// drains the buffered indices into one data page. The dictionary itself is
/// frozen into a `PLAIN` dictionary page with
/// [`DictEncoder::write_dict_page`] once the chunk closes.
///
/// Once [`DictEncoder::is_full`] turns true the chunk writer must encode
/// all remaining pages of the chunk as `PLAIN`.
#[derive(Debug)]
pub struct DictEncoder<T: NativeType> {
    values: Vec<T>,
    interned: HashMap<T::Bytes, u32>,
    indices: Vec<u32>,
}

impl<T: NativeType> DictEncoder<T> {
    pub fn new() -> Self {
        Self {
            values: vec![],
            interned: HashMap::new(),
            indices: vec![],
        }
    }

    /// Interns `value` and buffers its index for the current page.
    pub fn push(&mut self, value: T) -> u32 {
        let values = &mut self.values;
        let index = *self
            .interned
            .entry(value.to_le_bytes())
            .or_insert_with(|| {
                values.push(value);
                (values.len() - 1) as u32
            });
        self.indices.push(index);
        index
    }

    pub fn num_entries(&self) -> usize {
        self.values.len()
    }

    /// The number of value bytes the dictionary page will occupy.
    pub fn byte_size(&self) -> usize {
        self.values.len() * std::mem::size_of::<T>()
    }

    /// Whether the chunk writer should fall back to `PLAIN` for the
    /// remainder of the chunk.
    pub fn is_full(&self) -> bool {
        self.num_entries() >= MAX_DICT_ENTRIES || self.byte_size() >= MAX_DICT_BYTES
    }

    /// The bit width the next data page's indices will use.
    pub fn bit_width(&self) -> u32 {
        indices_bit_width(self.num_entries())
    }

    /// Writes the buffered indices as a data page body (bit-width byte
    /// followed by hybrid RLE) and clears them.
    pub fn write_indices(&mut self, buffer: &mut Vec<u8>) -> Result<()> {
        write_indices(&self.indices, self.num_entries(), buffer)?;
        self.indices.clear();
        Ok(())
    }

    /// Writes the dictionary values as a `PLAIN` dictionary page body.
    pub fn write_dict_page(&self, buffer: &mut Vec<u8>) {
        plain::encode_native(&self.values, buffer);
    }
}

impl<T: NativeType> Default for DictEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A column-chunk-scoped dictionary of byte arrays, stored as a single
/// arena with offsets.
#[derive(Debug)]
pub struct BinaryDictEncoder {
    values: Vec<u8>,
    offsets: Vec<u32>,
    interned: HashMap<Vec<u8>, u32>,
    indices: Vec<u32>,
}

impl BinaryDictEncoder {
    pub fn new() -> Self {
        Self {
            values: vec![],
            offsets: vec![0],
            interned: HashMap::new(),
            indices: vec![],
        }
    }

    /// Interns `value` and buffers its index for the current page.
    pub fn push(&mut self, value: &[u8]) -> Result<u32> {
        let index = match self.interned.get(value) {
            Some(index) => *index,
            None => {
                if self.values.len() + value.len() > u32::MAX as usize {
                    return Err(Error::BufferFull);
                }
                let index = self.interned.len() as u32;
                self.interned.insert(value.to_vec(), index);
                self.values.extend_from_slice(value);
                self.offsets.push(self.values.len() as u32);
                index
            }
        };
        self.indices.push(index);
        Ok(index)
    }

    pub fn num_entries(&self) -> usize {
        self.offsets.len() - 1
    }

    /// The number of bytes the dictionary page will occupy, length
    /// prefixes included.
    pub fn byte_size(&self) -> usize {
        self.values.len() + 4 * self.num_entries()
    }

    pub fn is_full(&self) -> bool {
        self.num_entries() >= MAX_DICT_ENTRIES || self.byte_size() >= MAX_DICT_BYTES
    }

    pub fn bit_width(&self) -> u32 {
        indices_bit_width(self.num_entries())
    }

    pub fn write_indices(&mut self, buffer: &mut Vec<u8>) -> Result<()> {
        write_indices(&self.indices, self.num_entries(), buffer)?;
        self.indices.clear();
        Ok(())
    }

    pub fn write_dict_page(&self, buffer: &mut Vec<u8>) -> Result<()> {
        let values = self.offsets.windows(2).map(|window| {
            &self.values[window[0] as usize..window[1] as usize]
        });
        plain::encode_binary(values, buffer)
    }
}

impl Default for BinaryDictEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// A column-chunk-scoped dictionary of fixed length byte arrays.
#[derive(Debug)]
pub struct FixedLenDictEncoder {
    size: usize,
    values: Vec<u8>,
    interned: HashMap<Vec<u8>, u32>,
    indices: Vec<u32>,
}

impl FixedLenDictEncoder {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            values: vec![],
            interned: HashMap::new(),
            indices: vec![],
        }
    }

    /// Interns `value` and buffers its index for the current page; a value
    /// whose length differs from the declared size is an error.
    pub fn push(&mut self, value: &[u8]) -> Result<u32> {
        if value.len() != self.size {
            return Err(Error::OutOfSpec(format!(
                "fixed length value of {} bytes in a column of length {}",
                value.len(),
                self.size
            )));
        }
        let index = match self.interned.get(value) {
            Some(index) => *index,
            None => {
                let index = self.interned.len() as u32;
                self.interned.insert(value.to_vec(), index);
                self.values.extend_from_slice(value);
                index
            }
        };
        self.indices.push(index);
        Ok(index)
    }

    pub fn num_entries(&self) -> usize {
        self.interned.len()
    }

    pub fn byte_size(&self) -> usize {
        self.values.len()
    }

    pub fn is_full(&self) -> bool {
        self.num_entries() >= MAX_DICT_ENTRIES || self.byte_size() >= MAX_DICT_BYTES
    }

    pub fn bit_width(&self) -> u32 {
        indices_bit_width(self.num_entries())
    }

    pub fn write_indices(&mut self, buffer: &mut Vec<u8>) -> Result<()> {
        write_indices(&self.indices, self.num_entries(), buffer)?;
        self.indices.clear();
        Ok(())
    }

    pub fn write_dict_page(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&self.values);
    }
}
