use crate::encoding::hybrid_rle::HybridRleDecoder;
use crate::error::{Error, Result};
use crate::parquet_bridge::Encoding;

use super::utils;

/// A dictionary page of fixed length byte arrays.
#[derive(Debug, PartialEq)]
pub struct FixedLenPageDict {
    values: Vec<u8>,
    size: usize,
}

impl FixedLenPageDict {
    /// Reads a `PLAIN` dictionary page of `num_values` values of `size`
    /// bytes each.
    pub fn try_new(page: &[u8], size: usize, num_values: usize) -> Result<Self> {
        debug_assert!(size > 0);
        let values = page.get(..size * num_values).ok_or(Error::BufferUnderrun)?;
        Ok(Self {
            values: values.to_vec(),
            size,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len() / self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn value(&self, index: usize) -> Result<&[u8]> {
        self.values
            .get(index * self.size..(index + 1) * self.size)
            .ok_or_else(|| {
                Error::OutOfSpec(format!(
                    "dictionary index {} beyond a dictionary of {} entries",
                    index,
                    self.len()
                ))
            })
    }
}

#[derive(Debug)]
pub struct Dictionary<'a> {
    indices: HybridRleDecoder<'a>,
    dict: &'a FixedLenPageDict,
}

impl<'a> Dictionary<'a> {
    pub fn try_new(values: &'a [u8], dict: &'a FixedLenPageDict, num_values: usize) -> Result<Self> {
        let indices = utils::dict_indices_decoder(values, num_values, dict.len())?;
        Ok(Self { indices, dict })
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }
}

impl<'a> Iterator for Dictionary<'a> {
    type Item = Result<&'a [u8]>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = match self.indices.next()? {
            Ok(index) => index as usize,
            Err(e) => return Some(Err(e)),
        };
        Some(self.dict.value(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

/// The decoding state of the values of a data page of fixed length byte
/// arrays.
#[derive(Debug)]
pub enum FixedLenValuesDecoder<'a> {
    Plain(std::iter::Take<std::slice::ChunksExact<'a, u8>>),
    Dictionary(Dictionary<'a>),
}

impl<'a> FixedLenValuesDecoder<'a> {
    pub fn try_new(
        values: &'a [u8],
        num_values: usize,
        size: usize,
        encoding: Encoding,
        dict: Option<&'a FixedLenPageDict>,
    ) -> Result<Self> {
        match (encoding, dict) {
            (Encoding::Plain, _) => {
                if values.len() < size * num_values {
                    return Err(Error::BufferUnderrun);
                }
                Ok(Self::Plain(values.chunks_exact(size).take(num_values)))
            }
            (Encoding::PlainDictionary | Encoding::RleDictionary, Some(dict)) => {
                Dictionary::try_new(values, dict, num_values).map(Self::Dictionary)
            }
            (Encoding::PlainDictionary | Encoding::RleDictionary, None) => Err(Error::OutOfSpec(
                "dictionary-encoded page without a dictionary".to_string(),
            )),
            (encoding, _) => Err(Error::Unsupported(format!(
                "encoding {:?} for fixed length byte arrays",
                encoding
            ))),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Plain(iter) => iter.size_hint().0,
            Self::Dictionary(iter) => iter.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> Iterator for FixedLenValuesDecoder<'a> {
    type Item = Result<&'a [u8]>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Plain(iter) => iter.next().map(Ok),
            Self::Dictionary(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
