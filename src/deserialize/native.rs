use crate::encoding::hybrid_rle::HybridRleDecoder;
use crate::error::{Error, Result};
use crate::parquet_bridge::Encoding;
use crate::types::{self, NativeType};

use super::utils;

/// Reads a `PLAIN` dictionary page of `num_values` native values.
pub fn read_dict_page<T: NativeType>(values: &[u8], num_values: usize) -> Result<Vec<T>> {
    let typed_size = num_values * std::mem::size_of::<T>();
    let values = values.get(..typed_size).ok_or(Error::BufferUnderrun)?;
    Ok(values
        .chunks_exact(std::mem::size_of::<T>())
        .map(types::decode)
        .collect())
}

pub type Casted<'a, T> =
    std::iter::Map<std::slice::ChunksExact<'a, u8>, for<'b> fn(&'b [u8]) -> T>;

fn native_cast<T: NativeType>(values: &[u8], num_values: usize) -> Result<Casted<T>> {
    let size = std::mem::size_of::<T>();
    let values = values.get(..num_values * size).ok_or(Error::BufferUnderrun)?;
    Ok(values.chunks_exact(size).map(types::decode::<T>))
}

/// The indices of a dictionary-encoded page resolved against the
/// dictionary; fails on an index beyond the dictionary.
#[derive(Debug)]
pub struct Dictionary<'a, T: NativeType> {
    indices: HybridRleDecoder<'a>,
    dict: &'a [T],
}

impl<'a, T: NativeType> Dictionary<'a, T> {
    pub fn try_new(values: &'a [u8], dict: &'a [T], num_values: usize) -> Result<Self> {
        let indices = utils::dict_indices_decoder(values, num_values, dict.len())?;
        Ok(Self { indices, dict })
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }
}

impl<'a, T: NativeType> Iterator for Dictionary<'a, T> {
    type Item = Result<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = match self.indices.next()? {
            Ok(index) => index as usize,
            Err(e) => return Some(Err(e)),
        };
        Some(self.dict.get(index).copied().ok_or_else(|| {
            Error::OutOfSpec(format!(
                "dictionary index {} beyond a dictionary of {} entries",
                index,
                self.dict.len()
            ))
        }))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

/// The decoding state of the values of a data page of a fixed-size native
/// type.
#[derive(Debug)]
pub enum NativeValuesDecoder<'a, T: NativeType> {
    Plain(Casted<'a, T>),
    Dictionary(Dictionary<'a, T>),
}

impl<'a, T: NativeType> NativeValuesDecoder<'a, T> {
    /// Returns a decoder of `num_values` values from the values slice of a
    /// page; dictionary-encoded pages resolve against `dict`.
    pub fn try_new(
        values: &'a [u8],
        num_values: usize,
        encoding: Encoding,
        dict: Option<&'a [T]>,
    ) -> Result<Self> {
        match (encoding, dict) {
            (Encoding::Plain, _) => native_cast(values, num_values).map(Self::Plain),
            (Encoding::PlainDictionary | Encoding::RleDictionary, Some(dict)) => {
                Dictionary::try_new(values, dict, num_values).map(Self::Dictionary)
            }
            (Encoding::PlainDictionary | Encoding::RleDictionary, None) => Err(Error::OutOfSpec(
                "dictionary-encoded page without a dictionary".to_string(),
            )),
            (encoding, _) => Err(Error::Unsupported(format!(
                "encoding {:?} for native type {}",
                encoding,
                std::any::type_name::<T>()
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

impl<'a, T: NativeType> Iterator for NativeValuesDecoder<'a, T> {
    type Item = Result<T>;

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
