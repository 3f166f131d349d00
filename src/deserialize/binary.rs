use crate::encoding::hybrid_rle::HybridRleDecoder;
use crate::error::{Error, Result};
use crate::parquet_bridge::Encoding;

use super::utils;

/// An iterator over `PLAIN`-encoded byte arrays: a 4-byte little-endian
/// length followed by that many bytes, repeated `num_values` times.
#[derive(Debug)]
pub struct BinaryIter<'a> {
    values: &'a [u8],
    remaining: usize,
}

impl<'a> BinaryIter<'a> {
    pub fn new(values: &'a [u8], num_values: usize) -> Self {
        Self {
            values,
            remaining: num_values,
        }
    }
}

impl<'a> Iterator for BinaryIter<'a> {
    type Item = Result<&'a [u8]>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.values.len() < 4 {
            self.remaining = 0;
            return Some(Err(Error::BufferUnderrun));
        }
        let length = u32::from_le_bytes(self.values[0..4].try_into().unwrap()) as usize;
        self.values = &self.values[4..];
        if length > self.values.len() {
            self.remaining = 0;
            return Some(Err(Error::BufferUnderrun));
        }
        let result = &self.values[..length];
        self.values = &self.values[length..];
        Some(Ok(result))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// A dictionary page of byte arrays, stored as an arena plus offsets.
#[derive(Debug, PartialEq)]
pub struct BinaryPageDict {
    values: Vec<u8>,
    offsets: Vec<u32>,
}

impl BinaryPageDict {
    /// Reads a `PLAIN` dictionary page of `num_values` byte arrays.
    pub fn try_new(page: &[u8], num_values: usize) -> Result<Self> {
        let mut values = Vec::with_capacity(page.len().saturating_sub(4 * num_values));
        let mut offsets = Vec::with_capacity(num_values + 1);
        offsets.push(0);
        for value in BinaryIter::new(page, num_values) {
            values.extend_from_slice(value?);
            offsets.push(values.len() as u32);
        }
        Ok(Self { values, offsets })
    }

    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn value(&self, index: usize) -> Result<&[u8]> {
        if index + 1 >= self.offsets.len() {
            return Err(Error::OutOfSpec(format!(
                "dictionary index {} beyond a dictionary of {} entries",
                index,
                self.len()
            )));
        }
        Ok(&self.values[self.offsets[index] as usize..self.offsets[index + 1] as usize])
    }
}

#[derive(Debug)]
pub struct Dictionary<'a> {
    indices: HybridRleDecoder<'a>,
    dict: &'a BinaryPageDict,
}

impl<'a> Dictionary<'a> {
    pub fn try_new(values: &'a [u8], dict: &'a BinaryPageDict, num_values: usize) -> Result<Self> {
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

/// The decoding state of the values of a data page of byte arrays.
#[derive(Debug)]
pub enum BinaryValuesDecoder<'a> {
    Plain(BinaryIter<'a>),
    Dictionary(Dictionary<'a>),
}

impl<'a> BinaryValuesDecoder<'a> {
    pub fn try_new(
        values: &'a [u8],
        num_values: usize,
        encoding: Encoding,
        dict: Option<&'a BinaryPageDict>,
    ) -> Result<Self> {
        match (encoding, dict) {
            (Encoding::Plain, _) => Ok(Self::Plain(BinaryIter::new(values, num_values))),
            (Encoding::PlainDictionary | Encoding::RleDictionary, Some(dict)) => {
                Dictionary::try_new(values, dict, num_values).map(Self::Dictionary)
            }
            (Encoding::PlainDictionary | Encoding::RleDictionary, None) => Err(Error::OutOfSpec(
                "dictionary-encoded page without a dictionary".to_string(),
            )),
            (encoding, _) => Err(Error::Unsupported(format!(
                "encoding {:?} for byte arrays",
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

impl<'a> Iterator for BinaryValuesDecoder<'a> {
    type Item = Result<&'a [u8]>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Plain(iter) => iter.next(),
            Self::Dictionary(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::{plain, BinaryDictEncoder};

    #[test]
    fn plain_round_trip() {
        let values: Vec<&[u8]> = vec![b"alpha", b"", b"b"];
        let mut buffer = vec![];
        plain::encode_binary(values.iter().copied(), &mut buffer).unwrap();

        let decoder =
            BinaryValuesDecoder::try_new(&buffer, values.len(), Encoding::Plain, None).unwrap();
        let decoded = decoder.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn truncated_length_prefix() {
        let buffer = [5u8, 0, 0, 0, b'a'];
        let decoder = BinaryValuesDecoder::try_new(&buffer, 1, Encoding::Plain, None).unwrap();
        let result = decoder.collect::<Result<Vec<_>>>();
        assert_eq!(result, Err(Error::BufferUnderrun));
    }

    #[test]
    fn dictionary_round_trip() {
        let values: Vec<&[u8]> = vec![b"spades", b"hearts", b"spades", b"clubs"];

        let mut encoder = BinaryDictEncoder::new();
        for value in &values {
            encoder.push(value).unwrap();
        }
        let mut indices = vec![];
        encoder.write_indices(&mut indices).unwrap();
        let mut dict_page = vec![];
        encoder.write_dict_page(&mut dict_page).unwrap();

        let dict = BinaryPageDict::try_new(&dict_page, encoder.num_entries()).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.value(1).unwrap(), b"hearts");

        let decoder =
            BinaryValuesDecoder::try_new(&indices, values.len(), Encoding::RleDictionary, Some(&dict))
                .unwrap();
        let decoded = decoder.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(decoded, values);
    }
}
