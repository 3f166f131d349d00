use crate::encoding::hybrid_rle::BitmapIter;
use crate::error::{Error, Result};
use crate::parquet_bridge::Encoding;

/// The decoding state of the values of a data page of booleans; `PLAIN`
/// only, one bit per value, LSB-first.
#[derive(Debug)]
pub struct BooleanValuesDecoder<'a> {
    values: BitmapIter<'a>,
}

impl<'a> BooleanValuesDecoder<'a> {
    pub fn try_new(values: &'a [u8], num_values: usize, encoding: Encoding) -> Result<Self> {
        if encoding != Encoding::Plain {
            return Err(Error::Unsupported(format!(
                "encoding {:?} for boolean type",
                encoding
            )));
        }
        if num_values > values.len() * 8 {
            return Err(Error::BufferUnderrun);
        }
        Ok(Self {
            values: BitmapIter::new(values, 0, num_values),
        })
    }

    pub fn len(&self) -> usize {
        self.values.size_hint().0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> Iterator for BooleanValuesDecoder<'a> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}
