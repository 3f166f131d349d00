use crate::encoding::delta_bitpacked;
use crate::error::Result;
use crate::parquet_bridge::Encoding;
use crate::types::NativeType;

use super::native::NativeValuesDecoder;

/// Narrowing of a decoded `i64` into the column's native integer type.
pub trait AsNative<T: NativeType> {
    fn as_(self) -> T;
}

impl AsNative<i32> for i64 {
    #[inline]
    fn as_(self) -> i32 {
        self as i32
    }
}

impl AsNative<i64> for i64 {
    #[inline]
    fn as_(self) -> i64 {
        self
    }
}

/// The decoding state of the values of a data page of an integer type
/// (i32 or i64); the native encodings plus `DELTA_BINARY_PACKED`.
#[derive(Debug)]
pub enum IntegerValuesDecoder<'a, T>
where
    T: NativeType,
    i64: AsNative<T>,
{
    Common(NativeValuesDecoder<'a, T>),
    DeltaBinaryPacked(std::iter::Take<delta_bitpacked::Decoder<'a>>),
}

impl<'a, T> IntegerValuesDecoder<'a, T>
where
    T: NativeType,
    i64: AsNative<T>,
{
    pub fn try_new(
        values: &'a [u8],
        num_values: usize,
        encoding: Encoding,
        dict: Option<&'a [T]>,
    ) -> Result<Self> {
        match encoding {
            Encoding::DeltaBinaryPacked => Ok(Self::DeltaBinaryPacked(
                delta_bitpacked::Decoder::try_new(values)?.take(num_values),
            )),
            _ => NativeValuesDecoder::try_new(values, num_values, encoding, dict).map(Self::Common),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Common(state) => state.len(),
            Self::DeltaBinaryPacked(state) => state.size_hint().0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T> Iterator for IntegerValuesDecoder<'a, T>
where
    T: NativeType,
    i64: AsNative<T>,
{
    type Item = Result<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Common(state) => state.next(),
            Self::DeltaBinaryPacked(state) => {
                Some(state.next()?.map(|value| AsNative::<T>::as_(value)))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
