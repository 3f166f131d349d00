use super::super::{ceil8, uleb128};
use super::HybridEncoded;
use crate::error::{Error, Result};

/// An iterator over the runs of an RLE/bit-packed hybrid slice, yielding
/// [`HybridEncoded`] items. Malformed headers and truncated runs surface
/// as errors.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    values: &'a [u8],
    num_bits: u32,
}

impl<'a> Decoder<'a> {
    pub fn new(values: &'a [u8], num_bits: u32) -> Self {
        Self { values, num_bits }
    }

    /// Returns the number of bits being used by this decoder.
    #[inline]
    pub fn num_bits(&self) -> u32 {
        self.num_bits
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = Result<HybridEncoded<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.values.is_empty() {
            return None;
        }
        let (indicator, consumed) = match uleb128::decode(self.values) {
            Ok(x) => x,
            Err(e) => {
                self.values = &[];
                return Some(Err(e));
            }
        };
        self.values = &self.values[consumed..];
        if indicator >> 1 == 0 {
            self.values = &[];
            return Some(Err(Error::OutOfSpec("zero-length run".to_string())));
        }
        if indicator & 1 == 1 {
            // is bitpacked
            let num_groups = (indicator >> 1) as usize;
            let bytes = num_groups * self.num_bits as usize;
            if bytes > self.values.len() {
                self.values = &[];
                return Some(Err(Error::BufferUnderrun));
            }
            let result = HybridEncoded::Bitpacked(&self.values[..bytes]);
            self.values = &self.values[bytes..];
            Some(Ok(result))
        } else {
            // is rle
            let run_length = (indicator >> 1) as usize;
            // repeated-value := value that is repeated, using a fixed-width
            // of round-up-to-next-byte(bit-width)
            let rle_bytes = ceil8(self.num_bits as usize);
            if rle_bytes > self.values.len() {
                self.values = &[];
                return Some(Err(Error::BufferUnderrun));
            }
            let result = HybridEncoded::Rle(&self.values[..rle_bytes], run_length);
            self.values = &self.values[rle_bytes..];
            Some(Ok(result))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::super::super::bitpacked;

    #[test]
    fn basics_1() {
        let bit_width = 1u32;
        let length = 5;
        let values = [0b00000011u8, 0b00001011];

        let mut decoder = Decoder::new(&values, bit_width);

        let run = decoder.next().unwrap().unwrap();

        if let HybridEncoded::Bitpacked(values) = run {
            assert_eq!(values, &[0b00001011]);
            let result = bitpacked::Decoder::<u32>::new(values, bit_width as usize, length)
                .collect::<Vec<_>>();
            assert_eq!(result, &[1, 1, 0, 1, 0]);
        } else {
            panic!()
        };
    }

    #[test]
    fn rle_run() {
        let bit_width = 1;
        let length = 8;
        let values = [0b00010000u8, 0b00000001];

        let mut decoder = Decoder::new(&values, bit_width);

        let run = decoder.next().unwrap().unwrap();

        if let HybridEncoded::Rle(values, items) = run {
            assert_eq!(values, &[0b00000001]);
            assert_eq!(items, length);
        } else {
            panic!()
        };
    }

    #[test]
    fn zero_length_run_is_malformed() {
        let values = [0b00000000u8, 0b00000001];
        let mut decoder = Decoder::new(&values, 1);
        assert!(matches!(decoder.next(), Some(Err(Error::OutOfSpec(_)))));
        assert!(decoder.next().is_none());
    }

    #[test]
    fn truncated_run_is_malformed() {
        // bitpacked header declaring 2 groups of 8 at width 2 (4 bytes), 1 byte present
        let values = [0b00000101u8, 0xFF];
        let mut decoder = Decoder::new(&values, 2);
        assert_eq!(decoder.next(), Some(Err(Error::BufferUnderrun)));
    }
}
