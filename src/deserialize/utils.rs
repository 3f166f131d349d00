use crate::encoding::hybrid_rle::HybridRleDecoder;
use crate::error::{Error, Result};

/// Returns a decoder over the indices of a dictionary-encoded data page:
/// a single bit-width byte followed by hybrid RLE data at that width.
/// Width 0 is legal only for a single-entry dictionary.
pub(super) fn dict_indices_decoder(
    values: &[u8],
    num_values: usize,
    dict_size: usize,
) -> Result<HybridRleDecoder> {
    let bit_width = *values.first().ok_or(Error::BufferUnderrun)?;
    if bit_width > 32 {
        return Err(Error::OutOfSpec(format!(
            "dictionary index bit width {} exceeds the maximum of 32",
            bit_width
        )));
    }
    if bit_width == 0 && dict_size != 1 {
        return Err(Error::OutOfSpec(
            "a dictionary index bit width of 0 requires a single-entry dictionary".to_string(),
        ));
    }
    HybridRleDecoder::try_new(&values[1..], bit_width as u32, num_values)
}
