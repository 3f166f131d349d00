use super::super::{bitpacked, ceil8, uleb128, zigzag_leb128};
use crate::error::{Error, Result};

#[derive(Debug)]
struct Block<'a> {
    // this is the minimum delta that must be added to every value.
    min_delta: i64,
    bitwidths: &'a [u8],
    values: &'a [u8],
    values_per_mini_block: usize,
    remaining: usize,     // number of elements
    current_index: usize, // invariant: < values_per_mini_block
    // None represents a relative delta of zero, in which case there is no miniblock.
    current_miniblock: Option<bitpacked::Decoder<'a, u64>>,
}

impl<'a> Block<'a> {
    fn try_new(
        mut values: &'a [u8],
        num_mini_blocks: usize,
        values_per_mini_block: usize,
        length: usize,
    ) -> Result<(Self, &'a [u8])> {
        let length = std::cmp::min(length, num_mini_blocks * values_per_mini_block);

        let (min_delta, consumed) = zigzag_leb128::decode(values)?;
        values = &values[consumed..];

        if num_mini_blocks > values.len() {
            return Err(Error::BufferUnderrun);
        }
        let bitwidths = &values[..num_mini_blocks];
        values = &values[num_mini_blocks..];
        if let Some(width) = bitwidths.iter().find(|width| **width > 64) {
            return Err(Error::OutOfSpec(format!(
                "miniblock bit width {} exceeds the maximum of 64",
                width
            )));
        }

        // the bytes of this block: one miniblock per started group of values
        let num_used_mini_blocks = (length + values_per_mini_block - 1) / values_per_mini_block;
        let block_bytes: usize = bitwidths
            .iter()
            .take(num_used_mini_blocks)
            .map(|width| ceil8(values_per_mini_block * *width as usize))
            .sum();
        if block_bytes > values.len() {
            return Err(Error::BufferUnderrun);
        }
        let remainder = &values[block_bytes..];
        let values = &values[..block_bytes];

        let mut block = Block {
            min_delta,
            bitwidths,
            values,
            values_per_mini_block,
            remaining: length,
            current_index: 0,
            current_miniblock: None,
        };

        // set up the first mini-block
        block.advance_miniblock();

        Ok((block, remainder))
    }

    fn advance_miniblock(&mut self) {
        let num_bits = self.bitwidths[0] as usize;
        self.bitwidths = &self.bitwidths[1..];

        self.current_miniblock = if num_bits > 0 {
            let length = std::cmp::min(self.remaining, self.values_per_mini_block);

            let miniblock_length = ceil8(self.values_per_mini_block * num_bits);
            let (miniblock, remainder) = self.values.split_at(miniblock_length);

            self.values = remainder;

            Some(bitpacked::Decoder::new(miniblock, num_bits, length))
        } else {
            None
        };
        self.current_index = 0;
    }
}

impl<'a> Iterator for Block<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let relative = self
            .current_miniblock
            .as_mut()
            .and_then(|x| x.next())
            .unwrap_or(0);
        let result = self.min_delta.wrapping_add(relative as i64);
        self.current_index += 1;
        self.remaining -= 1;

        if self.remaining > 0 && self.current_index == self.values_per_mini_block {
            self.advance_miniblock();
        }

        Some(result)
    }
}

/// Decoder of parquet's `DELTA_BINARY_PACKED`, an [`Iterator`] of `i64`.
#[derive(Debug)]
pub struct Decoder<'a> {
    num_mini_blocks: usize,
    values_per_mini_block: usize,
    total_count: usize, // remaining number of elements
    next_value: i64,    // the cumulative value
    values: &'a [u8],
    current_block: Option<Block<'a>>,
}

impl<'a> Decoder<'a> {
    pub fn try_new(mut values: &'a [u8]) -> Result<Self> {
        let (block_size, consumed) = uleb128::decode(values)?;
        values = &values[consumed..];
        if block_size == 0 || block_size % 128 != 0 {
            return Err(Error::OutOfSpec(format!(
                "block size {} is not a non-zero multiple of 128",
                block_size
            )));
        }

        let (num_mini_blocks, consumed) = uleb128::decode(values)?;
        let num_mini_blocks = num_mini_blocks as usize;
        values = &values[consumed..];
        if num_mini_blocks == 0 || block_size as usize % num_mini_blocks != 0 {
            return Err(Error::OutOfSpec(format!(
                "{} miniblocks do not evenly divide a block of {}",
                num_mini_blocks, block_size
            )));
        }

        let (total_count, consumed) = uleb128::decode(values)?;
        let total_count = total_count as usize;
        values = &values[consumed..];

        let (first_value, consumed) = zigzag_leb128::decode(values)?;
        values = &values[consumed..];

        let values_per_mini_block = block_size as usize / num_mini_blocks;
        if values_per_mini_block % 8 != 0 {
            return Err(Error::OutOfSpec(format!(
                "miniblock of {} values is not a multiple of 8",
                values_per_mini_block
            )));
        }

        let current_block = if total_count > 1 {
            let (block, remainder) =
                Block::try_new(values, num_mini_blocks, values_per_mini_block, total_count - 1)?;
            values = remainder;
            Some(block)
        } else {
            None
        };

        Ok(Self {
            num_mini_blocks,
            values_per_mini_block,
            total_count,
            next_value: first_value,
            values,
            current_block,
        })
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = Result<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.total_count == 0 {
            return None;
        }
        self.total_count -= 1;
        let result = self.next_value;

        if self.total_count > 0 {
            let delta = match self.current_block.as_mut().and_then(|block| block.next()) {
                Some(delta) => delta,
                None => {
                    // load the next block
                    let block = Block::try_new(
                        self.values,
                        self.num_mini_blocks,
                        self.values_per_mini_block,
                        self.total_count,
                    );
                    match block {
                        Ok((mut block, remainder)) => {
                            self.values = remainder;
                            // never empty: `total_count > 0`
                            let delta = block.next().unwrap();
                            self.current_block = Some(block);
                            delta
                        }
                        Err(e) => {
                            self.total_count = 0;
                            return Some(Err(e));
                        }
                    }
                }
            };
            self.next_value = self.next_value.wrapping_add(delta);
        }
        Some(Ok(result))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.total_count, Some(self.total_count))
    }
}
