use std::io::Write;

use super::super::{bitpacked, ceil8, uleb128};
use crate::error::Result;

/// RLE-hybrid encoding of `u32`.
///
/// Runs of 8 or more identical values become RLE runs; everything else
/// accumulates into bit-packed runs in groups of 8, the trailing partial
/// group zero-padded to a full one. Empty input writes nothing.
pub fn encode<W: Write, I: Iterator<Item = u32>>(
    writer: &mut W,
    iterator: I,
    num_bits: u32,
) -> Result<()> {
    let mut encoder = RunEncoder::new(writer, num_bits);
    for value in iterator {
        encoder.push(value)?;
    }
    encoder.finish()
}

struct RunEncoder<'a, W: Write> {
    writer: &'a mut W,
    num_bits: u32,
    // complete groups of 8 awaiting a bit-packed run; invariant: len % 8 == 0
    literal: Vec<u32>,
    buffered: [u32; 8],
    num_buffered: usize,
    // the trailing run of equal values; its values are also in `buffered`
    // until the run is long enough to stand on its own
    current: u32,
    repeat_count: usize,
}

impl<'a, W: Write> RunEncoder<'a, W> {
    fn new(writer: &'a mut W, num_bits: u32) -> Self {
        debug_assert!((1..=32).contains(&num_bits));
        Self {
            writer,
            num_bits,
            literal: vec![],
            buffered: [0; 8],
            num_buffered: 0,
            current: 0,
            repeat_count: 0,
        }
    }

    fn push(&mut self, value: u32) -> Result<()> {
        debug_assert!(self.num_bits == 32 || value >> self.num_bits == 0);
        if self.repeat_count > 0 && value == self.current {
            self.repeat_count += 1;
            if self.repeat_count > 8 {
                // continuation of a committed rle run; not buffered
                return Ok(());
            }
        } else {
            if self.repeat_count >= 8 {
                self.flush_rle()?;
            }
            self.repeat_count = 1;
            self.current = value;
        }
        self.buffered[self.num_buffered] = value;
        self.num_buffered += 1;
        if self.num_buffered == 8 {
            self.flush_group()?;
        }
        Ok(())
    }

    /// Handles a full buffered group: either it belongs to the growing rle
    /// run, or it moves to the pending bit-packed values.
    fn flush_group(&mut self) -> Result<()> {
        if self.repeat_count >= 8 {
            self.num_buffered = 0;
            return Ok(());
        }
        self.literal.extend_from_slice(&self.buffered[..self.num_buffered]);
        self.num_buffered = 0;
        // these values are spoken for; a run can only restart from scratch
        self.repeat_count = 0;
        Ok(())
    }

    fn flush_rle(&mut self) -> Result<()> {
        self.flush_literal()?;
        let mut container = [0u8; 10];
        let used = uleb128::encode((self.repeat_count as u64) << 1, &mut container);
        self.writer.write_all(&container[..used])?;
        let value_bytes = ceil8(self.num_bits as usize);
        self.writer
            .write_all(&self.current.to_le_bytes()[..value_bytes])?;
        self.repeat_count = 0;
        Ok(())
    }

    fn flush_literal(&mut self) -> Result<()> {
        if self.literal.is_empty() {
            return Ok(());
        }
        // only the trailing group can be partial; pad it with zeros
        while self.literal.len() % 8 != 0 {
            self.literal.push(0);
        }
        let num_groups = self.literal.len() / 8;
        let mut container = [0u8; 10];
        let used = uleb128::encode(((num_groups as u64) << 1) | 1, &mut container);
        self.writer.write_all(&container[..used])?;

        let mut compressed = vec![0u8; num_groups * self.num_bits as usize];
        bitpacked::encode(&self.literal, self.num_bits as usize, &mut compressed);
        self.writer.write_all(&compressed)?;
        self.literal.clear();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.repeat_count >= 8 {
            self.num_buffered = 0;
            self.flush_rle()?;
        } else {
            self.literal.extend_from_slice(&self.buffered[..self.num_buffered]);
            self.num_buffered = 0;
            self.repeat_count = 0;
        }
        self.flush_literal()
    }
}
