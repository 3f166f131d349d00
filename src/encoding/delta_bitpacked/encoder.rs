use super::super::{bitpacked, ceil8, num_required_bits, uleb128, zigzag_leb128};
use super::{BLOCK_SIZE, MINIBLOCKS_PER_BLOCK, VALUES_PER_MINIBLOCK};

/// Encodes an iterator of `i64` according to parquet's
/// `DELTA_BINARY_PACKED`, with blocks of 128 values split into 4
/// miniblocks of 32. Deltas use wrapping arithmetic so any `i64` sequence
/// round-trips.
pub fn encode<I: Iterator<Item = i64>>(mut iterator: I, buffer: &mut Vec<u8>) {
    let mut container = [0u8; 10];
    let encoded_len = uleb128::encode(BLOCK_SIZE as u64, &mut container);
    buffer.extend_from_slice(&container[..encoded_len]);

    let encoded_len = uleb128::encode(MINIBLOCKS_PER_BLOCK as u64, &mut container);
    buffer.extend_from_slice(&container[..encoded_len]);

    let length = iterator.size_hint().1.unwrap();
    let encoded_len = uleb128::encode(length as u64, &mut container);
    buffer.extend_from_slice(&container[..encoded_len]);

    let first_value = match iterator.next() {
        Some(value) => value,
        None => {
            // no values: the header carries a zero first value and no blocks
            let (container, encoded_len) = zigzag_leb128::encode(0);
            buffer.extend_from_slice(&container[..encoded_len]);
            return;
        }
    };
    let (container, encoded_len) = zigzag_leb128::encode(first_value);
    buffer.extend_from_slice(&container[..encoded_len]);

    let mut deltas = [0i64; BLOCK_SIZE];
    let mut prev = first_value;
    loop {
        let mut count = 0;
        for (delta, value) in deltas.iter_mut().zip(&mut iterator) {
            *delta = value.wrapping_sub(prev);
            prev = value;
            count += 1;
        }
        if count == 0 {
            break;
        }
        encode_block(&deltas[..count], buffer);
        if count < BLOCK_SIZE {
            break;
        }
    }
}

fn encode_block(deltas: &[i64], buffer: &mut Vec<u8>) {
    let min_delta = *deltas.iter().min().unwrap();

    // <min delta> <list of bitwidths of miniblocks> <miniblocks>
    let (container, encoded_len) = zigzag_leb128::encode(min_delta);
    buffer.extend_from_slice(&container[..encoded_len]);

    let mut relative = [0u64; BLOCK_SIZE];
    deltas
        .iter()
        .zip(relative.iter_mut())
        .for_each(|(delta, relative)| *relative = delta.wrapping_sub(min_delta) as u64);

    let mut widths = [0u8; MINIBLOCKS_PER_BLOCK];
    for (miniblock, width) in relative[..deltas.len()]
        .chunks(VALUES_PER_MINIBLOCK)
        .zip(widths.iter_mut())
    {
        *width = miniblock
            .iter()
            .map(|relative| num_required_bits(*relative) as u8)
            .max()
            .unwrap();
    }
    buffer.extend_from_slice(&widths);

    for (miniblock, width) in relative[..deltas.len()]
        .chunks(VALUES_PER_MINIBLOCK)
        .zip(widths.iter())
    {
        let num_bits = *width as usize;
        if num_bits > 0 {
            // pad the trailing miniblock with zeros
            let mut values = [0u64; VALUES_PER_MINIBLOCK];
            values[..miniblock.len()].copy_from_slice(miniblock);

            let start = buffer.len();
            let bytes_needed = start + ceil8(VALUES_PER_MINIBLOCK * num_bits);
            buffer.resize(bytes_needed, 0);
            bitpacked::encode(&values, num_bits, &mut buffer[start..]);
        }
    }
}
