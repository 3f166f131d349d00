use seq_macro::seq;

use super::super::ceil8;
use super::PACK_LENGTH;

/// Packs 32 values, each `NUM_BITS` wide, LSB-first into `packed`.
fn pack_values<const NUM_BITS: usize>(unpacked: &[u32; PACK_LENGTH], packed: &mut [u8]) {
    let mask = if NUM_BITS == 32 {
        u32::MAX
    } else {
        (1u32 << NUM_BITS) - 1
    };
    let mut bit = 0usize;
    for &value in unpacked {
        let start = bit / 8;
        let end = ceil8(bit + NUM_BITS);
        let mut word = [0u8; 8];
        word[..end - start].copy_from_slice(&packed[start..end]);
        let word = u64::from_le_bytes(word) | (u64::from(value & mask) << (bit % 8));
        packed[start..end].copy_from_slice(&word.to_le_bytes()[..end - start]);
        bit += NUM_BITS;
    }
}

/// A 64-bit value can straddle 9 bytes, so the window is 128 bits wide.
fn pack_values64<const NUM_BITS: usize>(unpacked: &[u64; PACK_LENGTH], packed: &mut [u8]) {
    let mask = if NUM_BITS == 64 {
        u64::MAX
    } else {
        (1u64 << NUM_BITS) - 1
    };
    let mut bit = 0usize;
    for &value in unpacked {
        let start = bit / 8;
        let end = ceil8(bit + NUM_BITS);
        let mut word = [0u8; 16];
        word[..end - start].copy_from_slice(&packed[start..end]);
        let word = u128::from_le_bytes(word) | (u128::from(value & mask) << (bit % 8));
        packed[start..end].copy_from_slice(&word.to_le_bytes()[..end - start]);
        bit += NUM_BITS;
    }
}

/// Packs a group of 32 `u32` into `ceil8(32 * num_bits)` bytes of `packed`.
/// # Panics
/// Panics iff `num_bits > 32` or `packed` is too small.
pub fn pack32(unpacked: &[u32; PACK_LENGTH], packed: &mut [u8], num_bits: usize) {
    let bytes = ceil8(PACK_LENGTH * num_bits);
    assert!(packed.len() >= bytes);
    packed[..bytes].iter_mut().for_each(|byte| *byte = 0);
    seq!(N in 1..=32 {
        match num_bits {
            0 => {}
            #(N => pack_values::<N>(unpacked, packed),)*
            _ => unreachable!("num_bits must be <= 32"),
        }
    });
}

/// Packs a group of 32 `u64` into `ceil8(32 * num_bits)` bytes of `packed`.
/// # Panics
/// Panics iff `num_bits > 64` or `packed` is too small.
pub fn pack64(unpacked: &[u64; PACK_LENGTH], packed: &mut [u8], num_bits: usize) {
    let bytes = ceil8(PACK_LENGTH * num_bits);
    assert!(packed.len() >= bytes);
    packed[..bytes].iter_mut().for_each(|byte| *byte = 0);
    seq!(N in 1..=64 {
        match num_bits {
            0 => {}
            #(N => pack_values64::<N>(unpacked, packed),)*
            _ => unreachable!("num_bits must be <= 64"),
        }
    });
}
