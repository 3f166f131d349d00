use seq_macro::seq;

use super::super::ceil8;
use super::PACK_LENGTH;

/// Unpacks 32 values, each `NUM_BITS` wide, LSB-first from `packed`.
fn unpack_values<const NUM_BITS: usize>(packed: &[u8], unpacked: &mut [u32; PACK_LENGTH]) {
    let mask = if NUM_BITS == 32 {
        u32::MAX
    } else {
        (1u32 << NUM_BITS) - 1
    };
    let mut bit = 0usize;
    for value in unpacked.iter_mut() {
        let start = bit / 8;
        let end = ceil8(bit + NUM_BITS);
        let mut word = [0u8; 8];
        word[..end - start].copy_from_slice(&packed[start..end]);
        *value = (u64::from_le_bytes(word) >> (bit % 8)) as u32 & mask;
        bit += NUM_BITS;
    }
}

fn unpack_values64<const NUM_BITS: usize>(packed: &[u8], unpacked: &mut [u64; PACK_LENGTH]) {
    let mask = if NUM_BITS == 64 {
        u64::MAX
    } else {
        (1u64 << NUM_BITS) - 1
    };
    let mut bit = 0usize;
    for value in unpacked.iter_mut() {
        let start = bit / 8;
        let end = ceil8(bit + NUM_BITS);
        let mut word = [0u8; 16];
        word[..end - start].copy_from_slice(&packed[start..end]);
        *value = (u128::from_le_bytes(word) >> (bit % 8)) as u64 & mask;
        bit += NUM_BITS;
    }
}

/// Unpacks a group of 32 `u32` from `ceil8(32 * num_bits)` bytes of `packed`.
/// # Panics
/// Panics iff `num_bits > 32` or `packed` is too small.
pub fn unpack32(packed: &[u8], unpacked: &mut [u32; PACK_LENGTH], num_bits: usize) {
    assert!(packed.len() >= ceil8(PACK_LENGTH * num_bits));
    seq!(N in 1..=32 {
        match num_bits {
            0 => unpacked.fill(0),
            #(N => unpack_values::<N>(packed, unpacked),)*
            _ => unreachable!("num_bits must be <= 32"),
        }
    });
}

/// Unpacks a group of 32 `u64` from `ceil8(32 * num_bits)` bytes of `packed`.
/// # Panics
/// Panics iff `num_bits > 64` or `packed` is too small.
pub fn unpack64(packed: &[u8], unpacked: &mut [u64; PACK_LENGTH], num_bits: usize) {
    assert!(packed.len() >= ceil8(PACK_LENGTH * num_bits));
    seq!(N in 1..=64 {
        match num_bits {
            0 => unpacked.fill(0),
            #(N => unpack_values64::<N>(packed, unpacked),)*
            _ => unreachable!("num_bits must be <= 64"),
        }
    });
}
