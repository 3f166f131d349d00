//! Randomized round-trip properties of the codecs.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use parquet_codec::encoding::bitstream::{BitReader, BitWriter};
use parquet_codec::encoding::{ceil8, delta_bitpacked, hybrid_rle, uleb128, zigzag_leb128};
use parquet_codec::error::Result;

#[test]
fn bitstream_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    let values = (0..10_000)
        .map(|_| {
            let num_bits = rng.gen_range(1..=32usize);
            let mask = if num_bits == 32 {
                u32::MAX
            } else {
                (1u32 << num_bits) - 1
            };
            (rng.gen::<u32>() & mask, num_bits)
        })
        .collect::<Vec<_>>();

    let total_bits: usize = values.iter().map(|(_, num_bits)| num_bits).sum();

    let mut buffer = vec![0u8; ceil8(total_bits)];
    let mut writer = BitWriter::new(&mut buffer);
    for (value, num_bits) in &values {
        writer.put_bits(*value as u64, *num_bits).unwrap();
    }
    writer.flush(false).unwrap();
    assert_eq!(writer.bytes_written(), ceil8(total_bits));

    let mut reader = BitReader::new(&buffer);
    for (value, num_bits) in &values {
        assert_eq!(reader.get_bits(*num_bits).unwrap(), *value);
    }
}

#[test]
fn vlq_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut container = [0u8; 10];
    for _ in 0..10_000 {
        let value = rng.gen::<u32>();
        let used = uleb128::encode(value as u64, &mut container);
        assert!(used <= 5);
        let (decoded, consumed) = uleb128::decode(&container[..used]).unwrap();
        assert_eq!(decoded, value as u64);
        assert_eq!(consumed, used);
    }
}

#[test]
fn zigzag_involution() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10_000 {
        let value = rng.gen::<i32>() as i64;
        let (container, used) = zigzag_leb128::encode(value);
        let (decoded, consumed) = zigzag_leb128::decode(&container[..used]).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(consumed, used);
    }
}

#[test]
fn hybrid_rle_round_trip() {
    let mut rng = StdRng::seed_from_u64(13);
    for num_bits in 1..=32u32 {
        let mask = if num_bits == 32 {
            u32::MAX
        } else {
            (1u32 << num_bits) - 1
        };
        // runs of random lengths of either a repeated or random values
        let mut values = vec![];
        while values.len() < 1000 {
            let length = rng.gen_range(1..100usize);
            if rng.gen_bool(0.5) {
                let value = rng.gen::<u32>() & mask;
                values.extend(std::iter::repeat(value).take(length));
            } else {
                values.extend((0..length).map(|_| rng.gen::<u32>() & mask));
            }
        }

        let mut buffer = vec![];
        hybrid_rle::encode(&mut buffer, values.iter().copied(), num_bits).unwrap();

        let decoded = hybrid_rle::HybridRleDecoder::try_new(&buffer, num_bits, values.len())
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(decoded, values);
    }
}

#[test]
fn rle_is_chosen_for_constant_runs() {
    // an all-equal sequence encodes into a header plus a single value
    for (length, num_bits) in [(8usize, 1u32), (100, 7), (1 << 16, 20)] {
        let mut buffer = vec![];
        hybrid_rle::encode(&mut buffer, std::iter::repeat(5).take(length), num_bits).unwrap();

        let mut header = [0u8; 10];
        let header_len = uleb128::encode((length as u64) << 1, &mut header);
        assert_eq!(buffer.len(), header_len + ceil8(num_bits as usize));
    }
}

#[test]
fn delta_round_trip() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..20 {
        let length = rng.gen_range(1..1000usize);
        let values = (0..length)
            .map(|_| rng.gen::<i64>() >> rng.gen_range(0..64))
            .collect::<Vec<_>>();

        let mut buffer = vec![];
        delta_bitpacked::encode(values.iter().copied(), &mut buffer);

        let decoded = delta_bitpacked::Decoder::try_new(&buffer)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(decoded, values);
    }
}

#[test]
fn level_stream_counts() {
    use parquet_codec::encoding::levels;

    let mut rng = StdRng::seed_from_u64(19);
    let max_def = 3i16;
    let def_levels = (0..500)
        .map(|_| rng.gen_range(0..=max_def as u32))
        .collect::<Vec<_>>();

    let mut buffer = vec![];
    levels::encode(&mut buffer, def_levels.iter().copied(), max_def).unwrap();

    let decoded = levels::decode(&buffer[4..], max_def, def_levels.len())
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();
    assert_eq!(decoded, def_levels);

    // levels = values + nulls: entries at max_def are the non-null values
    let non_null = decoded.iter().filter(|level| **level == max_def as u32).count();
    let nulls = decoded.iter().filter(|level| **level != max_def as u32).count();
    assert_eq!(non_null + nulls, def_levels.len());
}

#[test]
fn dictionary_bit_width_tracks_size() {
    use parquet_codec::serialize::DictEncoder;

    let mut encoder = DictEncoder::<i64>::new();
    encoder.push(0);
    assert_eq!(encoder.bit_width(), 1);
    for value in 1..4i64 {
        encoder.push(value);
    }
    assert_eq!(encoder.bit_width(), 2);
    for value in 4..256i64 {
        encoder.push(value);
    }
    assert_eq!(encoder.bit_width(), 8);
    encoder.push(256);
    assert_eq!(encoder.bit_width(), 9);
}
