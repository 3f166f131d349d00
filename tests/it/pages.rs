//! End-to-end page round-trips: levels and values encoded into a single
//! v1 page buffer, split back and decoded.
use parquet_codec::deserialize::{
    read_dict_page, BinaryPageDict, BinaryValuesDecoder, BooleanValuesDecoder,
    IntegerValuesDecoder, NativeValuesDecoder,
};
use parquet_codec::encoding::{delta_bitpacked, levels};
use parquet_codec::error::Result;
use parquet_codec::serialize::{plain, BinaryDictEncoder, DictEncoder};
use parquet_codec::Encoding;

/// Encodes an optional flat column into a page buffer, returning it.
fn write_optional_i32(values: &[Option<i32>]) -> Vec<u8> {
    let def_levels = values.iter().map(|value| value.is_some() as u32);
    let non_null = values.iter().filter_map(|value| *value).collect::<Vec<_>>();

    let mut page = vec![];
    levels::encode(&mut page, def_levels, 1).unwrap();
    plain::encode_native(&non_null, &mut page);
    page
}

#[test]
fn optional_column() {
    let values = vec![Some(1), None, Some(3), None, None, Some(-7), Some(0)];
    let page = write_optional_i32(&values);

    let (rep, def, page_values) = levels::split_buffer(&page, 0, 1).unwrap();
    assert!(rep.is_empty());

    let def_levels = levels::decode(def, 1, values.len())
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();
    // the number of levels equals the page's value count, nulls included
    assert_eq!(def_levels.len(), values.len());

    let non_null_count = def_levels.iter().filter(|level| **level == 1).count();
    assert_eq!(non_null_count, 4);

    let decoded =
        NativeValuesDecoder::<i32>::try_new(page_values, non_null_count, Encoding::Plain, None)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

    // re-assemble using the definition levels
    let mut decoded = decoded.into_iter();
    let result = def_levels
        .iter()
        .map(|level| (*level == 1).then(|| decoded.next().unwrap()))
        .collect::<Vec<_>>();
    assert_eq!(result, values);
}

#[test]
fn nested_list_column() {
    // [[0, 1], [], None, [2]] in a column with max_rep = 1, max_def = 3
    let rep_levels = [0u32, 1, 0, 0, 0];
    let def_levels = [3u32, 3, 1, 0, 3];
    let non_null = [0i64, 1, 2];

    let mut page = vec![];
    levels::encode(&mut page, rep_levels.iter().copied(), 1).unwrap();
    levels::encode(&mut page, def_levels.iter().copied(), 3).unwrap();
    plain::encode_native(&non_null, &mut page);

    let (rep, def, page_values) = levels::split_buffer(&page, 1, 3).unwrap();

    let decoded_rep = levels::decode(rep, 1, rep_levels.len())
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();
    assert_eq!(decoded_rep, rep_levels);

    let decoded_def = levels::decode(def, 3, def_levels.len())
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();
    assert_eq!(decoded_def, def_levels);

    let non_null_count = decoded_def.iter().filter(|level| **level == 3).count();
    assert_eq!(non_null_count, non_null.len());

    let decoded =
        NativeValuesDecoder::<i64>::try_new(page_values, non_null_count, Encoding::Plain, None)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
    assert_eq!(decoded, non_null);
}

#[test]
fn dictionary_chunk_lifecycle() {
    // a column chunk of two data pages sharing one dictionary
    let page1 = vec![3i32, 3, 3, 5];
    let page2 = vec![5i32, 7, 3, 7, 7];

    let mut encoder = DictEncoder::<i32>::new();

    let mut page1_bytes = vec![];
    page1.iter().for_each(|value| {
        encoder.push(*value);
    });
    assert!(!encoder.is_full());
    encoder.write_indices(&mut page1_bytes).unwrap();

    let mut page2_bytes = vec![];
    page2.iter().for_each(|value| {
        encoder.push(*value);
    });
    encoder.write_indices(&mut page2_bytes).unwrap();

    // the dictionary is frozen when the chunk closes
    let mut dict_page = vec![];
    encoder.write_dict_page(&mut dict_page);
    assert_eq!(encoder.num_entries(), 3);
    assert_eq!(encoder.bit_width(), 2);

    let dict = read_dict_page::<i32>(&dict_page, encoder.num_entries()).unwrap();

    for (bytes, expected) in [(page1_bytes, page1), (page2_bytes, page2)] {
        let decoded = NativeValuesDecoder::try_new(
            &bytes,
            expected.len(),
            Encoding::RleDictionary,
            Some(dict.as_slice()),
        )
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();
        assert_eq!(decoded, expected);
    }
}

#[test]
fn binary_dictionary_page() {
    let values: Vec<&[u8]> = vec![b"ab", b"cd", b"ab", b"ab", b"ef", b"cd"];

    let mut encoder = BinaryDictEncoder::new();
    for value in &values {
        encoder.push(value).unwrap();
    }
    let mut data_page = vec![];
    encoder.write_indices(&mut data_page).unwrap();
    let mut dict_page = vec![];
    encoder.write_dict_page(&mut dict_page).unwrap();

    let dict = BinaryPageDict::try_new(&dict_page, encoder.num_entries()).unwrap();
    let decoded = BinaryValuesDecoder::try_new(
        &data_page,
        values.len(),
        Encoding::PlainDictionary,
        Some(&dict),
    )
    .unwrap()
    .collect::<Result<Vec<_>>>()
    .unwrap();
    assert_eq!(decoded, values);
}

#[test]
fn boolean_page() {
    let values = (0..100).map(|i| i % 3 == 0).collect::<Vec<_>>();
    let mut page = vec![];
    plain::encode_boolean(&mut page, values.iter().copied()).unwrap();
    assert_eq!(page.len(), 13);

    let decoded = BooleanValuesDecoder::try_new(&page, values.len(), Encoding::Plain)
        .unwrap()
        .collect::<Vec<_>>();
    assert_eq!(decoded, values);
}

#[test]
fn delta_beats_plain_on_monotone_data() {
    let values = (0..1000i64).map(|i| 1_000_000 + i * 3).collect::<Vec<_>>();

    let mut delta = vec![];
    delta_bitpacked::encode(values.iter().copied(), &mut delta);

    let mut plain_buffer = vec![];
    plain::encode_native(&values, &mut plain_buffer);

    assert!(delta.len() < plain_buffer.len());

    let decoded = IntegerValuesDecoder::<i64>::try_new(
        &delta,
        values.len(),
        Encoding::DeltaBinaryPacked,
        None,
    )
    .unwrap()
    .collect::<Result<Vec<_>>>()
    .unwrap();
    assert_eq!(decoded, values);
}
