// Bridges enums from thrift-generated code to idiomatic rust enums.
use parquet_format_safe::CompressionCodec;
use parquet_format_safe::Encoding as ParquetEncoding;
use parquet_format_safe::FieldRepetitionType;

use crate::error::Error;
use crate::schema::PhysicalType;

/// The repetition of a parquet field
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum Repetition {
    /// When the field has no null values
    Required,
    /// When the field may have null values
    Optional,
    /// When the field may be repeated (list field)
    Repeated,
}

impl TryFrom<FieldRepetitionType> for Repetition {
    type Error = Error;

    fn try_from(repetition: FieldRepetitionType) -> Result<Self, Self::Error> {
        Ok(match repetition {
            FieldRepetitionType::REQUIRED => Repetition::Required,
            FieldRepetitionType::OPTIONAL => Repetition::Optional,
            FieldRepetitionType::REPEATED => Repetition::Repeated,
            _ => return Err(Error::OutOfSpec("Thrift out of range".to_string())),
        })
    }
}

impl From<Repetition> for FieldRepetitionType {
    fn from(repetition: Repetition) -> Self {
        match repetition {
            Repetition::Required => FieldRepetitionType::REQUIRED,
            Repetition::Optional => FieldRepetitionType::OPTIONAL,
            Repetition::Repeated => FieldRepetitionType::REPEATED,
        }
    }
}

/// The compression recorded for a leaf column. The codecs themselves are
/// external to this crate; the choice is only carried into metadata.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum Compression {
    Uncompressed,
    Snappy,
    Gzip,
    Lzo,
    Brotli,
    Lz4,
    Zstd,
    Lz4Raw,
}

impl TryFrom<CompressionCodec> for Compression {
    type Error = Error;

    fn try_from(codec: CompressionCodec) -> Result<Self, Self::Error> {
        Ok(match codec {
            CompressionCodec::UNCOMPRESSED => Compression::Uncompressed,
            CompressionCodec::SNAPPY => Compression::Snappy,
            CompressionCodec::GZIP => Compression::Gzip,
            CompressionCodec::LZO => Compression::Lzo,
            CompressionCodec::BROTLI => Compression::Brotli,
            CompressionCodec::LZ4 => Compression::Lz4,
            CompressionCodec::ZSTD => Compression::Zstd,
            CompressionCodec::LZ4_RAW => Compression::Lz4Raw,
            _ => return Err(Error::OutOfSpec("Thrift out of range".to_string())),
        })
    }
}

impl From<Compression> for CompressionCodec {
    fn from(codec: Compression) -> Self {
        match codec {
            Compression::Uncompressed => CompressionCodec::UNCOMPRESSED,
            Compression::Snappy => CompressionCodec::SNAPPY,
            Compression::Gzip => CompressionCodec::GZIP,
            Compression::Lzo => CompressionCodec::LZO,
            Compression::Brotli => CompressionCodec::BROTLI,
            Compression::Lz4 => CompressionCodec::LZ4,
            Compression::Zstd => CompressionCodec::ZSTD,
            Compression::Lz4Raw => CompressionCodec::LZ4_RAW,
        }
    }
}

/// The encodings this crate can produce and consume.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum Encoding {
    /// Values laid out back to back.
    /// BOOLEAN - 1 bit per value, LSB first. 0 is false; 1 is true.
    /// INT32 - 4 bytes per value, little-endian.
    /// INT64 - 8 bytes per value, little-endian.
    /// INT96 - 12 bytes per value, little-endian.
    /// FLOAT - 4 bytes per value, IEEE, little-endian.
    /// DOUBLE - 8 bytes per value, IEEE, little-endian.
    /// BYTE_ARRAY - 4 byte little-endian length followed by the bytes.
    /// FIXED_LEN_BYTE_ARRAY - just the bytes.
    Plain,
    /// Deprecated dictionary encoding. Data pages should use
    /// [`Encoding::RleDictionary`] instead; dictionary pages use
    /// [`Encoding::Plain`].
    PlainDictionary,
    /// Run-length / bit-packed hybrid. Used for repetition and definition
    /// levels.
    Rle,
    /// Dictionary indices encoded with the RLE/bit-packed hybrid.
    RleDictionary,
    /// Block/miniblock delta encoding of INT32/INT64.
    DeltaBinaryPacked,
}

impl TryFrom<ParquetEncoding> for Encoding {
    type Error = Error;

    fn try_from(encoding: ParquetEncoding) -> Result<Self, Self::Error> {
        Ok(match encoding {
            ParquetEncoding::PLAIN => Encoding::Plain,
            ParquetEncoding::PLAIN_DICTIONARY => Encoding::PlainDictionary,
            ParquetEncoding::RLE => Encoding::Rle,
            ParquetEncoding::RLE_DICTIONARY => Encoding::RleDictionary,
            ParquetEncoding::DELTA_BINARY_PACKED => Encoding::DeltaBinaryPacked,
            other => {
                return Err(Error::Unsupported(format!(
                    "Encoding {:?} is not supported",
                    other
                )))
            }
        })
    }
}

impl From<Encoding> for ParquetEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Plain => ParquetEncoding::PLAIN,
            Encoding::PlainDictionary => ParquetEncoding::PLAIN_DICTIONARY,
            Encoding::Rle => ParquetEncoding::RLE,
            Encoding::RleDictionary => ParquetEncoding::RLE_DICTIONARY,
            Encoding::DeltaBinaryPacked => ParquetEncoding::DELTA_BINARY_PACKED,
        }
    }
}

/// Whether `encoding` is valid for values of `physical_type`.
///
/// [`Encoding::Rle`] is reserved for level streams and is never a value
/// encoding.
pub fn can_encode(physical_type: &PhysicalType, encoding: Encoding) -> bool {
    match encoding {
        Encoding::Plain => true,
        Encoding::PlainDictionary | Encoding::RleDictionary => {
            !matches!(physical_type, PhysicalType::Boolean)
        }
        Encoding::DeltaBinaryPacked => {
            matches!(physical_type, PhysicalType::Int32 | PhysicalType::Int64)
        }
        Encoding::Rle => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_table() {
        use PhysicalType::*;
        let all = [
            Boolean,
            Int32,
            Int64,
            Int96,
            Float,
            Double,
            ByteArray,
            FixedLenByteArray(16),
        ];
        for type_ in &all {
            assert!(can_encode(type_, Encoding::Plain));
            assert!(!can_encode(type_, Encoding::Rle));
            assert_eq!(
                can_encode(type_, Encoding::RleDictionary),
                *type_ != Boolean
            );
            assert_eq!(
                can_encode(type_, Encoding::DeltaBinaryPacked),
                matches!(type_, Int32 | Int64)
            );
        }
    }

    #[test]
    fn thrift_round_trip() {
        let encodings = [
            Encoding::Plain,
            Encoding::PlainDictionary,
            Encoding::Rle,
            Encoding::RleDictionary,
            Encoding::DeltaBinaryPacked,
        ];
        for encoding in encodings {
            let thrift: ParquetEncoding = encoding.into();
            assert_eq!(Encoding::try_from(thrift), Ok(encoding));
        }

        assert!(Encoding::try_from(ParquetEncoding::DELTA_BYTE_ARRAY).is_err());
    }
}
