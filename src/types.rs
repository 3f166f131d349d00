use crate::schema::PhysicalType;

/// A physical native representation of a Parquet fixed-sized type.
pub trait NativeType: Sized + Copy + std::fmt::Debug + PartialEq + Default {
    /// The little-endian byte representation. Also the key used to intern
    /// values while building a dictionary.
    type Bytes: AsRef<[u8]> + std::fmt::Debug + std::hash::Hash + Eq + Copy + for<'a> TryFrom<&'a [u8]>;

    /// The physical type of this native type.
    const TYPE: PhysicalType;

    fn to_le_bytes(&self) -> Self::Bytes;

    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! native {
    ($type:ty, $physical_type:expr) => {
        impl NativeType for $type {
            type Bytes = [u8; std::mem::size_of::<Self>()];

            const TYPE: PhysicalType = $physical_type;

            #[inline]
            fn to_le_bytes(&self) -> Self::Bytes {
                Self::to_le_bytes(*self)
            }

            #[inline]
            fn from_le_bytes(bytes: Self::Bytes) -> Self {
                Self::from_le_bytes(bytes)
            }
        }
    };
}

native!(i32, PhysicalType::Int32);
native!(i64, PhysicalType::Int64);
native!(f32, PhysicalType::Float);
native!(f64, PhysicalType::Double);

/// The in-memory representation of the INT96 parquet type. Its 12 bytes
/// are opaque to the codecs.
pub type Int96 = [u32; 3];

impl NativeType for Int96 {
    type Bytes = [u8; 12];

    const TYPE: PhysicalType = PhysicalType::Int96;

    #[inline]
    fn to_le_bytes(&self) -> Self::Bytes {
        let mut bytes = [0; 12];
        bytes[0..4].copy_from_slice(&self[0].to_le_bytes());
        bytes[4..8].copy_from_slice(&self[1].to_le_bytes());
        bytes[8..12].copy_from_slice(&self[2].to_le_bytes());
        bytes
    }

    #[inline]
    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        [
            u32::from_le_bytes(bytes[0..4].try_into().unwrap()),
            u32::from_le_bytes(bytes[4..8].try_into().unwrap()),
            u32::from_le_bytes(bytes[8..12].try_into().unwrap()),
        ]
    }
}

/// Reads `T` from the first `size_of::<T>()` bytes of `chunk`.
/// # Panics
/// Panics iff `chunk.len()` differs from the size of `T::Bytes`.
#[inline]
pub fn decode<T: NativeType>(chunk: &[u8]) -> T {
    let chunk: T::Bytes = match chunk.try_into() {
        Ok(chunk) => chunk,
        Err(_) => panic!("chunk size must equal the physical type's size"),
    };
    T::from_le_bytes(chunk)
}
