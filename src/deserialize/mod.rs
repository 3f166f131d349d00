//! Lazy decoders from the values slice of a data page to typed values.
//! Each decoder takes an already-split slice (see
//! [`crate::encoding::levels::split_buffer`]), the number of non-null
//! values, and yields exactly that many values.
mod binary;
mod boolean;
mod fixed_len;
mod integer;
mod native;
mod utils;

pub use binary::{BinaryIter, BinaryPageDict, BinaryValuesDecoder};
pub use boolean::BooleanValuesDecoder;
pub use fixed_len::{FixedLenPageDict, FixedLenValuesDecoder};
pub use integer::{AsNative, IntegerValuesDecoder};
pub use native::{read_dict_page, NativeValuesDecoder};
