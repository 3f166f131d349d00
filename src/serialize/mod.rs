//! Encoders from typed value streams (already stripped of nulls) to the
//! body of a data or dictionary page. Level streams are encoded
//! separately by [`crate::encoding::levels`].
pub mod dictionary;
pub mod plain;

pub use dictionary::{BinaryDictEncoder, DictEncoder, FixedLenDictEncoder};
