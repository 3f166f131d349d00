#![forbid(unsafe_code)]
//! Page-level encoding and decoding of Apache Parquet columns.
//!
//! This crate implements the bit-level codecs used inside Parquet data
//! pages: the RLE/bit-packed hybrid, repetition/definition level framing,
//! `PLAIN`, dictionary and `DELTA_BINARY_PACKED` value encodings, and the
//! lowering of a nested schema into flat leaf columns with their maximum
//! repetition and definition levels.
//!
//! File I/O, thrift page headers, compression and page orchestration are
//! left to the caller: every codec here consumes and produces plain byte
//! slices.

pub mod deserialize;
pub mod encoding;
pub mod error;
pub mod metadata;
mod parquet_bridge;
pub mod schema;
pub mod serialize;
pub mod types;

pub use parquet_bridge::{can_encode, Compression, Encoding, Repetition};
