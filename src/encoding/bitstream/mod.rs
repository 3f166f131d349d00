//! Little-endian bit-packed access to byte buffers: up to 32 bits at a
//! time, LSB-first within each byte, plus byte-aligned, ULEB128 and zigzag
//! access. This is the substrate of the RLE/bit-packed hybrid.
mod reader;
mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;
