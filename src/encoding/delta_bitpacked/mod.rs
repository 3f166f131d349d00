mod decoder;
mod encoder;

pub use decoder::Decoder;
pub use encoder::encode;

/// The number of values per block this crate writes.
pub(crate) const BLOCK_SIZE: usize = 128;
/// The number of miniblocks per block this crate writes.
pub(crate) const MINIBLOCKS_PER_BLOCK: usize = 4;
/// `BLOCK_SIZE / MINIBLOCKS_PER_BLOCK`
pub(crate) const VALUES_PER_MINIBLOCK: usize = 32;
