//! LZ4 binding for the block codec seam.
//!
//! The engine is generic over [`BlockCodec`]; this module supplies the
//! default implementation on top of `lz4_flex`'s raw block format with
//! external-dictionary support. The dictionary slice is the ring window
//! content, so matches in one block may reach back into earlier blocks.

use lz4_flex::block::{compress_with_dict, decompress_with_dict, get_maximum_output_size};
use lzstream_core::error::{LzStreamError, Result};
use lzstream_core::traits::BlockCodec;

/// The default block codec: raw LZ4 blocks with an external dictionary.
///
/// Stateless; all cross-block state lives in the ring window the engine
/// passes in as the dictionary.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lz4Codec;

impl Lz4Codec {
    /// Create a new LZ4 codec.
    pub fn new() -> Self {
        Self
    }
}

impl BlockCodec for Lz4Codec {
    fn max_compressed_size(&self, raw_len: usize) -> usize {
        get_maximum_output_size(raw_len)
    }

    fn compress(&mut self, dictionary: &[u8], raw: &[u8]) -> Result<Vec<u8>> {
        Ok(compress_with_dict(raw, dictionary))
    }

    fn decompress(
        &mut self,
        dictionary: &[u8],
        compressed: &[u8],
        max_raw: usize,
    ) -> Result<Vec<u8>> {
        decompress_with_dict(compressed, max_raw, dictionary)
            .map_err(|e| LzStreamError::codec(e.to_string()))
    }
}
