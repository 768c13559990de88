//! Block-streaming LZ4 compression with a carried dictionary window.
//!
//! lzstream moves large payloads through the LZ4 block codec without ever
//! holding a whole payload in memory. Input is processed in fixed 2 KB
//! blocks; a 256 KB ring window carries recent history across block
//! boundaries so the codec keeps its compression quality, and every
//! compressed block is written as a length-prefixed frame so block
//! boundaries can be recovered by any decompressor.
//!
//! # Flows
//!
//! - [`BlockStream::compress_slice`]: compress an in-memory buffer
//! - [`BlockStream::compress_file`]: compress a file
//! - [`BlockStream::decompress_slice`]: decompress an in-memory buffer
//! - [`BlockStream::decompress_file`]: decompress a file
//! - [`BlockStream::decompress_descriptor`]: decompress budget-bounded
//!   logical objects packed back-to-back on one live descriptor
//!
//! # Example
//!
//! ```
//! use lzstream::BlockStream;
//!
//! let data = b"Hello, World! Hello, World!".repeat(100);
//!
//! let mut frames = Vec::new();
//! for block in BlockStream::compress_slice(&data) {
//!     frames.extend_from_slice(&block?);
//! }
//!
//! let mut restored = Vec::new();
//! for block in BlockStream::decompress_slice(&frames) {
//!     restored.extend_from_slice(&block?);
//! }
//! assert_eq!(restored, data);
//! # Ok::<(), lzstream::LzStreamError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod source;
pub mod stream;

pub use codec::Lz4Codec;
pub use lzstream_core::error::{LzStreamError, Result};
pub use lzstream_core::framing::FRAME_HEADER_LEN;
pub use lzstream_core::traits::{BlockCodec, PullSource};
pub use source::{DescriptorSource, FileSource, MemorySource, Source};
pub use stream::{BLOCK_SIZE, BlockStream};

/// Compress a buffer into a concatenation of frames (convenience wrapper
/// over [`BlockStream::compress_slice`]).
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for block in BlockStream::compress_slice(data) {
        out.extend_from_slice(&block?);
    }
    Ok(out)
}

/// Decompress a concatenation of frames back into the original bytes
/// (convenience wrapper over [`BlockStream::decompress_slice`]).
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for block in BlockStream::decompress_slice(data) {
        out.extend_from_slice(&block?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_empty() {
        let compressed = compress(b"").unwrap();
        assert!(compressed.is_empty());
        assert_eq!(decompress(&compressed).unwrap(), b"");
    }

    #[test]
    fn test_roundtrip_hello() {
        let data = b"Hello, World!";
        let compressed = compress(data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_roundtrip_repeated() {
        let data = b"AAAABBBB".repeat(4096);
        let compressed = compress(&data).unwrap();
        // Repeated data should compress well once the window warms up.
        assert!(compressed.len() < data.len());
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_roundtrip_multiblock_pattern() {
        let data: Vec<u8> = (0..10 * BLOCK_SIZE).map(|i| (i % 251) as u8).collect();
        let compressed = compress(&data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }
}
