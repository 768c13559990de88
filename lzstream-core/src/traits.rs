//! Core traits for the streaming engine.
//!
//! These are the two seams of the system: `PullSource` abstracts where
//! bytes come from (memory, file, bounded descriptor) and `BlockCodec`
//! abstracts the block-level compression primitive, which this workspace
//! consumes but does not implement.

use crate::error::Result;

/// A byte origin that can be drained in bounded pulls.
///
/// Implementations fill as much of `buf` as they can supply, looping over
/// short reads internally. A return of `0` means the source is exhausted
/// (or, for a budget-bounded source, that the budget is spent) and every
/// further pull also returns `0`.
pub trait PullSource {
    /// Pull up to `buf.len()` bytes into `buf`, returning the count filled.
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize>;
}

impl<S: PullSource + ?Sized> PullSource for &mut S {
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).pull(buf)
    }
}

/// The block-level compress/decompress primitive.
///
/// The engine treats the codec as opaque: it hands over a dictionary slice
/// (recent history from the ring window) plus one block, and gets back the
/// transformed bytes. The codec must be deterministic with respect to
/// `(dictionary, input)` so a decompressor replaying the same dictionary
/// sequence recovers the original blocks.
pub trait BlockCodec {
    /// Worst-case compressed size for `raw_len` input bytes.
    ///
    /// Frame length prefixes are validated against this bound during
    /// decoding, so it must be an upper bound for every possible input.
    fn max_compressed_size(&self, raw_len: usize) -> usize;

    /// Compress one raw block against the dictionary.
    fn compress(&mut self, dictionary: &[u8], raw: &[u8]) -> Result<Vec<u8>>;

    /// Decompress one block against the dictionary.
    ///
    /// `max_raw` is the largest output the caller will accept (the block
    /// size); larger or malformed payloads must fail.
    fn decompress(&mut self, dictionary: &[u8], compressed: &[u8], max_raw: usize)
    -> Result<Vec<u8>>;
}
