//! Block framing: length-prefixed encoding of compressed blocks.
//!
//! Compressed blocks are opaque byte runs with no internal delimiters, so
//! the stream writes each one as a frame: a 4-byte little-endian length
//! followed by exactly that many payload bytes. Frames are concatenated
//! with no separator and no end marker; a stream ends when its source is
//! exhausted at a frame boundary.
//!
//! Decoding validates the length prefix against the codec's worst-case
//! bound for one block, so a corrupted or misaligned prefix is rejected
//! before any payload is read.

use crate::error::{LzStreamError, Result};
use crate::traits::PullSource;

/// Size of the frame length prefix in bytes.
pub const FRAME_HEADER_LEN: usize = 4;

/// Encode one compressed block as a frame.
pub fn encode_frame(compressed: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(FRAME_HEADER_LEN + compressed.len());
    frame.extend_from_slice(&(compressed.len() as u32).to_le_bytes());
    frame.extend_from_slice(compressed);
    frame
}

/// Decode one frame from a source.
///
/// Returns `Ok(None)` when the source is exhausted at a frame boundary
/// (clean end of stream). A partial prefix, a declared length of zero or
/// beyond `max_len`, or a payload shorter than declared all fail with
/// [`LzStreamError::CorruptFraming`].
///
/// `offset` is the position of this frame within the compressed stream,
/// used only for error reporting.
pub fn read_frame<S: PullSource>(
    source: &mut S,
    max_len: usize,
    offset: u64,
) -> Result<Option<Vec<u8>>> {
    let mut header = [0u8; FRAME_HEADER_LEN];
    let got = source.pull(&mut header)?;
    if got == 0 {
        return Ok(None);
    }
    if got < FRAME_HEADER_LEN {
        return Err(LzStreamError::corrupt_framing(
            offset,
            format!("truncated length prefix: {} of {} bytes", got, FRAME_HEADER_LEN),
        ));
    }

    let declared = u32::from_le_bytes(header) as usize;
    if declared == 0 {
        return Err(LzStreamError::corrupt_framing(offset, "frame declares zero length"));
    }
    if declared > max_len {
        return Err(LzStreamError::corrupt_framing(
            offset,
            format!("frame length {} exceeds block bound {}", declared, max_len),
        ));
    }

    let mut payload = vec![0u8; declared];
    let got = source.pull(&mut payload)?;
    if got < declared {
        return Err(LzStreamError::corrupt_framing(
            offset,
            format!("short frame payload: {} of {} bytes", got, declared),
        ));
    }

    Ok(Some(payload))
}
