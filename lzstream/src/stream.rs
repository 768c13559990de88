//! The block-streaming engine.
//!
//! One generic engine drives all flows: it pulls bytes from a [`Source`],
//! runs them through the block codec with the ring window as dictionary,
//! and yields one block per call. The direction tag decides the per-block
//! step: compressing wraps each codec output in a length-prefixed frame,
//! decompressing decodes one frame and yields the recovered raw bytes.
//!
//! Streams are single-pass: `Fresh` until the first pull, `Active` while
//! blocks flow, `Exhausted` forever after the source ends or an error
//! surfaces. Consuming a payload again requires a new stream with a fresh
//! window; dictionary state is never shared between passes. The one
//! sanctioned exception is the descriptor flow, where setting a new read
//! budget after exhaustion re-arms the stream for the next logical object
//! on the same descriptor.

use std::io::{Empty, Read};
use std::path::Path;

use lzstream_core::error::{LzStreamError, Result};
use lzstream_core::framing::{FRAME_HEADER_LEN, encode_frame, read_frame};
use lzstream_core::traits::{BlockCodec, PullSource};
use lzstream_core::window::{RingWindow, sizes};

use crate::codec::Lz4Codec;
use crate::source::{DescriptorSource, FileSource, MemorySource, Source};

/// Raw bytes handed to the codec per block.
pub const BLOCK_SIZE: usize = sizes::BLOCK;

/// Which way bytes move through the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Compress,
    Decompress,
}

/// Lifecycle of a single-pass stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Active,
    Exhausted,
}

/// A single-pass block stream over one payload.
///
/// Drive it with [`next_block`](Self::next_block) or as an [`Iterator`];
/// each call yields one framed (compressing) or raw (decompressing) block.
/// `Ok(None)` / iterator end means clean exhaustion; yielded blocks are
/// never empty.
#[derive(Debug)]
pub struct BlockStream<'a, R: Read = Empty, C: BlockCodec = Lz4Codec> {
    source: Source<'a, R>,
    direction: Direction,
    codec: C,
    window: RingWindow,
    /// Staging buffer for raw pulls, one block long, allocated once.
    chunk: Vec<u8>,
    block_size: usize,
    /// Worst-case compressed size for one block; frame lengths beyond this
    /// are corrupt.
    max_frame: usize,
    produced: u64,
    offset: u64,
    phase: Phase,
}

impl<'a> BlockStream<'a, Empty> {
    /// Compress an in-memory buffer.
    ///
    /// A zero-length buffer yields an immediately exhausted stream with
    /// zero frames.
    pub fn compress_slice(data: &'a [u8]) -> Self {
        Self::new(Source::Memory(MemorySource::new(data)), Direction::Compress)
    }

    /// Decompress a concatenation of frames held in memory.
    pub fn decompress_slice(data: &'a [u8]) -> Self {
        Self::new(
            Source::Memory(MemorySource::new(data)),
            Direction::Decompress,
        )
    }
}

impl BlockStream<'static, Empty> {
    /// Compress a file, opened read-only.
    pub fn compress_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(
            Source::File(FileSource::open(path)?),
            Direction::Compress,
        ))
    }

    /// Decompress a file of concatenated frames, opened read-only.
    pub fn decompress_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(
            Source::File(FileSource::open(path)?),
            Direction::Decompress,
        ))
    }
}

impl<'a, R: Read> BlockStream<'a, R> {
    fn new(source: Source<'a, R>, direction: Direction) -> Self {
        Self::with_codec(source, direction, Lz4Codec::new())
    }

    /// Decompress budget-bounded logical objects from a live descriptor.
    ///
    /// The stream starts with a zero budget; call
    /// [`set_read_bytes`](Self::set_read_bytes) with the object's
    /// compressed length before pulling. The descriptor is borrowed and
    /// never repositioned: each pass consumes exactly its budget and
    /// leaves the descriptor at the next object's first byte.
    pub fn decompress_descriptor(reader: &'a mut R) -> Self {
        Self::new(
            Source::Descriptor(DescriptorSource::new(reader)),
            Direction::Decompress,
        )
    }

    /// Build a descriptor stream with an explicit codec.
    pub fn decompress_descriptor_with_codec<C: BlockCodec>(
        reader: &'a mut R,
        codec: C,
    ) -> BlockStream<'a, R, C> {
        BlockStream::with_codec(
            Source::Descriptor(DescriptorSource::new(reader)),
            Direction::Decompress,
            codec,
        )
    }
}

impl<'a, R: Read, C: BlockCodec> BlockStream<'a, R, C> {
    fn with_codec(source: Source<'a, R>, direction: Direction, codec: C) -> Self {
        let block_size = BLOCK_SIZE;
        let max_frame = codec.max_compressed_size(block_size);
        Self {
            source,
            direction,
            codec,
            window: RingWindow::with_defaults(),
            chunk: vec![0; block_size],
            block_size,
            max_frame,
            produced: 0,
            offset: 0,
            phase: Phase::Fresh,
        }
    }

    /// Produce the next block, or `Ok(None)` on clean exhaustion.
    ///
    /// After exhaustion (or an error) every further call returns
    /// `Ok(None)`.
    pub fn next_block(&mut self) -> Result<Option<Vec<u8>>> {
        if self.phase == Phase::Exhausted {
            return Ok(None);
        }
        let step = match self.direction {
            Direction::Compress => self.compress_step(),
            Direction::Decompress => self.decompress_step(),
        };
        match step {
            Ok(Some(block)) => {
                self.phase = Phase::Active;
                self.produced += block.len() as u64;
                Ok(Some(block))
            }
            Ok(None) => {
                self.phase = Phase::Exhausted;
                Ok(None)
            }
            Err(e) => {
                self.phase = Phase::Exhausted;
                Err(e)
            }
        }
    }

    /// Pull one raw chunk, compress it against the window, frame it.
    fn compress_step(&mut self) -> Result<Option<Vec<u8>>> {
        let n = self.source.pull(&mut self.chunk)?;
        if n == 0 {
            return Ok(None);
        }

        self.window.make_room(self.block_size);
        let compressed = self.codec.compress(self.window.dictionary(), &self.chunk[..n])?;
        debug_assert!(compressed.len() <= self.max_frame);
        self.window.append(&self.chunk[..n]);
        self.offset += n as u64;

        Ok(Some(encode_frame(&compressed)))
    }

    /// Decode one frame, decompress it against the window, yield the raw
    /// bytes.
    fn decompress_step(&mut self) -> Result<Option<Vec<u8>>> {
        let frame_offset = self.offset;
        let Some(payload) = read_frame(&mut self.source, self.max_frame, frame_offset)? else {
            return Ok(None);
        };

        // Reserve a full block of room, exactly as the compressor did, so
        // window resets land on the same block indices on both sides.
        self.window.make_room(self.block_size);
        let raw = self
            .codec
            .decompress(self.window.dictionary(), &payload, self.block_size)
            .map_err(|e| match e {
                LzStreamError::Codec { message } => {
                    LzStreamError::corrupt_volume(frame_offset, message)
                }
                other => other,
            })?;
        if raw.is_empty() || raw.len() > self.block_size {
            return Err(LzStreamError::corrupt_volume(
                frame_offset,
                format!(
                    "block decompressed to {} bytes, expected 1..={}",
                    raw.len(),
                    self.block_size
                ),
            ));
        }

        self.window.append(&raw);
        self.offset += (FRAME_HEADER_LEN + payload.len()) as u64;

        Ok(Some(raw))
    }

    /// Set the compressed-byte budget for the next descriptor pass.
    ///
    /// Valid before the first pull of a pass, or after the previous pass
    /// is exhausted, in which case the stream re-arms: state and window
    /// reset, and decompression continues from wherever the previous
    /// budget ended. Mid-pass mutation and non-descriptor streams are
    /// usage errors.
    pub fn set_read_bytes(&mut self, read_bytes: u64) -> Result<()> {
        let Source::Descriptor(desc) = &mut self.source else {
            return Err(LzStreamError::usage(
                "read budget applies only to descriptor streams",
            ));
        };
        match self.phase {
            Phase::Active => Err(LzStreamError::usage("read budget changed mid-pass")),
            Phase::Fresh => {
                desc.set_budget(read_bytes);
                Ok(())
            }
            Phase::Exhausted => {
                desc.set_budget(read_bytes);
                self.window.reset();
                self.produced = 0;
                self.offset = 0;
                self.phase = Phase::Fresh;
                Ok(())
            }
        }
    }

    /// Cumulative bytes yielded so far.
    pub fn bytes_produced(&self) -> u64 {
        self.produced
    }

    /// Bytes consumed from the source so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Whether the stream has reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Exhausted
    }
}

impl<R: Read, C: BlockCodec> Iterator for BlockStream<'_, R, C> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block().transpose()
    }
}
