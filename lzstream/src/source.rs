//! Byte sources feeding the streaming engine.
//!
//! Each flow pulls its bytes through one of three adapters: a borrowed
//! in-memory slice, a buffered read-only file, or a live descriptor
//! bounded by a caller-set byte budget. The engine dispatches through the
//! [`Source`] enum; the adapters share the [`PullSource`] contract of
//! filling as much of the buffer as the source can still supply.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use lzstream_core::error::Result;
use lzstream_core::traits::PullSource;
use lzstream_core::window::sizes;

/// Buffered read capacity for file sources: two blocks, enough to cover a
/// frame header plus a worst-case compressed block per refill.
pub const FILE_READ_SIZE: usize = sizes::BLOCK * 2;

/// An in-memory byte slice consumed front to back.
#[derive(Debug)]
pub struct MemorySource<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> MemorySource<'a> {
    /// Create a source over a borrowed slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.offset
    }
}

impl PullSource for MemorySource<'_> {
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = buf.len().min(self.data.len() - self.offset);
        buf[..n].copy_from_slice(&self.data[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

/// A read-only file consumed through a buffered reader.
#[derive(Debug)]
pub struct FileSource {
    reader: BufReader<File>,
}

impl FileSource {
    /// Open a file read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::with_capacity(FILE_READ_SIZE, file),
        })
    }
}

impl PullSource for FileSource {
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(read_full(&mut self.reader, buf)?)
    }
}

/// A live descriptor bounded by a byte budget.
///
/// The budget delimits one logical object among several packed
/// back-to-back on the same descriptor: pulls stop returning bytes once
/// the budget is spent, even if the descriptor has more, so the following
/// object stays untouched. The descriptor itself is borrowed and keeps
/// its position, ready for the next pass.
#[derive(Debug)]
pub struct DescriptorSource<'a, R: Read> {
    reader: &'a mut R,
    remaining: u64,
}

impl<'a, R: Read> DescriptorSource<'a, R> {
    /// Create a source over a borrowed descriptor with a zero budget.
    pub fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            remaining: 0,
        }
    }

    /// Set the byte budget for the next pass.
    pub fn set_budget(&mut self, budget: u64) {
        self.remaining = budget;
    }

    /// Unspent budget of the current pass.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<R: Read> PullSource for DescriptorSource<'_, R> {
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize> {
        let want = (buf.len() as u64).min(self.remaining) as usize;
        if want == 0 {
            return Ok(0);
        }
        let got = read_full(&mut self.reader, &mut buf[..want])?;
        self.remaining -= got as u64;
        if got < want {
            // The budget promised bytes the descriptor could not deliver.
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("descriptor ended with {} budget bytes unread", self.remaining),
            )
            .into());
        }
        Ok(got)
    }
}

/// The tagged byte origin a stream pulls from.
#[derive(Debug)]
pub enum Source<'a, R: Read> {
    /// Borrowed in-memory buffer.
    Memory(MemorySource<'a>),
    /// Read-only file.
    File(FileSource),
    /// Budget-bounded live descriptor.
    Descriptor(DescriptorSource<'a, R>),
}

impl<R: Read> PullSource for Source<'_, R> {
    fn pull(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self {
            Source::Memory(s) => s.pull(buf),
            Source::File(s) => s.pull(buf),
            Source::Descriptor(s) => s.pull(buf),
        }
    }
}

/// Fill `buf` from `reader`, looping over short reads; stops early only at
/// end of input. Returns the number of bytes filled.
fn read_full(mut reader: impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
