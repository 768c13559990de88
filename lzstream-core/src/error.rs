//! Error types for lzstream operations.
//!
//! This module provides the error type covering all failure conditions of
//! the streaming engine: I/O failures, framing corruption, codec-level
//! corruption, and protocol misuse.

use std::io;
use thiserror::Error;

/// The main error type for lzstream operations.
#[derive(Debug, Error)]
pub enum LzStreamError {
    /// I/O error from the underlying file or descriptor.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid or truncated frame: bad length prefix or short payload.
    #[error("Corrupt framing at offset {offset}: {message}")]
    CorruptFraming {
        /// Byte offset into the compressed stream where the frame starts.
        offset: u64,
        /// Description of the framing problem.
        message: String,
    },

    /// The codec rejected a block during decompression, or the decompressed
    /// size fell outside the expected block bounds.
    #[error("Corrupt volume at offset {offset}: {message}")]
    CorruptVolume {
        /// Byte offset into the compressed stream where the frame starts.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// The codec failed while compressing a block.
    #[error("Codec error: {message}")]
    Codec {
        /// Description of the codec failure.
        message: String,
    },

    /// The streaming protocol was misused by the caller.
    #[error("Usage error: {message}")]
    Usage {
        /// Description of the misuse.
        message: String,
    },
}

/// Result type alias for lzstream operations.
pub type Result<T> = std::result::Result<T, LzStreamError>;

impl LzStreamError {
    /// Create a corrupt framing error.
    pub fn corrupt_framing(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptFraming {
            offset,
            message: message.into(),
        }
    }

    /// Create a corrupt volume error.
    pub fn corrupt_volume(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptVolume {
            offset,
            message: message.into(),
        }
    }

    /// Create a codec error.
    pub fn codec(message: impl Into<String>) -> Self {
        Self::Codec {
            message: message.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}
