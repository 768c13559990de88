//! # lzstream Core
//!
//! Core components for the lzstream block-streaming engine.
//!
//! This crate provides the building blocks the streaming crate composes:
//!
//! - [`window`]: ring window carrying the codec dictionary across blocks
//! - [`framing`]: length-prefixed framing of compressed blocks
//! - [`traits`]: the `PullSource` and `BlockCodec` seams
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! lzstream is a small layered stack:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ L3: Flows                                            │
//! │     compress/decompress from memory, file, or a      │
//! │     budget-bounded descriptor                        │
//! ├──────────────────────────────────────────────────────┤
//! │ L2: Engine                                           │
//! │     per-block step, single-pass pull protocol        │
//! ├──────────────────────────────────────────────────────┤
//! │ L1: Building blocks (this crate)                     │
//! │     RingWindow, framing, PullSource, BlockCodec      │
//! └──────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod framing;
pub mod traits;
pub mod window;

// Re-exports for convenience
pub use error::{LzStreamError, Result};
pub use framing::{FRAME_HEADER_LEN, encode_frame, read_frame};
pub use traits::{BlockCodec, PullSource};
pub use window::RingWindow;
