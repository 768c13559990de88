//! Ring window (sliding dictionary) carried across block boundaries.
//!
//! Block codecs compress each block independently, but quality improves
//! substantially when the codec may reference bytes from earlier blocks.
//! This module provides the bounded rolling history that supplies that
//! context: every block appended here becomes dictionary material for the
//! blocks that follow it.
//!
//! The window is linear, not circular: LZ4-style codecs address the
//! dictionary as one contiguous slice, so when an append would exceed
//! capacity the window resets its cursor to zero and the dictionary
//! restarts from that point. A compressor and decompressor that apply the
//! same reset rule at the same block indices stay synchronized.

/// Default sizes for the streaming engine.
pub mod sizes {
    /// Raw bytes handed to the codec per block (2 KB).
    pub const BLOCK: usize = 2 * 1024;
    /// Window capacity: 256 KB of history plus one block of slack.
    pub const WINDOW: usize = 256 * 1024 + BLOCK;
    /// Maximum dictionary slice handed to the codec (64 KB, the farthest
    /// back-reference an LZ4 match can reach).
    pub const MAX_DICT: usize = 64 * 1024;
}

/// A fixed-capacity rolling history of recently processed bytes.
///
/// Allocated once at construction and never resized. The prefix
/// `[0, cursor)` always holds the most recent `cursor` bytes of cumulative
/// history since the last reset.
#[derive(Debug)]
pub struct RingWindow {
    buf: Vec<u8>,
    cursor: usize,
    max_dict: usize,
}

impl RingWindow {
    /// Create a window with the given capacity and dictionary cap.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, max_dict: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        Self {
            buf: vec![0; capacity],
            cursor: 0,
            max_dict,
        }
    }

    /// Create a window with the default capacity (256 KB + one block).
    pub fn with_defaults() -> Self {
        Self::new(sizes::WINDOW, sizes::MAX_DICT)
    }

    /// Get the window capacity.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Get the current write cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check whether the window holds no history.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Discard all history and restart the dictionary.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Ensure `len` bytes can be appended without exceeding capacity,
    /// resetting the window (and discarding the dictionary) if not.
    ///
    /// Both directions of a stream must call this with the same length
    /// before every block so their resets land on identical block indices.
    pub fn make_room(&mut self, len: usize) {
        if self.cursor + len > self.buf.len() {
            self.cursor = 0;
        }
    }

    /// Append bytes at the cursor, restarting the dictionary first if the
    /// bytes would not fit.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than the window capacity.
    pub fn append(&mut self, bytes: &[u8]) {
        assert!(
            bytes.len() <= self.buf.len(),
            "append of {} bytes exceeds window capacity {}",
            bytes.len(),
            self.buf.len()
        );
        self.make_room(bytes.len());
        self.buf[self.cursor..self.cursor + bytes.len()].copy_from_slice(bytes);
        self.cursor += bytes.len();
    }

    /// Get the dictionary slice for the next codec call: the most recent
    /// window content, capped to the codec's useful lookback distance.
    pub fn dictionary(&self) -> &[u8] {
        let start = self.cursor.saturating_sub(self.max_dict);
        &self.buf[start..self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_advances_cursor() {
        let mut window = RingWindow::new(64, 64);
        window.append(b"hello");
        assert_eq!(window.cursor(), 5);
        window.append(b" world");
        assert_eq!(window.cursor(), 11);
        assert_eq!(window.dictionary(), b"hello world");
    }

    #[test]
    fn test_reset_on_wrap() {
        let mut window = RingWindow::new(8, 8);
        window.append(b"abcdef");
        // 6 + 4 > 8: the dictionary restarts.
        window.append(b"wxyz");
        assert_eq!(window.cursor(), 4);
        assert_eq!(window.dictionary(), b"wxyz");
    }

    #[test]
    fn test_make_room_is_idempotent() {
        let mut window = RingWindow::new(8, 8);
        window.append(b"abcdef");
        window.make_room(4);
        window.make_room(4);
        assert_eq!(window.cursor(), 0);
        window.append(b"wxyz");
        assert_eq!(window.dictionary(), b"wxyz");
    }

    #[test]
    fn test_dictionary_capped_to_max_dict() {
        let mut window = RingWindow::new(32, 8);
        window.append(b"0123456789abcdef");
        let dict = window.dictionary();
        assert_eq!(dict.len(), 8);
        assert_eq!(dict, b"89abcdef");
    }

    #[test]
    fn test_matches_reference_model() {
        // Reference model: cumulative history plus the same reset rule.
        let capacity = 64;
        let block = 16;
        let mut window = RingWindow::new(capacity, capacity);
        let mut model: Vec<u8> = Vec::new();

        for i in 0u32..40 {
            let chunk: Vec<u8> = (0..block).map(|j| (i as u8).wrapping_mul(7).wrapping_add(j as u8)).collect();
            if model.len() + chunk.len() > capacity {
                model.clear();
            }
            model.extend_from_slice(&chunk);

            window.make_room(chunk.len());
            window.append(&chunk);
            assert_eq!(window.dictionary(), &model[..], "diverged at block {}", i);
        }
    }

    #[test]
    fn test_reset_discards_history() {
        let mut window = RingWindow::new(16, 16);
        window.append(b"history");
        window.reset();
        assert!(window.is_empty());
        assert!(window.dictionary().is_empty());
    }

    #[test]
    #[should_panic(expected = "exceeds window capacity")]
    fn test_oversized_append_panics() {
        let mut window = RingWindow::new(4, 4);
        window.append(b"too long");
    }
}
