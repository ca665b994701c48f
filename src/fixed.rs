//! Fixed-width chunking.
//!
//! The baseline: cut every `max_size` chars, no matter what is there.
//!
//! ```text
//! max_size = 10
//!
//! Text:      "abcdefghijklmnopqrstuvwxyz"
//!
//! Segment 0: "abcdefghij"
//! Segment 1: "klmnopqrst"
//! Segment 2: "uvwxyz"      <- final segment may be shorter
//! ```
//!
//! Segments concatenate back to the input exactly. This is the only strategy
//! with that guarantee, and the only one that will happily cut a word, a URL
//! or a code fence in half.

use crate::pack::{char_len, slice_chars};
use crate::Chunker;

/// Fixed-width chunker.
///
/// ## Example
///
/// ```rust
/// use fenced::{Chunker, FixedChunker};
///
/// let chunker = FixedChunker::new(100);
/// let text = "A".repeat(250);
/// let pieces = chunker.split(&text);
///
/// assert_eq!(pieces.len(), 3);
/// assert_eq!(pieces[0].len(), 100);
/// assert_eq!(pieces[2].len(), 50);
/// assert_eq!(pieces.concat(), text);
/// ```
#[derive(Debug, Clone)]
pub struct FixedChunker {
    max_size: usize,
}

impl FixedChunker {
    /// Create a new fixed-width chunker.
    ///
    /// # Panics
    ///
    /// Panics if `max_size == 0`.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        assert!(max_size > 0, "max_size must be > 0");
        Self { max_size }
    }
}

impl Chunker for FixedChunker {
    fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }

        if char_len(text) <= self.max_size {
            return vec![text.to_string()];
        }

        slice_chars(text, self.max_size)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        text_len.div_ceil(self.max_size)
    }
}
