//! Markdown-aware chunking: never cut inside a fenced code block.
//!
//! Text is split on line boundaries. Lines are packed into segments until the
//! next one would not fit, except that a fenced block travels as one piece:
//!
//! ```text
//! max_size = 40
//!
//! "Some prose before the example."      -> segment 0
//! "```rust"                             \
//! "fn main() { println!(\"hi\"); }"       > segment 1 (block starts fresh)
//! "```"                                 /
//! "And after."                          -> segment 2
//! ```
//!
//! A block longer than `max_size` is emitted whole as one oversized segment.
//! Joining the segments with `"\n"` gives back the input, except for blank
//! lines sitting right at a cut, which are dropped.

use crate::pack::char_len;
use crate::scan::{split_guarded, Guard};
use crate::Chunker;

/// Line-oriented chunker that keeps fenced code blocks intact.
///
/// ## Example
///
/// ```rust
/// use fenced::{Chunker, MarkdownChunker};
///
/// let text = "Intro line.\n```\nlet x = 1;\nlet y = 2;\n```\nOutro line.";
/// let pieces = MarkdownChunker::new(30).split(text);
///
/// assert_eq!(pieces.len(), 3);
/// assert_eq!(pieces[1], "```\nlet x = 1;\nlet y = 2;\n```");
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownChunker {
    max_size: usize,
}

impl MarkdownChunker {
    /// Create a new markdown-aware chunker.
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

impl Chunker for MarkdownChunker {
    fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }

        if char_len(text) <= self.max_size {
            return vec![text.to_string()];
        }

        split_guarded(text, self.max_size, Guard::Code)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.max_size).max(1)
    }
}
