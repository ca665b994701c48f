//! # fenced
//!
//! Boundary-aware splitting of long text into chat-sized messages.
//!
//! ## The Problem
//!
//! Chat platforms cap message length (Discord: 2000 characters). AI answers,
//! help pages and project notifications regularly run longer. Cutting every
//! 2000 characters works until the cut lands inside a code block: the fence
//! opens in one message, closes in the next, and both render as garbage.
//!
//! The cut has to move to a place where nothing breaks:
//!
//! - between two paragraphs, rather than mid-paragraph
//! - between two sentences, rather than mid-sentence
//! - between two words, rather than mid-word
//! - outside a code fence, table or list, rather than inside it
//!
//! ## Strategies
//!
//! ### Fixed width ([`chunk`])
//!
//! Cut every N characters. Concatenating the pieces gives back the input
//! exactly. Useful as a baseline and for content with no structure at all.
//!
//! ### Tiered ([`smart_chunk`])
//!
//! ```text
//! Tiers: paragraph "\n\n" -> sentence ". " -> word " " -> character
//!
//! 1. Pack paragraphs greedily into segments
//! 2. A paragraph that alone is too large? Pack its sentences instead
//! 3. A sentence that alone is too large? Pack its words
//! 4. A word that alone is too large? Slice it
//! ```
//!
//! Every segment fits. Separators at the cuts are dropped.
//!
//! ### Markdown-aware ([`markdown_aware_chunk`])
//!
//! Line by line, never cutting between an opening and a closing
//! ```` ``` ```` fence. A fenced block too large for one message is sent
//! whole rather than broken.
//!
//! ### Adaptive ([`classify_and_chunk`])
//!
//! Detect code, tables and lists ([`TextFeatures`]), protect the first one
//! found (in that order), fall back to natural breaks for plain prose, then
//! coalesce small fragments so the message count stays low.
//!
//! ## Quick Start
//!
//! ```rust
//! use fenced::{chunk, classify_and_chunk, markdown_aware_chunk, smart_chunk, TextFeatures};
//!
//! let text = "Paragraph one.\n\nParagraph two.\n\n```\nlet x = 1;\n```";
//!
//! assert_eq!(chunk(text, 2000), vec![text]);
//!
//! let pieces = smart_chunk(text, 20);
//! assert!(pieces.iter().all(|p| p.chars().count() <= 20));
//!
//! let pieces = markdown_aware_chunk(text, 20);
//! assert!(pieces.contains(&"```\nlet x = 1;\n```".to_string()));
//!
//! let pieces = classify_and_chunk(text, 20, TextFeatures::detect(text));
//! assert_eq!(pieces.join("\n"), text);
//! ```
//!
//! ## Size Unit
//!
//! Sizes are counted in `char`s, the unit the 2000 character cap uses, and
//! cuts always fall on `char` boundaries.

mod adaptive;
mod capacity;
mod config;
mod error;
mod features;
mod fixed;
mod markdown;
mod pack;
mod reply;
mod scan;
mod segment;
mod tiered;

pub use adaptive::{AdaptiveChunker, Strategy};
pub use capacity::{ChunkCapacity, ChunkCapacityError};
pub use config::{ChunkConfig, ChunkMode, SmartChunkConfig};
pub use error::{Error, Result};
pub use features::{TextAnalysis, TextAnalyzer, TextFeatures};
pub use fixed::FixedChunker;
pub use markdown::MarkdownChunker;
pub use reply::reply_chunks;
pub use scan::{BlockScanner, BlockState, Guard, Unit};
pub use segment::{ChunkedResponse, Segment, SegmentMetadata};
pub use tiered::{Tier, TieredChunker};

/// A text chunking strategy.
///
/// All chunkers implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use fenced::{Chunker, FixedChunker, MarkdownChunker, Segment};
///
/// fn to_messages(chunker: &dyn Chunker, text: &str) -> Vec<Segment> {
///     chunker.segments(text)
/// }
///
/// let fixed = FixedChunker::new(100);
/// let markdown = MarkdownChunker::new(100);
///
/// let text = "Hello world. This is a test.";
/// assert_eq!(to_messages(&fixed, text).len(), 1);
/// assert_eq!(to_messages(&markdown, text).len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into ordered pieces.
    fn split(&self, text: &str) -> Vec<String>;

    /// Split text into numbered [`Segment`]s.
    fn segments(&self, text: &str) -> Vec<Segment> {
        Segment::sequence(self.split(text))
    }

    /// Estimate the number of pieces for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 2000).max(1)
    }
}

/// Fixed-width split: contiguous slices of exactly `max_size` chars, the last
/// one possibly shorter.
///
/// `max_size == 0` is treated as 1.
///
/// ```rust
/// assert_eq!(fenced::chunk("abcdefg", 3), vec!["abc", "def", "g"]);
/// assert!(fenced::chunk("", 3).is_empty());
/// ```
#[must_use]
pub fn chunk(text: &str, max_size: usize) -> Vec<String> {
    FixedChunker::new(max_size.max(1)).split(text)
}

/// Tiered split on paragraphs, sentences, words and characters.
///
/// Every piece is at most `max_size` chars. `max_size == 0` is treated as 1.
///
/// ```rust
/// let pieces = fenced::smart_chunk("word ".repeat(30).trim_end(), 20);
/// assert!(pieces.iter().all(|p| p.len() <= 20 && !p.starts_with(' ')));
/// ```
#[must_use]
pub fn smart_chunk(text: &str, max_size: usize) -> Vec<String> {
    TieredChunker::prose(max_size.max(1)).split(text)
}

/// Line split that never breaks a fenced code block.
///
/// A block larger than `max_size` is returned as a single oversized piece.
/// `max_size == 0` is treated as 1.
#[must_use]
pub fn markdown_aware_chunk(text: &str, max_size: usize) -> Vec<String> {
    MarkdownChunker::new(max_size.max(1)).split(text)
}

/// Split with the strategy selected by `features`, then coalesce fragments.
///
/// Precedence: code, then tables, then lists, then natural breaks.
/// Text that fits is returned unchanged. Under a guarded strategy a single
/// line or block larger than `max_size` becomes its own oversized piece.
/// `max_size == 0` is treated as 1.
#[must_use]
pub fn classify_and_chunk(text: &str, max_size: usize, features: TextFeatures) -> Vec<String> {
    adaptive::classify_and_split(text, max_size.max(1), features)
}
