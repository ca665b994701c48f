//! Tiered splitting: paragraphs, then sentences, then words, then characters.
//!
//! ## The Algorithm
//!
//! Given tiers `[Paragraph, Sentence, Word, Character]` and max_size `100`:
//!
//! ```text
//! 1. Split on "\n\n" and pack paragraphs greedily into segments
//! 2. A paragraph > 100 chars on its own?
//!    - Split just that paragraph on ". " and pack its sentences
//! 3. A sentence still > 100 chars?
//!    - Split just that sentence on " " and pack its words
//! 4. A word still > 100 chars?
//!    - Slice it every 100 chars
//! ```
//!
//! The pieces of a re-split unit are spliced back in place. The last piece
//! stays open, so the next paragraph can still join it if there is room.
//!
//! Separators are re-inserted between units packed into the same segment and
//! dropped where a segment ends. Because the character tier can always shrink,
//! every segment is at most `max_size` chars.
//!
//! ## The Sentence Heuristic
//!
//! Sentences are cut on the literal `". "`. That gets abbreviations
//! (`"Dr. Smith"`), decimals followed by a space and ellipses wrong, and misses
//! sentences ending in `!` or `?`. Existing content is split this way, so the
//! behaviour is kept as is. [`Tier::Grapheme`] is available for scripts where
//! raw char slicing would break user-perceived characters.

use unicode_segmentation::UnicodeSegmentation;

use crate::pack::{char_len, slice_chars, Packer};
use crate::Chunker;

/// One level of the fallback hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Blank-line delimited blocks (`"\n\n"`).
    Paragraph,
    /// Period-plus-space delimited sentences (`". "`).
    Sentence,
    /// Space delimited words.
    Word,
    /// Raw char slices of at most `max_size`.
    Character,
    /// Slices of at most `max_size` chars cut on grapheme cluster boundaries.
    Grapheme,
}

impl Tier {
    /// Separator re-inserted between units of this tier.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Paragraph => "\n\n",
            Self::Sentence => ". ",
            Self::Word => " ",
            Self::Character | Self::Grapheme => "",
        }
    }

    /// Split `text` into this tier's units.
    fn units(self, text: &str, max_size: usize) -> Vec<&str> {
        match self {
            Self::Paragraph | Self::Sentence | Self::Word => {
                text.split(self.separator()).collect()
            }
            Self::Character => slice_chars(text, max_size),
            Self::Grapheme => grapheme_slices(text, max_size),
        }
    }
}

/// Group grapheme clusters into slices of at most `max_size` chars.
///
/// A single cluster longer than `max_size` is left whole for the next tier.
fn grapheme_slices(text: &str, max_size: usize) -> Vec<&str> {
    let mut slices = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (pos, grapheme) in text.grapheme_indices(true) {
        let len = char_len(grapheme);
        if count > 0 && count + len > max_size {
            slices.push(&text[start..pos]);
            start = pos;
            count = 0;
        }
        count += len;
    }

    if start < text.len() {
        slices.push(&text[start..]);
    }

    slices
}

/// Tiered boundary-aware chunker.
///
/// ## Example
///
/// ```rust
/// use fenced::{Chunker, TieredChunker};
///
/// let chunker = TieredChunker::prose(40);
/// let text = "First paragraph is short.\n\nSecond one is a little longer than that.";
/// let pieces = chunker.split(text);
///
/// assert_eq!(pieces.len(), 2);
/// assert!(pieces.iter().all(|p| p.chars().count() <= 40));
/// ```
#[derive(Debug, Clone)]
pub struct TieredChunker {
    max_size: usize,
    tiers: Vec<Tier>,
}

impl TieredChunker {
    /// Create a tiered chunker.
    ///
    /// # Arguments
    ///
    /// * `max_size` - Maximum segment size in chars
    /// * `tiers` - Fallback hierarchy, coarsest first
    ///
    /// If the last tier cannot shrink a unit, it is sliced by chars anyway.
    ///
    /// # Panics
    ///
    /// Panics if `max_size == 0` or `tiers` is empty.
    #[must_use]
    pub fn new(max_size: usize, tiers: &[Tier]) -> Self {
        assert!(max_size > 0, "max_size must be > 0");
        assert!(!tiers.is_empty(), "tiers must not be empty");

        Self {
            max_size,
            tiers: tiers.to_vec(),
        }
    }

    /// Paragraph, sentence, word, character.
    #[must_use]
    pub fn prose(max_size: usize) -> Self {
        Self::new(
            max_size,
            &[Tier::Paragraph, Tier::Sentence, Tier::Word, Tier::Character],
        )
    }

    /// Paragraph, sentence, character: no word tier.
    #[must_use]
    pub fn natural_breaks(max_size: usize) -> Self {
        Self::new(max_size, &[Tier::Paragraph, Tier::Sentence, Tier::Character])
    }

    /// Sentence, word, character: paragraphs are not treated specially.
    #[must_use]
    pub fn sentences(max_size: usize) -> Self {
        Self::new(max_size, &[Tier::Sentence, Tier::Word, Tier::Character])
    }

    /// The configured tiers, coarsest first.
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    fn split_tier(&self, text: &str, depth: usize) -> Vec<String> {
        let Some(&tier) = self.tiers.get(depth) else {
            return slice_chars(text, self.max_size)
                .into_iter()
                .map(str::to_string)
                .collect();
        };

        let mut packer = Packer::new(self.max_size, tier.separator());

        for unit in tier.units(text, self.max_size) {
            if char_len(unit) > self.max_size {
                tracing::trace!(
                    ?tier,
                    unit_len = char_len(unit),
                    max_size = self.max_size,
                    "unit too large, re-splitting with next tier"
                );
                packer.splice(self.split_tier(unit, depth + 1));
            } else {
                packer.push(unit);
            }
        }

        packer.finish()
    }
}

impl Chunker for TieredChunker {
    fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }

        if char_len(text) <= self.max_size {
            return vec![text.to_string()];
        }

        self.split_tier(text, 0)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.max_size).max(1)
    }
}
