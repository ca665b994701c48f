//! Adaptive chunking: pick a strategy from the text's structure.
//!
//! ## Strategy Selection
//!
//! ```text
//! has_code?   -> keep fenced code blocks whole
//! has_tables? -> keep tables whole
//! has_lists?  -> keep list blocks whole
//! otherwise   -> natural breaks: paragraph, sentence, character
//! ```
//!
//! Exactly one strategy runs, in that order of precedence. A message with a
//! code block and a table only protects the code block.
//!
//! ## Coalescing
//!
//! The raw fragments then go through one more greedy pass that joins
//! neighbours with `"\n"` while the result stays within `max_size`. The
//! natural-break strategy in particular can return many short paragraphs;
//! coalescing bounds the number of messages sent. Fragments cut from line
//! strategies rejoin exactly, while prose fragments may trade a `"\n\n"` or
//! a `". "` for the single newline.

use crate::pack::{char_len, Packer};
use crate::scan::{split_guarded, Guard};
use crate::{Chunker, SmartChunkConfig, TextAnalyzer, TextFeatures, TieredChunker};

/// The strategy chosen for a feature set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Keep guarded blocks of this kind whole.
    Guarded(Guard),
    /// Paragraph, sentence, character tiers.
    NaturalBreaks,
}

impl Strategy {
    /// Select the strategy for `features`: code > table > list > natural breaks.
    #[must_use]
    pub const fn select(features: TextFeatures) -> Self {
        if features.has_code {
            Self::Guarded(Guard::Code)
        } else if features.has_tables {
            Self::Guarded(Guard::Table)
        } else if features.has_lists {
            Self::Guarded(Guard::List)
        } else {
            Self::NaturalBreaks
        }
    }

    fn fragments(self, text: &str, max_size: usize) -> Vec<String> {
        match self {
            Self::Guarded(guard) => split_guarded(text, max_size, guard),
            Self::NaturalBreaks => TieredChunker::natural_breaks(max_size).split(text),
        }
    }
}

/// Join adjacent fragments with `"\n"` while they fit in `max_size`.
pub(crate) fn coalesce(fragments: Vec<String>, max_size: usize) -> Vec<String> {
    let mut packer = Packer::new(max_size, "\n");
    for fragment in &fragments {
        packer.push(fragment);
    }
    packer.finish()
}

/// Chunk `text` with the strategy selected by `features`, then coalesce.
pub(crate) fn classify_and_split(
    text: &str,
    max_size: usize,
    features: TextFeatures,
) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    if char_len(text) <= max_size {
        return vec![text.to_string()];
    }

    let strategy = Strategy::select(features);
    let fragments = strategy.fragments(text, max_size);
    let raw = fragments.len();
    let segments = coalesce(fragments, max_size);

    tracing::debug!(
        ?strategy,
        text_len = char_len(text),
        max_size,
        raw,
        segments = segments.len(),
        "chunked text"
    );

    segments
}

/// Chunker that classifies each text and picks a strategy for it.
///
/// ## Example
///
/// ```rust
/// use fenced::{AdaptiveChunker, Chunker};
///
/// let text = "Setup:\n\n```sh\ncargo build --release\ncargo test\n```\n\nThat is all.";
/// let pieces = AdaptiveChunker::new(40).split(text);
///
/// let fence = pieces.iter().find(|p| p.contains("```sh")).unwrap();
/// assert!(fence.contains("cargo test\n```"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveChunker {
    max_size: usize,
    analyzer: TextAnalyzer,
}

impl AdaptiveChunker {
    /// Create an adaptive chunker with default detection settings.
    ///
    /// # Panics
    ///
    /// Panics if `max_size == 0`.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self::with_config(max_size, SmartChunkConfig::default())
    }

    /// Create an adaptive chunker with custom detection settings.
    ///
    /// # Panics
    ///
    /// Panics if `max_size == 0`.
    #[must_use]
    pub fn with_config(max_size: usize, config: SmartChunkConfig) -> Self {
        assert!(max_size > 0, "max_size must be > 0");
        Self {
            max_size,
            analyzer: TextAnalyzer::new(config),
        }
    }

    /// The strategy this chunker would use for `text`.
    #[must_use]
    pub fn strategy_for(&self, text: &str) -> Strategy {
        Strategy::select(self.analyzer.features(text))
    }
}

impl Chunker for AdaptiveChunker {
    fn split(&self, text: &str) -> Vec<String> {
        classify_and_split(text, self.max_size, self.analyzer.features(text))
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.max_size).max(1)
    }
}
