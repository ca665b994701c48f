//! Chunking configuration for messaging front-ends.
//!
//! A front-end usually wants one knob: "how do I split replies?". The answer
//! is a [`ChunkConfig`], which names a [`ChunkMode`], the sizes to aim for
//! and the detection switches of the adaptive mode:
//!
//! ```rust
//! use fenced::{ChunkConfig, ChunkMode};
//!
//! let config = ChunkConfig::default();
//! assert_eq!(config.mode, ChunkMode::Smart);
//!
//! let response = config.respond("A short answer.");
//! assert_eq!(response.chunk_count(), 1);
//! ```

use crate::pack::char_len;
use crate::{
    AdaptiveChunker, ChunkCapacity, ChunkedResponse, Chunker, Error, FixedChunker, Result,
    Segment, TieredChunker,
};

/// How replies are split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChunkMode {
    /// Sentence, word and character tiers at the desired size.
    Sentences,
    /// Fixed-width slices at the desired size.
    Characters,
    /// Paragraph, sentence, word and character tiers at the desired size.
    Paragraphs,
    /// Structure detection plus coalescing, up to the hard maximum.
    #[default]
    Smart,
}

impl ChunkMode {
    /// Lower-case name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sentences => "sentences",
            Self::Characters => "characters",
            Self::Paragraphs => "paragraphs",
            Self::Smart => "smart",
        }
    }
}

impl std::fmt::Display for ChunkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings of the adaptive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmartChunkConfig {
    /// Opening and closing markdown delimiters tracked by the analyzer.
    pub markdown_pairs: Vec<(String, String)>,
    /// Detect code blocks and inline code.
    pub code_blocks: bool,
    /// Detect list items.
    pub list_items: bool,
    /// Detect tables.
    pub table_rows: bool,
}

impl Default for SmartChunkConfig {
    fn default() -> Self {
        let pairs = ["**", "*", "`", "```", "---", "|"];
        Self {
            markdown_pairs: pairs
                .iter()
                .map(|&tag| (tag.to_string(), tag.to_string()))
                .collect(),
            code_blocks: true,
            list_items: true,
            table_rows: true,
        }
    }
}

/// Complete chunking configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkConfig {
    /// Splitting mode.
    pub mode: ChunkMode,
    /// Desired and maximum segment size.
    pub capacity: ChunkCapacity,
    /// Adaptive mode settings.
    pub smart: SmartChunkConfig,
}

impl ChunkConfig {
    /// Start from defaults with the given mode.
    #[must_use]
    pub fn new(mode: ChunkMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ChunkMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set desired and maximum sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if `desired` is zero or above `max`.
    pub fn with_sizes(mut self, desired: usize, max: usize) -> Result<Self> {
        if desired == 0 {
            return Err(Error::InvalidChunkSize(desired));
        }
        self.capacity = ChunkCapacity::new(desired).with_max(max)?;
        Ok(self)
    }

    /// Set the adaptive mode settings.
    #[must_use]
    pub fn with_smart(mut self, smart: SmartChunkConfig) -> Self {
        self.smart = smart;
        self
    }

    /// Check a configuration that did not go through the setters,
    /// e.g. one deserialized from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the desired size is zero or above the maximum.
    pub fn validate(&self) -> Result<()> {
        if self.capacity.desired() == 0 {
            return Err(Error::InvalidChunkSize(0));
        }
        ChunkCapacity::new(self.capacity.desired()).with_max(self.capacity.max())?;
        Ok(())
    }

    /// Build the chunker for this configuration.
    ///
    /// Sizes of zero are treated as one; call [`ChunkConfig::validate`] first
    /// to reject them instead.
    #[must_use]
    pub fn chunker(&self) -> Box<dyn Chunker> {
        let desired = self.capacity.desired().max(1);
        let max = self.capacity.max().max(desired);

        match self.mode {
            ChunkMode::Smart => Box::new(AdaptiveChunker::with_config(max, self.smart.clone())),
            ChunkMode::Paragraphs => Box::new(TieredChunker::prose(desired)),
            ChunkMode::Sentences => Box::new(TieredChunker::sentences(desired)),
            ChunkMode::Characters => Box::new(FixedChunker::new(desired)),
        }
    }

    /// Chunk `text` and wrap the result for delivery.
    #[must_use]
    pub fn respond(&self, text: &str) -> ChunkedResponse {
        let segments = Segment::sequence(self.chunker().split(text));
        tracing::debug!(
            mode = %self.mode,
            total_length = char_len(text),
            chunk_count = segments.len(),
            "prepared response"
        );

        ChunkedResponse {
            segments,
            total_length: char_len(text),
            mode: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChunkConfig::default();
        assert_eq!(config.mode, ChunkMode::Smart);
        assert_eq!(config.capacity.desired(), 1500);
        assert_eq!(config.capacity.max(), 2000);
        assert_eq!(config.smart.markdown_pairs.len(), 6);
        assert!(config.smart.code_blocks && config.smart.list_items && config.smart.table_rows);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_sizes_errors() {
        assert!(matches!(
            ChunkConfig::default().with_sizes(0, 10),
            Err(Error::InvalidChunkSize(0))
        ));
        assert!(matches!(
            ChunkConfig::default().with_sizes(20, 10),
            Err(Error::Capacity(_))
        ));
    }

    #[test]
    fn test_modes_use_their_size() {
        let text = "word ".repeat(40);
        let config = ChunkConfig::new(ChunkMode::Characters)
            .with_sizes(50, 120)
            .unwrap();
        let response = config.respond(&text);
        assert_eq!(response.chunk_count(), 4);
        assert!(response.segments.iter().all(|s| s.len() <= 50));

        let response = config.with_mode(ChunkMode::Smart).respond(&text);
        assert_eq!(response.chunk_count(), 2);
        assert!(response.segments.iter().all(|s| s.len() <= 120));
    }

    #[test]
    fn test_sentences_mode_ignores_paragraphs() {
        let text = "One.\n\nTwo. Three";
        let config = ChunkConfig::new(ChunkMode::Sentences)
            .with_sizes(10, 10)
            .unwrap();
        let pieces: Vec<_> = config
            .respond(text)
            .segments
            .into_iter()
            .map(|s| s.content)
            .collect();
        assert_eq!(pieces, vec!["One.\n\nTwo", "Three"]);
    }

    #[test]
    fn test_response_metadata() {
        let config = ChunkConfig::new(ChunkMode::Paragraphs)
            .with_sizes(10, 10)
            .unwrap();
        let response = config.respond("aaaa\n\nbbbb\n\ncccc");
        assert_eq!(response.total_length, 16);
        assert_eq!(response.mode, ChunkMode::Paragraphs);
        assert_eq!(response.chunk_count(), 2);
        assert!(response.segments[1].is_last);
    }

    #[test]
    fn test_empty_text_gives_no_segments() {
        let response = ChunkConfig::default().respond("");
        assert_eq!(response.chunk_count(), 0);
        assert_eq!(response.total_length, 0);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ChunkMode::Smart.to_string(), "smart");
        assert_eq!(ChunkMode::Sentences.as_str(), "sentences");
    }
}
