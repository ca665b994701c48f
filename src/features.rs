//! Structural classification of a text body.
//!
//! Before choosing a strategy, the adaptive chunker asks three questions:
//!
//! - Is there code? A ```` ``` ```` fence or an inline `` `span` ``.
//! - Is there a table? A pipe-delimited row plus a separator row (`|---|---|`).
//! - Is there a list? A line starting with `-`, `*`, `+` or `1.` and a space.
//!
//! The answers are cheap to compute and only steer strategy selection.
//! [`TextAnalyzer`] adds a few statistics on top for callers that log or
//! display them.

use std::collections::BTreeMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::pack::char_len;
use crate::scan::list_item_indent;
use crate::SmartChunkConfig;

/// Which guarded constructs a text contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextFeatures {
    /// Contains a fenced code block or an inline code span.
    pub has_code: bool,
    /// Contains a pipe-delimited table with a separator row.
    pub has_tables: bool,
    /// Contains a bulleted or numbered list item.
    pub has_lists: bool,
}

impl TextFeatures {
    /// Detect every feature in `text`.
    ///
    /// ```rust
    /// use fenced::TextFeatures;
    ///
    /// let features = TextFeatures::detect("Run `cargo test`:\n\n- fast\n- easy");
    /// assert!(features.has_code);
    /// assert!(features.has_lists);
    /// assert!(!features.has_tables);
    /// ```
    #[must_use]
    pub fn detect(text: &str) -> Self {
        Self {
            has_code: has_code(text),
            has_tables: has_tables(text),
            has_lists: has_lists(text),
        }
    }

    /// Whether none of the features is present.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        !(self.has_code || self.has_tables || self.has_lists)
    }
}

fn has_code(text: &str) -> bool {
    if text.contains("```") {
        return true;
    }

    // a non-empty run between two backticks
    let pieces: Vec<&str> = text.split('`').collect();
    pieces.len() > 2 && pieces[1..pieces.len() - 1].iter().any(|p| !p.is_empty())
}

fn is_separator_row(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty()
        && line.contains('|')
        && line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

fn has_tables(text: &str) -> bool {
    let mut rows = false;
    let mut separator = false;

    for line in text.lines() {
        if is_separator_row(line) {
            separator = true;
        } else if line.contains('|') {
            rows = true;
        }
        if rows && separator {
            return true;
        }
    }

    false
}

fn has_lists(text: &str) -> bool {
    text.lines().any(|line| list_item_indent(line).is_some())
}

/// Features plus descriptive statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAnalysis {
    /// Structural features, after the config's detection switches.
    pub features: TextFeatures,
    /// Mean length of a UAX #29 sentence, in chars. Zero without sentences.
    pub avg_sentence_length: f64,
    /// Markdown delimiter occurrences per char of text.
    pub markdown_density: f64,
    /// Delimiters left open, with how many are missing their closer.
    pub open_tags: BTreeMap<String, usize>,
}

/// Analyzes text according to a [`SmartChunkConfig`].
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    config: SmartChunkConfig,
}

impl TextAnalyzer {
    /// Create an analyzer.
    #[must_use]
    pub fn new(config: SmartChunkConfig) -> Self {
        Self { config }
    }

    /// The analyzer's configuration.
    #[must_use]
    pub const fn config(&self) -> &SmartChunkConfig {
        &self.config
    }

    /// Detect the features enabled in the configuration.
    #[must_use]
    pub fn features(&self, text: &str) -> TextFeatures {
        TextFeatures {
            has_code: self.config.code_blocks && has_code(text),
            has_tables: self.config.table_rows && has_tables(text),
            has_lists: self.config.list_items && has_lists(text),
        }
    }

    /// Full analysis of `text`.
    #[must_use]
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        TextAnalysis {
            features: self.features(text),
            avg_sentence_length: avg_sentence_length(text),
            markdown_density: self.markdown_density(text),
            open_tags: self.open_tags(text),
        }
    }

    fn markdown_density(&self, text: &str) -> f64 {
        let len = char_len(text);
        if len == 0 {
            return 0.0;
        }

        let occurrences: usize = self
            .config
            .markdown_pairs
            .iter()
            .map(|(open, close)| {
                text.matches(open.as_str()).count() + text.matches(close.as_str()).count()
            })
            .sum();

        occurrences as f64 / len as f64
    }

    fn open_tags(&self, text: &str) -> BTreeMap<String, usize> {
        let mut open_tags = BTreeMap::new();

        for (open, close) in &self.config.markdown_pairs {
            let opened = text.matches(open.as_str()).count();
            let surplus = if open == close {
                opened % 2
            } else {
                opened.saturating_sub(text.matches(close.as_str()).count())
            };
            if surplus > 0 {
                open_tags.insert(open.clone(), surplus);
            }
        }

        open_tags
    }
}

fn avg_sentence_length(text: &str) -> f64 {
    let (count, total) = text
        .unicode_sentences()
        .fold((0usize, 0usize), |(count, total), s| (count + 1, total + char_len(s)));

    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
