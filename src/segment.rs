//! The Segment type: one outbound message worth of text.

use crate::ChunkMode;

/// A piece of chunked text, ready to be delivered as one message.
///
/// Segments know where they sit in their sequence so a front-end can label
/// them (`Part 2/3`) or treat the first one as the direct reply:
///
/// ```rust
/// use fenced::Segment;
///
/// let segments = Segment::sequence(vec!["first".to_string(), "second".to_string()]);
/// assert!(!segments[0].is_last);
/// assert!(segments[1].is_last);
/// assert_eq!(segments[1].metadata().chunk_number, 2);
/// assert_eq!(segments[1].metadata().total_chunks, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// The segment text.
    pub content: String,
    /// Zero-based index of this segment in the sequence.
    pub index: usize,
    /// Whether this is the final segment.
    pub is_last: bool,
    total: usize,
}

/// Derived facts about a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentMetadata {
    /// Length of the content in chars.
    pub length: usize,
    /// One-based position in the sequence.
    pub chunk_number: usize,
    /// Number of segments in the sequence.
    pub total_chunks: usize,
}

impl Segment {
    /// Wrap raw pieces into numbered segments, preserving their order.
    #[must_use]
    pub fn sequence(pieces: Vec<String>) -> Vec<Self> {
        let total = pieces.len();
        pieces
            .into_iter()
            .enumerate()
            .map(|(index, content)| Self {
                content,
                index,
                is_last: index + 1 == total,
                total,
            })
            .collect()
    }

    /// Length, position and total count.
    #[must_use]
    pub fn metadata(&self) -> SegmentMetadata {
        SegmentMetadata {
            length: self.len(),
            chunk_number: self.index + 1,
            total_chunks: self.total,
        }
    }

    /// Length of the content in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether this is the first segment, the one sent as a direct reply.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment {{ part: {}/{}, len: {} }}",
            self.index + 1,
            self.total,
            self.len()
        )
    }
}

/// A fully chunked response, as handed to a messaging front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkedResponse {
    /// Segments in delivery order.
    pub segments: Vec<Segment>,
    /// Length of the original text in chars.
    pub total_length: usize,
    /// Strategy that produced the segments.
    pub mode: ChunkMode,
}

impl ChunkedResponse {
    /// Number of segments.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.segments.len()
    }

    /// The segment sent as the direct reply, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// The segments sent as follow-ups after the direct reply.
    #[must_use]
    pub fn follow_ups(&self) -> &[Segment] {
        self.segments.get(1..).unwrap_or(&[])
    }
}
