//! Splitting help pages and notifications into reply segments.
//!
//! Front-ends often build a long reply out of several pre-rendered parts
//! (help sections, notification templates). The parts are concatenated as-is
//! and split once, so part boundaries do not force extra messages. The first
//! segment goes out as the direct reply, the rest as follow-ups.

use crate::{markdown_aware_chunk, smart_chunk, Segment};

/// Concatenate `parts` and split the result into at most `cap`-char segments.
///
/// With `markdown` set, fenced code blocks are kept whole
/// ([`markdown_aware_chunk`]); otherwise prose tiers are used ([`smart_chunk`]).
/// An empty result means there was nothing to send.
///
/// ```rust
/// use fenced::reply_chunks;
///
/// let parts = ["**Commands**\n\n", "`/link` links a project.\n\n", "`/help` shows this."];
/// let segments = reply_chunks(&parts, 2000, true);
///
/// assert_eq!(segments.len(), 1);
/// assert!(segments[0].is_first() && segments[0].is_last);
/// ```
pub fn reply_chunks<S: AsRef<str>>(parts: &[S], cap: usize, markdown: bool) -> Vec<Segment> {
    let content: String = parts.iter().map(AsRef::as_ref).collect();

    let pieces = if markdown {
        markdown_aware_chunk(&content, cap)
    } else {
        smart_chunk(&content, cap)
    };

    Segment::sequence(pieces)
}
