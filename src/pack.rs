//! Greedy packing shared by every boundary-aware strategy.
//!
//! Units arrive in source order. Each one is appended to a running buffer with
//! the strategy's separator, unless that would push the buffer past the maximum,
//! in which case the buffer is emitted as a finished segment first.
//!
//! ```text
//! max = 12, sep = " "
//!
//! units:  "alpha" "beta" "gamma" "delta"
//! buffer: "alpha" -> "alpha beta" -> flush -> "gamma" -> "gamma delta"
//! output: ["alpha beta", "gamma delta"]
//! ```
//!
//! An empty buffer always accepts the next unit, so a unit larger than the
//! maximum ends up alone in its own segment instead of being cut.

/// Length of `text` in `char`s.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Slice `text` into pieces of at most `max` chars, cutting on char boundaries.
pub(crate) fn slice_chars(text: &str, max: usize) -> Vec<&str> {
    let max = max.max(1);
    let mut pieces = Vec::with_capacity(text.len() / max + 1);
    let mut start = 0;
    let mut count = 0;

    for (pos, _) in text.char_indices() {
        if count == max {
            pieces.push(&text[start..pos]);
            start = pos;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

#[derive(Debug)]
pub(crate) struct Packer<'s> {
    max: usize,
    sep: &'s str,
    sep_len: usize,
    buf: String,
    buf_len: usize,
    out: Vec<String>,
}

impl<'s> Packer<'s> {
    pub(crate) fn new(max: usize, sep: &'s str) -> Self {
        Self {
            max,
            sep,
            sep_len: char_len(sep),
            buf: String::new(),
            buf_len: 0,
            out: Vec::new(),
        }
    }

    /// Append one unit, flushing first if it would not fit.
    pub(crate) fn push(&mut self, unit: &str) {
        let unit_len = char_len(unit);

        if self.buf.is_empty() {
            self.buf.push_str(unit);
            self.buf_len = unit_len;
            return;
        }

        if self.buf_len + self.sep_len + unit_len <= self.max {
            self.buf.push_str(self.sep);
            self.buf.push_str(unit);
            self.buf_len += self.sep_len + unit_len;
        } else {
            self.flush();
            self.buf.push_str(unit);
            self.buf_len = unit_len;
        }
    }

    /// Take over the pieces of a unit that was split by a finer strategy.
    ///
    /// Everything but the last piece is emitted as-is. The last piece becomes
    /// the new buffer so following units keep accumulating onto it.
    pub(crate) fn splice(&mut self, pieces: Vec<String>) {
        self.flush();
        let mut pieces = pieces.into_iter().peekable();
        while let Some(piece) = pieces.next() {
            if pieces.peek().is_some() {
                self.out.push(piece);
            } else {
                self.buf_len = char_len(&piece);
                self.buf = piece;
            }
        }
    }

    fn flush(&mut self) {
        if !self.buf.is_empty() {
            self.out.push(std::mem::take(&mut self.buf));
        }
        self.buf_len = 0;
    }

    pub(crate) fn finish(mut self) -> Vec<String> {
        self.flush();
        self.out
    }
}
