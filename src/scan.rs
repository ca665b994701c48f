//! Line-oriented scanning with guarded blocks.
//!
//! Some constructs must not be cut in the middle: a fenced code block, a
//! table, a list. The scanner walks the text line by line through a small
//! state machine and groups lines into units:
//!
//! ```text
//! line                      state after   unit
//! ------------------------  ------------  --------------------
//! "Intro."                  Outside       [Intro.]
//! "```rust"                 InCode        [```rust
//! "fn main() {}"            InCode         fn main() {}
//! "```"                     Outside        ```]
//! "Outro."                  Outside       [Outro.]
//! ```
//!
//! Every line outside a block is a unit of its own. A whole block is one
//! atomic unit. Units are then packed greedily with `"\n"`, so the rule
//! "never flush inside a guarded block" holds by construction, and a block
//! that does not fit after the buffered text starts a fresh segment.
//!
//! How a block ends depends on the guard:
//!
//! | Guard | Opens on | Closes on | Closing line in block? |
//! |-------|----------|-----------|------------------------|
//! | Code  | trimmed line starts with ```` ``` ```` | next fence line | yes |
//! | Table | line containing `|` | blank line | no |
//! | List  | `-`, `*`, `+` or `1.` item | blank line or indentation change | no |

use crate::pack::{char_len, Packer};

/// Which construct a scan keeps together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Guard {
    /// Fenced code blocks.
    Code,
    /// Pipe-delimited tables.
    Table,
    /// Bulleted or numbered lists.
    List,
}

/// Scanner state after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// Not inside any guarded block.
    Outside,
    /// Between an opening and a closing fence.
    InCode,
    /// Inside a table.
    InTable,
    /// Inside a list whose items sit at `indent` leading whitespace chars.
    InList {
        /// Leading whitespace of the list items.
        indent: usize,
    },
}

impl BlockState {
    /// Whether flushing is suppressed in this state.
    #[must_use]
    pub const fn is_guarded(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// What a line does to the block structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Line is outside any block.
    Free,
    /// Line opens a block.
    Open,
    /// Line continues the current block.
    Inside,
    /// Line is the last member of the current block.
    Close,
    /// The current block ended before this line, which is outside.
    Exit,
}

/// Whether `line`, once trimmed, starts with a code fence.
pub(crate) fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Leading whitespace of `line`, in chars.
fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// If `line` is a list item (`- x`, `* x`, `+ x`, `12. x`), its indentation.
pub(crate) fn list_item_indent(line: &str) -> Option<usize> {
    let indent = indent_of(line);
    let rest = line.trim_start();

    let after_marker = if let Some(rest) = rest.strip_prefix(['-', '*', '+']) {
        rest
    } else {
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        rest[digits..].strip_prefix('.')?
    };

    after_marker
        .starts_with(char::is_whitespace)
        .then_some(indent)
}

/// The guarded-block state machine.
#[derive(Debug, Clone)]
pub struct BlockScanner {
    guard: Guard,
    state: BlockState,
}

impl BlockScanner {
    /// Create a scanner for one kind of block, starting outside.
    #[must_use]
    pub const fn new(guard: Guard) -> Self {
        Self {
            guard,
            state: BlockState::Outside,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> BlockState {
        self.state
    }

    /// Advance over one line and return the new state.
    pub fn advance(&mut self, line: &str) -> BlockState {
        self.step(line);
        self.state
    }

    fn step(&mut self, line: &str) -> Step {
        use BlockState::{InCode, InList, InTable, Outside};

        let (next, step) = match (self.guard, self.state) {
            (Guard::Code, Outside) if is_fence(line) => (InCode, Step::Open),
            (Guard::Code, InCode) if is_fence(line) => (Outside, Step::Close),
            (Guard::Code, InCode) => (InCode, Step::Inside),

            (Guard::Table, Outside) if line.contains('|') => (InTable, Step::Open),
            (Guard::Table, InTable) if line.contains('|') => (InTable, Step::Inside),
            (Guard::Table, InTable) if line.trim().is_empty() => (Outside, Step::Exit),
            (Guard::Table, InTable) => (InTable, Step::Inside),

            (Guard::List, state) => match (list_item_indent(line), state) {
                (Some(indent), Outside) => (InList { indent }, Step::Open),
                (Some(indent), _) => (InList { indent }, Step::Inside),
                (None, InList { indent })
                    if !line.trim().is_empty() && indent_of(line) == indent =>
                {
                    (state, Step::Inside)
                }
                (None, InList { .. }) => (Outside, Step::Exit),
                (None, _) => (Outside, Step::Free),
            },

            (_, state) => (state, Step::Free),
        };

        self.state = next;
        step
    }

    /// Group the lines of `text` into units: single free lines and whole blocks.
    ///
    /// Unit texts borrow from `text` and rejoin with `"\n"` to the exact input.
    /// An unterminated block runs to the end of the text.
    pub fn units<'t>(&mut self, text: &'t str) -> Vec<Unit<'t>> {
        let mut units = Vec::new();
        let mut block_start: Option<usize> = None;
        let mut offset = 0;

        for line in text.split('\n') {
            let start = offset;
            let end = start + line.len();
            offset = end + 1;

            match self.step(line) {
                Step::Free => units.push(Unit::line(line)),
                Step::Open => block_start = Some(start),
                Step::Inside => {}
                Step::Close => {
                    let from = block_start.take().unwrap_or(start);
                    units.push(Unit::block(&text[from..end]));
                }
                Step::Exit => {
                    if let Some(from) = block_start.take() {
                        // block ended on the previous line
                        units.push(Unit::block(&text[from..start - 1]));
                    }
                    units.push(Unit::line(line));
                }
            }
        }

        if let Some(from) = block_start {
            units.push(Unit::block(&text[from..]));
        }

        units
    }
}

/// One packing unit produced by [`BlockScanner::units`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'t> {
    /// The unit's lines, joined by `"\n"`.
    pub text: &'t str,
    /// Whether the unit is a guarded block rather than a free line.
    pub guarded: bool,
}

impl<'t> Unit<'t> {
    const fn line(text: &'t str) -> Self {
        Self {
            text,
            guarded: false,
        }
    }

    const fn block(text: &'t str) -> Self {
        Self {
            text,
            guarded: true,
        }
    }
}

/// Split `text` on line boundaries, keeping guarded blocks whole.
///
/// Segments never exceed `max_size` chars unless a single block, or a single
/// line, is larger than that on its own; such a unit becomes its own segment.
pub(crate) fn split_guarded(text: &str, max_size: usize, guard: Guard) -> Vec<String> {
    let mut packer = Packer::new(max_size, "\n");

    for unit in BlockScanner::new(guard).units(text) {
        if unit.guarded && char_len(unit.text) > max_size {
            tracing::debug!(
                ?guard,
                unit_len = char_len(unit.text),
                max_size,
                "guarded block exceeds max size, emitting whole"
            );
        }
        packer.push(unit.text);
    }

    packer.finish()
}
