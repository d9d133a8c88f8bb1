//! Alignment of a line edit script into two synchronized columns
//!
//! Two passes: [`detect_modifications`] merges each removed hunk that is
//! immediately followed by an added hunk into a modified block, and
//! [`emit_rows`] expands the result into left/right rows, inserting
//! placeholders so both columns stay the same height.

use crate::algorithm::SequenceDiff;
use crate::diff::{AlignedRow, ContentRow, EditOp, LineClass, LinePair, ProcessedOp, SideBySide, WordSpan};
use crate::highlight::word_diff;

/// Merge adjacent `Removed` -> `Added` pairs into `Modified` blocks.
///
/// Single greedy pass with no lookback: only an added op directly after a
/// removed op is merged. A removed hunk whose counterpart sits behind an
/// unchanged hunk stays a plain removal.
pub fn detect_modifications(ops: Vec<EditOp>) -> Vec<ProcessedOp> {
    let mut processed = Vec::with_capacity(ops.len());
    let mut ops = ops.into_iter().peekable();

    while let Some(op) = ops.next() {
        let next = match op {
            EditOp::Removed(old) => match ops.next_if(EditOp::is_added) {
                Some(EditOp::Added(new)) => {
                    log::trace!("modified block: {} -> {} bytes", old.len(), new.len());
                    ProcessedOp::Modified { old, new }
                }
                _ => ProcessedOp::Removed(old),
            },
            EditOp::Added(value) => ProcessedOp::Added(value),
            EditOp::Unchanged(value) => ProcessedOp::Unchanged(value),
        };
        processed.push(next);
    }

    processed
}

/// Split a hunk value into lines, dropping the empty tail left by a
/// terminating newline.
pub fn split_lines(value: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = value.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Pair the lines of a modified block by index.
///
/// The shorter side is padded with empty lines, so the result has
/// `max(old, new)` entries.
pub fn pair_lines<'a>(old: &'a str, new: &'a str) -> Vec<LinePair<'a>> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let count = old_lines.len().max(new_lines.len());

    (0..count)
        .map(|i| LinePair {
            old: old_lines.get(i).copied().unwrap_or(""),
            new: new_lines.get(i).copied().unwrap_or(""),
            old_is_padding: i >= old_lines.len(),
            new_is_padding: i >= new_lines.len(),
        })
        .collect()
}

/// Expand processed ops into two equally long columns of rows
pub fn emit_rows(ops: &[ProcessedOp], differ: &dyn SequenceDiff) -> SideBySide {
    let mut columns = Columns::default();

    for op in ops {
        match op {
            ProcessedOp::Unchanged(value) => {
                for line in split_lines(value) {
                    let spans = vec![WordSpan::Unchanged(line.to_string())];
                    columns.push_left(LineClass::Unchanged, spans.clone(), false);
                    columns.push_right(LineClass::Unchanged, spans, false);
                }
            }
            ProcessedOp::Removed(value) => {
                for line in split_lines(value) {
                    let spans = vec![WordSpan::RemovedWord(line.to_string())];
                    columns.push_left(LineClass::Removed, spans, false);
                    columns.right.push(AlignedRow::Placeholder);
                }
            }
            ProcessedOp::Added(value) => {
                for line in split_lines(value) {
                    let spans = vec![WordSpan::AddedWord(line.to_string())];
                    columns.left.push(AlignedRow::Placeholder);
                    columns.push_right(LineClass::Added, spans, false);
                }
            }
            ProcessedOp::Modified { old, new } => {
                for pair in pair_lines(old, new) {
                    let highlight = word_diff(differ, pair.old, pair.new);
                    columns.push_left(LineClass::Modified, highlight.left, pair.old_is_padding);
                    columns.push_right(LineClass::Modified, highlight.right, pair.new_is_padding);
                }
            }
        }
    }

    columns.finish()
}

/// Row buffers with one line counter per column
#[derive(Default)]
struct Columns {
    left: Vec<AlignedRow>,
    right: Vec<AlignedRow>,
    left_line: usize,
    right_line: usize,
}

impl Columns {
    fn push_left(&mut self, class: LineClass, spans: Vec<WordSpan>, is_padding: bool) {
        self.left_line += 1;
        self.left.push(content(self.left_line, class, spans, is_padding));
    }

    fn push_right(&mut self, class: LineClass, spans: Vec<WordSpan>, is_padding: bool) {
        self.right_line += 1;
        self.right.push(content(self.right_line, class, spans, is_padding));
    }

    fn finish(self) -> SideBySide {
        debug_assert_eq!(self.left.len(), self.right.len());
        SideBySide {
            left: self.left,
            right: self.right,
        }
    }
}

fn content(line_number: usize, class: LineClass, spans: Vec<WordSpan>, is_padding: bool) -> AlignedRow {
    AlignedRow::Content(ContentRow {
        line_number,
        class,
        spans,
        is_padding,
    })
}
