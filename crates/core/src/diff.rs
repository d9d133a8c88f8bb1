//! Diff result types and structures
//!
//! `EditOp` is what the line diff produces, `ProcessedOp` is the same script
//! after modification detection, and `AlignedRow` is what a renderer reads.

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// A single hunk of a line or word level edit script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Text present only in the second document
    Added(String),
    /// Text present only in the first document
    Removed(String),
    /// Text present in both documents
    Unchanged(String),
}

impl EditOp {
    pub fn value(&self) -> &str {
        match self {
            EditOp::Added(value) | EditOp::Removed(value) | EditOp::Unchanged(value) => value,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, EditOp::Added(_))
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, EditOp::Removed(_))
    }
}

/// An edit op after adjacent removed/added pairs have been merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessedOp {
    /// A removed hunk immediately followed by an added hunk
    Modified { old: String, new: String },
    Added(String),
    Removed(String),
    Unchanged(String),
}

/// One old/new line pair inside a modified block.
///
/// A side that ran out of lines holds an empty string and is flagged as
/// padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePair<'a> {
    pub old: &'a str,
    pub new: &'a str,
    pub old_is_padding: bool,
    pub new_is_padding: bool,
}

/// Row classification shown in both columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineClass {
    Unchanged,
    Added,
    Removed,
    Modified,
}

impl fmt::Display for LineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineClass::Unchanged => "unchanged",
            LineClass::Added => "added",
            LineClass::Removed => "removed",
            LineClass::Modified => "modified",
        };
        f.write_str(name)
    }
}

/// A contiguous run of text within one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum WordSpan {
    Unchanged(String),
    #[serde(rename = "added")]
    AddedWord(String),
    #[serde(rename = "removed")]
    RemovedWord(String),
}

impl WordSpan {
    pub fn text(&self) -> &str {
        match self {
            WordSpan::Unchanged(text) | WordSpan::AddedWord(text) | WordSpan::RemovedWord(text) => {
                text
            }
        }
    }

    /// Whether the span should be highlighted
    pub fn is_changed(&self) -> bool {
        !matches!(self, WordSpan::Unchanged(_))
    }
}

/// A numbered line in one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRow {
    /// 1-based, counted per column
    pub line_number: usize,
    pub class: LineClass,
    pub spans: Vec<WordSpan>,
    /// Filler line inside a modified block whose other side is longer
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_padding: bool,
}

impl ContentRow {
    pub fn new(line_number: usize, class: LineClass, spans: Vec<WordSpan>) -> Self {
        Self {
            line_number,
            class,
            spans,
            is_padding: false,
        }
    }

    /// The full line text, rebuilt from the spans
    pub fn text(&self) -> String {
        self.spans.iter().map(WordSpan::text).collect()
    }
}

/// One row of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AlignedRow {
    Content(ContentRow),
    /// Keeps the column aligned where the other side has a line and this one does not
    Placeholder,
}

impl AlignedRow {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, AlignedRow::Placeholder)
    }

    pub fn as_content(&self) -> Option<&ContentRow> {
        match self {
            AlignedRow::Content(row) => Some(row),
            AlignedRow::Placeholder => None,
        }
    }

    pub fn class(&self) -> Option<LineClass> {
        self.as_content().map(|row| row.class)
    }

    pub fn line_number(&self) -> Option<usize> {
        self.as_content().map(|row| row.line_number)
    }
}

/// Row counts of a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffSummary {
    pub fn changes(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// The two position-synchronized columns of a comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SideBySide {
    /// Rows of the first document
    pub left: Vec<AlignedRow>,
    /// Rows of the second document
    pub right: Vec<AlignedRow>,
}

impl SideBySide {
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Iterate over `(left, right)` row pairs
    pub fn rows(&self) -> impl Iterator<Item = (&AlignedRow, &AlignedRow)> {
        self.left.iter().zip(self.right.iter())
    }

    /// Count rows per classification.
    ///
    /// Modified and unchanged rows are counted once per pair, added rows on
    /// the right and removed rows on the left.
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();

        for (left, right) in self.rows() {
            match (left.class(), right.class()) {
                (Some(LineClass::Unchanged), _) => summary.unchanged += 1,
                (Some(LineClass::Modified), _) => summary.modified += 1,
                (Some(LineClass::Removed), _) => summary.removed += 1,
                (_, Some(LineClass::Added)) => summary.added += 1,
                _ => {}
            }
        }

        summary
    }

    /// True when every row is unchanged
    pub fn is_identical(&self) -> bool {
        self.summary().changes() == 0
    }

    /// Serialize the rows for a renderer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
