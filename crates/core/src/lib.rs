//! # sidediff
//!
//! Side-by-side text comparison. Two documents go in; two position-synchronized
//! columns of rows come out, ready for a renderer to draw next to each other.
//!
//! ## Core Concepts
//!
//! - **Normalizers / Pipelines**: optional whitespace collapsing and case
//!   folding applied to both documents before they are compared
//! - **Tokenizers**: split text into lines or whitespace-preserving words
//! - **SequenceDiff**: the edit-script primitive, backed by `similar`
//! - **Alignment**: merges adjacent removed/added hunks into modified blocks,
//!   highlights changed words inside them, and pads each column with
//!   placeholder rows so the two stay aligned
//!
//! ## Example
//!
//! ```rust
//! use sidediff_core::{compare, DiffConfig, LineClass};
//!
//! let config = DiffConfig::default().with_ignore_case(true);
//! let result = compare("Hello\nWorld\n", "hello\nRust\n", Some(config));
//!
//! assert_eq!(result.left.len(), result.right.len());
//! assert_eq!(result.left[0].class(), Some(LineClass::Unchanged));
//! assert_eq!(result.left[1].class(), Some(LineClass::Modified));
//! ```

pub mod algorithm;
pub mod align;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod normalizers;
pub mod pipeline;
pub mod tokenizers;

// Re-export main types
pub use config::{CompareOptions, DiffAlgorithm, DiffConfig};
pub use diff::{
    AlignedRow, ContentRow, DiffSummary, EditOp, LineClass, LinePair, ProcessedOp, SideBySide,
    WordSpan,
};
pub use engine::DiffEngine;
pub use error::{Error, Result};
pub use pipeline::{normalize, TextPipeline};

/// Main entry point for comparing two documents
///
/// # Arguments
///
/// * `original` - The first document (left column)
/// * `modified` - The second document (right column)
/// * `config` - Optional configuration (uses default if None)
///
/// # Example
///
/// ```rust
/// use sidediff_core::compare;
///
/// let result = compare("", "a\nb", None);
/// assert!(result.left.iter().all(|row| row.is_placeholder()));
/// assert_eq!(result.right.len(), 2);
/// ```
pub fn compare(original: &str, modified: &str, config: Option<DiffConfig>) -> SideBySide {
    let config = config.unwrap_or_default();
    let engine = DiffEngine::new(config);
    engine.compare(original, modified)
}
