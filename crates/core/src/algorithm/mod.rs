//! Sequence diff primitive
//!
//! Computes the edit script between two token sequences. The minimal-edit
//! search itself is delegated to `similar`; this module turns its output into
//! hunks: between two unchanged runs there is at most one `Removed` op,
//! followed by at most one `Added` op.

use std::time::{Duration, Instant};

use similar::DiffTag;

use crate::config::DiffAlgorithm;
use crate::diff::EditOp;
use crate::tokenizers::{Token, Tokenizer};

/// Trait for diff primitives
pub trait SequenceDiff: Send + Sync {
    /// Compute the hunks between two token sequences.
    ///
    /// Concatenating the `Unchanged` and `Removed` values rebuilds `original`;
    /// concatenating the `Unchanged` and `Added` values rebuilds `modified`.
    fn diff(&self, original: &[Token<'_>], modified: &[Token<'_>]) -> Vec<EditOp>;

    /// Tokenize both texts and diff the results
    fn diff_text(&self, tokenizer: &dyn Tokenizer, original: &str, modified: &str) -> Vec<EditOp> {
        let original_tokens = tokenizer.tokenize(original);
        let modified_tokens = tokenizer.tokenize(modified);
        self.diff(&original_tokens, &modified_tokens)
    }
}

/// Diff primitive backed by the `similar` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarDiff {
    algorithm: DiffAlgorithm,
    timeout: Option<Duration>,
}

impl SimilarDiff {
    pub fn new(algorithm: DiffAlgorithm) -> Self {
        Self {
            algorithm,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl SequenceDiff for SimilarDiff {
    fn diff(&self, original: &[Token<'_>], modified: &[Token<'_>]) -> Vec<EditOp> {
        let old: Vec<&str> = original.iter().map(|t| t.text).collect();
        let new: Vec<&str> = modified.iter().map(|t| t.text).collect();

        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
        let ops = similar::capture_diff_slices_deadline(
            to_similar_algorithm(self.algorithm),
            &old,
            &new,
            deadline,
        );

        let mut hunks = HunkBuilder::default();
        for op in &ops {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => hunks.keep(&old[old_range]),
                DiffTag::Delete => hunks.remove(&old[old_range]),
                DiffTag::Insert => hunks.add(&new[new_range]),
                DiffTag::Replace => {
                    hunks.remove(&old[old_range]);
                    hunks.add(&new[new_range]);
                }
            }
        }

        hunks.finish()
    }
}

fn to_similar_algorithm(algorithm: DiffAlgorithm) -> similar::Algorithm {
    match algorithm {
        DiffAlgorithm::Myers => similar::Algorithm::Myers,
        DiffAlgorithm::Patience => similar::Algorithm::Patience,
        DiffAlgorithm::Lcs => similar::Algorithm::Lcs,
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Accumulates token runs into hunks
#[derive(Default)]
struct HunkBuilder {
    ops: Vec<EditOp>,
    unchanged: String,
    removed: String,
    added: String,
}

impl HunkBuilder {
    fn keep(&mut self, tokens: &[&str]) {
        self.flush_changes();
        self.unchanged.extend(tokens.iter().copied());
    }

    fn remove(&mut self, tokens: &[&str]) {
        self.flush_unchanged();
        self.removed.extend(tokens.iter().copied());
    }

    fn add(&mut self, tokens: &[&str]) {
        self.flush_unchanged();
        self.added.extend(tokens.iter().copied());
    }

    fn flush_unchanged(&mut self) {
        if !self.unchanged.is_empty() {
            self.ops.push(EditOp::Unchanged(std::mem::take(&mut self.unchanged)));
        }
    }

    fn flush_changes(&mut self) {
        if !self.removed.is_empty() {
            self.ops.push(EditOp::Removed(std::mem::take(&mut self.removed)));
        }
        if !self.added.is_empty() {
            self.ops.push(EditOp::Added(std::mem::take(&mut self.added)));
        }
    }

    fn finish(mut self) -> Vec<EditOp> {
        self.flush_unchanged();
        self.flush_changes();
        self.ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizers::{LineTokenizer, WordTokenizer};

    fn rebuild(ops: &[EditOp]) -> (String, String) {
        let mut original = String::new();
        let mut modified = String::new();
        for op in ops {
            match op {
                EditOp::Unchanged(v) => {
                    original.push_str(v);
                    modified.push_str(v);
                }
                EditOp::Removed(v) => original.push_str(v),
                EditOp::Added(v) => modified.push_str(v),
            }
        }
        (original, modified)
    }

    #[test]
    fn test_line_diff_single_change() {
        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
            let ops = SimilarDiff::new(algorithm).diff_text(&LineTokenizer, "a\nb\nc\n", "a\nx\nc\n");

            assert_eq!(
                ops,
                vec![
                    EditOp::Unchanged("a\n".to_string()),
                    EditOp::Removed("b\n".to_string()),
                    EditOp::Added("x\n".to_string()),
                    EditOp::Unchanged("c\n".to_string()),
                ],
                "algorithm {algorithm}"
            );
        }
    }

    #[test]
    fn test_all_insertions() {
        let ops = SimilarDiff::default().diff_text(&LineTokenizer, "", "a\nb");
        assert_eq!(ops, vec![EditOp::Added("a\nb".to_string())]);
    }

    #[test]
    fn test_all_deletions() {
        let ops = SimilarDiff::default().diff_text(&LineTokenizer, "a\nb\n", "");
        assert_eq!(ops, vec![EditOp::Removed("a\nb\n".to_string())]);
    }

    #[test]
    fn test_identical_is_one_hunk() {
        let ops = SimilarDiff::default().diff_text(&LineTokenizer, "a\nb\n", "a\nb\n");
        assert_eq!(ops, vec![EditOp::Unchanged("a\nb\n".to_string())]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(SimilarDiff::default().diff_text(&LineTokenizer, "", "").is_empty());
    }

    #[test]
    fn test_removed_precedes_added() {
        let ops = SimilarDiff::default().diff_text(&WordTokenizer, "the cat sat", "the dog sat");

        assert_eq!(
            ops,
            vec![
                EditOp::Unchanged("the ".to_string()),
                EditOp::Removed("cat".to_string()),
                EditOp::Added("dog".to_string()),
                EditOp::Unchanged(" sat".to_string()),
            ]
        );
    }

    #[test]
    fn test_hunks_rebuild_inputs() {
        let original = "one\ntwo\nthree\nfour\nfive\n";
        let modified = "zero\none\nthree\n4\nfive\nsix";
        let ops = SimilarDiff::default().diff_text(&LineTokenizer, original, modified);

        assert_eq!(rebuild(&ops), (original.to_string(), modified.to_string()));
        for pair in ops.windows(2) {
            assert!(
                !matches!(
                    (&pair[0], &pair[1]),
                    (EditOp::Added(_), EditOp::Removed(_))
                        | (EditOp::Added(_), EditOp::Added(_))
                        | (EditOp::Removed(_), EditOp::Removed(_))
                        | (EditOp::Unchanged(_), EditOp::Unchanged(_))
                ),
                "uncoalesced hunks: {pair:?}"
            );
        }
    }

    #[test]
    fn test_expired_deadline_still_rebuilds() {
        let original = "a\nb\nc\nd\ne\nf\n";
        let modified = "a\nc\nb\nd\nf\ne\n";
        let ops = SimilarDiff::default()
            .with_timeout(Some(Duration::ZERO))
            .diff_text(&LineTokenizer, original, modified);

        assert_eq!(rebuild(&ops), (original.to_string(), modified.to_string()));
    }
}
