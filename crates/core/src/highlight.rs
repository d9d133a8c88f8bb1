//! Word-level highlighting of a modified line pair

use crate::algorithm::SequenceDiff;
use crate::diff::{EditOp, WordSpan};
use crate::tokenizers::WordTokenizer;

/// Spans for the old (left) and new (right) rendering of a line pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordHighlight {
    pub left: Vec<WordSpan>,
    pub right: Vec<WordSpan>,
}

/// Highlight the words that differ between `old_line` and `new_line`.
///
/// When either line is empty no word diff runs: the non-empty side becomes a
/// single `Unchanged` span and the empty side gets no spans at all.
pub fn word_diff(differ: &dyn SequenceDiff, old_line: &str, new_line: &str) -> WordHighlight {
    if old_line.is_empty() || new_line.is_empty() {
        return WordHighlight {
            left: whole_line(old_line),
            right: whole_line(new_line),
        };
    }

    let mut highlight = WordHighlight::default();
    for op in differ.diff_text(&WordTokenizer, old_line, new_line) {
        match op {
            EditOp::Unchanged(text) => {
                highlight.left.push(WordSpan::Unchanged(text.clone()));
                highlight.right.push(WordSpan::Unchanged(text));
            }
            EditOp::Removed(text) => highlight.left.push(WordSpan::RemovedWord(text)),
            EditOp::Added(text) => highlight.right.push(WordSpan::AddedWord(text)),
        }
    }

    highlight
}

fn whole_line(line: &str) -> Vec<WordSpan> {
    if line.is_empty() {
        Vec::new()
    } else {
        vec![WordSpan::Unchanged(line.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::SimilarDiff;

    fn concat(spans: &[WordSpan]) -> String {
        spans.iter().map(WordSpan::text).collect()
    }

    #[test]
    fn test_single_word_change() {
        let highlight = word_diff(&SimilarDiff::default(), "let x = 1;", "let y = 1;");

        assert_eq!(
            highlight.left,
            vec![
                WordSpan::Unchanged("let ".to_string()),
                WordSpan::RemovedWord("x".to_string()),
                WordSpan::Unchanged(" = 1;".to_string()),
            ]
        );
        assert_eq!(
            highlight.right,
            vec![
                WordSpan::Unchanged("let ".to_string()),
                WordSpan::AddedWord("y".to_string()),
                WordSpan::Unchanged(" = 1;".to_string()),
            ]
        );
    }

    #[test]
    fn test_whole_line_replaced() {
        let highlight = word_diff(&SimilarDiff::default(), "x", "y");

        assert_eq!(highlight.left, vec![WordSpan::RemovedWord("x".to_string())]);
        assert_eq!(highlight.right, vec![WordSpan::AddedWord("y".to_string())]);
    }

    #[test]
    fn test_empty_old_line_skips_word_diff() {
        let highlight = word_diff(&SimilarDiff::default(), "", "brand new");

        assert!(highlight.left.is_empty());
        assert_eq!(highlight.right, vec![WordSpan::Unchanged("brand new".to_string())]);
    }

    #[test]
    fn test_empty_new_line_skips_word_diff() {
        let highlight = word_diff(&SimilarDiff::default(), "old text", "");

        assert_eq!(highlight.left, vec![WordSpan::Unchanged("old text".to_string())]);
        assert!(highlight.right.is_empty());
    }

    #[test]
    fn test_spans_rebuild_lines() {
        let old = "The quick  brown fox, jumps";
        let new = "A quick brown\tfox jumps high";
        let highlight = word_diff(&SimilarDiff::default(), old, new);

        assert_eq!(concat(&highlight.left), old);
        assert_eq!(concat(&highlight.right), new);
        assert!(highlight.left.iter().all(|s| !matches!(s, WordSpan::AddedWord(_))));
        assert!(highlight.right.iter().all(|s| !matches!(s, WordSpan::RemovedWord(_))));
    }
}
