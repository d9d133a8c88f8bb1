//! Main diff engine implementation

use crate::algorithm::{SequenceDiff, SimilarDiff};
use crate::align::{detect_modifications, emit_rows};
use crate::config::DiffConfig;
use crate::diff::SideBySide;
use crate::pipeline::TextPipeline;
use crate::tokenizers::LineTokenizer;

/// Side-by-side comparison engine.
///
/// Stateless between calls: one engine can serve any number of comparisons,
/// from any number of threads.
pub struct DiffEngine {
    config: DiffConfig,
    pipeline: TextPipeline,
    differ: Box<dyn SequenceDiff>,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        let pipeline = config.resolve_pipeline();
        let differ = Box::new(SimilarDiff::new(config.algorithm).with_timeout(config.timeout));

        Self {
            config,
            pipeline,
            differ,
        }
    }

    /// Create a diff engine with default configuration
    pub fn default_config() -> Self {
        Self::new(DiffConfig::default())
    }

    /// Replace the diff primitive used for both the line and the word pass
    pub fn with_differ(mut self, differ: Box<dyn SequenceDiff>) -> Self {
        self.differ = differ;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compare two documents and return their aligned columns
    pub fn compare(&self, original: &str, modified: &str) -> SideBySide {
        let original = self.pipeline.apply(original);
        let modified = self.pipeline.apply(modified);
        log::debug!(
            "comparing {} and {} normalized bytes with {}",
            original.len(),
            modified.len(),
            self.config.algorithm
        );

        let ops = self.differ.diff_text(&LineTokenizer, &original, &modified);
        let raw_count = ops.len();
        let processed = detect_modifications(ops);
        log::debug!("{} line hunks, {} after modification detection", raw_count, processed.len());

        let result = emit_rows(&processed, self.differ.as_ref());
        log::debug!("emitted {} aligned rows", result.len());
        result
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffAlgorithm;
    use crate::diff::{EditOp, LineClass};
    use crate::normalizers::CustomNormalizer;
    use crate::tokenizers::Token;

    #[test]
    fn test_identical_text() {
        let engine = DiffEngine::default();
        let result = engine.compare("hello\nworld\n", "hello\nworld\n");

        assert_eq!(result.len(), 2);
        assert!(result.is_identical());
    }

    #[test]
    fn test_single_line_change() {
        let engine = DiffEngine::default();
        let result = engine.compare("a\nb\nc\n", "a\nB\nc\n");

        let classes: Vec<_> = result.left.iter().map(|r| r.class()).collect();
        assert_eq!(
            classes,
            vec![
                Some(LineClass::Unchanged),
                Some(LineClass::Modified),
                Some(LineClass::Unchanged),
            ]
        );
    }

    #[test]
    fn test_ignore_case_config() {
        let engine = DiffEngine::new(DiffConfig::new().with_ignore_case(true));
        let result = engine.compare("HELLO WORLD", "hello world");

        assert!(result.is_identical());
        assert_eq!(result.left[0].as_content().unwrap().text(), "hello world");
    }

    #[test]
    fn test_custom_pipeline_overrides_options() {
        let config = DiffConfig::new()
            .with_ignore_case(true)
            .with_pipeline(TextPipeline::new().add_normalizer(Box::new(CustomNormalizer::new(
                "strip_cr",
                |s: &str| s.replace('\r', ""),
            ))));
        let engine = DiffEngine::new(config);

        assert!(engine.compare("a\r\nb\r\n", "a\nb\n").is_identical());
        assert!(!engine.compare("A\n", "a\n").is_identical());
    }

    #[test]
    fn test_algorithms_agree_on_simple_input() {
        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
            let engine = DiffEngine::new(DiffConfig::new().with_algorithm(algorithm));
            let summary = engine.compare("a\nb\nc\n", "a\nc\nd\n").summary();

            assert_eq!(summary.unchanged, 2, "algorithm {algorithm}");
            assert_eq!(summary.changes(), 2, "algorithm {algorithm}");
        }
    }

    struct EverythingChanged;

    impl SequenceDiff for EverythingChanged {
        fn diff(&self, original: &[Token<'_>], modified: &[Token<'_>]) -> Vec<EditOp> {
            let old: String = original.iter().map(|t| t.text).collect();
            let new: String = modified.iter().map(|t| t.text).collect();
            [EditOp::Removed(old), EditOp::Added(new)]
                .into_iter()
                .filter(|op| !op.value().is_empty())
                .collect()
        }
    }

    #[test]
    fn test_custom_differ() {
        let engine = DiffEngine::default().with_differ(Box::new(EverythingChanged));
        let result = engine.compare("same\n", "same\n");

        assert_eq!(result.len(), 1);
        assert_eq!(result.left[0].class(), Some(LineClass::Modified));
    }
}
