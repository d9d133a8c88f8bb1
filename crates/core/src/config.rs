//! Configuration for the diff engine

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pipeline::TextPipeline;

/// Diff algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Myers O(ND) algorithm (default, fast for small differences)
    #[default]
    Myers,
    /// Patience diff (better for structured text, more human-readable)
    Patience,
    /// Classic longest-common-subsequence table
    Lcs,
}

impl DiffAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffAlgorithm::Myers => "myers",
            DiffAlgorithm::Patience => "patience",
            DiffAlgorithm::Lcs => "lcs",
        }
    }
}

impl FromStr for DiffAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "myers" => Ok(DiffAlgorithm::Myers),
            "patience" => Ok(DiffAlgorithm::Patience),
            "lcs" => Ok(DiffAlgorithm::Lcs),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved comparison options, as handed over by the host settings store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompareOptions {
    /// Collapse every run of whitespace (newlines included) into one space
    pub ignore_whitespace: bool,

    /// Lower-case both texts before comparing
    pub ignore_case: bool,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a settings bundle such as `{"ignoreWhitespace": true}`.
    ///
    /// Missing keys fall back to `false`; unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }
}

/// Configuration for a side-by-side comparison
#[derive(Clone, Default)]
pub struct DiffConfig {
    /// Algorithm used for both the line and the word pass
    pub algorithm: DiffAlgorithm,

    /// Whitespace and case handling
    pub options: CompareOptions,

    /// Custom preprocessing pipeline; replaces the one built from `options`
    pub pipeline: Option<TextPipeline>,

    /// Time budget handed to the diff primitive
    pub timeout: Option<Duration>,
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diff algorithm
    pub fn with_algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Replace all comparison options at once
    pub fn with_options(mut self, options: CompareOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.options.ignore_whitespace = ignore;
        self
    }

    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.options.ignore_case = ignore;
        self
    }

    /// Set the text normalization pipeline
    pub fn with_pipeline(mut self, pipeline: TextPipeline) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Bound the time spent in the diff primitive.
    ///
    /// When the budget runs out the primitive returns a coarser edit script;
    /// the comparison still completes.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The pipeline that will preprocess both inputs
    pub fn resolve_pipeline(&self) -> TextPipeline {
        self.pipeline
            .clone()
            .unwrap_or_else(|| TextPipeline::from_options(&self.options))
    }
}

impl fmt::Debug for DiffConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffConfig")
            .field("algorithm", &self.algorithm)
            .field("options", &self.options)
            .field("pipeline", &self.pipeline.as_ref().map(|p| p.normalizer_names()))
            .field("timeout", &self.timeout)
            .finish()
    }
}
