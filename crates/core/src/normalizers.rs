//! Text normalizers
//!
//! Provides the `Normalizer` trait and the implementations used to prepare
//! both documents before they are compared.

use std::sync::Arc;

/// Trait for text normalizers
pub trait Normalizer: Send + Sync {
    /// Normalize the input text
    fn normalize(&self, input: &str) -> String;

    /// Get the name of this normalizer
    fn name(&self) -> &str;

    /// Get metadata about this normalizer (e.g., configuration)
    fn metadata(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Clone this normalizer into a Box
    fn clone_box(&self) -> Box<dyn Normalizer>;
}

// Implement Clone for Box<dyn Normalizer>
impl Clone for Box<dyn Normalizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// Built-in Normalizers
// ============================================================================

/// Converts all text to lowercase
#[derive(Clone)]
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &str {
        "lowercase"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Collapses every maximal run of whitespace, newlines included, into a
/// single ASCII space.
///
/// Line boundaries do not survive this normalizer, so a line diff over its
/// output sees at most one line per document.
#[derive(Clone, Default)]
pub struct WhitespaceNormalizer {
    /// Whether to trim leading/trailing whitespace
    pub trim: bool,
}

impl WhitespaceNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Normalizer for WhitespaceNormalizer {
    fn normalize(&self, input: &str) -> String {
        let mut normalized = String::with_capacity(input.len());
        let mut in_whitespace = false;

        for ch in input.chars() {
            if ch.is_whitespace() {
                in_whitespace = true;
                continue;
            }

            if in_whitespace {
                if !(self.trim && normalized.is_empty()) {
                    normalized.push(' ');
                }
                in_whitespace = false;
            }
            normalized.push(ch);
        }

        if in_whitespace && !self.trim {
            normalized.push(' ');
        }

        normalized
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn metadata(&self) -> Vec<(String, String)> {
        vec![("trim".to_string(), self.trim.to_string())]
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Custom normalizer using a user-provided function
#[derive(Clone)]
pub struct CustomNormalizer {
    name: String,
    func: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl CustomNormalizer {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }
}

impl Normalizer for CustomNormalizer {
    fn normalize(&self, input: &str) -> String {
        (self.func)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}
