//! Text normalization pipeline
//!
//! Provides a layered approach to text normalization where each normalizer
//! creates a new layer on top of the previous one. The diff runs on the final
//! layer; earlier layers stay available for inspection.

use crate::config::CompareOptions;
use crate::normalizers::{Lowercase, Normalizer, WhitespaceNormalizer};

/// A single layer of normalized text
#[derive(Debug, Clone)]
pub struct NormalizationLayer {
    /// The normalized text at this layer
    pub text: String,

    /// Name of the normalizer that created this layer
    pub normalizer_name: String,

    /// Additional information (e.g., parameters used)
    pub info: Vec<(String, String)>,
}

/// A pipeline of text normalizers that creates layered transformations
#[derive(Default, Clone)]
pub struct TextPipeline {
    /// Ordered list of normalizers to apply
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl TextPipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            normalizers: Vec::new(),
        }
    }

    /// Build the preprocessing pipeline for the resolved options.
    ///
    /// Whitespace collapsing always runs before case folding.
    pub fn from_options(options: &CompareOptions) -> Self {
        let mut pipeline = Self::new();

        if options.ignore_whitespace {
            pipeline = pipeline.add_normalizer(Box::new(WhitespaceNormalizer::new()));
        }
        if options.ignore_case {
            pipeline = pipeline.add_normalizer(Box::new(Lowercase));
        }

        pipeline
    }

    /// Add a normalizer to the pipeline
    pub fn add_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizers.push(normalizer);
        self
    }

    /// Add multiple normalizers at once
    pub fn add_normalizers(mut self, normalizers: Vec<Box<dyn Normalizer>>) -> Self {
        self.normalizers.extend(normalizers);
        self
    }

    /// Process text through the entire pipeline, returning all layers
    pub fn process(&self, input: &str) -> LayerSet {
        let mut layers = LayerSet::new(input.to_string());

        for normalizer in &self.normalizers {
            let normalized = normalizer.normalize(layers.final_layer());
            layers.add_layer(NormalizationLayer {
                text: normalized,
                normalizer_name: normalizer.name().to_string(),
                info: normalizer.metadata(),
            });
        }

        layers
    }

    /// Run the pipeline and keep only the final text
    pub fn apply(&self, input: &str) -> String {
        if self.normalizers.is_empty() {
            return input.to_string();
        }
        self.process(input).into_final()
    }

    /// Get the number of normalizers in the pipeline
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }

    /// Get the names of all normalizers in the pipeline
    pub fn normalizer_names(&self) -> Vec<String> {
        self.normalizers
            .iter()
            .map(|n| n.name().to_string())
            .collect()
    }
}

/// Normalize `text` according to the resolved comparison options.
///
/// Pure and idempotent: normalizing an already normalized text with the same
/// options returns it unchanged.
pub fn normalize(text: &str, options: &CompareOptions) -> String {
    TextPipeline::from_options(options).apply(text)
}

/// A complete set of normalization layers from original to final
#[derive(Debug, Clone)]
pub struct LayerSet {
    /// The original input text (layer 0)
    original: String,

    /// All normalization layers (layer 1, 2, 3, ...)
    layers: Vec<NormalizationLayer>,
}

impl LayerSet {
    /// Create a new layer set with just the original text
    pub fn new(original: String) -> Self {
        Self {
            original,
            layers: Vec::new(),
        }
    }

    /// Add a new normalization layer
    pub fn add_layer(&mut self, layer: NormalizationLayer) {
        self.layers.push(layer);
    }

    /// Get the original text
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get a specific layer by index (0 = original, 1 = first normalization, etc.)
    pub fn layer(&self, index: usize) -> Option<&str> {
        if index == 0 {
            Some(&self.original)
        } else {
            self.layers.get(index - 1).map(|l| l.text.as_str())
        }
    }

    /// Get the final (most normalized) layer
    pub fn final_layer(&self) -> &str {
        self.layers
            .last()
            .map(|l| l.text.as_str())
            .unwrap_or(&self.original)
    }

    /// Consume the set, keeping the final layer
    pub fn into_final(mut self) -> String {
        match self.layers.pop() {
            Some(layer) => layer.text,
            None => self.original,
        }
    }

    /// Get the total number of layers (including original)
    pub fn num_layers(&self) -> usize {
        self.layers.len() + 1
    }

    /// Get the normalization layers (excluding the original)
    pub fn layers(&self) -> &[NormalizationLayer] {
        &self.layers
    }

    /// Create an iterator over all layer texts (including original as layer 0)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.original.as_str()).chain(self.layers.iter().map(|l| l.text.as_str()))
    }
}
