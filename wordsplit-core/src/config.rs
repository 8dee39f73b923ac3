//! Tokenizer configuration

use crate::classifier::ClassifierKind;
use crate::normalizer::NormalizerConfig;
use crate::token::TokenSpan;
use crate::tokenizer::Tokenizer;
use std::borrow::Cow;

/// Classification policy, optional normalization and output folding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerConfig {
    /// Which classifier decides word vs boundary
    pub classifier: ClassifierKind,
    /// Lowercase each token after splitting
    pub lowercase: bool,
    /// Normalization applied to the input before splitting
    pub normalize: NormalizerConfig,
}

impl TokenizerConfig {
    /// Create a builder
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Tokenizer for the configured classifier
    pub fn tokenizer(&self) -> Tokenizer<ClassifierKind> {
        Tokenizer::with_classifier(self.classifier)
    }

    /// The text that is actually split: `input` itself, or its normalized form
    pub fn prepare<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.normalize.enabled {
            Cow::Owned(self.normalize.normalize(input))
        } else {
            Cow::Borrowed(input)
        }
    }

    /// Tokenize `input` and apply folding
    ///
    /// Folding happens after splitting, so token boundaries are the same with
    /// or without it.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        let text = self.prepare(input);
        self.tokenizer()
            .tokens(&text)
            .map(|token| self.fold(token))
            .collect()
    }

    /// Spans with folded text
    ///
    /// Offsets refer to [`prepare`](Self::prepare)d text, which is the
    /// original input unless normalization is enabled.
    pub fn spans(&self, input: &str) -> Vec<TokenSpan> {
        let text = self.prepare(input);
        let mut spans = self.tokenizer().spans(&text);
        if self.lowercase {
            for span in &mut spans {
                span.text = span.text.to_lowercase();
            }
        }
        spans
    }

    fn fold(&self, token: &str) -> String {
        if self.lowercase {
            token.to_lowercase()
        } else {
            token.to_string()
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    config: TokenizerConfig,
}

impl TokenizerConfigBuilder {
    /// Set the classifier
    pub fn classifier(mut self, classifier: ClassifierKind) -> Self {
        self.config.classifier = classifier;
        self
    }

    /// Enable or disable lowercase folding
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self
    }

    /// Set the normalization steps
    pub fn normalize(mut self, normalize: NormalizerConfig) -> Self {
        self.config.normalize = normalize;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TokenizerConfig {
        self.config
    }
}
