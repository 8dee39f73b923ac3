//! Word tokenizer
//!
//! Scans the input once, left to right, grouping characters into maximal runs
//! of the same [`CharClass`]. Word runs are tokens; boundary runs are dropped
//! by [`Tokenizer::tokenize`] and kept by [`Tokenizer::segments`].

use crate::classifier::{AsciiClassifier, CharClass, CharacterClassifier, UnicodeClassifier};
use crate::token::{Segment, TokenSpan};

/// Split `input` into words using the Unicode policy
///
/// Never fails. Empty or boundary-only input yields an empty vector.
///
/// ```
/// assert_eq!(wordsplit_core::tokenize("café naïve"), vec!["café", "naïve"]);
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    Tokenizer::new().tokenize(input)
}

/// Tokenizer parameterized by its character classification policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer<C = UnicodeClassifier> {
    classifier: C,
}

impl Tokenizer<UnicodeClassifier> {
    /// Tokenizer using the Unicode policy
    pub const fn new() -> Self {
        Self {
            classifier: UnicodeClassifier,
        }
    }
}

impl Tokenizer<AsciiClassifier> {
    /// Tokenizer using the legacy `[A-Za-z0-9]` policy
    pub const fn ascii() -> Self {
        Self {
            classifier: AsciiClassifier,
        }
    }
}

impl<C: CharacterClassifier> Tokenizer<C> {
    /// Tokenizer using a custom classifier
    pub const fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// The classifier in use
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Lossless iterator over alternating word and boundary runs
    pub fn segments<'a>(&self, input: &'a str) -> Segments<'_, 'a, C> {
        Segments {
            classifier: &self.classifier,
            input,
            pos: 0,
            char_pos: 0,
        }
    }

    /// Lazy iterator over tokens
    pub fn tokens<'a>(&self, input: &'a str) -> Tokens<'_, 'a, C> {
        Tokens {
            classifier: &self.classifier,
            rest: input,
        }
    }

    /// Split `input` into tokens borrowed from it
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<&'a str> {
        self.tokens(input).collect()
    }

    /// Split `input` into owned tokens
    pub fn tokenize_owned(&self, input: &str) -> Vec<String> {
        self.tokens(input).map(str::to_string).collect()
    }

    /// Tokens with their byte ranges and character offsets
    pub fn spans(&self, input: &str) -> Vec<TokenSpan> {
        self.segments(input)
            .filter(Segment::is_word)
            .map(|segment| segment.to_span())
            .collect()
    }
}

/// Iterator returned by [`Tokenizer::tokens`]
#[derive(Debug, Clone)]
pub struct Tokens<'t, 'a, C> {
    classifier: &'t C,
    rest: &'a str,
}

impl<'a, C: CharacterClassifier> Iterator for Tokens<'_, 'a, C> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let classifier = self.classifier;
        let start = self.rest.find(|ch: char| classifier.is_word(ch))?;
        let word = &self.rest[start..];
        let end = word
            .find(|ch: char| classifier.is_boundary(ch))
            .unwrap_or(word.len());
        let (token, rest) = word.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

impl<C: CharacterClassifier> std::iter::FusedIterator for Tokens<'_, '_, C> {}

/// Iterator returned by [`Tokenizer::segments`]
#[derive(Debug, Clone)]
pub struct Segments<'t, 'a, C> {
    classifier: &'t C,
    input: &'a str,
    pos: usize,
    char_pos: usize,
}

impl<'a, C: CharacterClassifier> Iterator for Segments<'_, 'a, C> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = &self.input[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let kind: CharClass = self.classifier.classify(first);

        let mut end = rest.len();
        let mut count = 1;
        for (i, ch) in chars {
            if self.classifier.classify(ch) != kind {
                end = i;
                break;
            }
            count += 1;
        }

        let segment = Segment {
            kind,
            text: &rest[..end],
            start: self.pos,
            char_start: self.char_pos,
        };
        self.pos += end;
        self.char_pos += count;
        Some(segment)
    }
}

impl<C: CharacterClassifier> std::iter::FusedIterator for Segments<'_, '_, C> {}
