//! Output types: tokens with positions and lossless segments

use crate::classifier::CharClass;
use std::ops::Range;

/// A token together with its position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenSpan {
    /// Token text, always non-empty
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Character offset of the first character
    pub char_start: usize,
}

impl TokenSpan {
    /// Byte range of the token in the input
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; tokens are never empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A maximal run of characters sharing one [`CharClass`]
///
/// The segments of an input alternate between word and boundary runs and
/// cover every byte of it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment<'a> {
    /// Whether this run is a token or a separator
    pub kind: CharClass,
    /// The run itself, borrowed from the input
    pub text: &'a str,
    /// Byte offset of the run
    pub start: usize,
    /// Character offset of the run
    pub char_start: usize,
}

impl<'a> Segment<'a> {
    /// Byte offset one past the run
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// True for token runs
    pub fn is_word(&self) -> bool {
        self.kind == CharClass::Word
    }

    /// True for separator runs
    pub fn is_boundary(&self) -> bool {
        self.kind == CharClass::Boundary
    }

    /// Convert a word run into an owned span
    pub fn to_span(&self) -> TokenSpan {
        TokenSpan {
            text: self.text.to_string(),
            start: self.start,
            end: self.end(),
            char_start: self.char_start,
        }
    }
}

/// Concatenate segment texts back into the original input
pub fn reconstruct<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = Segment<'a>>,
{
    segments.into_iter().map(|segment| segment.text).collect()
}
