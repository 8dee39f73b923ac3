//! Unicode-aware word tokenization
//!
//! Splits text into words on maximal runs of boundary characters. A character
//! belongs to a word if its general category is a letter, mark or number, so
//! accented Latin, Hebrew with points, Devanagari, Thai, CJK and decomposed
//! base-plus-mark sequences all survive intact. The legacy `[A-Za-z0-9]`
//! policy is kept next to it for comparison.
//!
//! An optional [`NormalizerConfig`] folds text before splitting (NFD, mark and
//! niqqud stripping, leet substitution) for matching rather than display.
//!
//! Tokenizing is total: every `&str`, including the empty string, produces a
//! well-defined (possibly empty) list of tokens. Decoding raw bytes into text
//! is the job of [`Input`], which owns the UTF-8 error.
//!
//! # Example
//!
//! ```rust
//! use wordsplit_core::{tokenize, Tokenizer, CharClass};
//!
//! assert_eq!(tokenize("hello, world! test."), vec!["hello", "world", "test"]);
//!
//! // Boundary runs are kept by `segments`, so the split is lossless
//! let tokenizer = Tokenizer::new();
//! let text = "שלום, עולם";
//! let rebuilt: String = tokenizer.segments(text).map(|s| s.text).collect();
//! assert_eq!(rebuilt, text);
//!
//! let words: Vec<_> = tokenizer
//!     .segments(text)
//!     .filter(|s| s.kind == CharClass::Word)
//!     .map(|s| s.text)
//!     .collect();
//! assert_eq!(words, vec!["שלום", "עולם"]);
//! ```

#![warn(missing_docs)]

pub mod classifier;
pub mod comparison;
pub mod config;
pub mod error;
pub mod input;
pub mod normalizer;
pub mod token;
pub mod tokenizer;

pub use classifier::{
    is_combining_mark, is_word_character, AsciiClassifier, CharClass, CharacterClassifier,
    ClassifierKind, UnicodeClassifier, COMBINING_MARK_RANGES,
};
pub use comparison::{compare, compare_demo_inputs, Comparison, DEMO_INPUTS};
pub use config::{TokenizerConfig, TokenizerConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use normalizer::{normalize, NormalizerConfig};
pub use token::{reconstruct, Segment, TokenSpan};
pub use tokenizer::{tokenize, Segments, Tokenizer, Tokens};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_exports() {
        let _unicode: Tokenizer = Tokenizer::new();
        let _ascii = Tokenizer::ascii();
        let _config = TokenizerConfig::default();
        let _input = Input::from_text("");
        assert!(is_word_character('a'));
        assert!(is_combining_mark('\u{0301}'));
    }

    #[test]
    fn test_tokenizer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Tokenizer>();
        assert_send_sync::<Tokenizer<AsciiClassifier>>();
        assert_send_sync::<Tokenizer<ClassifierKind>>();
    }
}
