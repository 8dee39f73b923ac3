//! Character classification for word tokenization
//!
//! Every character is either part of a word or a boundary between words.
//! The Unicode policy looks up the general category: letters (`L*`), marks
//! (`Mn`, `Mc`, `Me`) and numbers (`N*`) are word characters. The combining
//! diacritical mark blocks are also listed explicitly, so a base letter and the
//! marks attached to it are never separated.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Inclusive code point ranges of the combining diacritical mark blocks
pub const COMBINING_MARK_RANGES: [(char, char); 5] = [
    // Combining Diacritical Marks
    ('\u{0300}', '\u{036F}'),
    // Combining Diacritical Marks Extended
    ('\u{1AB0}', '\u{1AFF}'),
    // Combining Diacritical Marks Supplement
    ('\u{1DC0}', '\u{1DFF}'),
    // Combining Diacritical Marks for Symbols
    ('\u{20D0}', '\u{20FF}'),
    // Combining Half Marks
    ('\u{FE20}', '\u{FE2F}'),
];

/// Classification of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharClass {
    /// Letter, mark or number
    Word,
    /// Punctuation, symbol, whitespace or control character
    Boundary,
}

/// Returns true if `ch` lies in one of the combining diacritical mark blocks
#[inline]
pub fn is_combining_mark(ch: char) -> bool {
    COMBINING_MARK_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&ch))
}

/// Returns true if `ch` is a letter, mark or number in any script
#[inline]
pub fn is_word_character(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric();
    }
    match ch.general_category_group() {
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Mark | GeneralCategoryGroup::Number => {
            true
        }
        // Other_Alphabetic symbols such as circled letters
        _ => ch.is_alphabetic() || is_combining_mark(ch),
    }
}

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharClass;

    /// Check if character belongs inside a token
    fn is_word(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::Word)
    }

    /// Check if character separates tokens
    fn is_boundary(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::Boundary)
    }
}

/// Letters, marks and numbers of any script are word characters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeClassifier;

impl CharacterClassifier for UnicodeClassifier {
    fn classify(&self, ch: char) -> CharClass {
        if is_word_character(ch) {
            CharClass::Word
        } else {
            CharClass::Boundary
        }
    }
}

/// Legacy policy: only `[A-Za-z0-9]` are word characters
///
/// Kept for comparison. Every non-ASCII letter is a boundary here, which
/// fragments or drops words written in other scripts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsciiClassifier;

impl CharacterClassifier for AsciiClassifier {
    fn classify(&self, ch: char) -> CharClass {
        if ch.is_ascii_alphanumeric() {
            CharClass::Word
        } else {
            CharClass::Boundary
        }
    }
}

/// Selects a classifier implementation by name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClassifierKind {
    /// [`UnicodeClassifier`]
    #[default]
    Unicode,
    /// [`AsciiClassifier`]
    Ascii,
}

impl ClassifierKind {
    /// All known classifiers
    pub const ALL: [ClassifierKind; 2] = [ClassifierKind::Unicode, ClassifierKind::Ascii];

    /// Name used on the command line and in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierKind::Unicode => "unicode",
            ClassifierKind::Ascii => "ascii",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            ClassifierKind::Unicode => "letters, marks and numbers of any script",
            ClassifierKind::Ascii => "legacy [A-Za-z0-9] only",
        }
    }
}

impl CharacterClassifier for ClassifierKind {
    fn classify(&self, ch: char) -> CharClass {
        match self {
            ClassifierKind::Unicode => UnicodeClassifier.classify(ch),
            ClassifierKind::Ascii => AsciiClassifier.classify(ch),
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassifierKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(ClassifierKind::Unicode),
            "ascii" => Ok(ClassifierKind::Ascii),
            _ => Err(Error::UnknownClassifier(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_in_many_scripts_are_word_characters() {
        for ch in ['a', 'Z', 'é', 'Ü', 'ñ', 'ш', 'ש', 'م', '世', 'λ', 'ก'] {
            assert!(is_word_character(ch), "{ch:?} should be a word character");
        }
    }

    #[test]
    fn test_digits_in_many_scripts_are_word_characters() {
        // ASCII, Arabic-Indic, Devanagari, fullwidth
        for ch in ['0', '9', '\u{0663}', '\u{0967}', '\u{FF15}'] {
            assert!(is_word_character(ch), "{ch:?} should be a word character");
        }
    }

    #[test]
    fn test_combining_marks_are_word_characters() {
        for ch in ['\u{0301}', '\u{0308}', '\u{1AB0}', '\u{1DC0}', '\u{20D7}', '\u{FE20}'] {
            assert!(is_combining_mark(ch));
            assert!(is_word_character(ch));
        }
    }

    #[test]
    fn test_marks_outside_listed_blocks_are_word_characters() {
        for ch in [
            '\u{094D}', // Devanagari virama
            '\u{093E}', // Devanagari vowel sign aa (Mc)
            '\u{0E48}', // Thai tone mark mai ek
            '\u{0E31}', // Thai mai han-akat
            '\u{0596}', // Hebrew accent tipeha
            '\u{05B4}', // Hebrew point hiriq
            '\u{0651}', // Arabic shadda
            '\u{0488}', // Cyrillic hundred thousands sign (Me)
        ] {
            assert!(!is_combining_mark(ch));
            assert!(is_word_character(ch), "{ch:?} should be a word character");
        }
    }

    #[test]
    fn test_hebrew_punctuation_among_points_is_boundary() {
        // maqaf, paseq, sof pasuq
        for ch in ['\u{05BE}', '\u{05C0}', '\u{05C3}'] {
            assert!(!is_word_character(ch), "{ch:?} should be a boundary");
        }
    }

    #[test]
    fn test_combining_mark_range_edges() {
        for &(lo, hi) in &COMBINING_MARK_RANGES {
            assert!(is_combining_mark(lo));
            assert!(is_combining_mark(hi));
        }
        assert!(!is_combining_mark('\u{02FF}'));
        assert!(!is_combining_mark('\u{0370}'));
        assert!(!is_combining_mark('\u{FE30}'));
        assert!(!is_combining_mark('a'));
    }

    #[test]
    fn test_boundaries() {
        for ch in [
            ' ', '\t', '\n', '\r', ',', '.', '!', '?', '-', '_', '\'', '"', '—', '«', '$', '+',
            '🏃', '\u{0000}', '\u{00A0}', '\u{3000}', '。',
        ] {
            assert!(!is_word_character(ch), "{ch:?} should be a boundary");
        }
    }

    #[test]
    fn test_unicode_classifier() {
        let c = UnicodeClassifier;
        assert_eq!(c.classify('ü'), CharClass::Word);
        assert_eq!(c.classify(','), CharClass::Boundary);
        assert!(c.is_word('界'));
        assert!(c.is_boundary(' '));
    }

    #[test]
    fn test_ascii_classifier_rejects_non_ascii_letters() {
        let c = AsciiClassifier;
        assert!(c.is_word('a'));
        assert!(c.is_word('7'));
        assert!(c.is_boundary('é'));
        assert!(c.is_boundary('ש'));
        assert!(c.is_boundary('\u{0301}'));
    }

    #[test]
    fn test_classifier_kind_parse() {
        assert_eq!("unicode".parse::<ClassifierKind>().unwrap(), ClassifierKind::Unicode);
        assert_eq!(" ASCII ".parse::<ClassifierKind>().unwrap(), ClassifierKind::Ascii);
        assert!(matches!(
            "latin".parse::<ClassifierKind>(),
            Err(Error::UnknownClassifier(name)) if name == "latin"
        ));
    }

    #[test]
    fn test_classifier_kind_dispatch() {
        assert!(ClassifierKind::Unicode.is_word('é'));
        assert!(ClassifierKind::Ascii.is_boundary('é'));
        assert_eq!(ClassifierKind::default(), ClassifierKind::Unicode);
        for kind in ClassifierKind::ALL {
            assert_eq!(kind.as_str().parse::<ClassifierKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
