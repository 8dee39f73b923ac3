//! Text normalization for matching
//!
//! Runs before tokenization when enabled. The input is put in canonical
//! decomposition (NFD), then nonspacing marks and Hebrew points can be
//! removed, leet characters replaced by the letters they stand for, and
//! whitespace runs collapsed to a single space. The output is meant for
//! comparing words, not for display.

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Hebrew points, cantillation and the punctuation interleaved with them
pub const HEBREW_POINTS: (char, char) = ('\u{0591}', '\u{05C7}');

/// Leet characters and their letter readings
///
/// Digits are only replaced next to a letter, so plain numbers survive.
pub const LEET_SUBSTITUTIONS: [(char, char); 5] =
    [('@', 'a'), ('$', 's'), ('0', 'o'), ('3', 'e'), ('1', 'i')];

/// Normalization steps applied before tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizerConfig {
    /// Run normalization before tokenizing
    pub enabled: bool,
    /// Drop nonspacing marks (`Mn`) after decomposition
    pub strip_marks: bool,
    /// Drop Hebrew points and cantillation
    pub strip_niqqud: bool,
    /// Replace leet characters inside words
    pub leet: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            strip_marks: true,
            strip_niqqud: true,
            leet: true,
        }
    }
}

impl NormalizerConfig {
    /// Every step switched on
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Apply the configured steps to `input`
    ///
    /// Decomposition and whitespace collapsing always happen. The `enabled`
    /// flag is not consulted here; it tells [`TokenizerConfig`] whether to
    /// call this at all.
    ///
    /// [`TokenizerConfig`]: crate::TokenizerConfig
    pub fn normalize(&self, input: &str) -> String {
        let chars: Vec<char> = input
            .nfd()
            .filter(|&ch| !(self.strip_marks && is_nonspacing_mark(ch)))
            .filter(|&ch| !(self.strip_niqqud && is_hebrew_point(ch)))
            .collect();

        let mut out = String::with_capacity(input.len());
        let mut pending_space = false;
        for (i, &ch) in chars.iter().enumerate() {
            if ch.is_whitespace() {
                pending_space = !out.is_empty();
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(if self.leet { leet_at(&chars, i) } else { ch });
        }
        out
    }
}

/// Normalize with every step switched on
///
/// ```
/// assert_eq!(wordsplit_core::normalize("  Café   n@ïve "), "Cafe naive");
/// ```
pub fn normalize(input: &str) -> String {
    NormalizerConfig::enabled().normalize(input)
}

fn is_nonspacing_mark(ch: char) -> bool {
    ch.general_category() == GeneralCategory::NonspacingMark
}

fn is_hebrew_point(ch: char) -> bool {
    (HEBREW_POINTS.0..=HEBREW_POINTS.1).contains(&ch)
}

fn leet_at(chars: &[char], i: usize) -> char {
    let ch = chars[i];
    let Some(&(_, letter)) = LEET_SUBSTITUTIONS.iter().find(|(from, _)| *from == ch) else {
        return ch;
    };
    if !ch.is_ascii_digit() {
        return letter;
    }

    let after_letter = i > 0 && chars[i - 1].is_alphabetic();
    let before_letter = chars.get(i + 1).is_some_and(|next| next.is_alphabetic());
    if after_letter || before_letter {
        letter
    } else {
        ch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(step: impl FnOnce(&mut NormalizerConfig)) -> NormalizerConfig {
        let mut config = NormalizerConfig {
            enabled: true,
            strip_marks: false,
            strip_niqqud: false,
            leet: false,
        };
        step(&mut config);
        config
    }

    #[test]
    fn test_default_is_disabled_with_all_steps_selected() {
        let config = NormalizerConfig::default();
        assert!(!config.enabled);
        assert!(config.strip_marks && config.strip_niqqud && config.leet);
        assert!(NormalizerConfig::enabled().enabled);
    }

    #[test]
    fn test_strips_latin_diacritics() {
        assert_eq!(normalize("café naïve"), "cafe naive");
        assert_eq!(normalize("Über canción"), "Uber cancion");
    }

    #[test]
    fn test_decomposes_without_stripping() {
        let config = only(|_| {});
        assert_eq!(config.normalize("café"), "cafe\u{0301}");
    }

    #[test]
    fn test_hebrew_niqqud_stripping() {
        let raw = "שָׁלוֹם";
        let niqqud_only = only(|c| c.strip_niqqud = true);
        assert_eq!(niqqud_only.normalize(raw), "שלום");

        let with_strip = NormalizerConfig::enabled();
        let without_strip = NormalizerConfig {
            strip_niqqud: false,
            ..NormalizerConfig::enabled()
        };
        assert_eq!(
            with_strip.normalize(raw),
            with_strip.normalize(&without_strip.normalize(raw))
        );
    }

    #[test]
    fn test_kept_niqqud_stays_in_decomposed_text() {
        let config = only(|_| {});
        let out = config.normalize("שָׁלוֹם");
        assert!(out.contains('\u{05B8}'));
        assert_eq!(out.chars().filter(|ch| is_hebrew_point(*ch)).count(), 3);
    }

    #[test]
    fn test_leet_symbols_always_substituted() {
        let leet = only(|c| c.leet = true);
        assert_eq!(leet.normalize("b@d"), "bad");
        assert_eq!(leet.normalize("$tuff"), "stuff");
    }

    #[test]
    fn test_leet_digits_only_next_to_letters() {
        let leet = only(|c| c.leet = true);
        assert_eq!(leet.normalize("h3ll0 w0rld"), "hello world");
        assert_eq!(leet.normalize("l33t"), "leet");
        assert_eq!(leet.normalize("room 101"), "room 101");
        assert_eq!(leet.normalize("2013"), "2013");
    }

    #[test]
    fn test_leet_disabled() {
        assert_eq!(only(|_| {}).normalize("h3ll0 b@d"), "h3ll0 b@d");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(normalize("  hello \t\n  world  "), "hello world");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }
}
