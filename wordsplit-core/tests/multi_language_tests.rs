//! Tokenization across scripts, using the public API only

use wordsplit_core::{
    compare, tokenize, ClassifierKind, Input, NormalizerConfig, Tokenizer, TokenizerConfig,
};

#[test]
fn test_spanish_with_diacritics() {
    assert_eq!(tokenize("canción"), vec!["canción"]);
    assert_eq!(tokenize("¿Dónde está la piñata?"), vec!["Dónde", "está", "la", "piñata"]);
}

#[test]
fn test_german_umlauts() {
    assert_eq!(tokenize("Über den Berg"), vec!["Über", "den", "Berg"]);
}

#[test]
fn test_french_elision_splits_on_apostrophe() {
    assert_eq!(tokenize("l'été"), vec!["l", "été"]);
}

#[test]
fn test_hebrew() {
    assert_eq!(tokenize("שלום עולם"), vec!["שלום", "עולם"]);
}

#[test]
fn test_hebrew_with_points_and_cantillation() {
    assert_eq!(tokenize("שָׁלוֹם עוֹלָם"), vec!["שָׁלוֹם", "עוֹלָם"]);
    assert_eq!(
        tokenize("בְּרֵאשִׁ\u{0596}ית בָּרָא"),
        vec!["בְּרֵאשִׁ\u{0596}ית", "בָּרָא"]
    );
}

#[test]
fn test_hebrew_maqaf_separates_words() {
    assert_eq!(tokenize("כָּל\u{05BE}הָעָם"), vec!["כָּל", "הָעָם"]);
}

#[test]
fn test_hindi_virama_and_vowel_signs() {
    assert_eq!(tokenize("नमस्ते दुनिया"), vec!["नमस्ते", "दुनिया"]);
    assert_eq!(tokenize("हिन्दी, भाषा।"), vec!["हिन्दी", "भाषा"]);
}

#[test]
fn test_thai_tone_marks_are_kept() {
    assert_eq!(tokenize("ไม่ ใช่"), vec!["ไม่", "ใช่"]);
    assert_eq!(tokenize("สวัสดี"), vec!["สวัสดี"]);
}

#[test]
fn test_arabic_with_harakat() {
    assert_eq!(tokenize("مُحَمَّد رَسُول"), vec!["مُحَمَّد", "رَسُول"]);
}

#[test]
fn test_arabic() {
    assert_eq!(tokenize("مرحبا بالعالم"), vec!["مرحبا", "بالعالم"]);
}

#[test]
fn test_cyrillic_and_greek() {
    assert_eq!(tokenize("Привет, мир"), vec!["Привет", "мир"]);
    assert_eq!(tokenize("Καλημέρα κόσμε"), vec!["Καλημέρα", "κόσμε"]);
}

#[test]
fn test_cjk_run_without_spaces_is_one_token() {
    assert_eq!(tokenize("こんにちは世界"), vec!["こんにちは世界"]);
    assert_eq!(tokenize("東京、大阪。"), vec!["東京", "大阪"]);
}

#[test]
fn test_mixed_latin_digits_cjk() {
    assert_eq!(tokenize("hello123世界"), vec!["hello123世界"]);
}

#[test]
fn test_non_ascii_digits() {
    assert_eq!(tokenize("رقم ١٢٣"), vec!["رقم", "١٢٣"]);
}

#[test]
fn test_emoji_separates_words() {
    assert_eq!(tokenize("go🏃fast"), vec!["go", "fast"]);
}

#[test]
fn test_duplicates_are_preserved() {
    assert_eq!(tokenize("la la, la!"), vec!["la", "la", "la"]);
}

#[test]
fn test_decomposed_forms_stay_whole() {
    let decomposed = "nai\u{0308}ve cafe\u{0301}";
    assert_eq!(tokenize(decomposed), vec!["nai\u{0308}ve", "cafe\u{0301}"]);
}

#[test]
fn test_ascii_policy_regression_cases() {
    let ascii = Tokenizer::ascii();
    assert_eq!(ascii.tokenize("canción"), vec!["canci", "n"]);
    assert!(ascii.tokenize("مرحبا بالعالم").is_empty());

    let result = compare("canción");
    assert!(result.differs());
    assert_eq!(result.lost_tokens(), vec!["canción"]);
}

#[test]
fn test_config_driven_tokenizing_from_bytes() {
    let text = Input::from_bytes("ÉCOLE Primaire".as_bytes().to_vec())
        .into_text()
        .unwrap();
    let config = TokenizerConfig::builder()
        .classifier(ClassifierKind::Unicode)
        .lowercase(true)
        .build();
    assert_eq!(config.tokenize(&text), vec!["école", "primaire"]);
}

#[test]
fn test_normalized_matching_across_spellings() {
    let config = TokenizerConfig::builder()
        .lowercase(true)
        .normalize(NormalizerConfig::enabled())
        .build();
    assert_eq!(config.tokenize("Café  NAÏVE"), vec!["cafe", "naive"]);
    assert_eq!(config.tokenize("cafe\u{0301} naive"), vec!["cafe", "naive"]);
    assert_eq!(config.tokenize("שָׁלוֹם"), config.tokenize("שלום"));
    assert_eq!(config.tokenize("h3ll0 $ir, room 101"), vec!["hello", "sir", "room", "101"]);
}
