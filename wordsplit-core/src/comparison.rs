//! Side-by-side comparison of the ASCII-only and Unicode policies

use crate::tokenizer::Tokenizer;

/// Sentences that show where the ASCII policy loses words
pub const DEMO_INPUTS: [&str; 7] = [
    "canción",
    "Über den Berg",
    "שלום עולם",
    "مرحبا بالعالم",
    "hello123世界",
    "bad word",
    "café naïve",
];

/// Tokens produced by both policies for one input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// The input text
    pub input: String,
    /// Tokens under the `[A-Za-z0-9]` policy
    pub ascii: Vec<String>,
    /// Tokens under the Unicode policy
    pub unicode: Vec<String>,
}

impl Comparison {
    /// True when the two policies disagree
    pub fn differs(&self) -> bool {
        self.ascii != self.unicode
    }

    /// Unicode tokens that the ASCII policy did not reproduce intact
    pub fn lost_tokens(&self) -> Vec<&str> {
        self.unicode
            .iter()
            .filter(|token| !self.ascii.contains(*token))
            .map(String::as_str)
            .collect()
    }
}

/// Tokenize `input` under both policies
pub fn compare(input: &str) -> Comparison {
    Comparison {
        input: input.to_string(),
        ascii: Tokenizer::ascii().tokenize_owned(input),
        unicode: Tokenizer::new().tokenize_owned(input),
    }
}

/// Compare every demonstration sentence
pub fn compare_demo_inputs() -> Vec<Comparison> {
    DEMO_INPUTS.iter().map(|input| compare(input)).collect()
}
