// Phoneme tokens and phoneme-code classification
//
// Transcriptions are ARPAbet-style: upper-case phoneme codes separated by
// single spaces, vowels optionally suffixed with a stress digit
// ("B UH1 L AH0 K S").

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Phoneme vocabulary
// ---------------------------------------------------------------------------

/// The fifteen ARPAbet vowel codes, as used by adjacency rules.
pub const VOWEL_CODES: &[&str] = &[
    "AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY", "IH", "IY", "OW", "OY", "UH", "UW",
];

/// Letters whose presence marks a code as vowel-bearing for syllabification.
const VOWEL_LETTERS: &[char] = &['A', 'E', 'I', 'O', 'U'];

/// Stress digits recognised in transcriptions.
const STRESS_DIGITS: &[char] = &['0', '1', '2'];

// ---------------------------------------------------------------------------
// Stress
// ---------------------------------------------------------------------------

/// Lexical stress carried by a vowel token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stress {
    /// Digit `0`.
    Unstressed,
    /// Digit `1`.
    Primary,
    /// Digit `2`.
    Secondary,
}

impl Stress {
    /// Map a stress digit to a stress level. Any other character yields `None`.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    /// The digit written after a phoneme code for this stress level.
    pub fn digit(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }

    /// True for primary and secondary stress.
    pub fn is_stressed(self) -> bool {
        !matches!(self, Stress::Unstressed)
    }
}

// ---------------------------------------------------------------------------
// PhonemeToken
// ---------------------------------------------------------------------------

/// One phoneme of a transcription: a code plus optional stress.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhonemeToken {
    /// The phoneme code with any trailing digit removed.
    pub code: String,

    /// Stress level, if the token ended in `0`, `1` or `2`.
    pub stress: Option<Stress>,
}

impl PhonemeToken {
    /// Create a token from a code and optional stress.
    pub fn new(code: impl Into<String>, stress: Option<Stress>) -> Self {
        Self {
            code: code.into(),
            stress,
        }
    }

    /// Split a raw token such as `"AH0"` into code and stress.
    ///
    /// A trailing decimal digit is always stripped from the code. Digits other
    /// than 0/1/2 are dropped without producing a stress level, and consonant
    /// codes carrying a digit are accepted as-is.
    pub fn parse(raw: &str) -> Self {
        match raw.chars().last() {
            Some(last) if last.is_ascii_digit() => Self {
                code: raw[..raw.len() - 1].to_string(),
                stress: Stress::from_digit(last),
            },
            _ => Self {
                code: raw.to_string(),
                stress: None,
            },
        }
    }

    /// True if this token carries primary or secondary stress.
    pub fn is_stressed(&self) -> bool {
        self.stress.is_some_and(Stress::is_stressed)
    }

    /// True if the code passes the coarse vowel-letter test.
    pub fn is_vowel_bearing(&self) -> bool {
        is_vowel_bearing(&self.code)
    }
}

impl std::fmt::Display for PhonemeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.stress {
            Some(stress) => write!(f, "{}{}", self.code, stress.digit()),
            None => f.write_str(&self.code),
        }
    }
}

/// Parse a whitespace-separated transcription into tokens.
pub fn parse_transcription(transcription: &str) -> Vec<PhonemeToken> {
    transcription.split_whitespace().map(PhonemeToken::parse).collect()
}

// ---------------------------------------------------------------------------
// Code classification
// ---------------------------------------------------------------------------

/// Check whether a code contains any of the letters A, E, I, O, U.
///
/// This is a letter test, not a vocabulary lookup: `"Y"` and `"W"` are not
/// vowel-bearing, while any code that happens to contain one of the letters
/// is.
pub fn is_vowel_bearing(code: &str) -> bool {
    code.contains(VOWEL_LETTERS)
}

/// Check whether a code starts with one of the fifteen ARPAbet vowel codes.
///
/// `"AX"` is not in the list and is therefore not a vowel code.
pub fn is_vowel_code(code: &str) -> bool {
    VOWEL_CODES.iter().any(|v| code.starts_with(v))
}

/// Remove every stress digit (`0`, `1`, `2`) from a string.
pub fn strip_stress_digits(s: &str) -> String {
    s.chars().filter(|c| !STRESS_DIGITS.contains(c)).collect()
}
