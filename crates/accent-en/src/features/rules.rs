// Feature detectors
//
// Each detector is an independent predicate over one (word, transcription)
// pair. Detectors inspect either the orthographic word or the joined token
// string; matching is literal substring containment unless noted, so a
// trigger letter embedded in a longer code still fires.

use std::sync::LazyLock;

use accent_core::feature::FeatureId;
use accent_core::phoneme::{is_vowel_code, strip_stress_digits};
use regex::Regex;

// ---------------------------------------------------------------------------
// Rule input
// ---------------------------------------------------------------------------

/// Pre-computed views of one classification request, shared by all detectors.
#[derive(Debug, Clone)]
pub struct RuleInput<'a> {
    /// Orthographic word as supplied (underscores join phrase words).
    pub word: &'a str,
    /// Lower-cased word.
    pub word_lower: String,
    /// Non-blank tokens in order.
    pub tokens: Vec<&'a str>,
    /// Tokens joined by single spaces.
    pub joined: String,
    /// `joined` with every stress digit removed.
    pub flat: String,
}

impl<'a> RuleInput<'a> {
    /// Build the input from a space-separated transcription.
    pub fn from_transcription(word: &'a str, transcription: &'a str) -> Self {
        Self::build(word, transcription.split_whitespace().collect())
    }

    /// Build the input from pre-split tokens. Blank tokens are dropped.
    pub fn from_tokens<S: AsRef<str>>(word: &'a str, tokens: &'a [S]) -> Self {
        let tokens = tokens
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .collect();
        Self::build(word, tokens)
    }

    fn build(word: &'a str, tokens: Vec<&'a str>) -> Self {
        let joined = tokens.join(" ");
        let flat = strip_stress_digits(&joined);
        RuleInput {
            word,
            word_lower: word.to_lowercase(),
            tokens,
            joined,
            flat,
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// A detector predicate.
pub type Detector = fn(&RuleInput<'_>) -> bool;

/// One registry entry: the feature a detector reports.
#[derive(Clone, Copy)]
pub struct Rule {
    pub feature: FeatureId,
    pub detect: Detector,
}

/// Every detector, in evaluation order.
///
/// `assimilation` and `intonation` have no detector; they are only assigned
/// by hand or by the word-entry builder.
pub static RULES: &[Rule] = &[
    Rule { feature: FeatureId::Stress, detect: detect_stress },
    Rule { feature: FeatureId::Reduction, detect: detect_reduction },
    Rule { feature: FeatureId::TFlap, detect: detect_t_flap },
    Rule { feature: FeatureId::DarkL, detect: detect_dark_l },
    Rule { feature: FeatureId::Glottalization, detect: detect_glottalization },
    Rule { feature: FeatureId::RColoring, detect: detect_r_coloring },
    Rule { feature: FeatureId::Aspiration, detect: detect_aspiration },
    Rule { feature: FeatureId::NasalFlap, detect: detect_nasal_flap },
    Rule { feature: FeatureId::Linking, detect: detect_linking },
    Rule { feature: FeatureId::Contractions, detect: detect_contractions },
    Rule { feature: FeatureId::Rhythm, detect: detect_rhythm },
];

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

/// Unstressed schwa code.
const SCHWA_CODE: &str = "AH0";

/// Flap code.
const FLAP_CODE: &str = "DX";

/// Informal forms matched by substring in the lower-cased word.
const CONTRACTION_FORMS: &[&str] = &[
    "gonna", "wanna", "gotta", "hafta", "hasta", "lemme", "gimme", "kinda", "sorta", "outta",
    "dunno", "cuz", "cause",
];

/// Phrase endings typical of reducible function words ("want_to", "let_me").
const CONTRACTION_JOINS: &[&str] = &["_to", "_me", "_of"];

/// `L` at the end of the sequence or before a consonant letter.
static DARK_L: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"L\s*$|L\s+[BCDFGHJKLMNPQRSTVWXYZ]").ok());

/// More than one token, and a primary or secondary stress digit somewhere.
pub fn detect_stress(input: &RuleInput<'_>) -> bool {
    input.tokens.len() > 1 && input.joined.contains(['1', '2'])
}

pub fn detect_reduction(input: &RuleInput<'_>) -> bool {
    input.joined.contains(SCHWA_CODE)
}

/// A literal flap, or a bare `T` between two vowel codes.
pub fn detect_t_flap(input: &RuleInput<'_>) -> bool {
    input.joined.contains(FLAP_CODE) || has_intervocalic_t(&input.flat)
}

fn has_intervocalic_t(flat: &str) -> bool {
    let parts: Vec<&str> = flat.split_whitespace().collect();
    parts.windows(3).any(|w| w[1] == "T" && is_vowel_code(w[0]) && is_vowel_code(w[2]))
}

pub fn detect_dark_l(input: &RuleInput<'_>) -> bool {
    DARK_L
        .as_ref()
        .is_some_and(|re| re.is_match(&input.joined))
}

pub fn detect_glottalization(input: &RuleInput<'_>) -> bool {
    input.joined.contains("T N") || input.joined.contains("T M")
}

/// Any `R` character, which also covers `ER`.
pub fn detect_r_coloring(input: &RuleInput<'_>) -> bool {
    input.joined.contains('R')
}

/// Word-initial voiceless stop followed by at least one more token.
pub fn detect_aspiration(input: &RuleInput<'_>) -> bool {
    ["P ", "T ", "K "]
        .iter()
        .any(|prefix| input.joined.starts_with(prefix))
}

pub fn detect_nasal_flap(input: &RuleInput<'_>) -> bool {
    input.joined.contains("N T") || input.joined.contains("N DX")
}

pub fn detect_linking(input: &RuleInput<'_>) -> bool {
    input.word.contains('_')
}

pub fn detect_contractions(input: &RuleInput<'_>) -> bool {
    CONTRACTION_FORMS
        .iter()
        .chain(CONTRACTION_JOINS)
        .any(|form| input.word_lower.contains(form))
}

pub fn detect_rhythm(input: &RuleInput<'_>) -> bool {
    input.tokens.len() >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(word: &'a str, transcription: &'a str) -> RuleInput<'a> {
        RuleInput::from_transcription(word, transcription)
    }

    #[test]
    fn rule_input_views() {
        let i = input("Water", "  W AA1   DX ER0 ");
        assert_eq!(i.tokens, vec!["W", "AA1", "DX", "ER0"]);
        assert_eq!(i.joined, "W AA1 DX ER0");
        assert_eq!(i.flat, "W AA DX ER");
        assert_eq!(i.word_lower, "water");
    }

    #[test]
    fn rule_input_from_tokens_drops_blanks() {
        let tokens = ["P", "", " IH1 ", "N"];
        let i = RuleInput::from_tokens("pin", &tokens);
        assert_eq!(i.tokens, vec!["P", "IH1", "N"]);
        assert_eq!(i.joined, "P IH1 N");
    }

    #[test]
    fn every_feature_has_at_most_one_rule() {
        for (n, a) in RULES.iter().enumerate() {
            for b in &RULES[n + 1..] {
                assert_ne!(a.feature, b.feature);
            }
        }
        assert_eq!(RULES.len(), 11);
    }

    #[test]
    fn stress_needs_two_tokens_and_a_digit() {
        assert!(detect_stress(&input("pin", "P IH1 N")));
        assert!(detect_stress(&input("x", "F AE2 N")));
        assert!(!detect_stress(&input("a", "AA1")));
        assert!(!detect_stress(&input("the", "DH AH0")));
    }

    #[test]
    fn reduction_on_schwa() {
        assert!(detect_reduction(&input("about", "AH0 B AW1 T")));
        assert!(!detect_reduction(&input("cut", "K AH1 T")));
    }

    #[test]
    fn t_flap_on_literal_flap() {
        assert!(detect_t_flap(&input("water", "W AA1 DX ER0")));
    }

    #[test]
    fn t_flap_on_intervocalic_t() {
        assert!(detect_t_flap(&input("water", "W AA1 T ER0")));
        assert!(detect_t_flap(&input("potato", "P AH0 T EY1 T OW0")));
    }

    #[test]
    fn t_flap_needs_vowels_on_both_sides() {
        assert!(!detect_t_flap(&input("button", "B AH1 T N")));
        assert!(!detect_t_flap(&input("top", "T AA1 P")));
        assert!(!detect_t_flap(&input("cat", "K AE1 T")));
    }

    #[test]
    fn t_flap_ignores_ax_neighbours() {
        assert!(!detect_t_flap(&input("x", "AX T AX")));
    }

    #[test]
    fn dark_l_final_or_before_consonant() {
        assert!(detect_dark_l(&input("feel", "F IY1 L")));
        assert!(detect_dark_l(&input("milk", "M IH1 L K")));
        assert!(!detect_dark_l(&input("lawyer", "L AO1 Y ER0")));
        assert!(!detect_dark_l(&input("really", "R IY1 L IY0")));
    }

    #[test]
    fn glottalization_on_t_before_nasal() {
        assert!(detect_glottalization(&input("button", "B AH1 T N")));
        assert!(detect_glottalization(&input("x", "AE1 T M AH0")));
        assert!(!detect_glottalization(&input("ten", "T EH1 N")));
    }

    #[test]
    fn r_coloring_on_embedded_r() {
        assert!(detect_r_coloring(&input("car", "K AA1 R")));
        assert!(detect_r_coloring(&input("bird", "B ER1 D")));
        assert!(!detect_r_coloring(&input("pin", "P IH1 N")));
    }

    #[test]
    fn aspiration_on_initial_stop() {
        assert!(detect_aspiration(&input("pin", "P IH1 N")));
        assert!(detect_aspiration(&input("top", "T AA1 P")));
        assert!(detect_aspiration(&input("cat", "K AE1 T")));
        assert!(!detect_aspiration(&input("spin", "S P IH1 N")));
        assert!(!detect_aspiration(&input("p", "P")));
    }

    #[test]
    fn nasal_flap_on_nt_cluster() {
        assert!(detect_nasal_flap(&input("winter", "W IH1 N DX ER0")));
        assert!(detect_nasal_flap(&input("mountain", "M AW1 N T N")));
        assert!(!detect_nasal_flap(&input("pin", "P IH1 N")));
    }

    #[test]
    fn linking_on_underscore() {
        assert!(detect_linking(&input("pick_up", "")));
        assert!(!detect_linking(&input("pickup", "")));
    }

    #[test]
    fn contractions_by_form_and_join() {
        assert!(detect_contractions(&input("gonna", "")));
        assert!(detect_contractions(&input("Wanna", "")));
        assert!(detect_contractions(&input("because", "")));
        assert!(detect_contractions(&input("want_to", "")));
        assert!(detect_contractions(&input("let_me", "")));
        assert!(detect_contractions(&input("kind_of", "")));
        assert!(!detect_contractions(&input("pick_up", "")));
        assert!(!detect_contractions(&input("winter", "")));
    }

    #[test]
    fn rhythm_on_three_tokens() {
        assert!(!detect_rhythm(&input("x", "K AE1")));
        assert!(detect_rhythm(&input("cat", "K AE1 T")));
    }

    #[test]
    fn positional_rules_do_not_fire_on_empty_input() {
        let i = input("", "");
        assert!(RULES.iter().all(|rule| !(rule.detect)(&i)));
    }
}
