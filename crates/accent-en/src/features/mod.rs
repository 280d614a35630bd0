// Feature classification -- which American-English pronunciation features a
// word demonstrates
//
// Detectors live in `rules`, one pure predicate per feature, registered in a
// static table. `engine` evaluates the table and unions the results.

mod engine;
mod rules;

pub use engine::FeatureClassifier;
pub use rules::{Detector, RULES, Rule, RuleInput};

use accent_core::feature::FeatureSet;

/// Classify a word given a space-separated transcription.
///
/// `classify_features("winter", "W IH1 N DX ER0")` yields stress, rhythm,
/// t_flap, r_coloring and nasal_flap. Never fails; empty input yields an
/// empty set.
pub fn classify_features(word: &str, transcription: &str) -> FeatureSet {
    FeatureClassifier::new().classify(&RuleInput::from_transcription(word, transcription))
}

/// Classify a word given pre-split tokens.
pub fn classify_tokens<S: AsRef<str>>(word: &str, tokens: &[S]) -> FeatureSet {
    FeatureClassifier::new().classify(&RuleInput::from_tokens(word, tokens))
}
