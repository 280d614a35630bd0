// Word-entry builder
//
// Produces the word-list records consumed by quiz front ends from a word and
// one dictionary transcription.

use accent_core::entry::WordEntry;
use accent_core::feature::FeatureId;

use crate::notation::transcription_to_ipa;
use crate::syllabifier::syllabify_tokens;

/// Pick the single quiz label for a word.
///
/// Checked in order: a token containing `T` or `D` gives `t_flap`; a token
/// containing `1` gives `stress`; more than two tokens give `rhythm`; a word
/// longer than six characters gives `intonation`; anything else is
/// `assimilation`.
pub fn assign_quiz_feature<S: AsRef<str>>(word: &str, tokens: &[S]) -> FeatureId {
    let tokens: Vec<&str> = tokens
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.iter().any(|t| t.contains(['T', 'D'])) {
        FeatureId::TFlap
    } else if tokens.iter().any(|t| t.contains('1')) {
        FeatureId::Stress
    } else if tokens.len() > 2 {
        FeatureId::Rhythm
    } else if word.chars().count() > 6 {
        FeatureId::Intonation
    } else {
        FeatureId::Assimilation
    }
}

/// Build a word-list entry: syllables, IPA and quiz label for one
/// transcription. Stored entries built here are never marked as hand-entered.
pub fn build_word_entry(text: &str, transcription: &str, clip_id: &str) -> WordEntry {
    let tokens: Vec<&str> = transcription.split_whitespace().collect();
    WordEntry {
        text: text.to_string(),
        clip_id: clip_id.to_string(),
        syllables: syllabify_tokens(&tokens),
        original_pronunciation: false,
        ipa_pronunciation: transcription_to_ipa(transcription),
        feature_id: assign_quiz_feature(text, &tokens).as_str().to_string(),
    }
}
