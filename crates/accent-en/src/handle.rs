// AccentHandle: single entry point for front ends
//
// Wraps the converter, syllabifier, classifier and knowledge base. The handle
// caches nothing; every call recomputes from its arguments, so one handle can
// be shared freely between threads.

use std::collections::BTreeMap;

use accent_core::entry::WordEntry;
use accent_core::feature::{FeatureId, FeatureSet};
use accent_core::record::{ExampleEntry, FeatureRecord, FeatureSummary};

use crate::entry::build_word_entry;
use crate::features::{FeatureClassifier, RuleInput};
use crate::knowledge;
use crate::notation::transcription_to_ipa;
use crate::syllabifier;
use crate::text::example_sentences;

/// Classification facade consumed by the CLI, WASM and FFI front ends.
#[derive(Clone, Copy, Default)]
pub struct AccentHandle {
    classifier: FeatureClassifier,
}

impl AccentHandle {
    /// Create a handle over the full rule registry.
    pub fn new() -> Self {
        Self {
            classifier: FeatureClassifier::new(),
        }
    }

    /// Create a handle over a custom classifier.
    pub fn with_classifier(classifier: FeatureClassifier) -> Self {
        Self { classifier }
    }

    /// The classifier used by [`classify_features`](Self::classify_features).
    pub fn classifier(&self) -> &FeatureClassifier {
        &self.classifier
    }

    // -- Notation and syllables --

    /// IPA for a transcription; `"/"` for empty input.
    pub fn transcription_to_ipa(&self, transcription: &str) -> String {
        transcription_to_ipa(transcription)
    }

    /// Syllables of a space-separated transcription.
    pub fn syllabify(&self, transcription: &str) -> Vec<String> {
        syllabifier::syllabify(transcription)
    }

    /// Syllables of pre-split tokens.
    pub fn syllabify_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        syllabifier::syllabify_tokens(tokens)
    }

    // -- Classification --

    /// Features a word demonstrates for one transcription.
    pub fn classify_features(&self, word: &str, transcription: &str) -> FeatureSet {
        self.classifier
            .classify(&RuleInput::from_transcription(word, transcription))
    }

    /// Features a word demonstrates for pre-split tokens.
    pub fn classify_tokens<S: AsRef<str>>(&self, word: &str, tokens: &[S]) -> FeatureSet {
        self.classifier.classify(&RuleInput::from_tokens(word, tokens))
    }

    // -- Knowledge base --

    /// Record for a string id; `None` when the id is unknown.
    pub fn feature_info(&self, id: &str) -> Option<&'static FeatureRecord> {
        knowledge::get_feature_info(id)
    }

    /// Record for a typed id.
    pub fn feature_record(&self, id: FeatureId) -> &'static FeatureRecord {
        knowledge::feature_record(id)
    }

    /// Every record, keyed by id.
    pub fn all_features(&self) -> BTreeMap<FeatureId, &'static FeatureRecord> {
        knowledge::get_all_features()
    }

    /// Examples for a string id; empty when the id is unknown.
    pub fn feature_examples(&self, id: &str) -> &'static [ExampleEntry] {
        knowledge::get_feature_examples(id)
    }

    /// Id, name and description of every feature, in declared order.
    pub fn feature_summary(&self) -> Vec<FeatureSummary> {
        knowledge::get_feature_summary()
    }

    // -- Word lists --

    /// Build a word-list entry for one transcription.
    pub fn build_word_entry(&self, text: &str, transcription: &str, clip_id: &str) -> WordEntry {
        build_word_entry(text, transcription, clip_id)
    }

    /// Up to ten example sentences using `word`.
    pub fn example_sentences(&self, word: &str, count: usize) -> Vec<String> {
        example_sentences(word, count)
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn handle_is_send_and_sync() {
        assert_send_sync::<AccentHandle>();
    }

    #[test]
    fn ipa_and_syllables() {
        let h = AccentHandle::new();
        assert_eq!(h.transcription_to_ipa("B UH1 L AH0 K S"), "/bˈʌləks/");
        assert_eq!(h.transcription_to_ipa(""), "/");
        assert_eq!(h.syllabify("B UH1 L AH0 K S"), vec!["B UH1", "L AH0", "K S"]);
        assert_eq!(h.syllabify_tokens(&["K", "AE1", "T"]), vec!["K AE1", "T"]);
    }

    #[test]
    fn classification_forms_agree() {
        let h = AccentHandle::new();
        let a = h.classify_features("button", "B AH1 T N");
        let b = h.classify_tokens("button", &["B", "AH1", "T", "N"]);
        assert_eq!(a, b);
        assert!(a.contains(&FeatureId::Glottalization));
    }

    #[test]
    fn knowledge_accessors() {
        let h = AccentHandle::new();
        assert!(h.feature_info("not_a_real_feature").is_none());
        assert_eq!(h.feature_info("stress").map(|r| r.name), Some("Word Stress"));
        assert_eq!(h.feature_record(FeatureId::Rhythm).name, "Rhythm & Timing");
        assert_eq!(h.all_features().len(), 13);
        assert_eq!(h.feature_examples("t_flap").len(), 5);
        assert!(h.feature_examples("bogus").is_empty());
        assert_eq!(h.feature_summary().len(), 13);
    }

    #[test]
    fn word_list_helpers() {
        let h = AccentHandle::new();
        let entry = h.build_word_entry("city", "S IH1 DX IY0", "clip1");
        assert_eq!(entry.syllables, vec!["S IH1", "DX IY0"]);
        assert_eq!(entry.feature_id, "t_flap");
        assert_eq!(h.example_sentences("city", 2).len(), 2);
    }

    #[test]
    fn version_is_set() {
        assert!(!AccentHandle::get_version().is_empty());
    }
}
