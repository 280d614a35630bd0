// Word-list entry, the record format quiz front ends persist

use serde::{Deserialize, Serialize};

use crate::feature::FeatureId;

/// One word of a quiz word list.
///
/// Field names match the JSON word lists consumed by the quiz front ends.
/// `feature_id` is kept as a string because stored lists may carry labels
/// outside the closed enumeration; use [`WordEntry::feature`] to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Orthographic word or underscore-joined phrase.
    pub text: String,

    /// Identifier of the audio clip for this word.
    #[serde(default)]
    pub clip_id: String,

    /// Syllables of the transcription, each a space-joined token group.
    #[serde(default)]
    pub syllables: Vec<String>,

    /// Whether the stored pronunciation was entered by hand.
    #[serde(default)]
    pub original_pronunciation: bool,

    /// IPA rendering of the transcription.
    #[serde(default)]
    pub ipa_pronunciation: String,

    /// Quiz label for the word.
    #[serde(default)]
    pub feature_id: String,
}

impl WordEntry {
    /// Rebuild the transcription by joining the syllables with spaces.
    pub fn transcription(&self) -> String {
        self.syllables.join(" ")
    }

    /// Resolve `feature_id` against the closed enumeration.
    pub fn feature(&self) -> Option<FeatureId> {
        self.feature_id.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(syllables: &[&str], feature_id: &str) -> WordEntry {
        WordEntry {
            text: "water".to_string(),
            clip_id: "clip1".to_string(),
            syllables: syllables.iter().map(|s| s.to_string()).collect(),
            original_pronunciation: false,
            ipa_pronunciation: String::new(),
            feature_id: feature_id.to_string(),
        }
    }

    #[test]
    fn transcription_joins_syllables() {
        let e = entry(&["W AA1", "DX ER0"], "t_flap");
        assert_eq!(e.transcription(), "W AA1 DX ER0");
    }

    #[test]
    fn transcription_of_empty_entry_is_empty() {
        assert_eq!(entry(&[], "t_flap").transcription(), "");
    }

    #[test]
    fn feature_resolves_known_id() {
        assert_eq!(entry(&[], "t_flap").feature(), Some(FeatureId::TFlap));
    }

    #[test]
    fn feature_rejects_unknown_label() {
        assert_eq!(entry(&[], "other").feature(), None);
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let e: WordEntry = serde_json::from_str(r#"{"text": "city"}"#).unwrap();
        assert_eq!(e.text, "city");
        assert!(e.syllables.is_empty());
        assert!(!e.original_pronunciation);
        assert_eq!(e.feature(), None);
    }

    #[test]
    fn serialize_uses_word_list_field_names() {
        let json = serde_json::to_value(entry(&["W AA1"], "stress")).unwrap();
        assert_eq!(json["clip_id"], "clip1");
        assert_eq!(json["syllables"][0], "W AA1");
        assert_eq!(json["original_pronunciation"], false);
        assert_eq!(json["feature_id"], "stress");
    }
}
