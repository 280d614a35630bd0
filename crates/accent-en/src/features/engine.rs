// FeatureClassifier: runs every registered detector over one request
//
// The classifier holds no per-call state; the registry is a static slice, so
// one instance can be shared across threads.

use accent_core::feature::{FeatureId, FeatureSet};
use tracing::trace;

use super::rules::{RULES, Rule, RuleInput};

/// Evaluates a rule registry and unions the matching features.
#[derive(Clone, Copy)]
pub struct FeatureClassifier {
    rules: &'static [Rule],
}

impl FeatureClassifier {
    /// Classifier over the full American-English rule registry.
    pub fn new() -> Self {
        Self::with_rules(RULES)
    }

    /// Classifier over a custom registry.
    pub fn with_rules(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// The registered rules, in evaluation order.
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Features that have a detector in this registry.
    pub fn detectable_features(&self) -> FeatureSet {
        self.rules.iter().map(|rule| rule.feature).collect()
    }

    /// Run every detector and collect the features that fire.
    ///
    /// All detectors are evaluated on every call; none short-circuits another.
    pub fn classify(&self, input: &RuleInput<'_>) -> FeatureSet {
        let features: FeatureSet = self
            .rules
            .iter()
            .filter(|rule| (rule.detect)(input))
            .map(|rule| rule.feature)
            .collect();

        trace!(
            word = input.word,
            transcription = %input.joined,
            features = ?features,
            "classified"
        );
        features
    }

    /// Check a single feature without evaluating the rest.
    ///
    /// Returns `false` for features with no detector.
    pub fn detects(&self, feature: FeatureId, input: &RuleInput<'_>) -> bool {
        self.rules
            .iter()
            .filter(|rule| rule.feature == feature)
            .any(|rule| (rule.detect)(input))
    }
}

impl Default for FeatureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::rules::{detect_linking, detect_rhythm};

    fn classify(word: &str, transcription: &str) -> FeatureSet {
        FeatureClassifier::new().classify(&RuleInput::from_transcription(word, transcription))
    }

    fn set(ids: &[FeatureId]) -> FeatureSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn winter() {
        assert_eq!(
            classify("winter", "W IH1 N DX ER0"),
            set(&[
                FeatureId::Stress,
                FeatureId::Rhythm,
                FeatureId::TFlap,
                FeatureId::RColoring,
                FeatureId::NasalFlap,
            ])
        );
    }

    #[test]
    fn button() {
        assert_eq!(
            classify("button", "B AH1 T N"),
            set(&[FeatureId::Stress, FeatureId::Rhythm, FeatureId::Glottalization])
        );
    }

    #[test]
    fn phrase_with_reduction() {
        assert_eq!(
            classify("want_to", "W AA1 N AH0"),
            set(&[
                FeatureId::Stress,
                FeatureId::Rhythm,
                FeatureId::Reduction,
                FeatureId::Linking,
                FeatureId::Contractions,
            ])
        );
    }

    #[test]
    fn empty_request_yields_empty_set() {
        assert!(classify("", "").is_empty());
        assert!(classify("", "   ").is_empty());
    }

    #[test]
    fn word_rules_fire_without_transcription() {
        assert_eq!(
            classify("gonna", ""),
            set(&[FeatureId::Contractions])
        );
    }

    #[test]
    fn assimilation_and_intonation_are_not_detectable() {
        let detectable = FeatureClassifier::new().detectable_features();
        assert!(!detectable.contains(&FeatureId::Assimilation));
        assert!(!detectable.contains(&FeatureId::Intonation));
        assert_eq!(detectable.len(), 11);
    }

    #[test]
    fn detects_single_feature() {
        let classifier = FeatureClassifier::new();
        let input = RuleInput::from_transcription("button", "B AH1 T N");
        assert!(classifier.detects(FeatureId::Glottalization, &input));
        assert!(!classifier.detects(FeatureId::TFlap, &input));
        assert!(!classifier.detects(FeatureId::Intonation, &input));
    }

    #[test]
    fn custom_registry() {
        static ONLY: &[Rule] = &[
            Rule { feature: FeatureId::Linking, detect: detect_linking },
            Rule { feature: FeatureId::Rhythm, detect: detect_rhythm },
        ];
        let classifier = FeatureClassifier::with_rules(ONLY);
        let input = RuleInput::from_transcription("pick_up", "P IH1 K AH1 P");
        assert_eq!(
            classifier.classify(&input),
            set(&[FeatureId::Linking, FeatureId::Rhythm])
        );
    }
}
