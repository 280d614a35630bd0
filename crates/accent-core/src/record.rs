// Feature knowledge-base record types
//
// Records are built once from static tables and never mutated, so every
// field borrows `'static` data.

use serde::Serialize;

use crate::feature::FeatureId;

/// A canonical example of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleEntry {
    /// Example word or underscore-joined phrase.
    pub word: &'static str,

    /// Its ARPAbet transcription.
    pub transcription: &'static str,

    /// What to listen for in this example.
    pub note: &'static str,
}

/// Teaching metadata for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    pub id: FeatureId,

    /// Display name, e.g. "T/D Flapping".
    pub name: &'static str,

    /// One-line description.
    pub description: &'static str,

    /// Prose explanation.
    pub explanation: &'static str,

    /// Rule statements, in teaching order.
    pub rules: &'static [&'static str],

    /// Example entries, in teaching order.
    pub examples: &'static [ExampleEntry],

    /// Common learner mistakes, in teaching order.
    pub common_mistakes: &'static [&'static str],
}

impl FeatureRecord {
    /// Lightweight projection used for listings.
    pub fn summary(&self) -> FeatureSummary {
        FeatureSummary {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Id, name and description of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureSummary {
    pub id: FeatureId,
    pub name: &'static str,
    pub description: &'static str,
}
