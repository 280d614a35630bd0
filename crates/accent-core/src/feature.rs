// Feature identifiers for American-English pronunciation features

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A pronunciation feature of American English.
///
/// The enumeration is closed: adding a variant requires a matching record in
/// the knowledge base. Variant order is the declared order used for listings,
/// and `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureId {
    Stress,
    Rhythm,
    Reduction,
    Linking,
    Assimilation,
    TFlap,
    DarkL,
    Glottalization,
    RColoring,
    Aspiration,
    NasalFlap,
    Intonation,
    Contractions,
}

/// Set of detected features. Iterates in declared order.
pub type FeatureSet = BTreeSet<FeatureId>;

/// Error returned when parsing an id outside the closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature id: {0}")]
pub struct UnknownFeatureId(pub String);

impl FeatureId {
    /// Every feature, in declared order.
    pub const ALL: [FeatureId; 13] = [
        FeatureId::Stress,
        FeatureId::Rhythm,
        FeatureId::Reduction,
        FeatureId::Linking,
        FeatureId::Assimilation,
        FeatureId::TFlap,
        FeatureId::DarkL,
        FeatureId::Glottalization,
        FeatureId::RColoring,
        FeatureId::Aspiration,
        FeatureId::NasalFlap,
        FeatureId::Intonation,
        FeatureId::Contractions,
    ];

    /// The snake_case id used in word lists and front ends.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureId::Stress => "stress",
            FeatureId::Rhythm => "rhythm",
            FeatureId::Reduction => "reduction",
            FeatureId::Linking => "linking",
            FeatureId::Assimilation => "assimilation",
            FeatureId::TFlap => "t_flap",
            FeatureId::DarkL => "dark_l",
            FeatureId::Glottalization => "glottalization",
            FeatureId::RColoring => "r_coloring",
            FeatureId::Aspiration => "aspiration",
            FeatureId::NasalFlap => "nasal_flap",
            FeatureId::Intonation => "intonation",
            FeatureId::Contractions => "contractions",
        }
    }

    /// Position of this feature in declared order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureId {
    type Err = UnknownFeatureId;

    /// Ids are matched exactly; `"T_FLAP"` is not `t_flap`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownFeatureId(s.to_string()))
    }
}

/// Render a feature set as its ids, in declared order.
pub fn feature_ids(set: &FeatureSet) -> Vec<&'static str> {
    set.iter().map(|id| id.as_str()).collect()
}
