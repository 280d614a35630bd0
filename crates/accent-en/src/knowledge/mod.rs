// Feature knowledge base -- teaching records for every feature id
//
// The records are static and read-only. String lookups resolve through
// `FeatureId::from_str`, so an id outside the closed enumeration is reported
// as not found rather than as an error.

mod table;

use std::collections::BTreeMap;

use accent_core::feature::FeatureId;
use accent_core::record::{ExampleEntry, FeatureRecord, FeatureSummary};
use tracing::debug;

use table::FEATURES;

/// Record for a feature id.
pub fn feature_record(id: FeatureId) -> &'static FeatureRecord {
    &FEATURES[id.index()]
}

/// Record for a string id, or `None` when the id is not a known feature.
pub fn get_feature_info(id: &str) -> Option<&'static FeatureRecord> {
    match id.parse::<FeatureId>() {
        Ok(id) => Some(feature_record(id)),
        Err(err) => {
            debug!(%err, "feature lookup");
            None
        }
    }
}

/// Every record, keyed by id.
pub fn get_all_features() -> BTreeMap<FeatureId, &'static FeatureRecord> {
    FEATURES.iter().map(|record| (record.id, record)).collect()
}

/// Example entries for a string id; empty when the id is unknown.
pub fn get_feature_examples(id: &str) -> &'static [ExampleEntry] {
    get_feature_info(id)
        .map(|record| record.examples)
        .unwrap_or_default()
}

/// Id, name and description of every feature, in declared order.
pub fn get_feature_summary() -> Vec<FeatureSummary> {
    FEATURES.iter().map(FeatureRecord::summary).collect()
}

/// Iterate over all records in declared order.
pub fn records() -> impl Iterator<Item = &'static FeatureRecord> {
    FEATURES.iter()
}
