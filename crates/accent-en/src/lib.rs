//! American-English pronunciation engine.
//!
//! Converts ARPAbet transcriptions to IPA, splits them into syllables and
//! classifies which American accent features a word demonstrates. All
//! operations are pure functions over their arguments and static tables.
//!
//! # Architecture
//!
//! - [`notation`] -- ARPAbet to IPA conversion with stress marks
//! - [`syllabifier`] -- vowel-nucleus syllable grouping
//! - [`features`] -- detector registry and classifier
//! - [`knowledge`] -- teaching records for every feature
//! - [`entry`] -- word-list entry builder
//! - [`text`] -- example sentences and file-name slugs
//! - [`handle`] -- [`AccentHandle`], the facade used by front ends

pub mod entry;
pub mod features;
pub mod handle;
pub mod knowledge;
pub mod notation;
pub mod syllabifier;
pub mod text;

pub use features::{classify_features, classify_tokens};
pub use handle::AccentHandle;
pub use knowledge::{get_all_features, get_feature_examples, get_feature_info, get_feature_summary};
pub use notation::transcription_to_ipa;
pub use syllabifier::{syllabify, syllabify_tokens};
