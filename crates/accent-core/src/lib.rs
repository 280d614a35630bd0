//! Shared types for American-English pronunciation analysis.
//!
//! - [`phoneme`] -- ARPAbet tokens, stress levels and code classification
//! - [`feature`] -- the closed set of pronunciation feature ids
//! - [`record`] -- knowledge-base record types
//! - [`entry`] -- the word-list entry format used by quiz front ends

pub mod entry;
pub mod feature;
pub mod phoneme;
pub mod record;
