//! Golden tests: IPA, syllables and detected features for a fixed word list.
//!
//! The expected values live in `tests/golden/classification.json` at the
//! workspace root and cover every knowledge-base example plus a few edge
//! cases. Features are compared as sets.
//!
//! Run: cargo test -p accent-en --test golden

use std::collections::BTreeSet;
use std::path::PathBuf;

use accent_en::AccentHandle;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenFile {
    cases: Vec<GoldenCase>,
}

#[derive(Debug, Deserialize)]
struct GoldenCase {
    word: String,
    transcription: String,
    ipa: String,
    syllables: Vec<String>,
    features: Vec<String>,
}

fn load_golden(filename: &str) -> GoldenFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/golden")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

#[test]
fn golden_file_is_not_empty() {
    assert!(load_golden("classification.json").cases.len() > 40);
}

#[test]
fn golden_ipa() {
    let handle = AccentHandle::new();
    let mut mismatches = Vec::new();
    for case in load_golden("classification.json").cases {
        let got = handle.transcription_to_ipa(&case.transcription);
        if got != case.ipa {
            mismatches.push(format!("{}: expected {}, got {}", case.word, case.ipa, got));
        }
    }
    assert!(mismatches.is_empty(), "IPA mismatches:\n{}", mismatches.join("\n"));
}

#[test]
fn golden_syllables() {
    let handle = AccentHandle::new();
    let mut mismatches = Vec::new();
    for case in load_golden("classification.json").cases {
        let got = handle.syllabify(&case.transcription);
        if got != case.syllables {
            mismatches.push(format!("{}: expected {:?}, got {:?}", case.word, case.syllables, got));
        }
    }
    assert!(mismatches.is_empty(), "syllable mismatches:\n{}", mismatches.join("\n"));
}

#[test]
fn golden_features() {
    let handle = AccentHandle::new();
    let mut mismatches = Vec::new();
    for case in load_golden("classification.json").cases {
        let expected: BTreeSet<String> = case.features.iter().cloned().collect();
        let got: BTreeSet<String> = handle
            .classify_features(&case.word, &case.transcription)
            .iter()
            .map(|id| id.as_str().to_string())
            .collect();
        if got != expected {
            mismatches.push(format!(
                "{} [{}]: expected {:?}, got {:?}",
                case.word, case.transcription, expected, got
            ));
        }
    }
    assert!(mismatches.is_empty(), "feature mismatches:\n{}", mismatches.join("\n"));
}
