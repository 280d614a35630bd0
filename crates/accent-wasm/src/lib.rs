// WASM bindings for the American accent engine.
//
// Provides a `WasmAccent` class exported via wasm-bindgen that wraps the
// `AccentHandle` from accent-en. Feature sets, records and word entries are
// serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const accent = new WasmAccent();
//   accent.transcriptionToIpa("B UH1 L AH0 K S");     // => "/bˈʌləks/"
//   accent.syllabify("W AA1 DX ER0");                 // => ["W AA1", "DX ER0"]
//   accent.classifyFeatures("button", "B AH1 T N");   // => ["stress", "rhythm", "glottalization"]
//   accent.featureInfo("t_flap");                     // => { id: "t_flap", name: ..., ... }
//   accent.featureInfo("nope");                       // => null
//   accent.featureSummary();                          // => [{ id, name, description }, ...]
//   accent.buildWordEntry("city", "S IH1 DX IY0", "clip1");

use serde::Serialize;
use wasm_bindgen::prelude::*;

use accent_core::feature::feature_ids;
use accent_core::record::{ExampleEntry, FeatureRecord};
use accent_en::AccentHandle;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a feature record.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFeatureRecord {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    explanation: &'static str,
    rules: &'static [&'static str],
    examples: &'static [ExampleEntry],
    common_mistakes: &'static [&'static str],
}

impl From<&'static FeatureRecord> for JsFeatureRecord {
    fn from(record: &'static FeatureRecord) -> Self {
        JsFeatureRecord {
            id: record.id.as_str(),
            name: record.name,
            description: record.description,
            explanation: record.explanation,
            rules: record.rules,
            examples: record.examples,
            common_mistakes: record.common_mistakes,
        }
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmAccent
// ============================================================================

/// American-English pronunciation engine for WebAssembly.
///
/// Converts ARPAbet transcriptions to IPA, splits them into syllables,
/// classifies accent features and serves the feature guide.
#[wasm_bindgen]
pub struct WasmAccent {
    handle: AccentHandle,
}

#[wasm_bindgen]
impl WasmAccent {
    /// Create a new engine instance. No data files are needed.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmAccent {
        WasmAccent {
            handle: AccentHandle::new(),
        }
    }

    /// IPA for a transcription; `"/"` for empty input.
    #[wasm_bindgen(js_name = "transcriptionToIpa")]
    pub fn transcription_to_ipa(&self, transcription: &str) -> String {
        self.handle.transcription_to_ipa(transcription)
    }

    /// Syllables of a transcription.
    pub fn syllabify(&self, transcription: &str) -> Vec<String> {
        self.handle.syllabify(transcription)
    }

    /// Feature ids a word demonstrates, in declared order.
    #[wasm_bindgen(js_name = "classifyFeatures")]
    pub fn classify_features(&self, word: &str, transcription: &str) -> Vec<String> {
        feature_ids(&self.handle.classify_features(word, transcription))
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Full record for a feature id, or `null` when the id is unknown.
    ///
    /// Fields: `id`, `name`, `description`, `explanation`, `rules`,
    /// `examples` (`word`, `transcription`, `note`), `commonMistakes`.
    #[wasm_bindgen(js_name = "featureInfo")]
    pub fn feature_info(&self, id: &str) -> Result<JsValue, JsError> {
        match self.handle.feature_info(id) {
            Some(record) => to_js(&JsFeatureRecord::from(record)),
            None => Ok(JsValue::NULL),
        }
    }

    /// Examples for a feature id; empty array when the id is unknown.
    #[wasm_bindgen(js_name = "featureExamples")]
    pub fn feature_examples(&self, id: &str) -> Result<JsValue, JsError> {
        to_js(self.handle.feature_examples(id))
    }

    /// `{ id, name, description }` for every feature, in declared order.
    #[wasm_bindgen(js_name = "featureSummary")]
    pub fn feature_summary(&self) -> Result<JsValue, JsError> {
        to_js(&self.handle.feature_summary())
    }

    /// Every record, in declared order.
    #[wasm_bindgen(js_name = "allFeatures")]
    pub fn all_features(&self) -> Result<JsValue, JsError> {
        let records: Vec<JsFeatureRecord> = self
            .handle
            .all_features()
            .into_values()
            .map(JsFeatureRecord::from)
            .collect();
        to_js(&records)
    }

    /// Word-list entry with syllables, IPA and quiz label.
    ///
    /// Field names follow the stored word-list format (`clip_id`,
    /// `ipa_pronunciation`, ...).
    #[wasm_bindgen(js_name = "buildWordEntry")]
    pub fn build_word_entry(
        &self,
        text: &str,
        transcription: &str,
        clip_id: &str,
    ) -> Result<JsValue, JsError> {
        to_js(&self.handle.build_word_entry(text, transcription, clip_id))
    }

    /// Up to ten example sentences using `word`.
    #[wasm_bindgen(js_name = "exampleSentences")]
    pub fn example_sentences(&self, word: &str, count: usize) -> Vec<String> {
        self.handle.example_sentences(word, count)
    }

    /// Return the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        AccentHandle::get_version().to_string()
    }
}

impl Default for WasmAccent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accent_core::feature::FeatureId;
    use accent_en::knowledge::feature_record;

    #[test]
    fn record_dto_uses_string_id() {
        let dto = JsFeatureRecord::from(feature_record(FeatureId::NasalFlap));
        assert_eq!(dto.id, "nasal_flap");
        assert_eq!(dto.examples.len(), 5);
    }

    #[test]
    fn classify_returns_ids_in_declared_order() {
        let accent = WasmAccent::new();
        assert_eq!(
            accent.classify_features("button", "B AH1 T N"),
            vec!["stress", "rhythm", "glottalization"]
        );
        assert!(accent.classify_features("", "").is_empty());
    }

    #[test]
    fn plain_value_methods() {
        let accent = WasmAccent::default();
        assert_eq!(accent.transcription_to_ipa("B UH1 L AH0 K S"), "/bˈʌləks/");
        assert_eq!(accent.syllabify("W AA1 DX ER0"), vec!["W AA1", "DX ER0"]);
        assert_eq!(accent.example_sentences("city", 3).len(), 3);
        assert!(!WasmAccent::get_version().is_empty());
    }
}
