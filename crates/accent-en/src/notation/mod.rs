// Notation conversion -- ARPAbet transcriptions to slash-delimited IPA
//
// Each token converts independently: strip a trailing digit, look the code up
// in the table (falling back to the lower-cased code), and prefix a stress
// mark for primary or secondary stress.

mod table;

pub use table::{
    PRIMARY_STRESS_MARK, SCHWA, SECONDARY_STRESS_MARK, ipa_for_code, ipa_for_token, stress_mark,
};

use accent_core::phoneme::PhonemeToken;
use tracing::debug;

/// Returned for empty or whitespace-only input.
pub const EMPTY_IPA: &str = "/";

/// Convert a space-separated ARPAbet transcription to IPA wrapped in slashes.
///
/// `"B UH1 L AH0 K S"` becomes `"/bˈʌləks/"`. Empty or whitespace-only input
/// yields the single-slash sentinel `"/"`. Never fails: codes missing from the
/// table are rendered as their lower-cased text.
pub fn transcription_to_ipa(transcription: &str) -> String {
    if transcription.trim().is_empty() {
        return EMPTY_IPA.to_string();
    }

    let mut result = String::with_capacity(transcription.len() + 2);
    result.push('/');
    for raw in transcription.split_whitespace() {
        push_token_ipa(&mut result, &PhonemeToken::parse(raw));
    }
    result.push('/');
    result
}

/// Convert a single raw token (e.g. `"AE1"`) to IPA, stress mark included.
pub fn token_to_ipa(raw: &str) -> String {
    let mut result = String::new();
    push_token_ipa(&mut result, &PhonemeToken::parse(raw));
    result
}

fn push_token_ipa(out: &mut String, token: &PhonemeToken) {
    if let Some(mark) = stress_mark(token.stress) {
        out.push(mark);
    }
    match ipa_for_token(token) {
        Some(glyph) => out.push_str(glyph),
        None => {
            debug!(code = %token.code, "unmapped phoneme code, rendering literally");
            out.push_str(&token.code.to_lowercase());
        }
    }
}
