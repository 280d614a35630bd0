// Syllabification -- vowel-nucleus grouping of ARPAbet tokens
//
// Tokens accumulate into the current syllable until a vowel-bearing token
// closes it. Consonants after the last vowel form a trailing group of their
// own. A token is vowel-bearing when its code contains A, E, I, O or U.

use accent_core::phoneme::PhonemeToken;

/// Separator used when displaying syllables on one line.
pub const DISPLAY_SEPARATOR: &str = " | ";

/// Split a space-separated transcription into syllables.
///
/// `"W AA1 DX ER0"` becomes `["W AA1", "DX ER0"]`. Empty input yields an
/// empty list. Joining the result with spaces reproduces the token sequence.
pub fn syllabify(transcription: &str) -> Vec<String> {
    let tokens: Vec<&str> = transcription.split_whitespace().collect();
    syllabify_tokens(&tokens)
}

/// Split pre-tokenized input into syllables.
///
/// Blank tokens are skipped; every other token lands in exactly one syllable,
/// in input order.
pub fn syllabify_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut syllables = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        current.push(token);
        if PhonemeToken::parse(token).is_vowel_bearing() {
            syllables.push(current.join(" "));
            current.clear();
        }
    }

    if !current.is_empty() {
        syllables.push(current.join(" "));
    }

    syllables
}

/// Join syllables for display, e.g. `"W AA1 | DX ER0"`.
pub fn render_syllables<S: AsRef<str>>(syllables: &[S], separator: &str) -> String {
    syllables
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(separator)
}
