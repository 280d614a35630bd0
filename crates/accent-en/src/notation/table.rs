// ARPAbet code to IPA glyph table

use accent_core::phoneme::{PhonemeToken, Stress};

/// Primary stress mark (U+02C8).
pub const PRIMARY_STRESS_MARK: char = 'ˈ';

/// Secondary stress mark (U+02CC).
pub const SECONDARY_STRESS_MARK: char = 'ˌ';

/// Schwa, the rendering of the reduced vowel `AH0`.
pub const SCHWA: &str = "ə";

/// Look up the IPA glyph for a phoneme code (exact, case-sensitive match).
///
/// Returns `None` for codes outside the table, including the flap `DX`.
pub fn ipa_for_code(code: &str) -> Option<&'static str> {
    let glyph = match code {
        // Consonants
        "B" => "b",
        "P" => "p",
        "T" => "t",
        "D" => "d",
        "K" => "k",
        "G" => "ɡ",
        "CH" => "tʃ",
        "JH" => "dʒ",
        "F" => "f",
        "V" => "v",
        "TH" => "θ",
        "DH" => "ð",
        "S" => "s",
        "Z" => "z",
        "SH" => "ʃ",
        "ZH" => "ʒ",
        "HH" => "h",
        "M" => "m",
        "N" => "n",
        "NG" => "ŋ",
        "L" => "l",
        "R" => "ɹ",
        "Y" => "j",
        "W" => "w",
        // Vowels
        "AA" => "ɑ",
        "AE" => "æ",
        "AH" => "ʌ",
        "AO" => "ɔ",
        "AW" => "aʊ",
        "AY" => "aɪ",
        "EH" => "ɛ",
        "ER" => "ɝ",
        "EY" => "eɪ",
        "IH" => "ɪ",
        "IY" => "i",
        "OW" => "oʊ",
        "OY" => "ɔɪ",
        "UH" => "ʌ",
        "UW" => "u",
        "AX" => "ə",
        _ => return None,
    };
    Some(glyph)
}

/// Glyph for a parsed token, applying vowel reduction: unstressed `AH`
/// renders as schwa.
pub fn ipa_for_token(token: &PhonemeToken) -> Option<&'static str> {
    if token.code == "AH" && token.stress == Some(Stress::Unstressed) {
        return Some(SCHWA);
    }
    ipa_for_code(&token.code)
}

/// Stress mark written before a token's glyph, if any.
pub fn stress_mark(stress: Option<Stress>) -> Option<char> {
    match stress {
        Some(Stress::Primary) => Some(PRIMARY_STRESS_MARK),
        Some(Stress::Secondary) => Some(SECONDARY_STRESS_MARK),
        Some(Stress::Unstressed) | None => None,
    }
}
