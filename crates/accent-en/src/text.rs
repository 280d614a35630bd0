// Text helpers for front ends: example sentences and file-name slugs

use std::sync::LazyLock;

use regex::Regex;

/// Number of sentence templates available.
pub const SENTENCE_TEMPLATE_COUNT: usize = 10;

/// Fill the sentence templates with `word`.
///
/// Returns the first `min(count, 10)` sentences in template order. The word
/// is lower-cased in every template except one, which capitalises its first
/// letter. An empty or whitespace-only word yields no sentences.
pub fn example_sentences(word: &str, count: usize) -> Vec<String> {
    if word.trim().is_empty() {
        return Vec::new();
    }

    let lower = word.to_lowercase();
    let cap = capitalize_first(word);

    let templates = [
        format!("The {lower} is important."),
        format!("I enjoy the {lower}."),
        format!("She mentioned the {lower}."),
        format!("They saw a beautiful {lower}."),
        format!("This {lower} is interesting."),
        format!("He studied the {lower} carefully."),
        format!("The {cap} was remarkable."),
        format!("Can you explain the {lower}?"),
        format!("We discussed the {lower} at length."),
        format!("The {lower} has many uses."),
    ];

    templates.into_iter().take(count.min(SENTENCE_TEMPLATE_COUNT)).collect()
}

/// Upper-case the first character and keep the rest as written.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

static SLUG_STRIP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^\w\s-]").ok());
static SLUG_SEPARATORS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[-\s]+").ok());

/// Lower-case slug suitable for a file name: `"Check it out!"` becomes
/// `"check-it-out"`.
///
/// Characters other than word characters, whitespace and `-` are dropped;
/// runs of whitespace and `-` collapse to a single `-`; leading and trailing
/// `-` are trimmed.
pub fn safe_filename(text: &str) -> String {
    let (Some(strip), Some(separators)) = (SLUG_STRIP.as_ref(), SLUG_SEPARATORS.as_ref()) else {
        return String::new();
    };
    let lower = text.to_lowercase();
    let kept = strip.replace_all(&lower, "");
    let joined = separators.replace_all(&kept, "-");
    joined.trim_matches('-').to_string()
}
