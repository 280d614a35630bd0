// accent-features: Detect American accent features in words.
//
// Each input is a word followed by its transcription. On stdin the word and
// transcription are separated by a tab (or, failing that, the first space).
//
// Usage:
//   accent-features [OPTIONS] [WORD TRANSCRIPTION...]
//   accent-features [OPTIONS] < words.tsv
//
// Options:
//   --json                  Print one JSON object per word
//   -v, --verbose           Log each classification
//   -h, --help              Print help

use std::io::{self, Write};

use accent_core::feature::feature_ids;
use accent_en::AccentHandle;

/// Split `WORD<TAB>TRANSCRIPTION`, falling back to the first whitespace.
fn split_line(line: &str) -> (&str, &str) {
    match line.split_once('\t') {
        Some((word, transcription)) => (word.trim(), transcription.trim()),
        None => match line.split_once(char::is_whitespace) {
            Some((word, transcription)) => (word, transcription.trim()),
            None => (line, ""),
        },
    }
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if accent_cli::wants_help(&args) {
        println!("accent-features: Detect American accent features in words.");
        println!();
        println!("Usage: accent-features [OPTIONS] [WORD TRANSCRIPTION...]");
        println!();
        println!("If arguments are given, the first is the word and the rest form");
        println!("its transcription. Otherwise reads WORD<TAB>TRANSCRIPTION lines");
        println!("from stdin.");
        println!();
        println!("Options:");
        println!("  --json                  Print one JSON object per word");
        println!("  -v, --verbose           Log each classification");
        println!("  -h, --help              Print this help");
        return;
    }

    let json = accent_cli::take_flag(&mut args, &["--json"]);
    let verbose = accent_cli::take_flag(&mut args, &["-v", "--verbose"]);
    accent_cli::init_tracing(verbose);

    let positional = accent_cli::positional(&args);
    let requests: Vec<(String, String)> = match positional.split_first() {
        Some((word, tokens)) => vec![(word.clone(), tokens.join(" "))],
        None => accent_cli::input_lines(&[])
            .iter()
            .map(|line| {
                let (word, transcription) = split_line(line);
                (word.to_string(), transcription.to_string())
            })
            .collect(),
    };

    let handle = AccentHandle::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (word, transcription) in &requests {
        let features = handle.classify_features(word, transcription);
        let ids = feature_ids(&features);
        if json {
            let value = serde_json::json!({
                "word": word,
                "transcription": transcription,
                "features": ids,
            });
            let _ = writeln!(out, "{value}");
        } else {
            let _ = writeln!(out, "{word}\t{}", ids.join(","));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_tab() {
        assert_eq!(split_line("water\tW AA1 DX ER0"), ("water", "W AA1 DX ER0"));
    }

    #[test]
    fn split_on_first_space() {
        assert_eq!(split_line("water W AA1 DX ER0"), ("water", "W AA1 DX ER0"));
    }

    #[test]
    fn word_without_transcription() {
        assert_eq!(split_line("gonna"), ("gonna", ""));
    }
}
