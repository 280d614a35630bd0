// accent-words: Inspect or rebuild a quiz word list.
//
// Loads a JSON word list and prints, per entry, the IPA and syllables of its
// stored transcription, the stored quiz label and the features detected.
//
// Usage:
//   accent-words [-w WORDS_PATH] [OPTIONS]
//
// Options:
//   -w, --words PATH        Word list file (see search order below)
//   --export                Print the list rebuilt from its transcriptions as JSON
//   --sentences N           Also print N example sentences per word
//   -v, --verbose           Log the loaded path and classifications
//   -h, --help              Print help
//
// Word list search order: -w/--words, ACCENT_WORDS_PATH (file or directory
// holding words.json), ~/.accent/words.json, ./words.json.

use std::io::{self, Write};

use accent_core::entry::WordEntry;
use accent_core::feature::feature_ids;
use accent_en::AccentHandle;

/// Rebuild an entry from its stored syllables, keeping its clip and flag.
fn rebuild(handle: &AccentHandle, entry: &WordEntry) -> WordEntry {
    let mut rebuilt = handle.build_word_entry(&entry.text, &entry.transcription(), &entry.clip_id);
    rebuilt.original_pronunciation = entry.original_pronunciation;
    rebuilt
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, mut args) = accent_cli::parse_words_path(&args);

    if accent_cli::wants_help(&args) {
        println!("accent-words: Inspect or rebuild a quiz word list.");
        println!();
        println!("Usage: accent-words [-w WORDS_PATH] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -w, --words PATH        Word list file");
        println!("  --export                Print the rebuilt list as JSON");
        println!("  --sentences N           Also print N example sentences per word");
        println!("  -v, --verbose           Log the loaded path and classifications");
        println!("  -h, --help              Print this help");
        println!();
        println!("Search order: -w/--words, ${}, ~/.accent/words.json, ./words.json", accent_cli::WORDS_PATH_ENV);
        return;
    }

    let export = accent_cli::take_flag(&mut args, &["--export"]);
    let verbose = accent_cli::take_flag(&mut args, &["-v", "--verbose"]);
    let (sentences, _args) = accent_cli::parse_option_value(&args, "--sentences", "--sentences");
    let sentences: usize = match sentences {
        Some(n) => n
            .parse()
            .unwrap_or_else(|_| accent_cli::fatal("invalid number for --sentences")),
        None => 0,
    };
    accent_cli::init_tracing(verbose);

    let (_, entries) = accent_cli::load_word_list(words_path.as_deref())
        .unwrap_or_else(|e| accent_cli::fatal(&e.to_string()));

    let handle = AccentHandle::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if export {
        let rebuilt: Vec<WordEntry> = entries.iter().map(|e| rebuild(&handle, e)).collect();
        match serde_json::to_string_pretty(&rebuilt) {
            Ok(s) => {
                let _ = writeln!(out, "{s}");
            }
            Err(e) => accent_cli::fatal(&format!("failed to encode JSON: {e}")),
        }
        return;
    }

    for entry in &entries {
        let transcription = entry.transcription();
        let ipa = handle.transcription_to_ipa(&transcription);
        let detected = handle.classify_features(&entry.text, &transcription);
        let stored = match entry.feature() {
            Some(id) => id.as_str().to_string(),
            None => format!("{} (unknown)", entry.feature_id),
        };
        let _ = writeln!(out, "{}", entry.text);
        let _ = writeln!(out, "  ipa:       {ipa}");
        let _ = writeln!(out, "  syllables: {}", entry.syllables.join(" | "));
        let _ = writeln!(out, "  label:     {stored}");
        let _ = writeln!(out, "  detected:  {}", feature_ids(&detected).join(", "));
        for sentence in handle.example_sentences(&entry.text, sentences) {
            let _ = writeln!(out, "  > {sentence}");
        }
    }
}
