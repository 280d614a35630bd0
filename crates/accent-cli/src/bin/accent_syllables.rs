// accent-syllables: Split ARPAbet transcriptions into syllables.
//
// Usage:
//   accent-syllables [OPTIONS] [TRANSCRIPTION...]
//
// Options:
//   --separator SEP         Syllable separator (default: " | ")
//   --json                  Print each split as a JSON array
//   -h, --help              Print help

use std::io::{self, Write};

use accent_en::AccentHandle;
use accent_en::syllabifier::{DISPLAY_SEPARATOR, render_syllables};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if accent_cli::wants_help(&args) {
        println!("accent-syllables: Split ARPAbet transcriptions into syllables.");
        println!();
        println!("Usage: accent-syllables [OPTIONS] [TRANSCRIPTION...]");
        println!();
        println!("If TRANSCRIPTION arguments are given, splits each one.");
        println!("Otherwise reads transcriptions from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --separator SEP         Syllable separator (default: \" | \")");
        println!("  --json                  Print each split as a JSON array");
        println!("  -h, --help              Print this help");
        return;
    }

    let json = accent_cli::take_flag(&mut args, &["--json"]);
    let verbose = accent_cli::take_flag(&mut args, &["-v", "--verbose"]);
    let (separator, args) = accent_cli::parse_option_value(&args, "--separator", "--separator");
    let separator = separator.unwrap_or_else(|| DISPLAY_SEPARATOR.to_string());
    accent_cli::init_tracing(verbose);

    let handle = AccentHandle::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for transcription in accent_cli::input_lines(&accent_cli::positional(&args)) {
        let syllables = handle.syllabify(&transcription);
        if json {
            match serde_json::to_string(&syllables) {
                Ok(s) => {
                    let _ = writeln!(out, "{s}");
                }
                Err(e) => accent_cli::fatal(&format!("failed to encode JSON: {e}")),
            }
        } else {
            let _ = writeln!(out, "{}", render_syllables(&syllables, &separator));
        }
    }
}
