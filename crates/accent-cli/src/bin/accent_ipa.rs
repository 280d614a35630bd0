// accent-ipa: Convert ARPAbet transcriptions to IPA.
//
// Reads transcriptions from stdin (one per line) and prints the IPA form.
//
// Usage:
//   accent-ipa [OPTIONS] [TRANSCRIPTION...]
//
// Options:
//   --syllables             Also print the syllable split
//   --separator SEP         Syllable separator (default: " | ")
//   -v, --verbose           Log unmapped phoneme codes
//   -h, --help              Print help

use std::io::{self, Write};

use accent_en::AccentHandle;
use accent_en::syllabifier::{DISPLAY_SEPARATOR, render_syllables};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if accent_cli::wants_help(&args) {
        println!("accent-ipa: Convert ARPAbet transcriptions to IPA.");
        println!();
        println!("Usage: accent-ipa [OPTIONS] [TRANSCRIPTION...]");
        println!();
        println!("If TRANSCRIPTION arguments are given, converts each one.");
        println!("Otherwise reads transcriptions from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --syllables             Also print the syllable split");
        println!("  --separator SEP         Syllable separator (default: \" | \")");
        println!("  -v, --verbose           Log unmapped phoneme codes");
        println!("  -h, --help              Print this help");
        return;
    }

    let verbose = accent_cli::take_flag(&mut args, &["-v", "--verbose"]);
    let show_syllables = accent_cli::take_flag(&mut args, &["--syllables"]);
    let (separator, args) = accent_cli::parse_option_value(&args, "--separator", "--separator");
    let separator = separator.unwrap_or_else(|| DISPLAY_SEPARATOR.to_string());
    accent_cli::init_tracing(verbose);

    let handle = AccentHandle::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for transcription in accent_cli::input_lines(&accent_cli::positional(&args)) {
        let ipa = handle.transcription_to_ipa(&transcription);
        if show_syllables {
            let syllables = handle.syllabify(&transcription);
            let _ = writeln!(out, "{ipa}\t{}", render_syllables(&syllables, &separator));
        } else {
            let _ = writeln!(out, "{ipa}");
        }
    }
}
