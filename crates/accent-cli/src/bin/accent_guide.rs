// accent-guide: Browse the American accent feature guide.
//
// Without a FEATURE argument, lists every feature. With one, prints the full
// record for that feature.
//
// Usage:
//   accent-guide [OPTIONS] [FEATURE]
//
// Options:
//   --examples              Print only the feature's examples
//   --json                  Print JSON instead of text
//   -h, --help              Print help

use std::io::{self, Write};

use accent_core::record::FeatureRecord;
use accent_en::AccentHandle;

fn write_json<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            let _ = writeln!(out, "{s}");
        }
        Err(e) => accent_cli::fatal(&format!("failed to encode JSON: {e}")),
    }
}

fn write_record(out: &mut impl Write, record: &FeatureRecord) {
    let _ = writeln!(out, "{} ({})", record.name, record.id);
    let _ = writeln!(out, "{}", record.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", record.explanation);
    let _ = writeln!(out);
    let _ = writeln!(out, "Rules:");
    for rule in record.rules {
        let _ = writeln!(out, "  - {rule}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Examples:");
    for example in record.examples {
        let _ = writeln!(
            out,
            "  {:<14} {:<28} {}",
            example.word, example.transcription, example.note
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Common mistakes:");
    for mistake in record.common_mistakes {
        let _ = writeln!(out, "  - {mistake}");
    }
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if accent_cli::wants_help(&args) {
        println!("accent-guide: Browse the American accent feature guide.");
        println!();
        println!("Usage: accent-guide [OPTIONS] [FEATURE]");
        println!();
        println!("Without FEATURE, lists every feature id with its name.");
        println!();
        println!("Options:");
        println!("  --examples              Print only the feature's examples");
        println!("  --json                  Print JSON instead of text");
        println!("  -h, --help              Print this help");
        return;
    }

    let json = accent_cli::take_flag(&mut args, &["--json"]);
    let examples_only = accent_cli::take_flag(&mut args, &["--examples"]);
    let verbose = accent_cli::take_flag(&mut args, &["-v", "--verbose"]);
    accent_cli::init_tracing(verbose);

    let handle = AccentHandle::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let Some(id) = accent_cli::positional(&args).into_iter().next() else {
        let summary = handle.feature_summary();
        if json {
            write_json(&mut out, &summary);
        } else {
            for s in &summary {
                let _ = writeln!(out, "{:<16} {:<32} {}", s.id.as_str(), s.name, s.description);
            }
        }
        return;
    };

    let record = handle
        .feature_info(&id)
        .unwrap_or_else(|| accent_cli::fatal(&format!("unknown feature id: {id}")));

    match (examples_only, json) {
        (true, true) => write_json(&mut out, record.examples),
        (true, false) => {
            for example in record.examples {
                let _ = writeln!(out, "{}\t{}\t{}", example.word, example.transcription, example.note);
            }
        }
        (false, true) => write_json(&mut out, record),
        (false, false) => write_record(&mut out, record),
    }
}
