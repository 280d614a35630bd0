// accent-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use accent_core::entry::WordEntry;
use tracing_subscriber::EnvFilter;

/// Word list file name looked up inside directories.
const WORDS_JSON: &str = "words.json";

/// Per-user configuration directory under `$HOME`.
const USER_DIR: &str = ".accent";

/// Environment variable holding a word list file or directory.
pub const WORDS_PATH_ENV: &str = "ACCENT_WORDS_PATH";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ACCENT_LOG";

/// Error type for word list loading.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not find a word list in any of the search paths:\n{searched}")]
    NotFound { searched: String },
}

// ---------------------------------------------------------------------------
// Word lists
// ---------------------------------------------------------------------------

/// Search for a word list and parse it.
///
/// Search order:
/// 1. `words_path` argument (if provided)
/// 2. `ACCENT_WORDS_PATH` environment variable (file, or directory holding
///    `words.json`)
/// 3. `~/.accent/words.json`
/// 4. `./words.json`
///
/// Returns the path that was loaded together with its entries.
pub fn load_word_list(
    words_path: Option<&str>,
) -> Result<(PathBuf, Vec<WordEntry>), WordListError> {
    let search_paths = build_search_paths(
        words_path,
        std::env::var(WORDS_PATH_ENV).ok().as_deref(),
        home_dir().as_deref(),
    );

    for path in &search_paths {
        if path.is_file() {
            let entries = read_word_list(path)?;
            tracing::debug!(path = %path.display(), entries = entries.len(), "loaded word list");
            return Ok((path.clone(), entries));
        }
    }

    Err(WordListError::NotFound {
        searched: search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

/// Parse one word list file (a JSON array of entries).
pub fn read_word_list(path: &Path) -> Result<Vec<WordEntry>, WordListError> {
    let contents = std::fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| WordListError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the list of candidate word list files, most specific first.
pub fn build_search_paths(
    words_path: Option<&str>,
    env_path: Option<&str>,
    home: Option<&Path>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = words_path {
        paths.push(PathBuf::from(p));
    }

    // 2. Environment variable, as a file or as a directory
    if let Some(p) = env_path {
        paths.push(PathBuf::from(p));
        paths.push(PathBuf::from(p).join(WORDS_JSON));
    }

    // 3. Per-user directory
    if let Some(home) = home {
        paths.push(home.join(USER_DIR).join(WORDS_JSON));
    }

    // 4. Current directory
    paths.push(PathBuf::from(WORDS_JSON));

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

/// Parse a `--words=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(words_path, remaining_args)`.
pub fn parse_words_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option_value(args, "--words", "-w")
}

/// Parse a `LONG=VALUE`, `LONG VALUE` or `SHORT VALUE` option.
///
/// The last occurrence wins. A trailing option without a value is fatal.
/// Returns `(value, remaining_args)`.
pub fn parse_option_value(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let long_eq = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Remove every occurrence of a boolean flag. Returns whether it was present.
pub fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

/// Arguments that are not options.
pub fn positional(args: &[String]) -> Vec<String> {
    args.iter().filter(|a| !a.starts_with('-')).cloned().collect()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

// ---------------------------------------------------------------------------
// Input and logging
// ---------------------------------------------------------------------------

/// The given arguments, or non-blank trimmed stdin lines when there are none.
pub fn input_lines(args: &[String]) -> Vec<String> {
    if !args.is_empty() {
        return args.to_vec();
    }
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        match line {
            Ok(l) => {
                let l = l.trim();
                if !l.is_empty() {
                    lines.push(l.to_string());
                }
            }
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
    }
    lines
}

/// Install a stderr tracing subscriber.
///
/// The filter comes from `ACCENT_LOG`; without it the level is `warn`, or
/// `debug` when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("accent-cli-test-{}", process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn search_paths_in_order() {
        let paths = build_search_paths(Some("a.json"), Some("/env"), Some(Path::new("/home/u")));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a.json"),
                PathBuf::from("/env"),
                PathBuf::from("/env/words.json"),
                PathBuf::from("/home/u/.accent/words.json"),
                PathBuf::from("words.json"),
            ]
        );
    }

    #[test]
    fn search_paths_without_overrides() {
        assert_eq!(build_search_paths(None, None, None), vec![PathBuf::from("words.json")]);
    }

    #[test]
    fn parse_words_path_forms() {
        let (p, rest) = parse_words_path(&args(&["-w", "x.json", "--json"]));
        assert_eq!(p.as_deref(), Some("x.json"));
        assert_eq!(rest, args(&["--json"]));

        let (p, rest) = parse_words_path(&args(&["--words=y.json", "word"]));
        assert_eq!(p.as_deref(), Some("y.json"));
        assert_eq!(rest, args(&["word"]));

        let (p, rest) = parse_words_path(&args(&["word"]));
        assert!(p.is_none());
        assert_eq!(rest, args(&["word"]));
    }

    #[test]
    fn take_flag_removes_all_occurrences() {
        let mut a = args(&["--json", "x", "-j", "--json"]);
        assert!(take_flag(&mut a, &["--json", "-j"]));
        assert_eq!(a, args(&["x"]));
        assert!(!take_flag(&mut a, &["--json"]));
    }

    #[test]
    fn positional_skips_options() {
        assert_eq!(positional(&args(&["a", "--x", "b"])), args(&["a", "b"]));
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["x", "-h"])));
        assert!(wants_help(&args(&["--help"])));
        assert!(!wants_help(&args(&["x"])));
    }

    #[test]
    fn input_lines_prefers_arguments() {
        assert_eq!(input_lines(&args(&["a", "b"])), args(&["a", "b"]));
    }

    #[test]
    fn read_valid_word_list() {
        let path = temp_file(
            "valid.json",
            r#"[{"text": "water", "clip_id": "clip1", "syllables": ["W AA1", "DX ER0"],
                 "original_pronunciation": false, "ipa_pronunciation": "", "feature_id": "t_flap"}]"#,
        );
        let entries = read_word_list(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].transcription(), "W AA1 DX ER0");
    }

    #[test]
    fn read_invalid_word_list() {
        let path = temp_file("invalid.json", "{not json");
        assert!(matches!(read_word_list(&path), Err(WordListError::Json { .. })));
    }

    #[test]
    fn read_missing_word_list() {
        let path = std::env::temp_dir().join("accent-cli-test-does-not-exist.json");
        assert!(matches!(read_word_list(&path), Err(WordListError::Io { .. })));
    }

    #[test]
    fn explicit_path_is_loaded_first() {
        let path = temp_file("explicit.json", r#"[{"text": "city"}]"#);
        let (found, entries) = load_word_list(path.to_str()).unwrap();
        assert_eq!(found, path);
        assert_eq!(entries[0].text, "city");
    }
}
