//! Shared plumbing for the laut command line tools: data file discovery,
//! transcriber construction and common argument handling.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process;

use laut_de::{OverrideTable, Transcriber, WordSet};

/// Known-word list, one word per line.
const WORDLIST_FILE: &str = "wordlist.txt";

/// Pronunciation overrides, a JSON map from word to dictionary entries.
const OVERRIDES_FILE: &str = "overrides.json";

/// Locate data files and construct a [`Transcriber`].
///
/// Directories are searched in order:
/// 1. `data_path` argument (if provided)
/// 2. `LAUT_DATA_PATH` environment variable
/// 3. `~/.lautschrift`
/// 4. Current working directory
///
/// The first directory containing a word list or an override file wins;
/// within it both files are optional. The phonological tables are compiled
/// in, so when no data directory is found anywhere the transcriber starts
/// with an empty vocabulary and no overrides. An explicitly given
/// `data_path` that contains neither file is an error.
pub fn load_transcriber(data_path: Option<&str>) -> Result<Transcriber, String> {
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        let wordlist_path = dir.join(WORDLIST_FILE);
        let overrides_path = dir.join(OVERRIDES_FILE);
        if !wordlist_path.is_file() && !overrides_path.is_file() {
            continue;
        }

        let words = if wordlist_path.is_file() {
            let text = std::fs::read_to_string(&wordlist_path)
                .map_err(|e| format!("failed to read {}: {}", wordlist_path.display(), e))?;
            WordSet::from_lines(&text)
        } else {
            WordSet::new()
        };

        let overrides = if overrides_path.is_file() {
            load_overrides(&overrides_path)?
        } else {
            OverrideTable::new()
        };

        return Transcriber::new(words, overrides)
            .map_err(|e| format!("failed to initialize transcriber: {e}"));
    }

    if data_path.is_some() {
        return Err(format!(
            "could not find {} or {} in any of the search paths:\n{}",
            WORDLIST_FILE,
            OVERRIDES_FILE,
            search_paths
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    }

    Transcriber::new(WordSet::new(), OverrideTable::new())
        .map_err(|e| format!("failed to initialize transcriber: {e}"))
}

/// Load the override table from a JSON file mapping each word to a list
/// of raw dictionary entries. Only the first entry per word is used, and
/// entries without an "/ipa/" field are skipped.
fn load_overrides(path: &Path) -> Result<OverrideTable, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let entries: HashMap<String, Vec<String>> = serde_json::from_str(&text)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;

    let mut table = OverrideTable::new();
    for (word, raw_entries) in &entries {
        if let Some(raw) = raw_entries.first() {
            table.insert_raw(word, raw);
        }
    }
    Ok(table)
}

fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    // 2. LAUT_DATA_PATH environment variable
    if let Ok(env_path) = std::env::var("LAUT_DATA_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".lautschrift"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--data-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        if let Some(path) = arg.strip_prefix("--data-path=") {
            data_path = Some(path.to_string());
        } else if arg == "--data-path" || arg == "-d" {
            match iter.next() {
                Some(path) => data_path = Some(path.clone()),
                None => {
                    eprintln!("error: {arg} requires a value");
                    process::exit(1);
                }
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (data_path, remaining)
}

/// Print an error message and exit with status 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1)
}

/// Check whether the args ask for help output.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}
