// laut-segment: split German compounds into known words.
//
// Prints each word as its segmentation pieces joined with " + ". Words
// that cannot be fully covered by the known-word list stay in one piece,
// so segmentation is only useful with a word list loaded.
//
// Usage:
//   laut-segment -d DATA_PATH [WORD...]
//   echo "hundehaus" | laut-segment -d DATA_PATH

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = laut_cli::parse_data_path(&args);

    if laut_cli::wants_help(&args) {
        println!("laut-segment: split German compounds into known words.");
        println!();
        println!("Usage: laut-segment [-d DATA_PATH] [WORD...]");
        println!();
        println!("With WORD arguments, segments each word. Otherwise reads");
        println!("words from stdin, one per line.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory with wordlist.txt and overrides.json");
        println!("  -h, --help             Print this help");
        return;
    }

    let words: Vec<String> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .collect();

    let transcriber = laut_cli::load_transcriber(data_path.as_deref())
        .unwrap_or_else(|e| laut_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}", transcriber.segment(word).join(" + "));
        }
    } else {
        for word in &words {
            let _ = writeln!(out, "{}", transcriber.segment(word).join(" + "));
        }
    }
}
