// laut-text: aligned IPA transcription of running text.
//
// Reads text from a file or stdin and prints each line followed by its
// IPA line, padded so every word sits above its transcription.
//
// Usage:
//   laut-text [-d DATA_PATH] [FILE]
//   laut-text < lesetext.txt

use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = laut_cli::parse_data_path(&args);

    if laut_cli::wants_help(&args) {
        println!("laut-text: aligned IPA transcription of running text.");
        println!();
        println!("Usage: laut-text [-d DATA_PATH] [FILE]");
        println!();
        println!("Reads FILE, or stdin when no file is given, and prints each");
        println!("line of text with its IPA transcription underneath.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory with wordlist.txt and overrides.json");
        println!("  -h, --help             Print this help");
        return;
    }

    let files: Vec<String> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .collect();

    let transcriber = laut_cli::load_transcriber(data_path.as_deref())
        .unwrap_or_else(|e| laut_cli::fatal(&e));

    let input = match files.first() {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| laut_cli::fatal(&format!("failed to read {path}: {e}"))),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().lock().read_to_string(&mut buf) {
                laut_cli::fatal(&format!("error reading stdin: {e}"));
            }
            buf
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = write!(out, "{}", transcriber.transcribe_text(&input));
}
