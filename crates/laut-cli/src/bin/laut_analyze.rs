// laut-analyze: show the morphological decomposition behind a transcription.
//
// For each word prints the compound sub-words, every prefix, root and
// suffix part (with affix morphs and root fragments), the stressed-suffix
// flag and the resulting IPA.
//
// Usage:
//   laut-analyze [-d DATA_PATH] [WORD...]
//   echo "abfahren" | laut-analyze

use std::io::{self, BufRead, Write};

use laut_de::{Part, Transcriber};

fn dump_word(out: &mut impl Write, transcriber: &Transcriber, word: &str) {
    let analyzed = transcriber.analyze(word);

    let _ = writeln!(out, "{word}:");
    if analyzed.subwords().len() > 1 {
        let _ = writeln!(out, "  sub-words: {}", analyzed.subwords().join(" + "));
    }
    for part in analyzed.parts() {
        match part {
            Part::Prefix(block) => {
                let _ = writeln!(
                    out,
                    "  prefix \"{}\" = {}",
                    block.text(),
                    block.morphs().join(" + ")
                );
            }
            Part::Root(root) => {
                let frags: Vec<String> = root.fragments().iter().map(|f| f.text()).collect();
                let _ = writeln!(out, "  root \"{}\" = {}", root.text(), frags.join(" | "));
            }
            Part::Suffix(block) => {
                let _ = writeln!(
                    out,
                    "  suffix \"{}\" = {}",
                    block.text(),
                    block.morphs().join(" + ")
                );
            }
        }
    }
    if analyzed.has_stressed_suffix() {
        let _ = writeln!(out, "  stressed suffix: yes");
    }
    let _ = writeln!(out, "  ipa: {}", transcriber.transcribe(word));
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = laut_cli::parse_data_path(&args);

    if laut_cli::wants_help(&args) {
        println!("laut-analyze: show the decomposition behind a transcription.");
        println!();
        println!("Usage: laut-analyze [-d DATA_PATH] [WORD...]");
        println!();
        println!("With WORD arguments, analyzes each word. Otherwise reads");
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
            dump_word(&mut out, &transcriber, word);
        }
    } else {
        for word in &words {
            dump_word(&mut out, &transcriber, word);
        }
    }
}
