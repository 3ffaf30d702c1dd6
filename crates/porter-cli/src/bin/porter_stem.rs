// porter-stem: Stem words read from standard input.
//
// Reads running text from stdin, tokenizes it into words, lowercases
// each word, and prints one `word<TAB>stem` pair per token.
//
// Usage:
//   porter-stem [-p] [-s STOPWORDS]
//
// Options:
//   -p, --plurals-only      Strip plural endings only
//   -s, --stopwords PATH    File of words to pass through unstemmed
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (stopwords_path, args) = porter_cli::parse_stopwords_path(&args);
    let (mode, args) = porter_cli::parse_mode(&args);

    if porter_cli::wants_help(&args) {
        println!("porter-stem: Stem words read from standard input.");
        println!();
        println!("Usage: porter-stem [-p] [-s STOPWORDS]");
        println!();
        println!("Reads text from stdin, tokenizes it into words, and prints");
        println!("one word<TAB>stem pair per token.");
        println!();
        println!("Options:");
        println!("  -p, --plurals-only      Strip plural endings only");
        println!("  -s, --stopwords PATH    File of words to pass through unstemmed");
        println!("  -h, --help              Print this help");
        return;
    }

    let handle = porter_cli::load_handle(stopwords_path.as_deref())
        .unwrap_or_else(|e| porter_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        for word in porter_cli::word_tokens(&line) {
            match handle.stem_with(&word, mode) {
                Ok(stem) => {
                    let _ = writeln!(out, "{word}\t{stem}");
                }
                Err(e) => eprintln!("skipping {word:?}: {e}"),
            }
        }
    }
}
