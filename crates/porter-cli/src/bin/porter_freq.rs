// porter-freq: Convert text to a stem frequency list.
//
// Reads running text from stdin, tokenizes it, stems each word token,
// and produces a frequency list of stems sorted by count (descending),
// then alphabetically.
//
// Usage:
//   porter-freq [-p] [-s STOPWORDS]
//
// Options:
//   -p, --plurals-only      Strip plural endings only
//   -s, --stopwords PATH    File of words to pass through unstemmed
//   -h, --help              Print help

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (stopwords_path, args) = porter_cli::parse_stopwords_path(&args);
    let (mode, args) = porter_cli::parse_mode(&args);

    if porter_cli::wants_help(&args) {
        println!("porter-freq: Convert text to a stem frequency list.");
        println!();
        println!("Usage: porter-freq [-p] [-s STOPWORDS]");
        println!();
        println!("Reads text from stdin, tokenizes words, stems each token,");
        println!("and prints stem<TAB>count sorted by count (descending),");
        println!("then alphabetically.");
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
    let mut freqs: HashMap<String, u64> = HashMap::new();

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
                Ok(stem) => *freqs.entry(stem).or_insert(0) += 1,
                Err(e) => eprintln!("skipping {word:?}: {e}"),
            }
        }
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    // Sort by frequency (descending), then alphabetically
    let mut list: Vec<(String, u64)> = freqs.into_iter().collect();
    list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    for (stem, freq) in &list {
        let _ = writeln!(out, "{stem}\t{freq}");
    }
}
