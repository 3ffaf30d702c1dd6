// porter-cli: shared utilities for CLI tools.

use std::path::Path;
use std::process;

use porter_core::enums::StemMode;
use porter_en::PorterHandle;

/// Create a PorterHandle, loading a stopword list when a path is given.
pub fn load_handle(stopwords_path: Option<&str>) -> Result<PorterHandle, String> {
    let handle = PorterHandle::new();
    if let Some(path) = stopwords_path {
        let words = load_stopwords(path)?;
        handle.set_stopwords(words);
    }
    Ok(handle)
}

/// Read a stopword list, one word per line. Blank lines and lines
/// starting with `#` are skipped.
pub fn load_stopwords<P: AsRef<Path>>(path: P) -> Result<Vec<String>, String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Parse a `--stopwords=PATH` or `-s PATH` argument from command line args.
///
/// Returns `(stopwords_path, remaining_args)`.
pub fn parse_stopwords_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut stopwords_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--stopwords=") {
            stopwords_path = Some(val.to_string());
        } else if arg == "--stopwords" || arg == "-s" {
            if i + 1 < args.len() {
                stopwords_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (stopwords_path, remaining)
}

/// Parse a `--plurals-only` or `-p` flag from command line args.
///
/// Returns `(mode, remaining_args)`.
pub fn parse_mode(args: &[String]) -> (StemMode, Vec<String>) {
    let mut mode = StemMode::Full;
    let mut remaining = Vec::new();

    for arg in args {
        if arg == "--plurals-only" || arg == "-p" {
            mode = StemMode::PluralsOnly;
        } else {
            remaining.push(arg.clone());
        }
    }

    (mode, remaining)
}

/// Split a line of text into lowercased word tokens.
pub fn word_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in line.chars() {
        if porter_core::character::is_word_char(ch) {
            current.push(porter_core::character::simple_lower(ch));
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
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
