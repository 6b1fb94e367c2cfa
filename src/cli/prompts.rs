//! Warnings, confirmations and summaries printed by the CLI.

use std::io::Write;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow, stderr. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

fn ask(question: &str, default_yes: bool) -> bool {
    eprint!("{question}");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return default_yes;
    }
    match input.trim().to_lowercase().as_str() {
        "" => default_yes,
        "y" | "yes" => true,
        _ => false,
    }
}

pub fn wordlist_missing(path: &str) {
    warn(&format!("Warning: wordlist {path} not found, continuing without it"));
}

pub fn nothing_to_generate() {
    warn("Nothing to generate: no criteria given (use -f <file>)");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} CANDIDATE(S) COPIED TO CLIPBOARD ***");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Fall back to stdout when the clipboard is unavailable? Quiet or
/// non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }
    if ask("Clipboard unavailable. Print to terminal instead? [Y/n]: ", true) {
        eprintln!();
        return true;
    }
    eprintln!("\nAborted.");
    false
}

/// Replace an existing output file? Non-interactive runs overwrite.
pub fn overwrite_prompt(path: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }
    ask(&format!("{path} already exists. Overwrite? [y/N]: "), false)
}

pub fn lines_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} candidate(s) \u{2192} {path}");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        println!("Settings saved \u{2192} {path}");
    }
}
