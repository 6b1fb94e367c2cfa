use std::env;

use tracing::Level;
use tracing_subscriber::EnvFilter;

mod cli;
mod exits;
mod tui;

/// Warnings by default, `--verbose` for generation statistics. `RUST_LOG`
/// overrides both. Logs go to stderr so stdout stays a clean wordlist.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::INFO } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();
    init_tracing(args.iter().any(|a| a == "--verbose"));

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
