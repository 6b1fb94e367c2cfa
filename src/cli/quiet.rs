//! Quiet mode and terminal detection.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// stdin is a tty.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// stdout is a tty.
pub fn is_terminal_output() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

/// Quiet, or nobody to ask.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
