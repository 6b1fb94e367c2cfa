//! File output with TUI progress display (for bulk wordlists).

use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::terminal::{
    RawModeGuard, box_bottom, box_line, box_top, clear, format_number, print_centered,
    progress_bar_box, reset_terminal,
};

/// Redraw the bar every this many lines.
const REDRAW_EVERY: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Complete(usize),
    Interrupted(usize),
}

fn non_blocking_read(timeout: Duration) -> Option<Event> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if event::poll(timeout).unwrap_or(false)
            && let Ok(event) = event::read()
        {
            let _ = tx.send(event);
        }
    });

    rx.recv().ok()
}

fn draw_header(expected: usize, path: &Path) {
    box_top("Wordlist");
    box_line(&format!("Up to {} candidates", format_number(expected)));
    box_bottom();
    println!();
    print_centered("[Esc/Ctrl+C] to interrupt");
    println!();
    let full_path = std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string());
    print_centered(&format!("Output: {}", full_path));
    println!();
}

/// Write `lines` to `path` (truncating) while drawing a progress bar.
/// `expected` is the line count the bar is scaled to.
pub fn with_progress<I>(lines: I, expected: usize, path: &Path) -> Result<Outcome>
where
    I: IntoIterator<Item = String>,
{
    reset_terminal();
    clear();

    let mut file = super::create_output(path)?;
    draw_header(expected, path);

    let (tx, rx) = mpsc::channel::<KeyCode>();
    let (close_tx, close_rx) = mpsc::channel();

    let raw_guard = RawModeGuard::new().ok();

    thread::spawn(move || {
        let timeout = Duration::from_millis(1);
        loop {
            if let Ok(_) | Err(TryRecvError::Disconnected) = close_rx.try_recv() {
                break;
            }

            if let Some(Event::Key(key_event)) = non_blocking_read(timeout) {
                let is_ctrl_c = key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL);
                if is_ctrl_c || key_event.code == KeyCode::Esc {
                    let _ = tx.send(KeyCode::Esc);
                    break;
                }
            }
        }
    });

    print!("\x1b[?25l");
    println!();
    println!();
    println!();

    let start = Instant::now();
    let total = expected.max(1);
    let (written, interrupted) = write_capped(
        lines,
        expected,
        &mut file,
        || matches!(rx.try_recv(), Ok(KeyCode::Esc)),
        |written| draw_progress(written, total, start),
    )
    .map_err(|e| Error::io(path, e))?;

    file.flush().map_err(|e| Error::io(path, e))?;
    if !interrupted {
        draw_progress(written, written.max(1), start);
    }

    let _ = close_tx.send(());
    drop(raw_guard);

    print!("\x1b[?25h");
    reset_terminal();
    clear();

    println!();
    let elapsed = start.elapsed().as_millis();
    box_top(if interrupted { "Interrupted" } else { "Complete" });
    box_line(&format!(
        "{} candidate(s) written in {elapsed}ms",
        format_number(written)
    ));
    box_line(&format!("Output: {}", path.display()));
    box_bottom();
    println!();

    Ok(if interrupted {
        Outcome::Interrupted(written)
    } else {
        Outcome::Complete(written)
    })
}

/// Write up to `cap` lines, checking `interrupt` before each one and
/// calling `tick` every [`REDRAW_EVERY`] lines. Returns the count written
/// and whether it was interrupted.
fn write_capped<I, W>(
    lines: I,
    cap: usize,
    out: &mut W,
    mut interrupt: impl FnMut() -> bool,
    mut tick: impl FnMut(usize),
) -> io::Result<(usize, bool)>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let mut written = 0;
    for mut line in lines.into_iter().take(cap) {
        if interrupt() {
            line.zeroize();
            return Ok((written, true));
        }

        line.push('\n');
        let result = out.write_all(line.as_bytes());
        line.zeroize();
        result?;
        written += 1;

        if written % REDRAW_EVERY == 0 {
            tick(written);
        }
    }
    Ok((written, false))
}

fn draw_progress(done: usize, expected: usize, start: Instant) {
    let pct = (done as f32 / expected as f32 * 100.0).min(100.0);
    let avg = start.elapsed().as_secs_f32() / done.max(1) as f32;
    let eta = avg * expected.saturating_sub(done) as f32;
    let stats = format!(
        "{} of {} • {:.1}% • ETA: {:.1}s",
        format_number(done),
        format_number(expected),
        pct,
        eta
    );
    print!("\x1b[3A");
    progress_bar_box(pct, &stats);
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> impl Iterator<Item = String> {
        (0..n).map(|i| format!("line{i}"))
    }

    #[test]
    fn zero_cap_writes_nothing() {
        let mut out = Vec::new();
        let (written, interrupted) = write_capped(lines(3), 0, &mut out, || false, |_| {}).unwrap();
        assert_eq!((written, interrupted), (0, false));
        assert!(out.is_empty());
    }

    #[test]
    fn cap_limits_lines() {
        let mut out = Vec::new();
        let (written, _) = write_capped(lines(5), 2, &mut out, || false, |_| {}).unwrap();
        assert_eq!(written, 2);
        assert_eq!(out, b"line0\nline1\n");
    }

    #[test]
    fn interrupt_stops_before_next_line() {
        let mut out = Vec::new();
        let mut checks = 0;
        let (written, interrupted) = write_capped(
            lines(5),
            5,
            &mut out,
            || {
                checks += 1;
                checks > 3
            },
            |_| {},
        )
        .unwrap();
        assert_eq!((written, interrupted), (3, true));
    }

    #[test]
    fn ticks_every_redraw_interval() {
        let mut out = io::sink();
        let mut ticks = vec![];
        write_capped(lines(REDRAW_EVERY * 2 + 1), usize::MAX, &mut out, || false, |n| {
            ticks.push(n)
        })
        .unwrap();
        assert_eq!(ticks, [REDRAW_EVERY, REDRAW_EVERY * 2]);
    }
}
