//! Terminal output utilities.
//!
//! Boxes, the progress bar, number formatting and ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const BLUE: &str = "\x1b[94m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and scrollback, cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_info(msg: &str) {
    println!("{BLUE}{msg}{RESET}");
}

// ============================================================================
// Number Formatting
// ============================================================================

/// `1234567` → `1,234,567`.
pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER: usize = BOX_WIDTH - 4;

/// `┌─ Title ──────┐`, or a plain rule when `title` is empty.
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
        return;
    }
    let label = format!("─ {title} ");
    let fill = (BOX_WIDTH - 2).saturating_sub(label.chars().count());
    println!("┌{label}{}┐", "─".repeat(fill));
}

/// `├──────┤`
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// `└──────┘`
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Left-aligned row. Over-long content is printed unpadded.
pub fn box_line(content: &str) {
    let pad = INNER.saturating_sub(visible_width(content));
    println!("│ {content}{} │", " ".repeat(pad));
}

/// Centered row.
pub fn box_line_center(content: &str) {
    let pad = INNER.saturating_sub(visible_width(content));
    let left = pad / 2;
    println!("│ {}{content}{} │", " ".repeat(left), " ".repeat(pad - left));
}

/// Help row: flag in a fixed column, description word-wrapped beside it.
pub fn box_opt(flag: &str, desc: &str) {
    const FLAG_COL: usize = 27;
    let desc_col = INNER - FLAG_COL;

    let mut rows: Vec<String> = Vec::new();
    for word in desc.split_whitespace() {
        match rows.last_mut() {
            Some(row) if row.len() + 1 + word.len() <= desc_col => {
                row.push(' ');
                row.push_str(word);
            }
            _ => rows.push(word.to_string()),
        }
    }
    if rows.is_empty() {
        rows.push(String::new());
    }

    for (i, row) in rows.iter().enumerate() {
        let lead = if i == 0 { flag } else { "" };
        box_line(&format!("{lead:<width$}{row}", width = FLAG_COL));
    }
}

/// Display width ignoring ANSI color sequences.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}

/// Center `text` on the box width, raw-mode safe.
pub fn print_centered(text: &str) {
    let len = text.chars().count();
    let left = BOX_WIDTH.saturating_sub(len) / 2;
    let right = BOX_WIDTH.saturating_sub(left + len);
    print!("{}{text}{}\r\n", " ".repeat(left), " ".repeat(right));
    flush();
}

// ============================================================================
// Progress Bar
// ============================================================================

/// Three-line progress box with `stats` centered inside; the filled part
/// is drawn in reverse video. Raw-mode safe.
pub fn progress_bar_box(percent: f32, stats: &str) {
    let inner = BOX_WIDTH - 2;
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * inner as f32) as usize;

    let text: Vec<char> = stats.chars().collect();
    let offset = inner.saturating_sub(text.len()) / 2;
    let mut content = vec![' '; inner];
    for (i, ch) in text.iter().enumerate().take(inner - offset) {
        content[offset + i] = *ch;
    }
    let done: String = content[..filled].iter().collect();
    let rest: String = content[filled..].iter().collect();

    let (tl, tr, ml, mr, bl, br) = match filled {
        0 => ('┌', '┐', '│', '│', '└', '┘'),
        f if f == inner => ('▗', '▖', '▐', '▌', '▝', '▘'),
        _ => ('▗', '┐', '▐', '│', '▝', '┘'),
    };

    print!("\r{tl}{}{}{tr}\r\n", "▄".repeat(filled), "─".repeat(inner - filled));
    print!("\r{ml}\x1b[7m{done}{RESET}{rest}{mr}\r\n");
    print!("\r{bl}{}{}{br}\r\n", "▀".repeat(filled), "─".repeat(inner - filled));
    flush();
}
