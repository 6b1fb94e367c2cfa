use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use manifest::terminal::{RawModeGuard, flush, format_number, reset_terminal};

/// Line editor state. `cursor` counts characters before the caret.
struct Line {
    chars: Vec<char>,
    cursor: usize,
}

enum Key {
    Submit,
    Cancel,
    Edited,
}

impl Line {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn apply(&mut self, code: KeyCode, modifiers: KeyModifiers, accept: fn(char) -> bool) -> Key {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => return Key::Cancel,
            KeyCode::Esc => return Key::Cancel,
            KeyCode::Enter => return Key::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Key::Edited
    }
}

/// Raw-mode line editing. `render` maps the buffer and cursor to the
/// displayed text and the caret's display column.
fn edit(
    prompt: &str,
    initial: &str,
    accept: fn(char) -> bool,
    render: fn(&Line) -> (String, usize),
) -> Option<String> {
    let Ok(guard) = RawModeGuard::new() else {
        return read_cooked(prompt, initial);
    };
    let mut line = Line::new(initial);

    let (mut shown, _) = render(&line);
    print!("{prompt}: {shown}");
    flush();

    let mut cancelled = false;
    while let Ok(event) = read() {
        let Event::Key(key) = event else {
            continue;
        };
        match line.apply(key.code, key.modifiers, accept) {
            Key::Submit => break,
            Key::Cancel => {
                cancelled = true;
                break;
            }
            Key::Edited => {}
        }

        let (text, column) = render(&line);
        print!("\r{prompt}: {}", " ".repeat(shown.chars().count() + 1));
        print!("\r{prompt}: {text}");
        print!("\x1b[{}G", prompt.chars().count() + 3 + column);
        flush();
        shown = text;
    }

    drop(guard);
    println!();
    if cancelled { None } else { Some(line.text()) }
}

/// Plain line read for terminals without raw mode. End of input exits.
fn read_cooked(prompt: &str, initial: &str) -> Option<String> {
    print!("{prompt} [{initial}]: ");
    flush();
    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => std::process::exit(0),
        Ok(_) => {}
    }
    let input = input.trim_end_matches(['\r', '\n']);
    Some(if input.is_empty() { initial } else { input }.to_string())
}

/// Map a caret position in raw digits to its column in the
/// comma-formatted display.
fn digit_cursor_to_display(len: usize, cursor: usize) -> usize {
    if len == 0 || cursor == 0 {
        return 0;
    }
    let first_group = match len % 3 {
        0 => 3,
        r => r,
    };
    let commas = if cursor <= first_group {
        0
    } else {
        1 + (cursor - first_group - 1) / 3
    };
    cursor + commas
}

fn render_digits(line: &Line) -> (String, usize) {
    let digits = line.text();
    let shown = match digits.parse::<usize>() {
        Ok(n) if !digits.is_empty() => format_number(n),
        _ => digits,
    };
    (shown, digit_cursor_to_display(line.chars.len(), line.cursor))
}

fn render_plain(line: &Line) -> (String, usize) {
    (line.text(), line.cursor)
}

/// Digits only, shown with thousands separators. `None` on cancel; an
/// empty entry is 0.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    let digits = edit(prompt, &initial, |c| c.is_ascii_digit(), render_digits)?;
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit(prompt, initial_value, |_| true, render_plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_skips_separators() {
        // "12,345"
        assert_eq!(digit_cursor_to_display(5, 0), 0);
        assert_eq!(digit_cursor_to_display(5, 2), 2);
        assert_eq!(digit_cursor_to_display(5, 3), 4);
        assert_eq!(digit_cursor_to_display(5, 5), 6);
        // "123,456,789"
        assert_eq!(digit_cursor_to_display(9, 9), 11);
    }

    #[test]
    fn editing_keys() {
        let mut line = Line::new("fido");
        line.apply(KeyCode::Home, KeyModifiers::NONE, |_| true);
        line.apply(KeyCode::Delete, KeyModifiers::NONE, |_| true);
        line.apply(KeyCode::Char('F'), KeyModifiers::SHIFT, |_| true);
        line.apply(KeyCode::End, KeyModifiers::NONE, |_| true);
        line.apply(KeyCode::Backspace, KeyModifiers::NONE, |_| true);
        assert_eq!(line.text(), "Fid");
        line.apply(KeyCode::Char('x'), KeyModifiers::NONE, |c| c.is_ascii_digit());
        assert_eq!(line.text(), "Fid");
        assert!(matches!(
            line.apply(KeyCode::Esc, KeyModifiers::NONE, |_| true),
            Key::Cancel
        ));
    }
}
