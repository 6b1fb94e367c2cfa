use std::io::{self, BufWriter};
use std::path::Path;

use manifest::book::{self, normalize};
use manifest::output::{self, Wordlist, progress};
use manifest::terminal::{clear, print_error, print_info, reset_terminal};
use manifest::{BookKeeper, Settings, generate};

use super::{
    enter_prompt, get_editable_input, get_numeric_input, print_categories, print_file_exists,
    print_help, print_main_menu, print_settings_menu, print_words,
};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Interactive state: the criteria being collected and the settings used
/// to generate from them.
struct Session {
    book: BookKeeper,
    settings: Settings,
    selected: Option<String>,
    error: Option<String>,
}

impl Session {
    fn fail(&mut self, msg: impl Into<String>) -> LoopAction {
        self.error = Some(msg.into());
        Continue
    }

    fn selected(&self) -> Option<String> {
        self.selected.clone()
    }

    fn load_criteria(&mut self, path: &str) -> LoopAction {
        match book::load(Path::new(path)) {
            Ok(book) => {
                self.book = book;
                self.selected = None;
                self.settings.criteria_path = path.to_string();
                Continue
            }
            Err(e) => self.fail(e.to_string()),
        }
    }
}

/// Ask for `prompt` and return the trimmed answer. `None` when cancelled
/// or blank.
fn ask(prompt: &str, initial: &str) -> Option<String> {
    let answer = get_editable_input(prompt, initial)?;
    let answer = answer.trim();
    (!answer.is_empty()).then(|| answer.to_string())
}

/// Overwrite an existing output file? Anything but `o` cancels.
pub fn gen_file_exists_menu(settings: &Settings) -> bool {
    print_file_exists(&settings.output_file_path);
    get_editable_input("Enter your choice", "")
        .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("o"))
}

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        print_error(&format!("Error loading settings: {}", e));
        Settings::default()
    });

    let mut session = Session {
        book: BookKeeper::new(),
        selected: None,
        error: None,
        settings,
    };
    if !session.settings.criteria_path.is_empty() {
        let path = session.settings.criteria_path.clone();
        session.load_criteria(&path);
    }

    loop {
        let error = session.error.take();
        print_main_menu(&session.book, session.selected.as_deref(), error.as_deref());

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => {
                clear();
                generate_output(&mut session);
                reset_terminal();
            }
            choice => match choice.parse::<u32>() {
                Ok(num) => {
                    if let Break = menu_options(num, &mut session) {
                        break;
                    }
                }
                Err(_) => {
                    clear();
                    session.fail("Invalid option.");
                }
            },
        }
    }
}

fn menu_options(choice: u32, session: &mut Session) -> LoopAction {
    match choice {
        1 => {
            clear();
            print_categories(&session.book);
        }
        2 => {
            let Some(name) = ask("New category name", "") else {
                clear();
                return Continue;
            };
            clear();
            if !session.book.add_category(&name) {
                return session.fail(format!("Category {} already exists.", normalize(&name)));
            }
            session.selected = Some(normalize(&name));
        }
        3 => {
            let Some(name) = ask("Category name", "") else {
                clear();
                return Continue;
            };
            clear();
            if !session.book.contains(&name) {
                return session.fail(format!("No category named {}.", normalize(&name)));
            }
            session.selected = Some(normalize(&name));
        }
        4 => {
            let Some(category) = session.selected() else {
                clear();
                return session.fail("Select a category first.");
            };
            let Some(words) = ask("Words to add (comma separated)", "") else {
                clear();
                return Continue;
            };
            clear();
            let added = words
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .filter(|w| session.book.add_word(&category, w))
                .count();
            print_info(&format!("Added {added} word(s) to {category}."));
        }
        5 => {
            let Some(category) = session.selected() else {
                clear();
                return session.fail("Select a category first.");
            };
            let Some(word) = ask("Word to remove", "") else {
                clear();
                return Continue;
            };
            clear();
            if !session.book.remove_word(&category, &word) {
                return session.fail(format!("{word} is not in {category}."));
            }
        }
        6 => {
            clear();
            let Some(category) = session.selected() else {
                return session.fail("Select a category first.");
            };
            print_words(&category, session.book.words(&category).unwrap_or(&[]));
        }
        7 => {
            clear();
            let Some(category) = session.selected() else {
                return session.fail("Select a category first.");
            };
            session.book.clear_category(&category);
            print_info(&format!("Cleared {category}."));
        }
        8 => {
            let path = get_editable_input("Third-party wordlist path", &session.settings.wordlist_path);
            clear();
            if let Some(path) = path {
                session.settings.wordlist_path = path.trim().to_string();
            }
        }
        9 => {
            let path = ask("Criteria file to load", &session.settings.criteria_path);
            clear();
            if let Some(path) = path {
                return session.load_criteria(&path);
            }
        }
        10 => {
            let path = ask("Save criteria to", &session.settings.criteria_path);
            clear();
            let Some(path) = path else {
                return Continue;
            };
            match book::save(&session.book, Path::new(&path)) {
                Ok(()) => {
                    session.settings.criteria_path = path.clone();
                    print_info(&format!("Criteria saved to {path}."));
                }
                Err(e) => return session.fail(e.to_string()),
            }
        }
        11 => update_settings(&mut session.settings),
        12 => {
            clear();
            print_help();
        }
        13 => {
            clear();
            return Break;
        }
        _ => {
            clear();
            return session.fail("Invalid option.");
        }
    }
    Continue
}

fn generate_output(session: &mut Session) {
    if session.book.all_words().next().is_none() {
        session.error = Some("Nothing to generate: add words or load a criteria file.".into());
        return;
    }

    let settings = &session.settings;
    let options = settings.options();
    let mut wordlist = None;
    if !settings.wordlist_path.is_empty() {
        match output::read_wordlist(Path::new(&settings.wordlist_path), options.bounds) {
            Ok(external) => wordlist = Some(external),
            Err(e) => print_error(&format!("Skipping wordlist: {e}")),
        }
    }

    let generated = generate(&session.book, &options);
    let lines: Box<dyn Iterator<Item = String> + '_> = match wordlist.as_mut() {
        Some(external) => Box::new(output::mix(generated, external)),
        None => Box::new(generated),
    };

    let result = if settings.output_file_path.is_empty() {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        match output::write_lines(lines, settings.password_count, &mut out) {
            Ok(n) => {
                drop(out);
                print_info(&format!("{n} candidate(s)"));
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    } else {
        let path = Path::new(&settings.output_file_path);
        if path.exists() && !gen_file_exists_menu(settings) {
            clear();
            return;
        }
        progress::with_progress(lines, settings.password_count, path)
            .map(drop)
            .map_err(|e| e.to_string())
    };

    let finished = wordlist.map_or(Ok(0), Wordlist::finish);
    if let Err(e) = result {
        session.error = Some(e);
    } else if let Err(e) = finished {
        session.error = Some(e.to_string());
    }
}

fn toggle(current: bool) -> Result<bool, ()> {
    match get_editable_input("Enter 't' or 'f'", "").as_deref().map(str::trim) {
        None | Some("") => Ok(current),
        Some("t") => Ok(true),
        Some("f") => Ok(false),
        Some(_) => Err(()),
    }
}

pub fn update_settings(settings: &mut Settings) {
    let mut error: Option<String> = None;

    loop {
        print_settings_menu(settings, error.take().as_deref());

        let Some(choice) = get_editable_input(enter_prompt(), "") else {
            clear();
            break;
        };

        match choice.trim() {
            "" => {
                clear();
                break;
            }
            "1" => {
                if let Some(min) = get_numeric_input("Minimum length", settings.min_length) {
                    if min > settings.max_length {
                        error = Some("Minimum length cannot exceed maximum length.".into());
                    } else {
                        settings.min_length = min;
                    }
                }
            }
            "2" => {
                if let Some(max) = get_numeric_input("Maximum length", settings.max_length) {
                    if max < settings.min_length {
                        error = Some("Maximum length cannot be below minimum length.".into());
                    } else {
                        settings.max_length = max;
                    }
                }
            }
            "3" => {
                if let Some(num) =
                    get_numeric_input("Number of candidates", settings.password_count)
                {
                    settings.password_count = num;
                }
            }
            "4" => {
                if let Some(path) =
                    get_editable_input("Output file path (blank for terminal)", &settings.output_file_path)
                {
                    settings.output_file_path = match path.trim() {
                        "" => String::new(),
                        path => output::output_file_name(path),
                    };
                }
            }
            "5" => {
                if let Some(path) =
                    get_editable_input("Third-party wordlist path", &settings.wordlist_path)
                {
                    settings.wordlist_path = path.trim().to_string();
                }
            }
            "6" => match toggle(settings.exhaustive) {
                Ok(on) => settings.exhaustive = on,
                Err(()) => error = Some("Enter 't' or 'f'.".into()),
            },
            "7" => match toggle(settings.strict_pairs) {
                Ok(on) => settings.strict_pairs = on,
                Err(()) => error = Some("Enter 't' or 'f'.".into()),
            },
            "s" => {
                if let Err(e) = settings.save_to_file() {
                    error = Some(format!("Failed to save settings: {}", e));
                }
            }
            "d" => {
                *settings = Settings {
                    criteria_path: settings.criteria_path.clone(),
                    ..Default::default()
                };
            }
            _ => error = Some("Invalid option.".into()),
        }
    }
}
