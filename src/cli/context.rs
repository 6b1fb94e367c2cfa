//! CLI context: settings, flags and clipboard state for one run.

use std::io::{self, BufWriter};
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::info;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::tui::print_help;
use manifest::output::{self, Wordlist, progress};
use manifest::{BookKeeper, Error, Settings, book, generate};

/// File output at least this long gets the progress display.
const PROGRESS_THRESHOLD: usize = 100_000;

/// Why a run stopped early.
pub enum Stop {
    /// Nothing left to do; not an error.
    Done,
    Failed(String),
}

impl From<Error> for Stop {
    fn from(e: Error) -> Self {
        Stop::Failed(e.to_string())
    }
}

pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

type Lines<'a> = Box<dyn Iterator<Item = String> + 'a>;

impl Context {
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        quiet::set(flags.quiet);

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        self.apply_flags()?;
        self.handle_save()?;
        let book = self.load_book()?;
        self.generate_output(&book)
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("manifest {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn apply_flags(&mut self) -> Result<(), Stop> {
        if let Some(min) = self.flags.min {
            self.settings.min_length = min;
        }
        if let Some(max) = self.flags.max {
            self.settings.max_length = max;
        }
        if self.settings.min_length > self.settings.max_length {
            return Err(Stop::Failed(format!(
                "Minimum length {} exceeds maximum length {}",
                self.settings.min_length, self.settings.max_length
            )));
        }
        if let Some(num) = self.flags.number {
            self.settings.password_count = num;
        }
        if let Some(ref path) = self.flags.criteria {
            self.settings.criteria_path = path.clone();
        }
        if let Some(ref path) = self.flags.wordlist {
            self.settings.wordlist_path = path.clone();
        }
        if self.flags.exhaustive {
            self.settings.exhaustive = true;
        }
        if self.flags.strict_pairs {
            self.settings.strict_pairs = true;
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = output::output_file_name(path);
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Stop::Done);
                    }
                    self.settings.to_clipboard = false;
                    self.settings.output_file_path.clear();
                }
            }
        }
        Ok(())
    }

    fn handle_save(&mut self) -> Result<(), Stop> {
        if !self.flags.save {
            return Ok(());
        }
        self.saved_settings = Settings {
            to_clipboard: false,
            ..self.settings.clone()
        };
        self.saved_settings.save_to_file()?;
        prompts::settings_saved(&Settings::path().display().to_string());

        if self.settings.criteria_path.is_empty() {
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn load_book(&self) -> Result<BookKeeper, Stop> {
        if self.settings.criteria_path.is_empty() {
            if self.flags.has_explicit_args() {
                prompts::nothing_to_generate();
            } else {
                print_help();
            }
            return Err(Stop::Done);
        }

        let book = book::load(Path::new(&self.settings.criteria_path))?;
        info!(
            path = %self.settings.criteria_path,
            categories = book.len(),
            terms = book.all_words().count(),
            "criteria loaded"
        );
        Ok(book)
    }

    /// The third-party wordlist, if one is configured and present.
    fn open_wordlist(&self) -> Result<Option<Wordlist>, Stop> {
        if self.settings.wordlist_path.is_empty() {
            return Ok(None);
        }
        let path = Path::new(&self.settings.wordlist_path);
        match output::read_wordlist(path, self.settings.options().bounds) {
            Ok(wordlist) => Ok(Some(wordlist)),
            Err(Error::Io { ref source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                prompts::wordlist_missing(&self.settings.wordlist_path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn generate_output(&mut self, book: &BookKeeper) -> Result<(), Stop> {
        let mut wordlist = self.open_wordlist()?;
        let generated = generate(book, &self.settings.options());
        let lines: Lines<'_> = match wordlist.as_mut() {
            Some(external) => Box::new(output::mix(generated, external)),
            None => Box::new(generated),
        };
        self.emit(lines)?;

        if let Some(wordlist) = wordlist {
            wordlist.finish()?;
        }
        Ok(())
    }

    fn emit(&mut self, lines: Lines<'_>) -> Result<(), Stop> {
        let count = self.settings.password_count;

        if self.settings.to_clipboard {
            let Some(ctx) = self.clipboard.as_mut() else {
                return Ok(());
            };
            let mut buf = output::collect_lines(lines, count);
            let copied = buf.lines().count();
            match ctx.set_contents(buf.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(copied);
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            buf.zeroize();
        } else if !self.settings.output_file_path.is_empty() {
            let path = Path::new(&self.settings.output_file_path);
            if path.exists() && !prompts::overwrite_prompt(&self.settings.output_file_path) {
                return Err(Stop::Done);
            }

            if count >= PROGRESS_THRESHOLD && !quiet::enabled() && quiet::is_terminal_output() {
                progress::with_progress(lines, count, path)?;
                return Ok(());
            }

            let mut file = output::create_output(path)?;
            let written =
                output::write_lines(lines, count, &mut file).map_err(|e| Error::io(path, e))?;
            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            prompts::lines_written(written, &full_path);
        } else {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            if let Err(e) = output::write_lines(lines, count, &mut out)
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                return Err(Stop::Failed(e.to_string()));
            }
        }
        Ok(())
    }
}
