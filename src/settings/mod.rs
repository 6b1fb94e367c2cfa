//! Wordlist generation settings.

mod file;

use std::path::{Path, PathBuf};

use crate::engine::Options;
use crate::error::Result;
use crate::rank::{LengthBounds, Pairing};
use crate::transform::SubstitutionMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub min_length: usize,
    pub max_length: usize,
    pub password_count: usize,
    pub criteria_path: String,
    pub wordlist_path: String,
    pub output_file_path: String,
    pub exhaustive: bool,
    pub strict_pairs: bool,
    pub to_clipboard: bool,
}

impl Settings {
    /// Saved settings, or defaults when nothing has been saved yet.
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }

    pub fn options(&self) -> Options {
        Options {
            bounds: LengthBounds::new(self.min_length, self.max_length),
            substitution: if self.exhaustive {
                SubstitutionMode::Exhaustive
            } else {
                SubstitutionMode::Single
            },
            pairing: if self.strict_pairs {
                Pairing::Strict
            } else {
                Pairing::KeepTail
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_length: 6,
            max_length: 12,
            password_count: 20_000,
            criteria_path: String::new(),
            wordlist_path: String::new(),
            output_file_path: String::new(),
            exhaustive: false,
            strict_pairs: false,
            to_clipboard: false,
        }
    }
}
