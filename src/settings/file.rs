//! Settings file persistence.
//!
//! One line of comma-separated fields. `|` escapes a literal `,` or `|`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::{Error, Result};

const FIELDS: usize = 8;

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.min_length,
        settings.max_length,
        settings.password_count,
        escape(&settings.criteria_path),
        escape(&settings.wordlist_path),
        escape(&settings.output_file_path),
        settings.exhaustive,
        settings.strict_pairs,
    );

    file.write_all(data.as_bytes())
        .map_err(|e| Error::io(path, e))
}

/// Missing file leaves `settings` untouched. Unparseable values keep their
/// current value.
pub fn load(settings: &mut Settings, path: &Path) -> Result<()> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::io(path, e)),
    };

    let line = data.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(());
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return Err(Error::Settings(format!(
            "{}: expected {FIELDS} fields, found {}",
            path.display(),
            parts.len()
        )));
    }

    settings.min_length = parts[0].parse().unwrap_or(settings.min_length);
    settings.max_length = parts[1].parse().unwrap_or(settings.max_length);
    settings.password_count = parts[2].parse().unwrap_or(settings.password_count);
    settings.criteria_path = parts[3].clone();
    settings.wordlist_path = parts[4].clone();
    settings.output_file_path = parts[5].clone();
    settings.exhaustive = parts[6].parse().unwrap_or(settings.exhaustive);
    settings.strict_pairs = parts[7].parse().unwrap_or(settings.strict_pairs);

    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/manifest/settings", home))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_fields_survive_splitting() {
        let line = format!("{},{},{}", escape("a,b"), escape(""), escape("x|y"));
        assert_eq!(split_escaped(&line, ','), ["a,b", "", "x|y"]);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("settings");

        let settings = Settings {
            min_length: 8,
            max_length: 16,
            password_count: 500,
            criteria_path: "targets/acme, inc.json".into(),
            output_file_path: "out.txt".into(),
            strict_pairs: true,
            ..Default::default()
        };
        save(&settings, &path).unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        load(&mut settings, &dir.path().join("absent")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn wrong_field_count_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "74,19,false\n").unwrap();
        let err = load(&mut Settings::default(), &path).unwrap_err();
        assert!(matches!(err, Error::Settings(_)));
    }
}
