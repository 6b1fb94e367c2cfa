//! JSON criteria files.
//!
//! A criteria file is a JSON object mapping category names to arrays of
//! strings. `null` means no terms. Keys starting with `_` are template
//! comments and skipped.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use super::BookKeeper;
use crate::error::{Error, Result};

/// Build a store from criteria JSON. Categories are added in key order.
pub fn parse(json: &str) -> Result<BookKeeper> {
    let document: Value = serde_json::from_str(json)?;
    let entries = match document {
        Value::Object(entries) => entries,
        other => {
            return Err(Error::Criteria(format!(
                "expected an object of categories, found {}",
                kind(&other)
            )));
        }
    };

    let mut book = BookKeeper::new();
    for (name, value) in &entries {
        if name.starts_with('_') {
            continue;
        }
        book.add_category(name);
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    let Value::String(term) = item else {
                        return Err(Error::Criteria(format!(
                            "category \"{name}\": item {i} is {}, expected a string",
                            kind(item)
                        )));
                    };
                    book.add_word(name, term);
                }
            }
            other => {
                return Err(Error::Criteria(format!(
                    "category \"{name}\" is {}, expected an array of strings",
                    kind(other)
                )));
            }
        }
    }

    debug!(categories = book.len(), "criteria parsed");
    Ok(book)
}

pub fn load(path: &Path) -> Result<BookKeeper> {
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&json)
}

/// Write the store as pretty JSON, replacing `path` atomically.
pub fn save(book: &BookKeeper, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let temp = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, &book.export())?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io(path, e))?;
    }
    temp.persist(path).map_err(|e| Error::io(path, e.error))?;

    debug!(path = %path.display(), "criteria saved");
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_and_skips_comments() {
        let book = parse(
            r#"{
                "_comment": "fill in what you know",
                "pets": ["fido", "rex"],
                "colors": null,
                "years": ["1999"]
            }"#,
        )
        .unwrap();
        assert_eq!(book.category_names().collect::<Vec<_>>(), ["colors", "pets", "years"]);
        assert_eq!(book.words("pets").unwrap(), ["fido", "rex"]);
        assert!(book.words("colors").unwrap().is_empty());
        assert!(!book.contains("_comment"));
    }

    #[test]
    fn rejects_wrong_shapes() {
        let err = parse(r#"["pets"]"#).unwrap_err();
        assert!(matches!(err, Error::Criteria(_)), "{err}");

        let err = parse(r#"{"pets": "fido"}"#).unwrap_err();
        assert!(err.to_string().contains("\"pets\""), "{err}");

        let err = parse(r#"{"years": [1999]}"#).unwrap_err();
        assert!(err.to_string().contains("a number"), "{err}");

        assert!(matches!(parse("{pets: }").unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("criteria.json");

        let mut book = BookKeeper::new();
        book.add_word("pets", "fido");
        book.add_category("family");
        save(&book, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.export(), book.export());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load(Path::new("/nonexistent/criteria.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/criteria.json"));
    }
}
