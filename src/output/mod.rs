//! Wordlist emission: capping, third-party list mixing, and writing.

pub mod progress;

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::rank::LengthBounds;

/// Trimmed lines of a third-party wordlist whose length is within `bounds`.
///
/// Lines that are not valid UTF-8 are skipped and counted. A read error ends
/// the iteration and is kept for [`Wordlist::finish`].
pub struct Wordlist {
    path: PathBuf,
    lines: io::Split<BufReader<File>>,
    bounds: LengthBounds,
    skipped: usize,
    error: Option<io::Error>,
}

pub fn read_wordlist(path: &Path, bounds: LengthBounds) -> Result<Wordlist> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(Wordlist {
        path: path.to_path_buf(),
        lines: BufReader::new(file).split(b'\n'),
        bounds,
        skipped: 0,
        error: None,
    })
}

impl Wordlist {
    /// Lines skipped so far for not being UTF-8.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Report skipped lines and surface any read error.
    pub fn finish(self) -> Result<usize> {
        if self.skipped > 0 {
            warn!(
                path = %self.path.display(),
                skipped = self.skipped,
                "skipped wordlist lines that are not valid UTF-8"
            );
        }
        match self.error {
            Some(e) => Err(Error::io(&self.path, e)),
            None => Ok(self.skipped),
        }
    }
}

impl Iterator for Wordlist {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        loop {
            let bytes = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => {
                    self.error = Some(e);
                    return None;
                }
            };
            match String::from_utf8(bytes) {
                Ok(mut line) => {
                    let trimmed = line.trim().to_owned();
                    line.zeroize();
                    if self.bounds.contains(&trimmed) {
                        return Some(trimmed);
                    }
                }
                Err(e) => {
                    self.skipped += 1;
                    e.into_bytes().zeroize();
                }
            }
        }
    }
}

/// Alternate generated and external lines, generated first. Once the
/// external list runs dry only generated lines follow; the sequence ends
/// the first time a generated line is needed and none is left.
pub fn mix<G, E>(generated: G, external: E) -> impl Iterator<Item = String>
where
    G: IntoIterator<Item = String>,
    E: IntoIterator<Item = String>,
{
    let mut generated = generated.into_iter();
    let mut external = Some(external.into_iter());
    let mut position = 0usize;

    std::iter::from_fn(move || {
        if position % 2 == 1 {
            match external.as_mut().and_then(Iterator::next) {
                Some(line) => {
                    position += 1;
                    return Some(line);
                }
                None => external = None,
            }
        }
        let next = generated.next()?;
        position += 1;
        Some(next)
    })
}

/// Write up to `cap` lines, one per line, wiping each buffer after use.
/// Returns the number written.
pub fn write_lines<W, I>(lines: I, cap: usize, out: &mut W) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut written = 0;
    for mut line in lines.into_iter().take(cap) {
        line.push('\n');
        let result = out.write_all(line.as_bytes());
        line.zeroize();
        result?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Create (or truncate) the output file, creating parent directories.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    Ok(BufWriter::new(file))
}

const DEFAULT_FILE_NAME: &str = "dictionary.txt";

/// `.` and directories get the default file name; a missing extension
/// becomes `.txt`.
pub fn output_file_name(path: &str) -> String {
    if path == "." {
        DEFAULT_FILE_NAME.to_string()
    } else if path.ends_with('/') {
        format!("{path}{DEFAULT_FILE_NAME}")
    } else if Path::new(path).extension().is_none() {
        format!("{path}.txt")
    } else {
        path.to_string()
    }
}

/// Collect up to `cap` lines into one newline-terminated buffer.
pub fn collect_lines<I>(lines: I, cap: usize) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut buf = String::new();
    for mut line in lines.into_iter().take(cap) {
        buf.push_str(&line);
        buf.push('\n');
        line.zeroize();
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mix_alternates_starting_with_generated() {
        let out: Vec<String> = mix(strings(&["g0", "g1", "g2", "g3"]), strings(&["e0"])).collect();
        assert_eq!(out, ["g0", "e0", "g1", "g2", "g3"]);
    }

    #[test]
    fn mix_ends_with_generated() {
        let out: Vec<String> = mix(strings(&["g0", "g1"]), strings(&["e0", "e1", "e2"])).collect();
        assert_eq!(out, ["g0", "e0", "g1", "e1"]);
    }

    #[test]
    fn write_lines_caps_output() {
        let mut out = Vec::new();
        let n = write_lines(strings(&["a", "b", "c"]), 2, &mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(out, b"a\nb\n");
    }

    #[test]
    fn collect_lines_caps_output() {
        assert_eq!(collect_lines(strings(&["a", "b", "c"]), 5), "a\nb\nc\n");
        assert_eq!(collect_lines(strings(&["a", "b"]), 0), "");
    }

    #[test]
    fn wordlist_is_length_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rockyou.txt");
        fs::write(&path, "123456\r\nabc\npassword\nsuperlongpassword\n").unwrap();

        let lines: Vec<String> = read_wordlist(&path, LengthBounds::new(6, 10)).unwrap().collect();
        assert_eq!(lines, ["123456", "password"]);
    }

    #[test]
    fn undecodable_lines_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"letmein1\ncaf\xe9caf\xe9\nsunshine\npassword\n").unwrap();

        let mut wordlist = read_wordlist(&path, LengthBounds::new(6, 12)).unwrap();
        let lines: Vec<String> = wordlist.by_ref().collect();
        assert_eq!(lines, ["letmein1", "sunshine", "password"]);
        assert_eq!(wordlist.skipped(), 1);
        assert_eq!(wordlist.finish().unwrap(), 1);
    }

    #[test]
    fn read_error_is_returned_by_finish() {
        let dir = tempfile::tempdir().unwrap();
        // reading a directory fails on the first read
        let mut wordlist = read_wordlist(dir.path(), LengthBounds::new(1, 12)).unwrap();
        assert_eq!(wordlist.next(), None);
        assert!(matches!(wordlist.finish(), Err(Error::Io { .. })));
    }

    #[test]
    fn output_names() {
        assert_eq!(output_file_name("."), "dictionary.txt");
        assert_eq!(output_file_name("lists/"), "lists/dictionary.txt");
        assert_eq!(output_file_name("acme"), "acme.txt");
        assert_eq!(output_file_name("acme.lst"), "acme.lst");
    }

    #[test]
    fn create_output_makes_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("dictionary.txt");
        let mut file = create_output(&path).unwrap();
        write_lines(strings(&["x"]), 10, &mut file).unwrap();
        drop(file);
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
    }
}
