//! Reading and writing newline-delimited word lists

use crate::error::{Result, SiftError};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Split text into lines on `\n`, `\r\n` or a bare `\r`
///
/// Only the terminator is removed; other whitespace stays part of the word.
/// A final line without a terminator still counts; a trailing terminator
/// does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            None => {
                lines.push(rest.to_string());
                break;
            }
            Some(end) => {
                lines.push(rest[..end].to_string());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
        }
    }

    lines
}

/// Load the whole word list at `path` into memory
///
/// Input that is not valid UTF-8 is a read failure, reported before any
/// line is handed to the filters.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let metadata = fs::metadata(path).map_err(|e| SiftError::input(path, e))?;
    if metadata.is_dir() {
        return Err(SiftError::input(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
        ));
    }

    let bytes = fs::read(path).map_err(|e| SiftError::input(path, e))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| SiftError::input(path, io::Error::new(io::ErrorKind::InvalidData, e)))?;
    let words = split_lines(&text);
    debug!(path = %path.display(), lines = words.len(), "loaded word list");
    Ok(words)
}

/// Write one word per line, each followed by `\n`
pub fn write_lines<W: Write, S: AsRef<str>>(writer: &mut W, words: &[S]) -> io::Result<()> {
    for word in words {
        writer.write_all(word.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Create or truncate `path` and write `words` to it
///
/// The buffer is flushed explicitly so a failed flush is reported instead
/// of being lost when the writer drops.
pub fn save<S: AsRef<str>>(path: &Path, words: &[S]) -> Result<usize> {
    let file = File::create(path).map_err(|e| SiftError::output(path, e))?;
    let mut writer = BufWriter::new(file);

    write_lines(&mut writer, words).map_err(|e| SiftError::output(path, e))?;
    writer.flush().map_err(|e| SiftError::output(path, e))?;

    debug!(path = %path.display(), words = words.len(), "wrote word list");
    Ok(words.len())
}
