// src/pipeline/input.rs

//! Username input files.

use std::fs;
use std::path::Path;

/// Trim each username and drop the blank ones.
pub fn clean_usernames<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one username per line, trimming whitespace and skipping blanks.
pub fn parse_usernames(text: &str) -> Vec<String> {
    clean_usernames(text.lines())
}

/// Read usernames from a file.
///
/// A missing or unreadable file is logged and yields an empty list; the
/// caller decides how to report "nothing to search".
pub fn read_usernames(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => parse_usernames(&text),
        Err(e) => {
            log::error!("Cannot read input file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
