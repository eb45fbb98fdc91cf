//! line handling shared by the three config formats.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// non-blank, non-comment lines, trimmed, with their 1-based line numbers.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// split `name: a, b, c` on the first colon.
///
/// returns the trimmed name and an iterator over the trimmed, non-empty
/// list items. `None` if the line has no colon.
pub(crate) fn split_entry(line: &str) -> Option<(&str, impl Iterator<Item = &str>)> {
    let (name, rest) = line.split_once(':')?;
    let items = rest.split(',').map(str::trim).filter(|s| !s.is_empty());
    Some((name.trim(), items))
}

/// read a config file, reporting a missing path as [`Error::FileNotFound`].
pub(crate) fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
