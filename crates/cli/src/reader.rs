// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! Input acquisition: text operands and vocabulary sources.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::filter::WordFilter;

/// Resolve the text operand: the positional argument when present,
/// otherwise all of stdin with one trailing newline removed.
pub fn resolve_text(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
            strip_trailing_newline(&mut buf);
            Ok(buf)
        }
    }
}

/// Load every wordlist file plus the inline words into `filter`.
/// Returns the number of entries handed to the filter.
pub fn load_vocabulary(
    filter: &WordFilter,
    wordlists: &[PathBuf],
    words: &[String],
) -> Result<usize> {
    let mut total = 0;
    for path in wordlists {
        total += load_wordlist(filter, path)?;
    }
    if !words.is_empty() {
        filter.add_words(words);
        total += words.len();
    }
    Ok(total)
}

/// Build a filter from CLI-provided vocabulary sources and an optional
/// noise pattern override.
pub fn build_filter(
    wordlists: &[PathBuf],
    words: &[String],
    noise: Option<&str>,
) -> Result<WordFilter> {
    let filter = match noise {
        Some(pattern) => WordFilter::with_noise_pattern(pattern)?,
        None => WordFilter::new(),
    };
    let loaded = load_vocabulary(&filter, wordlists, words)?;
    if loaded == 0 {
        tracing::warn!("no vocabulary loaded; every scan will come back clean");
    }
    Ok(filter)
}

fn load_wordlist(filter: &WordFilter, path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| Error::Wordlist {
        path: path.to_path_buf(),
        source: e,
    })?;
    let lines = filter.load(file).map_err(|e| Error::Wordlist {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!("wordlist {}: {} entries", path.display(), lines);
    Ok(lines)
}

/// Drop one trailing newline (LF or CRLF) that shell pipes append.
fn strip_trailing_newline(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
