// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! Synchronized vocabulary service.
//!
//! `WordFilter` wraps the trie and the compiled noise pattern behind a
//! single reader/writer lock, so a pattern swap and a trie scan can
//! never observe inconsistent generations. Any number of scans proceed
//! in parallel; one mutation at a time excludes everything else and is
//! fully visible to every scan that starts after it returns.
//!
//! Noise policy: operations that report vocabulary hits (`find_in`,
//! `find_all`, `validate`, `validate_with_wildcard`) strip noise from
//! their input first. Operations that rewrite the caller's text
//! (`replace`, `filter`) do not, because their output is positional
//! with respect to the verbatim input; compose with `strip_noise` for
//! noise-tolerant rewriting.

use std::io::{self, BufRead, BufReader, Read};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::noise::{NoiseError, NoisePattern};
use crate::trie::Trie;

/// Thread-safe sensitive-word filter over a mutable vocabulary.
#[derive(Debug, Default)]
pub struct WordFilter {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    trie: Trie,
    noise: NoisePattern,
}

impl WordFilter {
    /// Empty vocabulary, default noise pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty vocabulary with a caller-supplied noise pattern.
    pub fn with_noise_pattern(pattern: &str) -> Result<Self, NoiseError> {
        let noise = NoisePattern::compile(pattern)?;
        Ok(Self {
            inner: RwLock::new(Inner {
                trie: Trie::new(),
                noise,
            }),
        })
    }

    /// Add vocabulary entries.
    pub fn add_words<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.write().trie.add(words);
    }

    /// Remove vocabulary entries. Removing an absent entry is a no-op.
    pub fn del_words<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.write().trie.del(words);
    }

    /// Bulk-insert one vocabulary entry per line, verbatim, holding the
    /// write lock for the whole load so readers see either none or all
    /// of it. Returns the number of lines consumed.
    pub fn load<R: Read>(&self, reader: R) -> io::Result<usize> {
        let mut inner = self.write();
        let mut lines = 0usize;
        for line in BufReader::new(reader).lines() {
            inner.trie.add([line?]);
            lines += 1;
        }
        tracing::debug!("loaded {} vocabulary lines", lines);
        Ok(lines)
    }

    /// Swap the noise pattern. The new pattern is compiled before the
    /// write lock is taken; on a malformed pattern the active one stays
    /// in place and the service remains usable.
    pub fn update_noise_pattern(&self, pattern: &str) -> Result<(), NoiseError> {
        let compiled = NoisePattern::compile(pattern)?;
        self.write().noise = compiled;
        Ok(())
    }

    /// First vocabulary hit in `text` after noise stripping.
    pub fn find_in(&self, text: &str) -> Option<String> {
        let inner = self.read();
        let stripped = inner.noise.strip(text);
        inner.trie.find_in(&stripped)
    }

    /// Every distinct vocabulary hit in `text` after noise stripping,
    /// first-occurrence order.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let inner = self.read();
        let stripped = inner.noise.strip(text);
        inner.trie.find_all(&stripped)
    }

    /// First offending entry after noise stripping, `None` when clean.
    pub fn validate(&self, text: &str) -> Option<String> {
        self.find_in(text)
    }

    /// As `validate`, treating `wildcard` in the text as matching any
    /// single code point during the trie walk. Noise is stripped first,
    /// so a wildcard that falls inside the active noise class never
    /// reaches the walk; pick a wildcard outside the class or adjust the
    /// pattern.
    pub fn validate_with_wildcard(&self, text: &str, wildcard: char) -> Option<String> {
        let inner = self.read();
        let stripped = inner.noise.strip(text);
        inner.trie.validate_with_wildcard(&stripped, wildcard)
    }

    /// Mask every hit with `repl`, preserving code-point positions of
    /// the verbatim input (no noise pre-pass).
    pub fn replace(&self, text: &str, repl: char) -> String {
        self.read().trie.replace(text, repl)
    }

    /// Remove every hit from the verbatim input (no noise pre-pass).
    pub fn filter(&self, text: &str) -> String {
        self.read().trie.filter(text)
    }

    /// The noise-stripping pre-pass on its own.
    pub fn strip_noise(&self, text: &str) -> String {
        self.read().noise.strip(text)
    }

    /// The active noise pattern string.
    pub fn noise_pattern(&self) -> String {
        self.read().noise.as_str().to_string()
    }

    /// Number of vocabulary entries.
    pub fn word_count(&self) -> usize {
        self.read().trie.word_count()
    }

    /// True when the vocabulary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read().trie.is_empty()
    }

    // Scans are read-only and per-word mutation cannot leave the trie
    // half-updated, so a poisoned lock is recovered rather than surfaced.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
