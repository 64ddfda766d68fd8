// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! Noise-stripping patterns.
//!
//! A noise pattern strips separator and decoration characters from text
//! before matching, defeating simple obfuscation like "b|a d" for "bad".
//! Runs of noise collapse to the empty string.

use regex::Regex;

/// Default noise class: pipes, whitespace, `&`, `%`, `$`, `@`, `*`.
pub const DEFAULT_NOISE_PATTERN: &str = r"[\|\s&%$@\*]+";

/// Error during noise pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum NoiseError {
    #[error("invalid noise pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// A compiled noise-stripping pattern.
#[derive(Debug, Clone)]
pub struct NoisePattern {
    regex: Regex,
}

impl NoisePattern {
    /// Compile a pattern string. The pattern uses full regex syntax;
    /// character-class-plus forms like the default give idempotent
    /// stripping.
    pub fn compile(pattern: &str) -> Result<Self, NoiseError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Remove every occurrence of the pattern from `text`.
    pub fn strip(&self, text: &str) -> String {
        self.regex.replace_all(text, "").into_owned()
    }

    /// The source pattern string.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for NoisePattern {
    fn default() -> Self {
        // The default pattern is a constant known to compile.
        #[allow(clippy::expect_used)]
        Self::compile(DEFAULT_NOISE_PATTERN).expect("default noise pattern compiles")
    }
}

#[cfg(test)]
#[path = "noise_tests.rs"]
mod tests;
