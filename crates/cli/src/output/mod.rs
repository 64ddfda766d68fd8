// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! Scan report formatting.

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use serde::Serialize;

/// Result of scanning one input against the vocabulary.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    /// RFC3339 timestamp of the scan.
    pub timestamp: String,
    /// True when no vocabulary entry matched.
    pub clean: bool,
    /// Distinct matched entries in first-occurrence order.
    pub matches: Vec<String>,
}

impl ScanReport {
    /// Build a report with the current timestamp.
    pub fn new(matches: Vec<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            clean: matches.is_empty(),
            matches,
        }
    }
}
