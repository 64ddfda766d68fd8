// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! JSON scan output.
//!
//! Buffered and written at the end (not streamed).

use std::io::{self, Write};

use super::ScanReport;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write(&mut self, report: &ScanReport) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
