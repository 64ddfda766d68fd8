// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! Human-readable scan output.

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use super::ScanReport;

/// Text formatter: one matched entry per line, red when colorized;
/// "clean" when nothing matched.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the report.
    pub fn write(&mut self, report: &ScanReport) -> io::Result<()> {
        if report.clean {
            writeln!(self.writer, "clean")?;
            return Ok(());
        }
        for word in &report.matches {
            self.writer
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(self.writer, "{}", word)?;
            self.writer.reset()?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
