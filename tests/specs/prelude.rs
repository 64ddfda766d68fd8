//! Shared helpers for CLI specs.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;

/// Command for the taboo binary, isolated from ambient env vars.
pub fn taboo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taboo").expect("taboo binary builds");
    cmd.env_remove("TABOO_WORDLIST");
    cmd.env_remove("TABOO_LOG");
    cmd
}

/// Write a wordlist file with one entry per line.
pub fn wordlist(dir: &tempfile::TempDir, entries: &[&str]) -> PathBuf {
    let path = dir.path().join("words.txt");
    let mut file = std::fs::File::create(&path).expect("create wordlist");
    for entry in entries {
        writeln!(file, "{}", entry).expect("write wordlist entry");
    }
    path
}
