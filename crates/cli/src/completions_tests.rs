// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn bash_script_mentions_the_binary() {
    let mut buf = Vec::new();
    write_script(Shell::Bash, &mut buf);
    let script = String::from_utf8(buf).unwrap();
    assert!(script.contains("taboo"));
}

#[test]
fn zsh_script_is_nonempty() {
    let mut buf = Vec::new();
    write_script(Shell::Zsh, &mut buf);
    assert!(!buf.is_empty());
}
