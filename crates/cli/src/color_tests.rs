// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn flags_resolve_to_modes() {
    assert_eq!(ColorMode::from_flags(false, false), ColorMode::Auto);
    assert_eq!(ColorMode::from_flags(true, false), ColorMode::Always);
    assert_eq!(ColorMode::from_flags(false, true), ColorMode::Never);
}

#[test]
fn no_color_flag_wins_over_color_flag() {
    assert_eq!(ColorMode::from_flags(true, true), ColorMode::Never);
}

#[test]
fn always_and_never_ignore_environment() {
    assert!(ColorMode::Always.enabled());
    assert!(!ColorMode::Never.enabled());
}

#[test]
fn default_mode_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
