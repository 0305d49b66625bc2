//! # Output Module
//!
//! This module centralizes all user-facing output for the lhc tool: the
//! per-file result lines and the closing summary.
//!
//! A result line is one glyph for the header check, a second glyph for the
//! SPDX check when it is enabled, then the path:
//!
//! ```text
//! ✔✔ src/main.go
//! ✔✘ src/util.go
//! ✘✘ src/new.go
//! ```

use std::path::Path;

use lhc::checker::{Counters, FileOutcome};
use lhc::logging::{is_quiet, is_verbose};
use lhc::walker::SkippedPath;
use owo_colors::{OwoColorize, Stream};

/// Symbols used in output
pub mod symbols {
  /// Check passed
  pub const PASS: &str = "\u{2714}"; // ✔
  /// Check failed
  pub const FAIL: &str = "\u{2718}"; // ✘
  /// Excluded file (verbose mode only)
  pub const IGNORED: &str = "-";
}

fn glyph(passed: bool) -> String {
  if passed {
    symbols::PASS.if_supports_color(Stream::Stdout, |s| s.green()).to_string()
  } else {
    symbols::FAIL.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
  }
}

/// Builds the glyph prefix for a checked file, or `None` for an ignored one.
pub fn result_glyphs(outcome: &FileOutcome) -> Option<String> {
  match outcome {
    FileOutcome::Ignored => None,
    FileOutcome::Checked { spdx, .. } => {
      let mut glyphs = glyph(outcome.header_passed());
      if let Some(spdx_passed) = spdx {
        glyphs.push_str(&glyph(*spdx_passed));
      }
      Some(glyphs)
    }
  }
}

/// Returns `true` if the outcome counts against the exit status.
const fn is_failure(outcome: &FileOutcome) -> bool {
  matches!(
    outcome,
    FileOutcome::Checked { license: None, .. } | FileOutcome::Checked { spdx: Some(false), .. }
  )
}

/// Print the patterns the run searches for.
pub fn print_search_patterns(patterns: &[String]) {
  if is_quiet() {
    return;
  }

  println!("Search Patterns: [{}]", patterns.join(" "));
}

/// Print the result line of one file.
///
/// Ignored files are only listed in verbose mode. In quiet mode only
/// failing files are listed.
pub fn print_file_result(path: &Path, outcome: &FileOutcome) {
  match result_glyphs(outcome) {
    Some(glyphs) => {
      if is_quiet() && !is_failure(outcome) {
        return;
      }
      println!("{} {}", glyphs, path.display());
    }
    None => {
      if is_verbose() {
        println!(
          "{} {}",
          symbols::IGNORED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
          path.display().if_supports_color(Stream::Stdout, |s| s.dimmed())
        );
      }
    }
  }
}

/// Print the paths the walker could not enumerate (verbose mode only).
pub fn print_skipped_paths(skipped: &[SkippedPath]) {
  if !is_verbose() {
    return;
  }

  for entry in skipped {
    eprintln!("Skipped {}: {}", entry.path.display(), entry.reason);
  }
}

/// The license summary line.
pub fn license_summary(counters: &Counters) -> String {
  format!(
    "License Total: {}, Ignored: {}, Missing: {}, Passed: {}",
    counters.total, counters.ignored, counters.missing, counters.passed
  )
}

/// The SPDX summary line.
pub fn spdx_summary(counters: &Counters) -> String {
  format!(
    "SPDX Total: {}, Missing: {}, Passed: {}",
    counters.total, counters.spdx_missing, counters.spdx_passed
  )
}

/// Print the closing summary. The SPDX line is omitted when SPDX checking is
/// disabled.
pub fn print_summary(counters: &Counters, spdx_enabled: bool) {
  if is_quiet() {
    return;
  }

  println!("{}", license_summary(counters));
  if spdx_enabled {
    println!("{}", spdx_summary(counters));
  }
}
