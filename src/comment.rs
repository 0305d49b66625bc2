//! # Comment Module
//!
//! Recognizes the three comment openers the checker understands (`#`, `//`
//! and `/*`) and strips comment syntax from a single line of header text.
//!
//! There is deliberately no per-language table here: a file either starts
//! with one of these openers or it is treated as bare text.

/// Line comment openers.
const LINE_OPENERS: [&str; 2] = ["#", "//"];

/// Block comment opener.
pub const BLOCK_OPEN: &str = "/*";

/// Block comment terminator.
pub const BLOCK_CLOSE: &str = "*/";

/// Returns `true` if `prefix` starts with a comment opener.
///
/// This is used once per source on its first two bytes to decide whether the
/// source uses comment syntax at all. A plain-text LICENSE file does not.
///
/// # Examples
///
/// ```
/// use lhc::comment::is_comment_opener;
///
/// assert!(is_comment_opener("//"));
/// assert!(is_comment_opener("/*"));
/// assert!(is_comment_opener("# Licensed"));
/// assert!(!is_comment_opener("Pe"));
/// ```
pub fn is_comment_opener(prefix: &str) -> bool {
  prefix.starts_with(BLOCK_OPEN) || LINE_OPENERS.iter().any(|opener| prefix.starts_with(opener))
}

/// Returns `true` if the line, ignoring indentation, is a single-line comment
/// (`#` or `//`).
pub fn is_line_comment(line: &str) -> bool {
  let trimmed = line.trim_start();
  LINE_OPENERS.iter().any(|opener| trimmed.starts_with(opener))
}

/// Strips comment syntax from a header line.
///
/// Leading markers are removed first, in this order: runs of `#`, runs of
/// `/`, runs of `/` or `*`, and finally runs of spaces or `*` (the asterisk
/// that continues a block comment). Then everything from the first `*/`
/// onward is dropped, along with any `*` left at the front.
///
/// # Examples
///
/// ```
/// use lhc::comment::strip_comment_markers;
///
/// assert_eq!(strip_comment_markers("// Licensed under"), "Licensed under");
/// assert_eq!(strip_comment_markers(" * you may not use"), "you may not use");
/// assert_eq!(strip_comment_markers("/* one liner */"), "one liner ");
/// ```
pub fn strip_comment_markers(line: &str) -> &str {
  let stripped = line
    .trim_start()
    .trim_start_matches('#')
    .trim_start_matches('/')
    .trim_start_matches(['/', '*'])
    .trim_start_matches([' ', '*']);

  let before_close = match stripped.find(BLOCK_CLOSE) {
    Some(idx) => &stripped[..idx],
    None => stripped,
  };

  before_close.trim_start_matches('*')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_is_comment_opener() {
    assert!(is_comment_opener("#!"));
    assert!(is_comment_opener("# "));
    assert!(is_comment_opener("//"));
    assert!(is_comment_opener("/*"));

    assert!(!is_comment_opener(""));
    assert!(!is_comment_opener("/"));
    assert!(!is_comment_opener(" #"));
    assert!(!is_comment_opener("MI"));
  }

  #[test]
  fn test_is_line_comment() {
    assert!(is_line_comment("# comment"));
    assert!(is_line_comment("    // indented"));
    assert!(!is_line_comment("/* block */"));
    assert!(!is_line_comment("package main"));
    assert!(!is_line_comment(""));
  }

  #[test]
  fn test_strip_hash_comment() {
    assert_eq!(strip_comment_markers("# Licensed"), "Licensed");
    assert_eq!(strip_comment_markers("## Licensed"), "Licensed");
    assert_eq!(strip_comment_markers("#"), "");
  }

  #[test]
  fn test_strip_slash_comment() {
    assert_eq!(strip_comment_markers("// Licensed"), "Licensed");
    assert_eq!(strip_comment_markers("/// Licensed"), "Licensed");
    assert_eq!(strip_comment_markers("//"), "");
  }

  #[test]
  fn test_strip_block_comment() {
    assert_eq!(strip_comment_markers("/*"), "");
    assert_eq!(strip_comment_markers("/**"), "");
    assert_eq!(strip_comment_markers(" */"), "");
    assert_eq!(strip_comment_markers(" * Licensed"), "Licensed");
    assert_eq!(strip_comment_markers("/* Licensed */ int x;"), "Licensed ");
    assert_eq!(strip_comment_markers("SOFTWARE. */"), "SOFTWARE. ");
  }

  #[test]
  fn test_strip_preserves_plain_text() {
    assert_eq!(strip_comment_markers("Permission is hereby granted"), "Permission is hereby granted");
  }
}
