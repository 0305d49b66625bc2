//! # Header Module
//!
//! This module turns the leading lines of a source (a file on disk or an
//! embedded license body) into a [`CanonicalHeader`]: upper-cased, stripped
//! of comment syntax and noise lines, with every whitespace character
//! removed.
//!
//! Two headers are compared by plain string containment on their canonical
//! forms, so the extraction rules below carry all of the policy:
//!
//! - A source whose first two bytes are a comment opener (`#`, `//`, `/*`)
//!   is comment-syntax. Anything else is bare text and every line up to the
//!   budget is kept.
//! - In a comment-syntax source the header ends at the first line that is
//!   neither inside a `/* ... */` block nor a `#`/`//` comment.
//! - Noise lines (see [`crate::noise`]) are dropped without ending the scan.
//! - At most `max_lines` lines are read.
//!
//! ## Example
//!
//! ```
//! use lhc::header::{CanonicalHeader, HeaderExtractor};
//!
//! let extractor = HeaderExtractor::default();
//! let header = extractor.extract_text("// Copyright 2024 Example\n// Licensed under\n// the terms\npackage main\n");
//!
//! assert_eq!(header, CanonicalHeader::from_text("LICENSED UNDER THE TERMS"));
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek};
use std::ops::ControlFlow;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::comment::{BLOCK_CLOSE, BLOCK_OPEN, is_comment_opener, is_line_comment, strip_comment_markers};
use crate::licenses;
use crate::noise::is_noise_line;

/// Default number of lines read from the top of a source.
pub const LICENSE_HEADER_LINES_MAX: usize = 50;

/// Phrase removed from every line before comparison. Some projects print it
/// and some do not.
const ALL_RIGHTS_RESERVED: &str = "ALL RIGHTS RESERVED.";

/// A header reduced to its comparison form: upper-case, no comment syntax,
/// no noise lines, no whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CanonicalHeader(String);

impl CanonicalHeader {
  /// Builds a canonical header by removing every whitespace character from
  /// `text`. No other normalization is applied.
  pub fn from_text(text: &str) -> Self {
    Self(text.chars().filter(|c| !c.is_whitespace()).collect())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub const fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns `true` if `other` appears anywhere in this header.
  ///
  /// Exact equality is the special case where both are the same length.
  pub fn contains(&self, other: &Self) -> bool {
    self.0.contains(&other.0)
  }
}

impl fmt::Display for CanonicalHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// How a source expresses its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSyntax {
  /// The source starts with a comment opener; the header is its leading
  /// comment block.
  Comment,
  /// The source is plain text, such as a LICENSE file.
  BareText,
}

impl SourceSyntax {
  /// Classifies a source from its first bytes (only the first two matter).
  pub fn sniff(prefix: &[u8]) -> Self {
    let head = &prefix[..prefix.len().min(2)];
    if is_comment_opener(&String::from_utf8_lossy(head)) {
      Self::Comment
    } else {
      Self::BareText
    }
  }
}

/// Position of the scanner relative to the comment block at the top of a
/// comment-syntax source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
  /// No comment is open. This is the state before the first line and after
  /// a block comment closes.
  Outside,
  /// The last line was a `#` or `//` comment (or a one-line `/* */`).
  InSingleLineRun,
  /// Inside a `/* ... */` block that has not been closed yet.
  InBlockComment,
  /// The header has ended.
  Done,
}

impl ScanState {
  /// Computes the state after reading `line`.
  ///
  /// A line containing `*/` closes an open block and is itself still part
  /// of the header. A line opening a block that also closes on the same line
  /// behaves like a single-line comment.
  pub fn advance(self, line: &str) -> Self {
    let trimmed = line.trim_start();
    match self {
      Self::Done => Self::Done,
      Self::InBlockComment if trimmed.contains(BLOCK_CLOSE) => Self::Outside,
      Self::InBlockComment => Self::InBlockComment,
      Self::Outside | Self::InSingleLineRun => match trimmed.strip_prefix(BLOCK_OPEN) {
        Some(rest) if rest.contains(BLOCK_CLOSE) => Self::InSingleLineRun,
        Some(_) => Self::InBlockComment,
        None if is_line_comment(trimmed) => Self::InSingleLineRun,
        None => Self::Done,
      },
    }
  }
}

/// Per-extraction scan state. Dropped when extraction returns.
struct Scan {
  syntax: SourceSyntax,
  state: ScanState,
  lines_read: usize,
  max_lines: usize,
  accumulated: String,
}

impl Scan {
  const fn new(syntax: SourceSyntax, max_lines: usize) -> Self {
    Self {
      syntax,
      state: ScanState::Outside,
      lines_read: 0,
      max_lines,
      accumulated: String::new(),
    }
  }

  const fn exhausted(&self) -> bool {
    self.lines_read >= self.max_lines
  }

  /// Consumes one line. Breaks once the header has ended.
  fn feed(&mut self, raw: &str) -> ControlFlow<()> {
    self.lines_read += 1;

    let line = raw.to_uppercase().replace(ALL_RIGHTS_RESERVED, "");
    let noise = is_noise_line(&line);

    if self.syntax == SourceSyntax::BareText {
      if !noise {
        self.accumulated.push_str(&line);
      }
      return ControlFlow::Continue(());
    }

    let next = self.state.advance(&line);
    trace!(line = self.lines_read, ?next, noise, "scanned header line");

    if noise {
      // Noise may open or close a block but never ends the header
      if next != ScanState::Done {
        self.state = next;
      }
      return ControlFlow::Continue(());
    }

    if next == ScanState::Done {
      // Blank lines ahead of the header text, e.g. after a shebang
      if line.trim().is_empty() && self.accumulated.trim().is_empty() {
        return ControlFlow::Continue(());
      }
      self.state = ScanState::Done;
      return ControlFlow::Break(());
    }

    self.state = next;
    self.accumulated.push_str(strip_comment_markers(&line));
    ControlFlow::Continue(())
  }

  fn finish(self) -> CanonicalHeader {
    CanonicalHeader::from_text(&self.accumulated)
  }
}

/// Extracts canonical headers with a fixed line budget.
#[derive(Debug, Clone, Copy)]
pub struct HeaderExtractor {
  max_lines: usize,
}

impl Default for HeaderExtractor {
  fn default() -> Self {
    Self::new(LICENSE_HEADER_LINES_MAX)
  }
}

impl HeaderExtractor {
  /// Creates an extractor reading at most `max_lines` lines per source.
  pub const fn new(max_lines: usize) -> Self {
    Self { max_lines }
  }

  pub const fn max_lines(&self) -> usize {
    self.max_lines
  }

  /// Extracts the header of an in-memory text.
  pub fn extract_text(&self, text: &str) -> CanonicalHeader {
    let mut scan = Scan::new(SourceSyntax::sniff(text.as_bytes()), self.max_lines);
    for line in text.lines() {
      if scan.exhausted() || scan.feed(line).is_break() {
        break;
      }
    }
    scan.finish()
  }

  /// Extracts the header from a reader with a known syntax.
  ///
  /// Lines are decoded lossily so binary content never aborts the scan.
  pub fn extract_reader<R: BufRead>(&self, mut reader: R, syntax: SourceSyntax) -> std::io::Result<CanonicalHeader> {
    let mut scan = Scan::new(syntax, self.max_lines);
    let mut buf = Vec::new();

    while !scan.exhausted() {
      buf.clear();
      if reader.read_until(b'\n', &mut buf)? == 0 {
        break;
      }
      if scan.feed(&String::from_utf8_lossy(&buf)).is_break() {
        break;
      }
    }

    Ok(scan.finish())
  }

  /// Extracts the header of a file.
  ///
  /// The first two bytes decide the syntax, then the file is rewound and
  /// scanned line by line. An empty file yields an empty header.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be opened or read.
  pub fn extract_file(&self, path: &Path) -> Result<CanonicalHeader> {
    let mut file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut prefix = Vec::with_capacity(2);
    (&mut file)
      .take(2)
      .read_to_end(&mut prefix)
      .with_context(|| format!("Failed to read file: {}", path.display()))?;
    file
      .rewind()
      .with_context(|| format!("Failed to rewind file: {}", path.display()))?;

    let syntax = SourceSyntax::sniff(&prefix);
    let header = self
      .extract_reader(BufReader::new(file), syntax)
      .with_context(|| format!("Failed to read file: {}", path.display()))?;

    debug!(
      "Extracted {} header of {} chars from {}",
      if syntax == SourceSyntax::Comment { "comment" } else { "bare text" },
      header.as_str().len(),
      path.display()
    );

    Ok(header)
  }
}

/// Extracts the canonical header named by `source`.
///
/// `source` is looked up in the license registry first; only when it is not
/// a registered short name is it treated as a file path.
///
/// # Errors
///
/// Returns an error if `source` is not a registry name and the file cannot be
/// read.
pub fn extract_header(source: &str, max_lines: usize) -> Result<CanonicalHeader> {
  let extractor = HeaderExtractor::new(max_lines);
  match licenses::lookup(source) {
    Some(registered) => Ok(extractor.extract_text(registered.text)),
    None => extractor.extract_file(Path::new(source)),
  }
}
