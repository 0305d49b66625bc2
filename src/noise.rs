//! # Noise Module
//!
//! Decides which lines inside a candidate header are ignored when building
//! the canonical header. These are lines that legitimately differ from file
//! to file (copyright holders and years, SPDX tags, contributor lists) while
//! the license boilerplate around them must stay identical.

use crate::comment::strip_comment_markers;

/// Marker for an interpreter line at the top of a script.
const SHEBANG: &str = "#!";

/// Prefixes (upper-case, comment syntax removed) of lines that are skipped.
const NOISE_PREFIXES: &[&str] = &[
  "COPYRIGHT",
  "SPDX-LICENSE-IDENTIFIER",
  // Contributor lists in Eclipse Public License headers
  "CONTRIBUTORS:",
  // License names that head a LICENSE file but not a source header
  "MIT LICENSE",
  "THE MIT LICENSE",
];

/// Returns `true` if the line is noise and must not contribute to the header.
///
/// `line` is expected to be upper-cased already. The shebang check runs on
/// the raw line since stripping `#` would destroy the marker; every other
/// check runs on the line with comment syntax removed.
///
/// # Examples
///
/// ```
/// use lhc::noise::is_noise_line;
///
/// assert!(is_noise_line("#!/USR/BIN/ENV PYTHON3"));
/// assert!(is_noise_line("// COPYRIGHT (C) 2020, JANE DOE"));
/// assert!(is_noise_line(" * SPDX-LICENSE-IDENTIFIER: MIT"));
/// assert!(!is_noise_line("// PERMISSION IS HEREBY GRANTED"));
/// ```
pub fn is_noise_line(line: &str) -> bool {
  if line.trim_start().starts_with(SHEBANG) {
    return true;
  }

  let content = strip_comment_markers(line).trim_start();
  NOISE_PREFIXES.iter().any(|prefix| content.starts_with(prefix))
}
