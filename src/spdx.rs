//! # SPDX Module
//!
//! Verifies the `SPDX-License-Identifier:` line near the top of a file.
//!
//! The check is independent of header comparison: only the first identifier
//! line within the line budget counts, and its value must equal the expected
//! identifier (case-insensitive, whitespace ignored).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::comment::BLOCK_CLOSE;

/// Upper-case marker preceding the identifier.
pub const SPDX_MARKER: &str = "SPDX-LICENSE-IDENTIFIER:";

/// Returns the upper-cased identifier declared on `line`, if any.
///
/// Whitespace is removed and a trailing `*/` is dropped, so
/// `/* SPDX-License-Identifier: MIT */` yields `MIT`.
///
/// # Examples
///
/// ```
/// use lhc::spdx::parse_spdx_line;
///
/// assert_eq!(parse_spdx_line("// SPDX-License-Identifier: Apache-2.0"), Some("APACHE-2.0".to_string()));
/// assert_eq!(parse_spdx_line("// Licensed under MIT"), None);
/// ```
pub fn parse_spdx_line(line: &str) -> Option<String> {
  let upper = line.to_uppercase();
  let idx = upper.find(SPDX_MARKER)?;
  let value = &upper[idx + SPDX_MARKER.len()..];
  let value = value.split(BLOCK_CLOSE).next().unwrap_or_default();
  Some(value.chars().filter(|c| !c.is_whitespace()).collect())
}

/// Finds the first SPDX identifier within `max_lines` lines of `reader`.
pub fn find_spdx_identifier<R: BufRead>(mut reader: R, max_lines: usize) -> std::io::Result<Option<String>> {
  let mut buf = Vec::new();

  for _ in 0..max_lines {
    buf.clear();
    if reader.read_until(b'\n', &mut buf)? == 0 {
      break;
    }
    if let Some(identifier) = parse_spdx_line(&String::from_utf8_lossy(&buf)) {
      return Ok(Some(identifier));
    }
  }

  Ok(None)
}

/// Checks that `path` declares `expected` as its SPDX identifier.
///
/// Returns `false` when no identifier appears within `max_lines` lines or
/// the first one found differs from `expected`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn check_spdx(expected: &str, path: &Path, max_lines: usize) -> Result<bool> {
  let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
  let found = find_spdx_identifier(BufReader::new(file), max_lines)
    .with_context(|| format!("Failed to read file: {}", path.display()))?;

  let Some(identifier) = found else {
    debug!("No SPDX identifier in {}", path.display());
    return Ok(false);
  };

  let matches = identifier == expected.to_uppercase();
  if !matches {
    debug!(
      "SPDX identifier {} in {} does not match {}",
      identifier,
      path.display(),
      expected
    );
  }
  Ok(matches)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_parse_spdx_line() {
    assert_eq!(parse_spdx_line("# SPDX-License-Identifier: MIT"), Some("MIT".to_string()));
    assert_eq!(parse_spdx_line("spdx-license-identifier:   epl-1.0  "), Some("EPL-1.0".to_string()));
    assert_eq!(parse_spdx_line("/* SPDX-License-Identifier: MIT */"), Some("MIT".to_string()));
    assert_eq!(parse_spdx_line("// SPDX-License-Identifier:"), Some(String::new()));
    assert_eq!(parse_spdx_line("// SPDX License Identifier MIT"), None);
  }

  #[test]
  fn test_find_first_identifier_only() -> std::io::Result<()> {
    let text = "// SPDX-License-Identifier: MIT\n// SPDX-License-Identifier: EPL-1.0\n";
    assert_eq!(find_spdx_identifier(text.as_bytes(), 50)?, Some("MIT".to_string()));
    Ok(())
  }

  #[test]
  fn test_find_respects_line_budget() -> std::io::Result<()> {
    let text = "line\nline\nline\n// SPDX-License-Identifier: MIT\n";
    assert_eq!(find_spdx_identifier(text.as_bytes(), 3)?, None);
    assert_eq!(find_spdx_identifier(text.as_bytes(), 4)?, Some("MIT".to_string()));
    Ok(())
  }

  #[test]
  fn test_check_spdx() -> Result<()> {
    let dir = tempdir()?;

    let mit = dir.path().join("mit.go");
    fs::write(&mit, "// spdx-license-identifier: mit\npackage main\n")?;
    assert!(check_spdx("MIT", &mit, 50)?);
    assert!(!check_spdx("Apache-2.0", &mit, 50)?);

    let apache = dir.path().join("apache.py");
    fs::write(&apache, "# SPDX-License-Identifier: Apache-2.0\n")?;
    assert!(check_spdx("Apache-2.0", &apache, 50)?);

    let none = dir.path().join("none.rs");
    fs::write(&none, "fn main() {}\n")?;
    assert!(!check_spdx("MIT", &none, 50)?);

    Ok(())
  }

  #[test]
  fn test_check_spdx_missing_file() {
    assert!(check_spdx("MIT", Path::new("/no/such/file.rs"), 50).is_err());
  }
}
