//! # Report Module
//!
//! This module writes a machine-readable JSON report of a run: one entry per
//! discovered file plus the final counters.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::checker::{Counters, FileOutcome};

/// Information about a processed file for reporting
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(serialize_with = "serialize_path")]
  pub path: PathBuf,
  /// What the check concluded
  #[serde(flatten)]
  pub outcome: FileOutcome,
}

impl FileReport {
  pub const fn new(path: PathBuf, outcome: FileOutcome) -> Self {
    Self { path, outcome }
  }
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&path.to_string_lossy())
}

/// Top-level JSON document.
#[derive(Debug, Serialize)]
struct Report<'a> {
  generated_at: String,
  spdx_enabled: bool,
  summary: &'a Counters,
  files: &'a [FileReport],
}

/// Renders the JSON report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(files: &[FileReport], counters: &Counters, spdx_enabled: bool) -> Result<String> {
  let report = Report {
    generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    spdx_enabled,
    summary: counters,
    files,
  };

  serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
}

/// Writes the JSON report to `output_path`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_json(output_path: &Path, files: &[FileReport], counters: &Counters, spdx_enabled: bool) -> Result<()> {
  let json = render_json(files, counters, spdx_enabled)?;
  fs::write(output_path, json).with_context(|| format!("Failed to write JSON report to {}", output_path.display()))
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  fn sample() -> (Vec<FileReport>, Counters) {
    let files = vec![
      FileReport::new(
        PathBuf::from("a.go"),
        FileOutcome::Checked {
          license: Some("MIT".to_string()),
          spdx: Some(true),
        },
      ),
      FileReport::new(
        PathBuf::from("b.go"),
        FileOutcome::Checked {
          license: None,
          spdx: Some(false),
        },
      ),
      FileReport::new(PathBuf::from("gen/c.go"), FileOutcome::Ignored),
    ];

    let mut counters = Counters::new(files.len());
    for file in &files {
      counters.record(&file.outcome);
    }
    (files, counters)
  }

  #[test]
  fn test_render_json() -> Result<()> {
    let (files, counters) = sample();
    let json: serde_json::Value = serde_json::from_str(&render_json(&files, &counters, true)?)?;

    assert_eq!(json["spdx_enabled"], true);
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["summary"]["missing"], 1);
    assert_eq!(json["summary"]["ignored"], 1);

    assert_eq!(json["files"][0]["path"], "a.go");
    assert_eq!(json["files"][0]["status"], "checked");
    assert_eq!(json["files"][0]["license"], "MIT");
    assert_eq!(json["files"][1]["license"], serde_json::Value::Null);
    assert_eq!(json["files"][2]["status"], "ignored");
    Ok(())
  }

  #[test]
  fn test_write_json() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("report.json");
    let (files, counters) = sample();

    write_json(&output, &files, &counters, false)?;

    let content = fs::read_to_string(&output)?;
    assert!(content.contains("\"generated_at\""));
    assert!(content.contains("\"spdx_enabled\": false"));
    Ok(())
  }
}
