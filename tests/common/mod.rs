#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use assert_cmd::prelude::*;

/// MIT boilerplate as it appears in `src/licenses/mit.txt`.
pub const MIT_BODY: &str = include_str!("../../src/licenses/mit.txt");

/// Prefixes every line of `text` with `marker`, leaving blank lines as a bare
/// marker.
pub fn commented(marker: &str, text: &str) -> String {
  text
    .lines()
    .map(|line| {
      if line.is_empty() {
        format!("{marker}\n")
      } else {
        format!("{marker} {line}\n")
      }
    })
    .collect()
}

/// A Go source file with a `//` MIT header and, if given, an SPDX line.
pub fn mit_go_source(spdx: Option<&str>) -> String {
  let mut content = String::from("// Copyright (c) 2024 Acme Corp\n");
  if let Some(id) = spdx {
    content.push_str(&format!("// SPDX-License-Identifier: {id}\n"));
  }
  content.push_str("//\n");
  content.push_str(&commented("//", MIT_BODY));
  content.push_str("\npackage main\n");
  content
}

/// Writes `content` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, content: &str) -> Result<()> {
  let path = dir.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Runs the `lhc` binary in `current_dir` with colors disabled, returning
/// (exit code, stdout, stderr).
pub fn run_lhc(args: &[&str], current_dir: &Path) -> Result<(i32, String, String)> {
  let output = Command::cargo_bin("lhc")?
    .arg("--colors=never")
    .args(args)
    .current_dir(current_dir)
    .env_remove("LHC_CONFIG")
    .env_remove("RUST_LOG")
    .output()?;

  let status = output.status.code().unwrap_or(-1);
  let stdout = String::from_utf8_lossy(&output.stdout).to_string();
  let stderr = String::from_utf8_lossy(&output.stderr).to_string();

  println!("Status: {status}");
  println!("Stdout: {stdout}");
  println!("Stderr: {stderr}");

  Ok((status, stdout, stderr))
}
