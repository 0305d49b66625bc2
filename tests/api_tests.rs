//! # Library API tests
//!
//! Exercises the public modules together the way the binary wires them up.

mod common;

use anyhow::Result;
use lhc::checker::{CheckOptions, Checker, Counters, FileOutcome};
use lhc::header::{HeaderExtractor, extract_header};
use lhc::licenses::{REGISTRY, load_references};
use lhc::walker::FileWalker;
use tempfile::tempdir;

use common::{mit_go_source, write_file};

#[test]
fn test_every_registered_license_has_text() -> Result<()> {
  for license in REGISTRY {
    let header = extract_header(license.name, 50)?;
    assert!(!header.is_empty(), "{} has no header text", license.name);
  }
  Ok(())
}

#[test]
fn test_registered_header_matches_commented_copy() -> Result<()> {
  for license in REGISTRY {
    let reference = extract_header(license.name, 50)?;
    let commented = common::commented("#", license.text);
    let header = HeaderExtractor::new(usize::MAX).extract_text(&commented);
    assert!(header.contains(&reference), "commented {} header did not match", license.name);
  }
  Ok(())
}

#[test]
fn test_apache_accepts_asf_variant() -> Result<()> {
  let references = load_references(&["Apache-2.0".to_string()], 50)?;

  assert_eq!(references.len(), 2);
  assert!(references.iter().all(|r| r.name == "Apache-2.0"));
  assert!(references.iter().all(|r| r.spdx_id == "Apache-2.0"));
  Ok(())
}

#[test]
fn test_walk_and_check() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "cmd/main.go", &mit_go_source(Some("MIT")))?;
  write_file(temp_dir.path(), "cmd/gen/types.go", "package gen\n")?;
  write_file(temp_dir.path(), "internal/util.go", "// Copyright (c) 2024 Acme Corp\n\npackage internal\n")?;

  let checker = Checker::new(
    load_references(&["MIT".to_string()], 50)?,
    CheckOptions {
      excludes: vec!["/gen/".to_string()],
      ..CheckOptions::default()
    },
  );
  let discovery = FileWalker::new(temp_dir.path(), vec!["*.go".to_string()]).find_files();

  let mut counters = Counters::new(discovery.files.len());
  for path in &discovery.files {
    let outcome = checker.check_file(path)?;
    if path.ends_with("cmd/main.go") {
      assert_eq!(
        outcome,
        FileOutcome::Checked {
          license: Some("MIT".to_string()),
          spdx: Some(true),
        }
      );
    }
    counters.record(&outcome);
  }

  assert_eq!(counters.total, 3);
  assert_eq!(counters.ignored, 1);
  assert_eq!(counters.passed, 1);
  assert_eq!(counters.missing, 1);
  assert_eq!(counters.spdx_passed, 1);
  assert_eq!(counters.spdx_missing, 1);
  assert!(counters.has_failures(true));
  Ok(())
}
