//! # Checker Module
//!
//! The per-file step of a run. [`Checker::check_file`] compares one file's
//! header against the accepted licenses, optionally verifies its SPDX
//! identifier, and returns a [`FileOutcome`]. The caller folds outcomes into
//! [`Counters`]; nothing here keeps state between files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use lhc::checker::{CheckOptions, Checker, Counters};
//! use lhc::licenses::load_references;
//!
//! # fn main() -> anyhow::Result<()> {
//! let options = CheckOptions::default();
//! let references = load_references(&["MIT".to_string()], options.max_lines)?;
//! let checker = Checker::new(references, options);
//!
//! let mut counters = Counters::new(1);
//! let outcome = checker.check_file(Path::new("main.go"))?;
//! counters.record(&outcome);
//!
//! if counters.has_failures(true) {
//!   println!("main.go does not carry an accepted license header");
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::header::{HeaderExtractor, LICENSE_HEADER_LINES_MAX};
use crate::licenses::{LicenseReference, accepted_license};
use crate::spdx::check_spdx;
use crate::walker::exclude;

/// Settings that apply to every file of a run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
  /// Line budget for header extraction and SPDX scanning
  pub max_lines: usize,
  /// Whether the SPDX identifier is verified
  pub spdx: bool,
  /// Path substrings that exclude a file
  pub excludes: Vec<String>,
}

impl Default for CheckOptions {
  fn default() -> Self {
    Self {
      max_lines: LICENSE_HEADER_LINES_MAX,
      spdx: true,
      excludes: Vec::new(),
    }
  }
}

/// Result of checking one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
  /// The file matched an exclude substring and was not read
  Ignored,
  /// The file was read and compared
  Checked {
    /// Name of the accepted license found in the header, if any
    license: Option<String>,
    /// SPDX result, or `None` when SPDX checking is disabled
    spdx: Option<bool>,
  },
}

impl FileOutcome {
  /// Returns `true` if the header matched an accepted license.
  pub const fn header_passed(&self) -> bool {
    matches!(self, Self::Checked { license: Some(_), .. })
  }

  /// Returns `true` if the SPDX identifier was checked and matched.
  pub const fn spdx_passed(&self) -> bool {
    matches!(self, Self::Checked { spdx: Some(true), .. })
  }
}

/// Checks files against a fixed set of license references.
pub struct Checker {
  references: Vec<LicenseReference>,
  options: CheckOptions,
  extractor: HeaderExtractor,
}

impl Checker {
  /// Creates a checker accepting any of `references`.
  pub fn new(references: Vec<LicenseReference>, options: CheckOptions) -> Self {
    let extractor = HeaderExtractor::new(options.max_lines);
    Self {
      references,
      options,
      extractor,
    }
  }

  pub fn references(&self) -> &[LicenseReference] {
    &self.references
  }

  pub const fn options(&self) -> &CheckOptions {
    &self.options
  }

  /// Checks a single file.
  ///
  /// Excluded files are reported as [`FileOutcome::Ignored`] without being
  /// opened. The SPDX identifier is compared against the SPDX id of the
  /// license that accepted the header; a file whose header matched nothing
  /// fails the SPDX check too.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be opened or read.
  pub fn check_file(&self, path: &Path) -> Result<FileOutcome> {
    if exclude(path, &self.options.excludes) {
      debug!("Excluded: {}", path.display());
      return Ok(FileOutcome::Ignored);
    }

    let header = self.extractor.extract_file(path)?;
    let accepted = accepted_license(&header, &self.references);

    let spdx = if self.options.spdx {
      match accepted {
        Some(reference) => Some(check_spdx(&reference.spdx_id, path, self.options.max_lines)?),
        None => Some(false),
      }
    } else {
      None
    };

    debug!(
      "Checked {}: license={:?} spdx={:?}",
      path.display(),
      accepted.map(|r| r.name.as_str()),
      spdx
    );

    Ok(FileOutcome::Checked {
      license: accepted.map(|r| r.name.clone()),
      spdx,
    })
  }
}

/// Tallies of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
  /// Files discovered, including ignored ones
  pub total: usize,
  /// Files skipped by an exclude substring
  pub ignored: usize,
  /// Files whose header matched no accepted license
  pub missing: usize,
  /// Files whose header matched an accepted license
  pub passed: usize,
  /// Files whose SPDX identifier was absent or wrong
  pub spdx_missing: usize,
  /// Files whose SPDX identifier matched
  pub spdx_passed: usize,
}

impl Counters {
  /// Creates counters for a run over `total` discovered files.
  pub fn new(total: usize) -> Self {
    Self {
      total,
      ..Self::default()
    }
  }

  /// Adds one file's outcome.
  pub fn record(&mut self, outcome: &FileOutcome) {
    match outcome {
      FileOutcome::Ignored => self.ignored += 1,
      FileOutcome::Checked { license, spdx } => {
        if license.is_some() {
          self.passed += 1;
        } else {
          self.missing += 1;
        }
        match spdx {
          Some(true) => self.spdx_passed += 1,
          Some(false) => self.spdx_missing += 1,
          None => {}
        }
      }
    }
  }

  /// Returns `true` if the run should exit with a failure status.
  pub const fn has_failures(&self, spdx_enabled: bool) -> bool {
    self.missing > 0 || (spdx_enabled && self.spdx_missing > 0)
  }
}
