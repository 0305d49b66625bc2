//! # Licenses Module
//!
//! The built-in license registry and the set of license references a run
//! accepts.
//!
//! Users may name a registered license (`MIT`, `Apache-2.0`,
//! `Apache-2.0-ASF`, `EPL-1.0`) instead of pointing at a file. Registered
//! names always win over files of the same name.
//!
//! Registered bodies are bare text, so they go through the same extraction
//! as a plain LICENSE file: noise filtering applies, comment stripping never
//! does.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::header::{CanonicalHeader, HeaderExtractor};

/// A license body compiled into the binary.
#[derive(Debug)]
pub struct RegisteredLicense {
  /// Short name used on the command line
  pub name: &'static str,
  /// SPDX identifier expected in files carrying this license
  pub spdx_id: &'static str,
  /// License header boilerplate
  pub text: &'static str,
}

/// Name that also registers the Apache Software Foundation header variant.
const APACHE_2_0: &str = "Apache-2.0";

/// Name of the Apache Software Foundation header variant.
const APACHE_2_0_ASF: &str = "Apache-2.0-ASF";

/// All built-in licenses.
pub const REGISTRY: &[RegisteredLicense] = &[
  RegisteredLicense {
    name: "MIT",
    spdx_id: "MIT",
    text: include_str!("mit.txt"),
  },
  RegisteredLicense {
    name: APACHE_2_0,
    spdx_id: APACHE_2_0,
    text: include_str!("apache-2.0.txt"),
  },
  RegisteredLicense {
    name: APACHE_2_0_ASF,
    spdx_id: APACHE_2_0,
    text: include_str!("apache-2.0-asf.txt"),
  },
  RegisteredLicense {
    name: "EPL-1.0",
    spdx_id: "EPL-1.0",
    text: include_str!("epl-1.0.txt"),
  },
];

/// Looks up a registered license by its exact short name.
pub fn lookup(name: &str) -> Option<&'static RegisteredLicense> {
  REGISTRY.iter().find(|license| license.name == name)
}

/// A license text that files are allowed to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseReference {
  /// Registry short name or file path given by the user
  pub name: String,
  /// SPDX identifier a matching file should declare
  pub spdx_id: String,
  /// Canonical form of the license text
  pub text: CanonicalHeader,
}

impl LicenseReference {
  /// Builds a reference from a registered license.
  pub fn from_registry(name: &str, registered: &RegisteredLicense, extractor: &HeaderExtractor) -> Self {
    Self {
      name: name.to_string(),
      spdx_id: registered.spdx_id.to_string(),
      text: extractor.extract_text(registered.text),
    }
  }
}

/// Loads every reference named in `sources`.
///
/// Each source is a registry short name or a path to a license file. Listing
/// `Apache-2.0` also accepts the ASF header, under the name `Apache-2.0`.
/// Blank entries are skipped.
///
/// # Errors
///
/// Returns an error if a license file cannot be read, if a reference has no
/// license text left after normalization, or if `sources` names nothing.
pub fn load_references(sources: &[String], max_lines: usize) -> Result<Vec<LicenseReference>> {
  let extractor = HeaderExtractor::new(max_lines);
  let mut references = Vec::with_capacity(sources.len() + 1);

  for source in sources.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
    if let Some(registered) = lookup(source) {
      debug!("Using built-in license text for {}", source);
      references.push(LicenseReference::from_registry(source, registered, &extractor));

      if source == APACHE_2_0
        && let Some(asf) = lookup(APACHE_2_0_ASF)
      {
        references.push(LicenseReference::from_registry(source, asf, &extractor));
      }
    } else {
      debug!("Loading license text from {}", source);
      let text = extractor
        .extract_file(Path::new(source))
        .with_context(|| format!("Failed to load license reference: {source}"))?;
      references.push(LicenseReference {
        name: source.to_string(),
        spdx_id: source.to_string(),
        text,
      });
    }
  }

  if let Some(empty) = references.iter().find(|r| r.text.is_empty()) {
    bail!("License reference '{}' contains no license text", empty.name);
  }
  if references.is_empty() {
    bail!("No license references given");
  }

  Ok(references)
}

/// Returns the first reference whose text appears in `header`.
pub fn accepted_license<'a>(
  header: &CanonicalHeader,
  references: &'a [LicenseReference],
) -> Option<&'a LicenseReference> {
  references.iter().find(|reference| header.contains(&reference.text))
}
