//! # lhc
//!
//! A license header checker. `lhc` walks a directory, selects files by glob
//! pattern and verifies that each one starts with one of the accepted license
//! headers and, optionally, declares the matching SPDX identifier.
//!
//! Headers are compared in a canonical form: upper-cased with all whitespace
//! removed, after comment markers and noise lines (copyright notices, SPDX
//! tags, shebangs) have been stripped. A file passes when its canonical header
//! contains the canonical text of an accepted license.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use lhc::checker::{CheckOptions, Checker, Counters};
//! use lhc::licenses::load_references;
//! use lhc::walker::FileWalker;
//!
//! fn main() -> anyhow::Result<()> {
//!     let references = load_references(&["MIT".to_string()], 50)?;
//!     let checker = Checker::new(references, CheckOptions::default());
//!
//!     let discovery = FileWalker::new(Path::new("src"), vec!["*.rs".to_string()]).find_files();
//!     let mut counters = Counters::new(discovery.files.len());
//!     for path in &discovery.files {
//!         counters.record(&checker.check_file(path)?);
//!     }
//!
//!     if counters.has_failures(true) {
//!         println!("Some files are missing a license header");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`header`] - Header extraction and canonicalization
//! * [`licenses`] - Built-in license texts and reference loading
//! * [`checker`] - Per-file verdicts and run counters
//! * [`walker`] - Recursive file discovery
//! * [`logging`] - Output modes and diagnostics

pub mod checker;
pub mod comment;
pub mod config;
pub mod header;
pub mod licenses;
pub mod logging;
pub mod noise;
pub mod report;
pub mod spdx;
pub mod walker;
