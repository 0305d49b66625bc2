//! # Check Command
//!
//! This module implements the license header check: it loads the accepted
//! licenses, walks the directory, checks every matching file, prints one
//! result line per file and a summary, and sets the exit status.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::RangedU64ValueParser;
use lhc::checker::{CheckOptions, Checker, Counters};
use lhc::config::{CliOverrides, Settings, load_config};
use lhc::info_log;
use lhc::licenses::load_references;
use lhc::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use lhc::report::{FileReport, write_json};
use lhc::walker::FileWalker;
use tracing::debug;

use crate::output::{print_file_result, print_search_patterns, print_skipped_paths, print_summary};

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Glob patterns of files to check, matched in every directory under
  /// --directory (e.g. '*.go')
  #[arg(required = false)]
  pub patterns: Vec<String>,

  /// Directory to search for files
  #[arg(long, short = 'd', value_name = "PATH", default_value = ".")]
  pub directory: PathBuf,

  /// Comma-separated list of licenses to compare against: built-in names
  /// (MIT, Apache-2.0, Apache-2.0-ASF, EPL-1.0) or license files
  /// [default: license.txt]
  #[arg(long, short = 'l', value_name = "NAME|FILE", value_delimiter = ',')]
  pub license: Vec<String>,

  /// Comma-separated list of path substrings to exclude. For example
  /// '/yang/gen/' skips '**/yang/gen/**'
  #[arg(long, short = 'e', value_name = "SUBSTR", value_delimiter = ',')]
  pub exclude: Vec<String>,

  /// Do not verify that the SPDX identifier matches the license
  #[arg(long)]
  pub disable_spdx: bool,

  /// Number of lines read from the top of each file [default: 50]
  #[arg(long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
  pub max_lines: Option<usize>,

  /// Path to config file (default: .lhc.toml in --directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Write a JSON report of every checked file to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Only print files that fail a check
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Print version
  #[arg(long, short = 'V')]
  pub version: bool,
}

impl CheckArgs {
  /// Validate the arguments and return an error if invalid
  fn validate(&self) -> Result<(), String> {
    if self.patterns.is_empty() {
      return Err("Missing required argument: <PATTERNS>...".to_string());
    }
    Ok(())
  }

  fn overrides(&self) -> CliOverrides {
    CliOverrides {
      licenses: self.license.clone(),
      excludes: self.exclude.clone(),
      disable_spdx: self.disable_spdx,
      max_lines: self.max_lines,
    }
  }
}

/// The version line printed by `--version`.
pub fn version_string() -> String {
  let mut version = format!("License Checker version {}", env!("CARGO_PKG_VERSION"));
  if let Some(hash) = option_env!("GIT_HASH").filter(|h| !h.is_empty()) {
    version.push_str(&format!(" ({hash}"));
    if let Some(date) = option_env!("GIT_DATE").filter(|d| !d.is_empty()) {
      version.push_str(&format!(" {date}"));
    }
    version.push(')');
  }
  version
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<()> {
  if args.version {
    println!("{}", version_string());
    return Ok(());
  }

  // Validate arguments
  if let Err(e) = args.validate() {
    eprintln!("ERROR: {e}");
    process::exit(1);
  }

  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set output mode for result lines and the info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let config = load_config(args.config.as_deref(), &args.directory, args.no_config)?;
  let settings = Settings::resolve(args.overrides(), config);
  debug!("Effective settings: {:?}", settings);

  print_search_patterns(&args.patterns);

  let references = load_references(&settings.licenses, settings.max_lines).context("Failed to load licenses")?;
  for reference in &references {
    debug!("Accepting license {} (SPDX {})", reference.name, reference.spdx_id);
  }

  let walker = FileWalker::new(&args.directory, args.patterns.clone());
  let discovery = walker.find_files();
  print_skipped_paths(&discovery.skipped);

  let spdx_enabled = settings.spdx;
  let checker = Checker::new(
    references,
    CheckOptions {
      max_lines: settings.max_lines,
      spdx: spdx_enabled,
      excludes: settings.excludes,
    },
  );

  let mut counters = Counters::new(discovery.files.len());
  let mut file_reports = Vec::with_capacity(if args.report_json.is_some() { discovery.files.len() } else { 0 });

  for path in discovery.files {
    let outcome = checker.check_file(&path)?;
    print_file_result(&path, &outcome);
    counters.record(&outcome);

    if args.report_json.is_some() {
      file_reports.push(FileReport::new(path, outcome));
    }
  }

  print_summary(&counters, spdx_enabled);

  if let Some(ref output_path) = args.report_json {
    write_json(output_path, &file_reports, &counters, spdx_enabled)?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  if counters.has_failures(spdx_enabled) {
    process::exit(1);
  }

  Ok(())
}
