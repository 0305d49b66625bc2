//! # lhc
//!
//! A tool that checks source files for an accepted license header.

mod cli;
mod output;

use std::process;

use crate::cli::{Cli, run_check};

fn main() {
  let cli = Cli::parse_args();

  // Fatal diagnostics share stdout with the result lines.
  if let Err(e) = run_check(cli.check_args) {
    println!("ERROR: {e:#}");
    process::exit(1);
  }
}
