//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod check;

pub use check::{CheckArgs, run_check};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "lhc",
  about = "Compare FILE patterns with an expected license header.",
  version,
  disable_version_flag = true,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Check Go files against the built-in MIT header
  lhc --license MIT '*.go'

  # Accept either Apache-2.0 (including the ASF header) or a custom header
  lhc --license Apache-2.0,LICENSE-HEADER.txt '*.java' '*.py'

  # Check another directory and skip generated code
  lhc --directory src --exclude /yang/gen/,/vendor/ '*.java'

  # Only compare header text, without SPDX identifiers
  lhc --disable-spdx --license license.txt '*.sh'
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub check_args: CheckArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn test_parse_full_command_line() {
    let cli = Cli::try_parse_from([
      "lhc",
      "--directory",
      "src",
      "--license",
      "MIT,Apache-2.0",
      "--exclude",
      "/gen/,/vendor/",
      "--disable-spdx",
      "--max-lines",
      "100",
      "*.go",
      "*.py",
    ])
    .expect("arguments should parse");

    let args = cli.check_args;
    assert_eq!(args.directory, PathBuf::from("src"));
    assert_eq!(args.license, ["MIT", "Apache-2.0"]);
    assert_eq!(args.exclude, ["/gen/", "/vendor/"]);
    assert!(args.disable_spdx);
    assert_eq!(args.max_lines, Some(100));
    assert_eq!(args.patterns, ["*.go", "*.py"]);
  }

  #[test]
  fn test_defaults() {
    let cli = Cli::try_parse_from(["lhc", "*.rs"]).expect("arguments should parse");

    let args = cli.check_args;
    assert_eq!(args.directory, PathBuf::from("."));
    assert!(args.license.is_empty());
    assert!(!args.disable_spdx);
    assert!(!args.version);
  }

  #[test]
  fn test_zero_max_lines_is_rejected() {
    assert!(Cli::try_parse_from(["lhc", "--max-lines", "0", "*.rs"]).is_err());
  }

  #[test]
  fn test_version_without_patterns() {
    let cli = Cli::try_parse_from(["lhc", "--version"]).expect("arguments should parse");
    assert!(cli.check_args.version);
  }
}
