//! # Logging Module
//!
//! Output plumbing shared by the library and the `lhc` binary.
//!
//! Two channels exist. Result lines, the summary and [`info_log!`] messages
//! are written to stdout, and disappear in quiet mode. Diagnostics go to
//! stderr: [`verbose_log!`] for `-v` chatter about config discovery and
//! skipped paths, and `tracing` events for everything else, filtered by
//! [`init_tracing`].
//!
//! ```rust
//! use lhc::logging::{ColorMode, is_verbose, set_verbose};
//! use lhc::verbose_log;
//!
//! ColorMode::Never.apply();
//! set_verbose();
//! assert!(is_verbose());
//!
//! verbose_log!("Using directory config: {}", ".lhc.toml");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// `eprintln!` that only fires under `-v`.
#[macro_export]
macro_rules! verbose_log {
  ($($arg:tt)*) => {
    if $crate::logging::is_verbose() {
      eprintln!($($arg)*);
    }
  };
}

/// Highlighted stdout message, suppressed by `-q`.
#[macro_export]
macro_rules! info_log {
  ($($arg:tt)*) => {
    if !$crate::logging::is_quiet() {
      $crate::logging::print_info_log(&format!($($arg)*));
    }
  };
}

/// Writes `message` to stdout in yellow when the terminal allows it.
/// Called by [`info_log!`]; the quiet check happens there.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
