//! Terminal output for gamedist commands.
//!
//! Status lines go to stdout with a colored marker, errors to stderr.
//! Colors are dropped when the stream is not a terminal.

use std::fmt::Display;
use std::time::Duration;

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
  pub const COMMAND: &str = "$";
}

/// Render an elapsed build time, e.g. `850ms`, `12.4s`, `3m 07s`, `1h 02m`.
pub fn format_elapsed(elapsed: Duration) -> String {
  let secs = elapsed.as_secs();
  match secs {
    0 => format!("{}ms", elapsed.subsec_millis()),
    1..60 => format!("{:.1}s", elapsed.as_secs_f64()),
    60..3600 => format!("{}m {:02}s", secs / 60, secs % 60),
    _ => format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60),
  }
}

pub fn print_success(message: impl Display) {
  println!("{} {}", symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()), message);
}

pub fn print_error(message: impl Display) {
  let message = message.to_string();
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: impl Display) {
  println!("{} {}", symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()), message);
}

/// A command line that was (or would have been) run.
pub fn print_command(command: impl Display) {
  println!("  {} {}", symbols::COMMAND.if_supports_color(Stream::Stdout, |s| s.dimmed()), command);
}

/// An aligned `label: value` line under a heading.
pub fn print_stat(label: &str, value: impl Display) {
  println!(
    "  {:<15} {}",
    format!("{}:", label).if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
