//! CMake cache arguments.
//!
//! Orchestrators describe the `-D NAME=VALUE` entries they want as
//! [`CacheFlag`] values and join them into a single argument string.
//! [`split_arguments`] turns that string back into a process argument vector.

use std::fmt;

/// A single `-D NAME=VALUE` cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheFlag {
  pub name: String,
  pub value: String,
}

impl CacheFlag {
  pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value: value.into(),
    }
  }
}

impl fmt::Display for CacheFlag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let needs_quotes = self
      .value
      .chars()
      .any(|c| c.is_whitespace() || c == '"' || c == '\\');
    if !needs_quotes {
      return write!(f, "-D {}={}", self.name, self.value);
    }

    write!(f, "-D {}=\"", self.name)?;
    for c in self.value.chars() {
      if c == '"' || c == '\\' {
        write!(f, "\\")?;
      }
      write!(f, "{}", c)?;
    }
    write!(f, "\"")
  }
}

/// Join flags into one argument string.
///
/// Returns `None` when there is nothing to pass, never an empty string.
pub fn compose_arguments(flags: &[CacheFlag]) -> Option<String> {
  if flags.is_empty() {
    return None;
  }
  let rendered: Vec<String> = flags.iter().map(ToString::to_string).collect();
  Some(rendered.join(" "))
}

/// Split an argument string on whitespace, keeping double-quoted runs together.
///
/// Inside quotes `\"` and `\\` stand for a literal quote and backslash; any
/// other backslash is kept as is.
pub fn split_arguments(arguments: &str) -> Vec<String> {
  let mut tokens = Vec::new();
  let mut current = String::new();
  let mut in_token = false;
  let mut quoted = false;
  let mut chars = arguments.chars().peekable();

  while let Some(c) = chars.next() {
    match c {
      '\\' if quoted && matches!(chars.peek(), Some('"' | '\\')) => {
        if let Some(escaped) = chars.next() {
          current.push(escaped);
        }
      }
      '"' => {
        quoted = !quoted;
        in_token = true;
      }
      c if c.is_whitespace() && !quoted => {
        if in_token {
          tokens.push(std::mem::take(&mut current));
          in_token = false;
        }
      }
      c => {
        current.push(c);
        in_token = true;
      }
    }
  }
  if in_token {
    tokens.push(current);
  }

  tokens
}
