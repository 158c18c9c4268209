//! Run settings: which target to build and in which mode.

use std::fmt;

use clap::ValueEnum;
use thiserror::Error;

/// How the target is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
  /// Debug build tree for day to day work.
  Development,
  /// Packaged release build.
  Distribution,
}

impl Mode {
  /// Tag appended to the source directory name to form the build directory.
  pub fn dir_tag(self) -> &'static str {
    match self {
      Mode::Development => "build",
      Mode::Distribution => "dist",
    }
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Mode::Development => write!(f, "development"),
      Mode::Distribution => write!(f, "distribution"),
    }
  }
}

/// What is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Target {
  /// Third-party dependency libraries.
  #[value(name = "libs")]
  Libraries,
  /// The game engine itself.
  Engine,
  /// The game project named in the configuration.
  Game,
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Target::Libraries => write!(f, "libs"),
      Target::Engine => write!(f, "engine"),
      Target::Game => write!(f, "game"),
    }
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
  #[error("target '{target}' is not supported in {mode} mode")]
  UnsupportedTarget { mode: Mode, target: Target },
}

/// Validated, immutable settings for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
  mode: Mode,
  target: Target,
}

impl Settings {
  /// Validate a mode/target pair.
  ///
  /// Dependency libraries are not built by this tool, so `Target::Libraries`
  /// is rejected in every mode.
  pub fn new(mode: Mode, target: Target) -> Result<Self, SettingsError> {
    if target == Target::Libraries {
      return Err(SettingsError::UnsupportedTarget { mode, target });
    }
    Ok(Self { mode, target })
  }

  pub fn mode(&self) -> Mode {
    self.mode
  }

  pub fn target(&self) -> Target {
    self.target
  }

  /// Settings that skip validation, for exercising the orchestrators' own checks.
  #[cfg(test)]
  pub(crate) fn unchecked(mode: Mode, target: Target) -> Self {
    Self { mode, target }
  }
}
