//! CMake invocation boundary.
//!
//! Orchestrators talk to CMake only through the [`BuildCommand`] trait.
//! [`CmakeCommand`] is the process-backed implementation used by the CLI.

mod args;
mod command;

use std::path::Path;

use thiserror::Error;

pub use args::{CacheFlag, compose_arguments, split_arguments};
pub use command::{CmakeCommand, CmakeOptions, Invocation};

/// Errors raised while running CMake.
#[derive(Debug, Error)]
pub enum CmakeError {
  /// The CMake executable could not be started.
  #[error("failed to run {program}: {source}")]
  Spawn { program: String, source: std::io::Error },

  /// CMake ran but exited unsuccessfully.
  #[error("command failed with exit code {code:?}: {command}")]
  Failed { command: String, code: Option<i32> },

  /// A toolchain directory could not be added to PATH.
  #[error("invalid PATH entry: {0}")]
  JoinPaths(#[from] std::env::JoinPathsError),
}

/// The operations the orchestrators need from a build tool.
pub trait BuildCommand {
  /// Configure `source_dir` into `build_dir`.
  ///
  /// `arguments` is `None` when there are no extra arguments; an empty string is never passed.
  fn configure(&mut self, source_dir: &Path, build_dir: &Path, arguments: Option<&str>) -> Result<(), CmakeError>;

  /// Build the default target with the configuration fixed at configure time.
  fn build(&mut self, build_dir: &Path) -> Result<(), CmakeError>;

  /// Build the default target in `config` (multi-configuration generators).
  fn build_config(&mut self, build_dir: &Path, config: &str) -> Result<(), CmakeError>;

  /// Build `target` with the configuration fixed at configure time.
  fn build_target(&mut self, build_dir: &Path, target: &str) -> Result<(), CmakeError>;

  /// Build `target` in `config` (multi-configuration generators).
  fn build_config_target(&mut self, build_dir: &Path, config: &str, target: &str) -> Result<(), CmakeError>;

  /// Make the Android NDK visible to later invocations.
  fn add_android_ndk_dir_to_path(&mut self);

  /// Make the documentation generator visible to later invocations.
  fn add_doxygen_dir_to_path(&mut self);

  /// Whether the build configuration is picked at build time rather than configure time.
  fn generator_is_multi_config(&self) -> bool;
}

/// Whether `generator` selects build configurations at build time.
///
/// With no explicit generator CMake picks a platform default: Visual Studio on
/// Windows (multi-config) and Makefiles elsewhere (single-config).
pub fn is_multi_config_generator(generator: Option<&str>) -> bool {
  match generator {
    Some(name) => name.starts_with("Visual Studio") || name == "Xcode" || name == "Ninja Multi-Config",
    None => cfg!(windows),
  }
}
