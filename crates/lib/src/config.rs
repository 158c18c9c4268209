//! User configuration.
//!
//! The configuration is a small JSON file that tells the tool where the engine
//! lives, which game project to work on and where auxiliary toolchains are
//! installed. Orchestrators never read it directly; they go through
//! [`ConfigProvider`] so tests can inject fixed values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::cmake::CmakeOptions;
use crate::consts::{DEFAULT_CMAKE_PROGRAM, DEFAULT_ENGINE_SOURCE_DIR};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse config {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("no game name configured")]
  MissingGameName,

  #[error("path is not valid UTF-8: {}", path.display())]
  NonUtf8Path { path: PathBuf },
}

/// Read access to the values the orchestrators need.
pub trait ConfigProvider {
  /// The engine installation directory, if configured and present on disk.
  fn engine_dir(&self) -> Option<PathBuf>;

  /// Name of the game project, which is also its source directory.
  fn game_name(&self) -> Result<String, ConfigError>;

  /// Directory holding the engine sources.
  fn engine_source_dir(&self) -> PathBuf;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub engine_dir: Option<PathBuf>,
  pub engine_source_dir: Option<PathBuf>,
  pub game_name: Option<String>,
  pub cmake_program: Option<String>,
  pub generator: Option<String>,
  pub android_ndk_dir: Option<PathBuf>,
  pub doxygen_dir: Option<PathBuf>,
}

impl Config {
  /// Load the configuration at `path`.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Load the configuration at `path`, falling back to defaults if the file does not exist.
  pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
    match Self::load(path) {
      Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
        debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Self::default())
      }
      other => other,
    }
  }

  pub fn cmake_program(&self) -> &str {
    self.cmake_program.as_deref().unwrap_or(DEFAULT_CMAKE_PROGRAM)
  }

  /// Options for a [`crate::cmake::CmakeCommand`] driven by this configuration.
  pub fn cmake_options(&self, dry_run: bool) -> CmakeOptions {
    CmakeOptions {
      program: self.cmake_program().to_string(),
      generator: self.generator.clone(),
      android_ndk_dir: self.android_ndk_dir.clone(),
      doxygen_dir: self.doxygen_dir.clone(),
      dry_run,
    }
  }
}

impl ConfigProvider for Config {
  fn engine_dir(&self) -> Option<PathBuf> {
    let dir = self.engine_dir.as_ref()?;
    match dunce::canonicalize(dir) {
      Ok(resolved) if resolved.is_dir() => Some(resolved),
      _ => {
        debug!(path = %dir.display(), "configured engine directory not found");
        None
      }
    }
  }

  fn game_name(&self) -> Result<String, ConfigError> {
    self
      .game_name
      .as_ref()
      .filter(|name| !name.is_empty())
      .cloned()
      .ok_or(ConfigError::MissingGameName)
  }

  fn engine_source_dir(&self) -> PathBuf {
    self
      .engine_source_dir
      .clone()
      .unwrap_or_else(|| PathBuf::from(DEFAULT_ENGINE_SOURCE_DIR))
  }
}
