//! Test utilities for gamedist-lib.
//!
//! In-memory stand-ins for [`BuildCommand`] and [`ConfigProvider`] so the
//! orchestrators can be checked without a CMake installation.

use std::path::{Path, PathBuf};

use crate::cmake::{BuildCommand, CmakeError};
use crate::config::{ConfigError, ConfigProvider};

/// A call made on a [`RecordingBuildCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  AddAndroidNdkDirToPath,
  AddDoxygenDirToPath,
  Configure {
    source_dir: PathBuf,
    build_dir: PathBuf,
    arguments: Option<String>,
  },
  Build(PathBuf),
  BuildConfig(PathBuf, String),
  BuildTarget(PathBuf, String),
  BuildConfigTarget(PathBuf, String, String),
}

/// Records every call; optionally fails the configure step.
#[derive(Debug, Default)]
pub struct RecordingBuildCommand {
  pub multi_config: bool,
  pub fail_configure: bool,
  pub calls: Vec<Call>,
}

impl RecordingBuildCommand {
  pub fn new(multi_config: bool) -> Self {
    Self {
      multi_config,
      ..Self::default()
    }
  }

  /// Calls that run the build tool, skipping PATH setup.
  pub fn tool_calls(&self) -> Vec<Call> {
    self
      .calls
      .iter()
      .filter(|call| !matches!(call, Call::AddAndroidNdkDirToPath | Call::AddDoxygenDirToPath))
      .cloned()
      .collect()
  }
}

impl BuildCommand for RecordingBuildCommand {
  fn configure(&mut self, source_dir: &Path, build_dir: &Path, arguments: Option<&str>) -> Result<(), CmakeError> {
    self.calls.push(Call::Configure {
      source_dir: source_dir.to_path_buf(),
      build_dir: build_dir.to_path_buf(),
      arguments: arguments.map(str::to_string),
    });
    if self.fail_configure {
      return Err(CmakeError::Failed {
        command: "cmake".to_string(),
        code: Some(1),
      });
    }
    Ok(())
  }

  fn build(&mut self, build_dir: &Path) -> Result<(), CmakeError> {
    self.calls.push(Call::Build(build_dir.to_path_buf()));
    Ok(())
  }

  fn build_config(&mut self, build_dir: &Path, config: &str) -> Result<(), CmakeError> {
    self.calls.push(Call::BuildConfig(build_dir.to_path_buf(), config.to_string()));
    Ok(())
  }

  fn build_target(&mut self, build_dir: &Path, target: &str) -> Result<(), CmakeError> {
    self.calls.push(Call::BuildTarget(build_dir.to_path_buf(), target.to_string()));
    Ok(())
  }

  fn build_config_target(&mut self, build_dir: &Path, config: &str, target: &str) -> Result<(), CmakeError> {
    self.calls.push(Call::BuildConfigTarget(
      build_dir.to_path_buf(),
      config.to_string(),
      target.to_string(),
    ));
    Ok(())
  }

  fn add_android_ndk_dir_to_path(&mut self) {
    self.calls.push(Call::AddAndroidNdkDirToPath);
  }

  fn add_doxygen_dir_to_path(&mut self) {
    self.calls.push(Call::AddDoxygenDirToPath);
  }

  fn generator_is_multi_config(&self) -> bool {
    self.multi_config
  }
}

/// Fixed configuration values.
#[derive(Debug, Clone)]
pub struct StaticConfig {
  pub engine_dir: Option<PathBuf>,
  pub game_name: Option<String>,
  pub engine_source_dir: PathBuf,
}

impl StaticConfig {
  pub fn game(name: &str) -> Self {
    Self {
      engine_dir: None,
      game_name: Some(name.to_string()),
      engine_source_dir: PathBuf::from("nCine"),
    }
  }

  pub fn with_engine_dir(mut self, dir: &str) -> Self {
    self.engine_dir = Some(PathBuf::from(dir));
    self
  }
}

impl ConfigProvider for StaticConfig {
  fn engine_dir(&self) -> Option<PathBuf> {
    self.engine_dir.clone()
  }

  fn game_name(&self) -> Result<String, ConfigError> {
    self.game_name.clone().ok_or(ConfigError::MissingGameName)
  }

  fn engine_source_dir(&self) -> PathBuf {
    self.engine_source_dir.clone()
  }
}
