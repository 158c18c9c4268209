//! Distribution mode.
//!
//! Configures, builds and packages a release of either the engine or the
//! configured game. The sequence of CMake calls is:
//! - toolchain PATH setup (engine only)
//! - `configure` with the distribution preset for the target
//! - release build followed by the `package` target

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::cmake::{BuildCommand, CacheFlag, CmakeError, compose_arguments};
use crate::config::{ConfigError, ConfigProvider};
use crate::consts::{PACKAGE_TARGET, RELEASE_CONFIG};
use crate::paths::{PathError, dist_dir};
use crate::settings::{Mode, Settings, Target};

#[derive(Debug, Error)]
pub enum DistError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Path(#[from] PathError),

  #[error(transparent)]
  Cmake(#[from] CmakeError),
}

/// Engine option preset for developer distributions.
pub fn engine_preset_flag() -> CacheFlag {
  CacheFlag::new("NCINE_OPTIONS_PRESETS", "DevDist")
}

/// Game option preset for binary distributions.
pub fn game_preset_flag() -> CacheFlag {
  CacheFlag::new("PACKAGE_OPTIONS_PRESETS", "BinDist")
}

/// Points a game build at the installed engine, if the engine can be found.
///
/// CMake cache values are text, so an engine path that is not valid UTF-8 is an error.
pub fn engine_dir_flag(config: &impl ConfigProvider) -> Result<Option<CacheFlag>, ConfigError> {
  let Some(dir) = config.engine_dir() else {
    return Ok(None);
  };
  match dir.to_str() {
    Some(value) => Ok(Some(CacheFlag::new("nCine_DIR", value))),
    None => Err(ConfigError::NonUtf8Path { path: dir }),
  }
}

/// Run distribution mode for `settings.target()`.
///
/// # Panics
///
/// If `settings` is not in distribution mode or targets the dependency
/// libraries. [`Settings::new`] rejects the latter before it gets here.
pub fn perform(
  cmake: &mut impl BuildCommand,
  settings: &Settings,
  config: &impl ConfigProvider,
) -> Result<(), DistError> {
  assert_eq!(settings.mode(), Mode::Distribution);
  assert_ne!(settings.target(), Target::Libraries);

  match settings.target() {
    Target::Libraries => {}
    Target::Engine => distribute_engine(cmake, settings, config)?,
    Target::Game => {
      let game_name = config.game_name()?;
      distribute_game(cmake, settings, config, &game_name)?;
    }
  }

  Ok(())
}

fn distribute_engine(
  cmake: &mut impl BuildCommand,
  settings: &Settings,
  config: &impl ConfigProvider,
) -> Result<(), DistError> {
  cmake.add_android_ndk_dir_to_path();
  cmake.add_doxygen_dir_to_path();

  info!("distributing the engine");

  let source_dir = config.engine_source_dir();
  let build_dir = dist_dir(&source_dir, settings)?;

  let arguments = compose_arguments(&[engine_preset_flag()]);

  cmake.configure(&source_dir, &build_dir, arguments.as_deref())?;
  Ok(build_release_and_package(cmake, &build_dir)?)
}

fn distribute_game(
  cmake: &mut impl BuildCommand,
  settings: &Settings,
  config: &impl ConfigProvider,
  game_name: &str,
) -> Result<(), DistError> {
  info!(game = %game_name, "distributing the game");

  let source_dir = PathBuf::from(game_name);
  let build_dir = dist_dir(&source_dir, settings)?;

  let flags: Vec<CacheFlag> = [Some(game_preset_flag()), engine_dir_flag(config)?]
    .into_iter()
    .flatten()
    .collect();
  let arguments = compose_arguments(&flags);

  cmake.configure(&source_dir, &build_dir, arguments.as_deref())?;
  Ok(build_release_and_package(cmake, &build_dir)?)
}

/// Build the release configuration, then the package target.
///
/// Multi-configuration generators need the configuration name on every build
/// invocation; single-configuration generators fixed it at configure time.
fn build_release_and_package(cmake: &mut impl BuildCommand, build_dir: &Path) -> Result<(), CmakeError> {
  if cmake.generator_is_multi_config() {
    cmake.build_config(build_dir, RELEASE_CONFIG)?;
    cmake.build_config_target(build_dir, RELEASE_CONFIG, PACKAGE_TARGET)
  } else {
    cmake.build(build_dir)?;
    cmake.build_target(build_dir, PACKAGE_TARGET)
  }
}
