//! Development mode.
//!
//! Configures and builds a debug tree of the engine or the configured game,
//! without presets and without packaging.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cmake::{BuildCommand, CmakeError, compose_arguments};
use crate::config::ConfigProvider;
use crate::consts::DEBUG_CONFIG;
use crate::dist::{DistError, engine_dir_flag};
use crate::paths::dist_dir;
use crate::settings::{Mode, Settings, Target};

/// Run development mode for `settings.target()`.
///
/// # Panics
///
/// If `settings` is not in development mode or targets the dependency libraries.
pub fn perform(
  cmake: &mut impl BuildCommand,
  settings: &Settings,
  config: &impl ConfigProvider,
) -> Result<(), DistError> {
  assert_eq!(settings.mode(), Mode::Development);
  assert_ne!(settings.target(), Target::Libraries);

  match settings.target() {
    Target::Libraries => {}
    Target::Engine => {
      cmake.add_android_ndk_dir_to_path();
      cmake.add_doxygen_dir_to_path();

      info!("building the engine");

      let source_dir = config.engine_source_dir();
      let build_dir = dist_dir(&source_dir, settings)?;
      cmake.configure(&source_dir, &build_dir, None)?;
      build_debug(cmake, &build_dir)?;
    }
    Target::Game => {
      let game_name = config.game_name()?;
      info!(game = %game_name, "building the game");

      let source_dir = PathBuf::from(&game_name);
      let build_dir = dist_dir(&source_dir, settings)?;
      let flags: Vec<_> = engine_dir_flag(config)?.into_iter().collect();
      cmake.configure(&source_dir, &build_dir, compose_arguments(&flags).as_deref())?;
      build_debug(cmake, &build_dir)?;
    }
  }

  Ok(())
}

fn build_debug(cmake: &mut impl BuildCommand, build_dir: &Path) -> Result<(), CmakeError> {
  if cmake.generator_is_multi_config() {
    cmake.build_config(build_dir, DEBUG_CONFIG)
  } else {
    cmake.build(build_dir)
  }
}
