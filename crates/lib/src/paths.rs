use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::{APP_NAME, CONFIG_ENV, CONFIG_FILE_NAME};
use crate::settings::Settings;

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> PathBuf {
  std::env::var("USERPROFILE")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from("."))
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> PathBuf {
  std::env::var("HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from("."))
}

/// Returns the directory for configuration files for the application
#[cfg(windows)]
pub fn config_dir() -> PathBuf {
  std::env::var("APPDATA")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join("AppData").join("Roaming"))
    .join(APP_NAME)
}

/// Returns the directory for configuration files for the application
#[cfg(not(windows))]
pub fn config_dir() -> PathBuf {
  let config_home = std::env::var("XDG_CONFIG_HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join(".config"));
  config_home.join(APP_NAME)
}

/// Returns the configuration file path, honoring `GAMEDIST_CONFIG`.
pub fn default_config_path() -> PathBuf {
  match std::env::var_os(CONFIG_ENV) {
    Some(path) if !path.is_empty() => PathBuf::from(path),
    _ => config_dir().join(CONFIG_FILE_NAME),
  }
}

#[derive(Debug, Error)]
pub enum PathError {
  #[error("failed to resolve source directory {}: {source}", path.display())]
  Canonicalize { path: PathBuf, source: std::io::Error },

  #[error("source directory {} has no name to derive a build directory from", path.display())]
  Unnamed { path: PathBuf },
}

/// Build directory for `base` in the mode selected by `settings`.
///
/// The mode tag is appended to the last path component: `MyGame` becomes
/// `MyGame-dist` in distribution mode and `MyGame-build` in development mode.
/// Bases without a final component (`.`, `..`) are resolved on disk first.
pub fn dist_dir(base: &Path, settings: &Settings) -> Result<PathBuf, PathError> {
  let base = if base.file_name().is_some() {
    base.to_path_buf()
  } else {
    dunce::canonicalize(base).map_err(|source| PathError::Canonicalize {
      path: base.to_path_buf(),
      source,
    })?
  };

  let Some(file_name) = base.file_name() else {
    return Err(PathError::Unnamed { path: base });
  };

  let mut name = OsString::from(file_name);
  name.push("-");
  name.push(settings.mode().dir_tag());
  Ok(base.with_file_name(name))
}
