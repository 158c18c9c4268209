mod info;
mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use gamedist_lib::config::Config;
use gamedist_lib::paths::default_config_path;

pub use info::cmd_info;
pub use run::{RunArgs, cmd_run};

/// Resolve the configuration path and load it, tolerating a missing file.
fn load_config(path: Option<&Path>) -> Result<(PathBuf, Config)> {
  let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
  let config = Config::load_or_default(&path).context("Failed to load configuration")?;
  debug!(path = %path.display(), "configuration loaded");
  Ok((path, config))
}
