//! Implementation of the `gamedist info` command.

use std::path::Path;

use anyhow::Result;

use gamedist_lib::cmake::is_multi_config_generator;
use gamedist_lib::config::ConfigProvider;

use super::load_config;
use crate::output::{print_info, print_json, print_stat};

pub fn cmd_info(config_path: Option<&Path>, json: bool) -> Result<()> {
  let (path, config) = load_config(config_path)?;

  let engine_dir = config.engine_dir();
  let game_name = config.game_name().ok();
  let multi_config = is_multi_config_generator(config.generator.as_deref());

  if json {
    let json_output = serde_json::json!({
      "config_path": path,
      "config_found": path.exists(),
      "engine_source_dir": config.engine_source_dir(),
      "engine_dir": engine_dir,
      "game_name": game_name,
      "cmake_program": config.cmake_program(),
      "generator": config.generator,
      "multi_config": multi_config,
    });
    return print_json(&json_output);
  }

  print_info(format!("Configuration: {}", path.display()));
  if !path.exists() {
    print_stat("Status", "not found, using defaults");
  }
  println!();
  print_stat("Engine sources", config.engine_source_dir().display());
  match &engine_dir {
    Some(dir) => print_stat("Engine dir", dir.display()),
    None => print_stat("Engine dir", "not found"),
  }
  print_stat("Game", game_name.as_deref().unwrap_or("not set"));
  print_stat("CMake", config.cmake_program());
  print_stat("Generator", config.generator.as_deref().unwrap_or("default"));
  print_stat("Multi-config", if multi_config { "yes" } else { "no" });

  Ok(())
}
