//! Implementation of the `gamedist dist` and `gamedist build` commands.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use gamedist_lib::cmake::CmakeCommand;
use gamedist_lib::settings::{Mode, Settings, Target};
use gamedist_lib::{develop, dist};

use super::load_config;
use crate::output::{format_elapsed, print_command, print_info, print_success};

#[derive(Debug, Args)]
pub struct RunArgs {
  /// What to build
  #[arg(value_enum)]
  pub target: Target,

  /// Print the CMake commands instead of running them
  #[arg(long)]
  pub dry_run: bool,

  /// CMake generator, overriding the configuration
  #[arg(short = 'G', long)]
  pub generator: Option<String>,
}

/// Execute the dist or build command.
///
/// Validates the target for `mode`, loads the configuration and runs the
/// matching sequence of CMake invocations. In dry-run mode the invocations
/// are printed instead of executed.
pub fn cmd_run(mode: Mode, config_path: Option<&Path>, args: RunArgs) -> Result<()> {
  let settings = Settings::new(mode, args.target)?;
  let (_, mut config) = load_config(config_path)?;
  if let Some(generator) = args.generator {
    config.generator = Some(generator);
  }

  let mut cmake = CmakeCommand::new(config.cmake_options(args.dry_run));
  let start = Instant::now();

  let result = match mode {
    Mode::Distribution => dist::perform(&mut cmake, &settings, &config),
    Mode::Development => develop::perform(&mut cmake, &settings, &config),
  };
  result.with_context(|| format!("Failed to {} the {}", verb(mode), settings.target()))?;

  if args.dry_run {
    print_info("Dry run, no commands were executed:");
    for invocation in cmake.invocations() {
      print_command(invocation);
    }
  }

  print_success(format!(
    "{} {} finished in {}",
    settings.target(),
    verb(mode),
    format_elapsed(start.elapsed())
  ));

  Ok(())
}

fn verb(mode: Mode) -> &'static str {
  match mode {
    Mode::Distribution => "distribute",
    Mode::Development => "build",
  }
}
