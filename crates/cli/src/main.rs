mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gamedist_lib::settings::Mode;

use crate::cmd::{RunArgs, cmd_info, cmd_run};
use crate::output::print_error;

/// gamedist - configure, build and package the engine or a game with CMake
#[derive(Parser)]
#[command(name = "gamedist")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Path to the configuration file (default: $GAMEDIST_CONFIG or the user config dir)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Configure, build and package a release
  Dist(RunArgs),

  /// Configure and build a debug tree
  Build(RunArgs),

  /// Show the resolved configuration
  Info {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let config = cli.config.as_deref();
  let result = match cli.command {
    Commands::Dist(args) => cmd_run(Mode::Distribution, config, args),
    Commands::Build(args) => cmd_run(Mode::Development, config, args),
    Commands::Info { json } => cmd_info(config, json),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
