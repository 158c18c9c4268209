//! Process-backed [`BuildCommand`].

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use super::{BuildCommand, CmakeError, is_multi_config_generator, split_arguments};

/// How to run CMake.
#[derive(Debug, Clone, Default)]
pub struct CmakeOptions {
  /// CMake executable name or path.
  pub program: String,
  /// Generator passed with `-G` at configure time.
  pub generator: Option<String>,
  /// Android NDK root, added to PATH on request.
  pub android_ndk_dir: Option<PathBuf>,
  /// Doxygen installation, added to PATH on request.
  pub doxygen_dir: Option<PathBuf>,
  /// Record invocations without spawning anything.
  pub dry_run: bool,
}

/// One recorded CMake run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: String,
  pub args: Vec<String>,
  /// Directories prepended to PATH for this run.
  pub extra_paths: Vec<PathBuf>,
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      if arg.is_empty() || arg.chars().any(char::is_whitespace) {
        write!(f, " \"{}\"", arg)?;
      } else {
        write!(f, " {}", arg)?;
      }
    }
    Ok(())
  }
}

/// Runs CMake as a child process and waits for it.
#[derive(Debug)]
pub struct CmakeCommand {
  options: CmakeOptions,
  extra_paths: Vec<PathBuf>,
  invocations: Vec<Invocation>,
}

impl CmakeCommand {
  pub fn new(options: CmakeOptions) -> Self {
    Self {
      options,
      extra_paths: Vec::new(),
      invocations: Vec::new(),
    }
  }

  /// Every invocation made so far, in order.
  pub fn invocations(&self) -> &[Invocation] {
    &self.invocations
  }

  /// Directories currently prepended to PATH.
  pub fn extra_paths(&self) -> &[PathBuf] {
    &self.extra_paths
  }

  fn add_to_path(&mut self, label: &str, dir: Option<PathBuf>) {
    let Some(dir) = dir else {
      debug!(tool = label, "no directory configured, PATH unchanged");
      return;
    };

    if !dir.is_dir() {
      warn!(tool = label, path = %dir.display(), "directory not found, PATH unchanged");
      return;
    }

    if !self.extra_paths.contains(&dir) {
      debug!(tool = label, path = %dir.display(), "adding directory to PATH");
      self.extra_paths.push(dir);
    }
  }

  fn run(&mut self, args: Vec<String>) -> Result<(), CmakeError> {
    let invocation = Invocation {
      program: self.options.program.clone(),
      args,
      extra_paths: self.extra_paths.clone(),
    };
    info!(cmd = %invocation, "executing command");
    self.invocations.push(invocation.clone());

    if self.options.dry_run {
      return Ok(());
    }

    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);

    if !invocation.extra_paths.is_empty() {
      let existing_path = env::var_os("PATH").unwrap_or_default();
      let mut paths = invocation.extra_paths.clone();
      paths.extend(env::split_paths(&existing_path));
      command.env("PATH", env::join_paths(paths)?);
    }

    debug!(program = %invocation.program, "spawning process");

    let status = command.status().map_err(|source| CmakeError::Spawn {
      program: invocation.program.clone(),
      source,
    })?;

    if !status.success() {
      return Err(CmakeError::Failed {
        command: invocation.to_string(),
        code: status.code(),
      });
    }

    Ok(())
  }
}

fn path_arg(path: &Path) -> String {
  path.to_string_lossy().into_owned()
}

fn build_args(build_dir: &Path, config: Option<&str>, target: Option<&str>) -> Vec<String> {
  let mut args = vec!["--build".to_string(), path_arg(build_dir)];
  if let Some(config) = config {
    args.push("--config".to_string());
    args.push(config.to_string());
  }
  if let Some(target) = target {
    args.push("--target".to_string());
    args.push(target.to_string());
  }
  args
}

impl BuildCommand for CmakeCommand {
  fn configure(&mut self, source_dir: &Path, build_dir: &Path, arguments: Option<&str>) -> Result<(), CmakeError> {
    let mut args = vec![
      "-S".to_string(),
      path_arg(source_dir),
      "-B".to_string(),
      path_arg(build_dir),
    ];
    if let Some(generator) = &self.options.generator {
      args.push("-G".to_string());
      args.push(generator.clone());
    }
    if let Some(arguments) = arguments {
      args.extend(split_arguments(arguments));
    }
    self.run(args)
  }

  fn build(&mut self, build_dir: &Path) -> Result<(), CmakeError> {
    self.run(build_args(build_dir, None, None))
  }

  fn build_config(&mut self, build_dir: &Path, config: &str) -> Result<(), CmakeError> {
    self.run(build_args(build_dir, Some(config), None))
  }

  fn build_target(&mut self, build_dir: &Path, target: &str) -> Result<(), CmakeError> {
    self.run(build_args(build_dir, None, Some(target)))
  }

  fn build_config_target(&mut self, build_dir: &Path, config: &str, target: &str) -> Result<(), CmakeError> {
    self.run(build_args(build_dir, Some(config), Some(target)))
  }

  fn add_android_ndk_dir_to_path(&mut self) {
    let dir = self.options.android_ndk_dir.clone();
    self.add_to_path("android-ndk", dir);
  }

  /// Doxygen archives ship the executable in `bin/`; plain installs do not.
  fn add_doxygen_dir_to_path(&mut self) {
    let dir = self.options.doxygen_dir.as_ref().map(|dir| {
      let bin = dir.join("bin");
      if bin.is_dir() { bin } else { dir.clone() }
    });
    self.add_to_path("doxygen", dir);
  }

  fn generator_is_multi_config(&self) -> bool {
    is_multi_config_generator(self.options.generator.as_deref())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use tempfile::TempDir;

  fn dry_run(generator: Option<&str>) -> CmakeCommand {
    CmakeCommand::new(CmakeOptions {
      program: "cmake".to_string(),
      generator: generator.map(str::to_string),
      dry_run: true,
      ..CmakeOptions::default()
    })
  }

  fn args_of(cmake: &CmakeCommand, index: usize) -> Vec<&str> {
    cmake.invocations()[index].args.iter().map(String::as_str).collect()
  }

  #[test]
  fn configure_without_arguments() {
    let mut cmake = dry_run(None);
    cmake.configure(Path::new("MyGame"), Path::new("MyGame-dist"), None).unwrap();

    assert_eq!(args_of(&cmake, 0), vec!["-S", "MyGame", "-B", "MyGame-dist"]);
  }

  #[test]
  fn configure_passes_generator_and_arguments() {
    let mut cmake = dry_run(Some("Ninja Multi-Config"));
    cmake
      .configure(
        Path::new("nCine"),
        Path::new("nCine-dist"),
        Some("-D NCINE_OPTIONS_PRESETS=DevDist"),
      )
      .unwrap();

    assert_eq!(
      args_of(&cmake, 0),
      vec![
        "-S",
        "nCine",
        "-B",
        "nCine-dist",
        "-G",
        "Ninja Multi-Config",
        "-D",
        "NCINE_OPTIONS_PRESETS=DevDist"
      ]
    );
  }

  #[test]
  fn build_variants() {
    let mut cmake = dry_run(None);
    let dir = Path::new("out");
    cmake.build(dir).unwrap();
    cmake.build_config(dir, "release").unwrap();
    cmake.build_target(dir, "package").unwrap();
    cmake.build_config_target(dir, "release", "package").unwrap();

    assert_eq!(args_of(&cmake, 0), vec!["--build", "out"]);
    assert_eq!(args_of(&cmake, 1), vec!["--build", "out", "--config", "release"]);
    assert_eq!(args_of(&cmake, 2), vec!["--build", "out", "--target", "package"]);
    assert_eq!(
      args_of(&cmake, 3),
      vec!["--build", "out", "--config", "release", "--target", "package"]
    );
  }

  #[test]
  fn invocation_display_quotes_spaces() {
    let invocation = Invocation {
      program: "cmake".to_string(),
      args: vec!["-G".to_string(), "Unix Makefiles".to_string()],
      extra_paths: Vec::new(),
    };
    assert_eq!(invocation.to_string(), "cmake -G \"Unix Makefiles\"");
  }

  #[test]
  fn multi_config_follows_generator() {
    assert!(dry_run(Some("Xcode")).generator_is_multi_config());
    assert!(!dry_run(Some("Ninja")).generator_is_multi_config());
  }

  #[test]
  fn toolchain_dirs_are_added_once() {
    let temp = TempDir::new().unwrap();
    let ndk = temp.path().join("ndk");
    let doxygen = temp.path().join("doxygen");
    std::fs::create_dir_all(&ndk).unwrap();
    std::fs::create_dir_all(doxygen.join("bin")).unwrap();

    let mut cmake = CmakeCommand::new(CmakeOptions {
      program: "cmake".to_string(),
      android_ndk_dir: Some(ndk.clone()),
      doxygen_dir: Some(doxygen.clone()),
      dry_run: true,
      ..CmakeOptions::default()
    });

    cmake.add_android_ndk_dir_to_path();
    cmake.add_doxygen_dir_to_path();
    cmake.add_android_ndk_dir_to_path();

    assert_eq!(cmake.extra_paths(), &[ndk, doxygen.join("bin")]);

    cmake.build(Path::new("out")).unwrap();
    assert_eq!(cmake.invocations()[0].extra_paths.len(), 2);
  }

  #[test]
  fn missing_toolchain_dirs_are_skipped() {
    let temp = TempDir::new().unwrap();
    let mut cmake = CmakeCommand::new(CmakeOptions {
      program: "cmake".to_string(),
      android_ndk_dir: Some(temp.path().join("missing")),
      dry_run: true,
      ..CmakeOptions::default()
    });

    cmake.add_android_ndk_dir_to_path();
    cmake.add_doxygen_dir_to_path();

    assert!(cmake.extra_paths().is_empty());
  }

  #[test]
  #[serial]
  fn spawn_failure_is_reported() {
    let mut cmake = CmakeCommand::new(CmakeOptions {
      program: "/nonexistent/cmake-binary".to_string(),
      ..CmakeOptions::default()
    });

    let result = cmake.build(Path::new("out"));

    assert!(matches!(result, Err(CmakeError::Spawn { .. })));
  }

  #[cfg(unix)]
  mod process {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Write an executable stand-in for cmake that runs `body`.
    ///
    /// Callers are `#[serial]` so no concurrent fork holds the script open for writing.
    fn fake_cmake(dir: &Path, body: &str) -> String {
      let path = dir.join("fake-cmake");
      std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
      std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
      path.to_string_lossy().into_owned()
    }

    #[test]
    #[serial]
    fn arguments_reach_the_process() {
      let temp = TempDir::new().unwrap();
      let log = temp.path().join("args.log");
      let program = fake_cmake(temp.path(), &format!("printf '%s\\n' \"$@\" > '{}'", log.display()));

      let mut cmake = CmakeCommand::new(CmakeOptions {
        program,
        ..CmakeOptions::default()
      });
      cmake
        .configure(
          Path::new("MyGame"),
          Path::new("MyGame-dist"),
          Some("-D nCine_DIR=\"/opt/My Engine\""),
        )
        .unwrap();

      let logged = std::fs::read_to_string(&log).unwrap();
      assert_eq!(
        logged.lines().collect::<Vec<_>>(),
        vec!["-S", "MyGame", "-B", "MyGame-dist", "-D", "nCine_DIR=/opt/My Engine"]
      );
    }

    #[test]
    #[serial]
    fn extra_paths_are_prepended() {
      let temp = TempDir::new().unwrap();
      let ndk = temp.path().join("ndk");
      std::fs::create_dir_all(&ndk).unwrap();
      let log = temp.path().join("path.log");
      let program = fake_cmake(temp.path(), &format!("echo \"$PATH\" > '{}'", log.display()));

      let mut cmake = CmakeCommand::new(CmakeOptions {
        program,
        android_ndk_dir: Some(ndk.clone()),
        ..CmakeOptions::default()
      });
      cmake.add_android_ndk_dir_to_path();
      cmake.build(Path::new("out")).unwrap();

      let logged = std::fs::read_to_string(&log).unwrap();
      assert!(logged.starts_with(&ndk.to_string_lossy().into_owned()));
    }

    #[test]
    #[serial]
    fn non_zero_exit_is_failure() {
      let temp = TempDir::new().unwrap();
      let program = fake_cmake(temp.path(), "exit 3");

      let mut cmake = CmakeCommand::new(CmakeOptions {
        program,
        ..CmakeOptions::default()
      });

      let result = cmake.build_target(Path::new("out"), "package");

      assert!(matches!(result, Err(CmakeError::Failed { code: Some(3), .. })));
      assert_eq!(cmake.invocations().len(), 1);
    }
  }
}
