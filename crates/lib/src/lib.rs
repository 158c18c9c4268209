//! gamedist-lib: Core types and logic for gamedist
//!
//! This crate drives an external CMake executable to configure, build and package
//! either the game engine or a game project:
//! - `Settings`: what to build (engine or game) and in which mode
//! - `ConfigProvider`: engine location, game name and toolchain directories
//! - `BuildCommand`: the CMake invocation boundary
//! - `dist` / `develop`: the sequences of CMake calls for each mode

pub mod cmake;
pub mod config;
pub mod consts;
pub mod develop;
pub mod dist;
pub mod paths;
pub mod settings;

#[cfg(test)]
pub(crate) mod util;
