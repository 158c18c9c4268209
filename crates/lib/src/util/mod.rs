//! Shared utilities.
//!
//! Test doubles for the build-command and configuration seams.

pub mod testutil;
