//! Common test utilities for tcboot CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory and HOME, plus fake `ssh`/`scp`
//! - `TestResult`: captured exit code and output of one run

#[allow(dead_code)]
pub mod env;

pub use env::*;
