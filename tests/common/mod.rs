//! Common test utilities for prime-pages CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories
//! - `TestResult`: captured output of one CLI run

pub mod env;

pub use env::*;
