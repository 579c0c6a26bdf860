//! Terminal-facing helpers for the binary: diagnostics and error reporting.

pub mod diagnostics;
pub mod error;
