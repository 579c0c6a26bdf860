//! Verbosity-gated diagnostics on stderr.
//!
//! Stdout carries only pages (or NDJSON events), so everything here goes
//! to stderr and is filtered by [`Verbosity`].

use std::fmt::Display;

use prime_pages::config::{ConfigWarning, LoadedConfig};
use prime_pages::{PrintOptions, PrintResult, Verbosity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostics {
    verbosity: Verbosity,
}

impl Diagnostics {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Shown unless quiet
    pub fn warn(&self, message: impl Display) {
        self.emit(Verbosity::Normal, format!("⚠ {}", message));
    }

    /// Shown with -v
    pub fn info(&self, message: impl Display) {
        self.emit(Verbosity::Verbose, format!("[INFO] {}", message));
    }

    /// Shown with -vv
    pub fn debug(&self, message: impl Display) {
        self.emit(Verbosity::Debug, format!("[DEBUG] {}", message));
    }

    pub fn report_config(&self, loaded: &LoadedConfig) {
        for path in &loaded.searched {
            self.debug(format_args!("config candidate: {}", path.display()));
        }
        match &loaded.source {
            Some(path) => self.info(format_args!("using config {}", path.display())),
            None => self.info("no config file found, using defaults"),
        }
        for warning in &loaded.warnings {
            for line in config_warning_lines(warning) {
                self.warn(line);
            }
        }
    }

    pub fn report_options(&self, options: &PrintOptions) {
        self.info(format_args!(
            "printing {} primes, {} rows x {} columns per page, {} layout",
            options.count, options.rows_per_page, options.columns_per_page, options.layout
        ));
    }

    pub fn report_result(&self, result: &PrintResult) {
        let largest = result
            .largest
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        self.info(format_args!(
            "generated {} primes (largest {}) in {} ms, {} pages",
            result.count,
            largest,
            result.generation_time.as_millis(),
            result.pages
        ));
    }

    fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    fn emit(&self, level: Verbosity, line: String) {
        if self.enabled(level) {
            eprintln!("{}", line);
        }
    }
}

fn config_warning_lines(warning: &ConfigWarning) -> Vec<String> {
    let mut lines = Vec::new();
    match warning.line {
        Some(line) => lines.push(format!(
            "Unknown config key '{}' in {}:{}",
            warning.key,
            warning.file.display(),
            line
        )),
        None => lines.push(format!(
            "Unknown config key '{}' in {}",
            warning.key,
            warning.file.display()
        )),
    }
    if let Some(suggestion) = &warning.suggestion {
        lines.push(format!("  Did you mean '{}'?", suggestion));
    }
    lines
}
