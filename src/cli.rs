//! CLI Argument Parsing
//!
//! A single entry point: print the first N primes as pages. Every flag is
//! optional and overrides the configuration file and environment.

use std::path::PathBuf;

use clap::Parser;
use prime_pages::{PrintOptions, RowLayout};

/// prime-pages - print the first N primes as column-major pages
#[derive(Parser, Debug)]
#[command(name = "prime-pages")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of primes to print [default: 1000]
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Rows per page [default: 50]
    #[arg(short, long, allow_negative_numbers = true)]
    pub rows: Option<i64>,

    /// Columns per page [default: 4]
    #[arg(short, long, allow_negative_numbers = true)]
    pub columns: Option<i64>,

    /// Page header; "{count}" is replaced by the number of primes
    #[arg(long)]
    pub header: Option<String>,

    /// Row layout: "stacked" (one value per line) or "aligned" (one row per line)
    #[arg(long)]
    pub layout: Option<RowLayout>,

    /// Cell width for the aligned layout [default: 10]
    #[arg(long)]
    pub width: Option<usize>,

    /// Configuration file (default: ./prime-pages.toml, then the user config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of text pages
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress diagnostics; only pages and errors are printed
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Overlay the flags that were given onto `options`
    pub fn apply_to(&self, options: &mut PrintOptions) {
        if let Some(count) = self.count {
            options.count = count;
        }
        if let Some(rows) = self.rows {
            options.rows_per_page = rows;
        }
        if let Some(columns) = self.columns {
            options.columns_per_page = columns;
        }
        if let Some(header) = &self.header {
            options.header = Some(header.clone());
        }
        if let Some(layout) = self.layout {
            options.layout = layout;
        }
        if let Some(width) = self.width {
            options.column_width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["prime-pages"]).unwrap();
        assert_eq!(cli.count, None);
        assert_eq!(cli.rows, None);
        assert_eq!(cli.columns, None);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_geometry() {
        let cli = Cli::try_parse_from([
            "prime-pages",
            "--count",
            "10",
            "--rows",
            "3",
            "--columns",
            "2",
            "--header",
            "Test",
        ])
        .unwrap();

        assert_eq!(cli.count, Some(10));
        assert_eq!(cli.rows, Some(3));
        assert_eq!(cli.columns, Some(2));
        assert_eq!(cli.header.as_deref(), Some("Test"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from(["prime-pages", "-n", "5", "-r", "2", "-c", "1"]).unwrap();
        assert_eq!(cli.count, Some(5));
        assert_eq!(cli.rows, Some(2));
        assert_eq!(cli.columns, Some(1));
    }

    #[test]
    fn test_cli_accepts_negative_count() {
        let cli = Cli::try_parse_from(["prime-pages", "--count", "-1"]).unwrap();
        assert_eq!(cli.count, Some(-1));
    }

    #[test]
    fn test_cli_parse_layout() {
        let cli = Cli::try_parse_from(["prime-pages", "--layout", "aligned", "--width", "6"])
            .unwrap();
        assert_eq!(cli.layout, Some(RowLayout::Aligned));
        assert_eq!(cli.width, Some(6));

        assert!(Cli::try_parse_from(["prime-pages", "--layout", "grid"]).is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["prime-pages", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["prime-pages", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_apply_to_overrides_only_given_flags() {
        let cli = Cli::try_parse_from(["prime-pages", "--count", "7", "--layout", "aligned"])
            .unwrap();
        let mut options = PrintOptions {
            rows_per_page: 9,
            ..PrintOptions::default()
        };

        cli.apply_to(&mut options);

        assert_eq!(options.count, 7);
        assert_eq!(options.rows_per_page, 9);
        assert_eq!(options.columns_per_page, 4);
        assert_eq!(options.layout, RowLayout::Aligned);
    }
}
