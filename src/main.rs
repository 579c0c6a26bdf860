//! prime-pages CLI - print the first N primes as column-major pages
//!
//! Usage: prime-pages [--count N] [--rows R] [--columns C] [--header TEXT]
//!
//! Defaults: 1000 primes, 50 rows x 4 columns per page, header
//! "The first 1000 prime numbers".

mod cli;
mod ui;

use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use prime_pages::{config, OutputFormat, PrintPrimesUseCase, Verbosity, WriterSink};
use ui::diagnostics::Diagnostics;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let loaded = config::load_layered(cli.config.as_deref(), &project_root)?;

    let verbosity = Verbosity::from_flags(loaded.config.output.verbosity, cli.verbose, cli.quiet);
    let diagnostics = Diagnostics::new(verbosity);
    diagnostics.report_config(&loaded);

    let mut options = loaded
        .config
        .print_options(OutputFormat::from_json_flag(cli.json));
    cli.apply_to(&mut options);
    diagnostics.report_options(&options);

    let stdout = io::stdout().lock();
    let mut sink = WriterSink::new(BufWriter::new(stdout));
    let result = PrintPrimesUseCase::new().execute(&options, &mut sink)?;

    diagnostics.report_result(&result);
    Ok(())
}
