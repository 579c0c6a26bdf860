//! Print Primes Use Case
//!
//! Generates the first N primes and renders them as pages, either as text
//! through [`TablePagePrinter`] or as NDJSON events.

use std::time::{Duration, Instant};

use crate::domain::ports::LineSink;
use crate::domain::services::{paginate, PrimeGenerator};
use crate::domain::value_objects::{
    PageGeometry, PrimeSequence, DEFAULT_COLUMNS_PER_PAGE, DEFAULT_ROWS_PER_PAGE,
};
use crate::error::{PrimeError, PrimeResult};
use crate::presentation::events::{write_typed_event, CompleteEvent, PageEvent, StartEvent};
use crate::presentation::{OutputFormat, RowLayout, TablePagePrinter, DEFAULT_COLUMN_WIDTH};

/// Default number of primes to print
pub const DEFAULT_COUNT: i64 = 1000;

/// Placeholder replaced by the prime count in a custom header
pub const COUNT_PLACEHOLDER: &str = "{count}";

const COMMAND: &str = "print";

/// Options for the print operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Number of primes to generate
    pub count: i64,
    pub rows_per_page: i64,
    pub columns_per_page: i64,
    /// Page header; `None` uses "The first {count} prime numbers"
    pub header: Option<String>,
    pub layout: RowLayout,
    /// Cell width for the aligned layout
    pub column_width: usize,
    pub format: OutputFormat,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            columns_per_page: DEFAULT_COLUMNS_PER_PAGE,
            header: None,
            layout: RowLayout::default(),
            column_width: DEFAULT_COLUMN_WIDTH,
            format: OutputFormat::default(),
        }
    }
}

impl PrintOptions {
    /// The page header with `{count}` substituted
    pub fn resolved_header(&self) -> String {
        match &self.header {
            Some(header) => header.replace(COUNT_PLACEHOLDER, &self.count.to_string()),
            None => format!("The first {} prime numbers", self.count),
        }
    }
}

/// Result of the print operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintResult {
    /// Number of primes printed
    pub count: usize,
    /// Number of pages printed
    pub pages: usize,
    /// Largest prime printed
    pub largest: Option<u64>,
    /// Time spent generating the primes
    pub generation_time: Duration,
}

/// Print Primes Use Case
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintPrimesUseCase {
    generator: PrimeGenerator,
}

impl PrintPrimesUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific generator (for example one with a lower ceiling)
    pub fn with_generator(generator: PrimeGenerator) -> Self {
        Self { generator }
    }

    /// Generate and print the primes described by `options`.
    ///
    /// Geometry and width are validated before any prime is generated, so
    /// invalid options never cost a generation run. Nothing is written to
    /// the sink unless generation succeeds.
    pub fn execute(
        &self,
        options: &PrintOptions,
        sink: &mut impl LineSink,
    ) -> PrimeResult<PrintResult> {
        let geometry = PageGeometry::new(
            options.rows_per_page,
            options.columns_per_page,
            options.resolved_header(),
        )?;
        let printer = TablePagePrinter::new(geometry)
            .with_layout(options.layout)
            .with_column_width(options.column_width)?;

        let started = Instant::now();
        let primes = self.generator.generate(options.count)?;
        let generation_time = started.elapsed();

        let pages = printer.geometry().page_count(primes.len());
        match options.format {
            OutputFormat::Text => printer.print_data(&primes, sink)?,
            OutputFormat::Json => write_json(&primes, printer.geometry(), generation_time, sink)
                .map_err(PrimeError::Sink)?,
        }
        sink.flush().map_err(PrimeError::Sink)?;

        Ok(PrintResult {
            count: primes.len(),
            pages,
            largest: primes.largest(),
            generation_time,
        })
    }
}

fn write_json(
    primes: &PrimeSequence,
    geometry: &PageGeometry,
    generation_time: Duration,
    sink: &mut impl LineSink,
) -> std::io::Result<()> {
    write_typed_event(sink, &StartEvent::new(COMMAND))?;

    let mut pages = 0;
    for page in paginate(primes, geometry) {
        write_typed_event(sink, &PageEvent::from_page(&page, geometry.header()))?;
        pages += 1;
    }

    let duration_ms = u64::try_from(generation_time.as_millis()).unwrap_or(u64::MAX);
    let complete = CompleteEvent::success(COMMAND, primes.len(), pages)
        .with_largest(primes.largest())
        .with_duration(duration_ms);
    write_typed_event(sink, &complete)
}
