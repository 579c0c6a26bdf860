//! prime-pages - prime number generator and column-major page printer
//!
//! Generates the first N primes with an incremental odd-multiple sieve and
//! prints them as numbered pages of rows and columns, read column-major.
//!
//! ```
//! use prime_pages::{MemorySink, PageGeometry, PrimeGenerator, TablePagePrinter};
//!
//! let primes = PrimeGenerator::new().generate(10)?;
//! let printer = TablePagePrinter::new(PageGeometry::new(3, 2, "Test")?);
//!
//! let mut sink = MemorySink::new();
//! printer.print_data(&primes, &mut sink)?;
//! assert_eq!(sink.lines()[0], "Test --- Page 1");
//! # Ok::<(), prime_pages::PrimeError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::{PrintOptions, PrintPrimesUseCase, PrintResult};
pub use config::{Config, Verbosity};
pub use domain::ports::{LineSink, MemorySink, WriterSink};
pub use domain::services::{paginate, Page, PrimeGenerator};
pub use domain::value_objects::{PageGeometry, PrimeSequence};
pub use error::{PrimeError, PrimeResult};
pub use presentation::{OutputFormat, RowLayout, TablePagePrinter};
