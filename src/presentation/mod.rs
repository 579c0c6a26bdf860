//! Presentation Layer
//!
//! Renders prime sequences for people (paged text) and for scripts (NDJSON).
//!
//! ## Structure
//!
//! - `table_printer` - Column-major page printer
//! - `events` - NDJSON event types
//! - `output` - Output format selection

pub mod events;
pub mod output;
pub mod table_printer;

pub use output::OutputFormat;
pub use table_printer::{RowLayout, TablePagePrinter, DEFAULT_COLUMN_WIDTH};
