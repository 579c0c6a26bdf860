//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.

pub mod line_sink;

pub use line_sink::{LineSink, MemorySink, WriterSink};
