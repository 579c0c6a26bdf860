//! NDJSON event types for machine-readable output.
//!
//! Every line written in JSON mode is one of these events, so consumers can
//! dispatch on the `event` field.

use std::io;

use serde::Serialize;

use crate::domain::ports::LineSink;
use crate::domain::services::Page;

/// Event emitted before any page.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One printed page, non-empty rows in column-major reading order.
#[derive(Debug, Clone, Serialize)]
pub struct PageEvent<'a> {
    pub event: &'static str,
    pub number: usize,
    pub header: &'a str,
    pub rows: Vec<Vec<u64>>,
}

impl<'a> PageEvent<'a> {
    pub fn from_page(page: &Page<'_>, header: &'a str) -> Self {
        Self {
            event: "page",
            number: page.number(),
            header,
            rows: page.rows().collect(),
        }
    }
}

/// Event emitted after the last page.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub count: usize,
    pub pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str, count: usize, pages: usize) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            count,
            pages,
            largest: None,
            duration_ms: None,
        }
    }

    pub fn with_largest(mut self, largest: Option<u64>) -> Self {
        self.largest = largest;
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}

/// Write a typed event as a single NDJSON line.
pub fn write_typed_event<T: Serialize>(sink: &mut impl LineSink, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    sink.write_line(&json)
}
