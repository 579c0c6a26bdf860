//! Row/column page printer
//!
//! Prints a sequence as numbered pages, reading each page column-major.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ports::LineSink;
use crate::domain::services::{paginate, Page};
use crate::domain::value_objects::PageGeometry;
use crate::error::{PrimeError, PrimeResult};

/// Default width of one cell in [`RowLayout::Aligned`]
pub const DEFAULT_COLUMN_WIDTH: usize = 10;

/// How the cells of a row are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowLayout {
    /// One value per line
    #[default]
    Stacked,
    /// One line per row, cells right-aligned to a fixed width
    Aligned,
}

impl RowLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowLayout::Stacked => "stacked",
            RowLayout::Aligned => "aligned",
        }
    }
}

impl fmt::Display for RowLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stacked" => Ok(RowLayout::Stacked),
            "aligned" => Ok(RowLayout::Aligned),
            other => Err(format!(
                "unknown layout '{}' (expected 'stacked' or 'aligned')",
                other
            )),
        }
    }
}

/// Prints pages of values to a [`LineSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePagePrinter {
    geometry: PageGeometry,
    layout: RowLayout,
    column_width: usize,
}

impl TablePagePrinter {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            layout: RowLayout::default(),
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }

    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the cell width used by [`RowLayout::Aligned`]. Must be non-zero.
    ///
    /// A value with `column_width` or more digits gets one extra leading
    /// space instead of touching its neighbour.
    pub fn with_column_width(mut self, column_width: usize) -> PrimeResult<Self> {
        if column_width == 0 {
            return Err(PrimeError::InvalidArgument {
                name: "column_width",
                value: 0,
            });
        }
        self.column_width = column_width;
        Ok(self)
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Print `data` as pages.
    ///
    /// Empty data prints nothing. A sink failure stops printing at that
    /// line and is returned as [`PrimeError::Sink`]; lines already written
    /// stay written.
    pub fn print_data(&self, data: &[u64], sink: &mut impl LineSink) -> PrimeResult<()> {
        for page in paginate(data, &self.geometry) {
            self.print_page(&page, sink)?;
        }
        Ok(())
    }

    fn print_page(&self, page: &Page<'_>, sink: &mut impl LineSink) -> PrimeResult<()> {
        write_line(sink, &page.header_line())?;
        for row in 0..page.filled_rows() {
            self.print_row(page, row, sink)?;
        }
        Ok(())
    }

    fn print_row(&self, page: &Page<'_>, row: usize, sink: &mut impl LineSink) -> PrimeResult<()> {
        match self.layout {
            RowLayout::Stacked => {
                for value in page.row(row) {
                    write_line(sink, &value.to_string())?;
                }
            }
            RowLayout::Aligned => {
                let line: String = page.row(row).map(|value| self.aligned_cell(value)).collect();
                write_line(sink, &line)?;
            }
        }
        Ok(())
    }

    /// Right-aligned in `column_width`, widened so a leading space always
    /// separates the value from the cell before it.
    fn aligned_cell(&self, value: u64) -> String {
        let digits = value.to_string();
        let width = self.column_width.max(digits.len() + 1);
        format!("{:>width$}", digits)
    }
}

fn write_line(sink: &mut impl LineSink, line: &str) -> PrimeResult<()> {
    sink.write_line(line).map_err(PrimeError::Sink)
}
