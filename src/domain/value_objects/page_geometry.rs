//! Page Geometry Value Object
//!
//! Rows, columns and header text of one printed page. Validated once at
//! construction and never mutated afterwards.

use crate::error::{PrimeError, PrimeResult};

/// Default rows per page
pub const DEFAULT_ROWS_PER_PAGE: i64 = 50;

/// Default columns per page
pub const DEFAULT_COLUMNS_PER_PAGE: i64 = 4;

/// Immutable page layout configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGeometry {
    rows_per_page: usize,
    columns_per_page: usize,
    numbers_per_page: usize,
    header: String,
}

impl PageGeometry {
    /// Create a geometry of `rows_per_page` x `columns_per_page` cells.
    ///
    /// # Errors
    ///
    /// - [`PrimeError::InvalidArgument`] if either dimension is `<= 0`
    /// - [`PrimeError::PageTooLarge`] if the cell count overflows `usize`
    pub fn new(
        rows_per_page: i64,
        columns_per_page: i64,
        header: impl Into<String>,
    ) -> PrimeResult<Self> {
        let too_large = || PrimeError::PageTooLarge {
            rows: rows_per_page,
            columns: columns_per_page,
        };

        let rows = positive("rows_per_page", rows_per_page)?;
        let columns = positive("columns_per_page", columns_per_page)?;
        let rows = usize::try_from(rows).map_err(|_| too_large())?;
        let columns = usize::try_from(columns).map_err(|_| too_large())?;
        let numbers_per_page = rows.checked_mul(columns).ok_or_else(too_large)?;

        Ok(Self {
            rows_per_page: rows,
            columns_per_page: columns,
            numbers_per_page,
            header: header.into(),
        })
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn columns_per_page(&self) -> usize {
        self.columns_per_page
    }

    /// Number of cells on a full page
    pub fn numbers_per_page(&self) -> usize {
        self.numbers_per_page
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Number of pages needed to print `len` values
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.numbers_per_page)
    }
}

fn positive(name: &'static str, value: i64) -> PrimeResult<u64> {
    if value <= 0 {
        return Err(PrimeError::InvalidArgument { name, value });
    }
    Ok(value.unsigned_abs())
}
