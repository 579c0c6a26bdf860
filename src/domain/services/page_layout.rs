//! Page Layout Domain Service
//!
//! Splits a sequence into page-sized chunks and reads each chunk in
//! column-major order: values fill down a column before moving right.
//! Cells past the end of a chunk are omitted, never padded.

use std::slice::Chunks;

use crate::domain::value_objects::PageGeometry;

/// One page of values, borrowed from the source sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    number: usize,
    values: &'a [u64],
    geometry: &'a PageGeometry,
}

impl<'a> Page<'a> {
    /// 1-based page number
    pub fn number(&self) -> usize {
        self.number
    }

    /// The contiguous chunk of values on this page
    pub fn values(&self) -> &'a [u64] {
        self.values
    }

    /// `"<header> --- Page <number>"`
    pub fn header_line(&self) -> String {
        format!("{} --- Page {}", self.geometry.header(), self.number)
    }

    /// Values of row `row`, left to right.
    ///
    /// Row r holds local offsets r, r + rows, r + 2 * rows, ... up to the
    /// page width, stopping at the end of the chunk.
    pub fn row(&self, row: usize) -> impl Iterator<Item = u64> + 'a {
        let values = self.values;
        let rows_per_page = self.geometry.rows_per_page();
        let columns = if row < rows_per_page {
            self.geometry.columns_per_page()
        } else {
            0
        };

        (0..columns)
            .map(move |column| row + column * rows_per_page)
            .take_while(move |&index| index < values.len())
            .map(move |index| values[index])
    }

    /// Number of rows holding at least one value.
    ///
    /// Row r starts at offset r, so rows at or past the chunk length are
    /// empty; this is never more than the chunk length.
    pub fn filled_rows(&self) -> usize {
        self.geometry.rows_per_page().min(self.values.len())
    }

    /// Every non-empty row of the page, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<u64>> + 'a {
        let page = *self;
        (0..self.filled_rows()).map(move |row| page.row(row).collect())
    }

    /// Values in the order they are printed: row by row, column-major within the page
    pub fn reading_order(&self) -> impl Iterator<Item = u64> + 'a {
        let page = *self;
        (0..self.filled_rows()).flat_map(move |row| page.row(row))
    }
}

/// Iterator over the pages of a sequence
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, u64>,
    geometry: &'a PageGeometry,
    next_number: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let values = self.chunks.next()?;
        let page = Page {
            number: self.next_number,
            values,
            geometry: self.geometry,
        };
        self.next_number += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

/// Split `data` into pages of at most `geometry.numbers_per_page()` values.
///
/// Empty data yields no pages.
pub fn paginate<'a>(data: &'a [u64], geometry: &'a PageGeometry) -> Pages<'a> {
    Pages {
        chunks: data.chunks(geometry.numbers_per_page()),
        geometry,
        next_number: 1,
    }
}
