//! Value Objects
//!
//! Immutable domain types, validated on construction.

mod page_geometry;
mod prime_sequence;

pub use page_geometry::{PageGeometry, DEFAULT_COLUMNS_PER_PAGE, DEFAULT_ROWS_PER_PAGE};
pub use prime_sequence::PrimeSequence;
