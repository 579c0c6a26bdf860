//! Domain Services
//!
//! Pure logic with no I/O: prime generation and page layout.

mod page_layout;
mod prime_generator;

pub use page_layout::{paginate, Page, Pages};
pub use prime_generator::PrimeGenerator;
