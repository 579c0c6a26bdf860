//! Application Layer
//!
//! Use cases that orchestrate the domain services and presentation.
//!
//! ## Use Cases
//!
//! - `PrintPrimesUseCase` - Generate the first N primes and print them as pages

pub mod print_primes;

pub use print_primes::{
    PrintOptions, PrintPrimesUseCase, PrintResult, COUNT_PLACEHOLDER, DEFAULT_COUNT,
};
