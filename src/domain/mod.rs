//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (PageGeometry, PrimeSequence)
//! - `services/` - Domain services (PrimeGenerator, page layout)
//! - `ports/` - Interface definitions for infrastructure (LineSink)

pub mod ports;
pub mod services;
pub mod value_objects;
