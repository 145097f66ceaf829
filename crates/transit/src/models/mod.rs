//! Domain models for stops and itineraries.

pub mod types;

pub use types::*;
