//! Error conversions for infrastructure crates

pub mod conversions;

pub use conversions::InfraError;
