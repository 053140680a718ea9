//! Helper utilities for integration tests.

pub mod log_builder;

pub use log_builder::*;
