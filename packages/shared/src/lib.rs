//! Shared utilities for wsecho.

pub mod logger;

pub use logger::setup_logger;
