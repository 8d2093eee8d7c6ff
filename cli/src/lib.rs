//! Body Metrics CLI Library
//!
//! This library exposes the CLI modules for use in tests and the binary.

pub mod args;
pub mod config;
pub mod prompt;
pub mod render;
