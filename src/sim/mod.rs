//! Simulation harness: program loading and the load response schema.

/// Two-pass program loading and initial state overrides.
pub mod loader;

pub use loader::{load_program, InitValue, LoadResponse, MemoryInit, RegisterInit};
