//! CPU core implementation.
//!
//! The five-stage pipeline engine: architectural state (register file,
//! flat memory, program counter), the loaded program image, pipeline
//! latches, hazard detection, and the stage functions themselves.

/// Architectural state (register file).
pub mod arch;

/// Pipeline engine state and the step/reset operations.
pub mod cpu;

/// Flat data/instruction memory.
pub mod memory;

/// Pipeline latches, control signals, and hazard detection.
pub mod pipeline;

/// Loaded program image and instruction records.
pub mod program;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

pub use cpu::Cpu;
