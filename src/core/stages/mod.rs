//! Pipeline stage implementations.
//!
//! One function per stage, each reading its upstream latch and writing its
//! downstream latch. The engine calls them in reverse order (WB, MEM, EX,
//! ID, IF) so every stage observes upstream state as it was at the start
//! of the cycle.

/// Instruction decode stage.
pub mod decode;

/// Execute stage.
pub mod execute;

/// Instruction fetch stage.
pub mod fetch;

/// Memory access stage.
pub mod memory_access;

/// Writeback stage.
pub mod write_back;
