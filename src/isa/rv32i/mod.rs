//! RV32I base encoding constants.
//!
//! Field values for the instruction subset understood by the simulator,
//! straight from the RV32I base opcode map.

/// funct3 field values (bits 14-12).
pub mod funct3;

/// funct7 field values (bits 31-25).
pub mod funct7;

/// Major opcode field values (bits 6-0).
pub mod opcodes;
