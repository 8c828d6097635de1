//! RV32I funct3 field values (bits 14-12) for the supported subset.
//!
//! The `funct3` field distinguishes between instructions sharing the same
//! major opcode (e.g., BEQ vs BNE, ADD vs SLT).

/// Branch Equal.
pub const BEQ: u32 = 0b000;
/// Branch Not Equal.
pub const BNE: u32 = 0b001;
/// Branch Less Than (signed).
pub const BLT: u32 = 0b100;
/// Branch Greater or Equal (signed).
pub const BGE: u32 = 0b101;

/// Load Word.
pub const LW: u32 = 0b010;
/// Store Word.
pub const SW: u32 = 0b010;

/// Add / Subtract.
pub const ADD_SUB: u32 = 0b000;
/// Shift Left Logical.
pub const SLL: u32 = 0b001;
/// Set Less Than (signed).
pub const SLT: u32 = 0b010;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;
