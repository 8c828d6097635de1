//! RV32I major opcodes (bits 6-0) for the supported subset.

/// Load instructions (LW).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, ORI, SLLI).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-register arithmetic (ADD, SUB, AND, OR, SLL, SLT).
pub const OP_REG: u32 = 0b0110011;

/// Conditional branch instructions (BEQ, BNE, BLT, BGE).
pub const OP_BRANCH: u32 = 0b1100011;
