//! RV32I funct7 field values (bits 31-25) for the supported subset.

/// Default function code for most R-type operations.
pub const DEFAULT: u32 = 0b0000000;

/// Alternate function code selecting SUB.
pub const SUB: u32 = 0b0100000;
