//! RV32I General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file,
//! containing 32 registers (x0-x31) of 32-bit words. It enforces the
//! architectural invariant that register x0 is always hardwired to zero.

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers (x0-x31). Register x0 is
/// hardwired to zero and cannot be modified.
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a general-purpose register value.
    ///
    /// Register x0 (index 0) always returns 0 regardless of storage.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to register x0 (index 0) are silently ignored as x0 is
    /// hardwired to zero.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Clears all registers back to zero.
    pub fn reset(&mut self) {
        self.regs = [0; 32];
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs (two per line) with hexadecimal
    /// formatting.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
