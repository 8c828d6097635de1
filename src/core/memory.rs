//! Flat data/instruction memory.
//!
//! A single little-endian byte array of configurable size. Word accesses
//! that fall outside the array read as zero and drop writes; the pipeline
//! never traps on an out-of-range address.

/// Flat byte-addressed memory with little-endian word access.
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Total size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Clears every byte back to zero.
    pub fn reset(&mut self) {
        self.bytes.fill(0);
    }

    /// Reads a little-endian word. Out-of-range accesses read as zero.
    pub fn read_word(&self, addr: u32) -> u32 {
        let addr = addr as usize;
        if addr + 4 > self.bytes.len() {
            return 0;
        }
        u32::from_le_bytes([
            self.bytes[addr],
            self.bytes[addr + 1],
            self.bytes[addr + 2],
            self.bytes[addr + 3],
        ])
    }

    /// Writes a little-endian word. Out-of-range accesses are dropped.
    pub fn write_word(&mut self, addr: u32, val: u32) {
        let addr = addr as usize;
        if addr + 4 > self.bytes.len() {
            return;
        }
        self.bytes[addr..addr + 4].copy_from_slice(&val.to_le_bytes());
    }
}
