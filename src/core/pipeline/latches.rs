//! Pipeline latch structures for inter-stage communication.
//!
//! Four latches separate the five pipeline stages. Each latch is either a
//! bubble (no instruction; downstream stages pass it through) or carries
//! exactly one in-flight instruction. `Default` yields a bubble so a
//! freshly reset pipeline is empty.

use crate::core::pipeline::signals::ControlSignals;

/// IF/ID pipeline latch (Fetch to Decode).
#[derive(Clone, Debug)]
pub struct IfId {
    /// Latch carries no instruction.
    pub bubble: bool,
    /// Encoded instruction word.
    pub ir: u32,
    /// Program counter of the fetched instruction.
    pub pc: u32,
    /// Sequential next program counter (PC + 4).
    pub npc: u32,
    /// Program address keying the instruction record.
    pub addr: u32,
    /// Source text of the instruction.
    pub raw: String,
}

impl IfId {
    /// Creates an empty latch.
    pub fn bubble() -> Self {
        Self {
            bubble: true,
            ir: 0,
            pc: 0,
            npc: 0,
            addr: 0,
            raw: String::new(),
        }
    }
}

impl Default for IfId {
    fn default() -> Self {
        Self::bubble()
    }
}

/// ID/EX pipeline latch (Decode to Execute).
///
/// Carries the decoded register indices, the values read from the register
/// file (A and B), the sign-extended immediate, and the control signals.
/// For branches the immediate field holds the resolved target address.
#[derive(Clone, Debug)]
pub struct IdEx {
    /// Latch carries no instruction.
    pub bubble: bool,
    /// Encoded instruction word.
    pub ir: u32,
    /// Sequential next program counter (PC + 4).
    pub npc: u32,
    /// Program address keying the instruction record.
    pub addr: u32,
    /// Source text of the instruction.
    pub raw: String,
    /// First source register index, if read.
    pub rs1: Option<usize>,
    /// Second source register index, if read.
    pub rs2: Option<usize>,
    /// Destination register index, if written.
    pub rd: Option<usize>,
    /// Value read from rs1.
    pub a: u32,
    /// Value read from rs2.
    pub b: u32,
    /// Sign-extended immediate, or the resolved branch target address.
    pub imm: u32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

impl IdEx {
    /// Creates an empty latch.
    pub fn bubble() -> Self {
        Self {
            bubble: true,
            ir: 0,
            npc: 0,
            addr: 0,
            raw: String::new(),
            rs1: None,
            rs2: None,
            rd: None,
            a: 0,
            b: 0,
            imm: 0,
            ctrl: ControlSignals::default(),
        }
    }
}

impl Default for IdEx {
    fn default() -> Self {
        Self::bubble()
    }
}

/// EX/MEM pipeline latch (Execute to Memory).
#[derive(Clone, Debug)]
pub struct ExMem {
    /// Latch carries no instruction.
    pub bubble: bool,
    /// Encoded instruction word.
    pub ir: u32,
    /// Program address keying the instruction record.
    pub addr: u32,
    /// Source text of the instruction.
    pub raw: String,
    /// ALU computation result or address for memory operations.
    pub alu_output: u32,
    /// rs2 value carried for stores.
    pub b: u32,
    /// Branch condition result.
    pub cond: bool,
    /// Destination register index, if written.
    pub rd: Option<usize>,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

impl ExMem {
    /// Creates an empty latch.
    pub fn bubble() -> Self {
        Self {
            bubble: true,
            ir: 0,
            addr: 0,
            raw: String::new(),
            alu_output: 0,
            b: 0,
            cond: false,
            rd: None,
            ctrl: ControlSignals::default(),
        }
    }
}

impl Default for ExMem {
    fn default() -> Self {
        Self::bubble()
    }
}

/// MEM/WB pipeline latch (Memory to Writeback).
#[derive(Clone, Debug)]
pub struct MemWb {
    /// Latch carries no instruction.
    pub bubble: bool,
    /// Encoded instruction word.
    pub ir: u32,
    /// Program address keying the instruction record.
    pub addr: u32,
    /// Source text of the instruction.
    pub raw: String,
    /// Data loaded from memory (for loads).
    pub lmd: u32,
    /// ALU computation result (for non-load instructions).
    pub alu_output: u32,
    /// Destination register index, if written.
    pub rd: Option<usize>,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Writeback takes the loaded data instead of the ALU result.
    pub mem_to_reg: bool,
}

impl MemWb {
    /// Creates an empty latch.
    pub fn bubble() -> Self {
        Self {
            bubble: true,
            ir: 0,
            addr: 0,
            raw: String::new(),
            lmd: 0,
            alu_output: 0,
            rd: None,
            reg_write: false,
            mem_to_reg: false,
        }
    }
}

impl Default for MemWb {
    fn default() -> Self {
        Self::bubble()
    }
}
