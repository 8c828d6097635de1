//! Observable state snapshots.
//!
//! Captures the architectural and pipeline state in the wire schema
//! exposed to front ends: registers and PC, run counters, and the contents
//! of every stage latch. All numeric fields are formatted as `0x`-prefixed
//! eight-digit lowercase hex strings.

use serde::Serialize;

use crate::core::Cpu;

/// Formats a 32-bit word as `0x` plus eight lowercase hex digits.
pub fn hex32(x: u32) -> String {
    format!("{:#010x}", x)
}

/// Full engine state after a cycle.
#[derive(Clone, Debug, Serialize)]
pub struct StateSnapshot {
    /// Program counter.
    pub pc: String,
    /// All 32 register values.
    pub registers: Vec<String>,
    /// Elapsed cycles.
    pub cycle: u64,
    /// Fetch has run off the program.
    pub halted: bool,
    /// Cumulative data hazard stalls.
    pub stall_cycles: u64,
    /// Taken branches.
    pub branch_count: u64,
    /// Flushes caused by taken branches.
    pub flush_count: u64,
    /// Per-stage observable state.
    pub pipeline: PipelineState,
}

/// Observable state of each stage and latch.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineState {
    #[serde(rename = "IF")]
    pub fetch: FetchState,
    #[serde(rename = "IF/ID")]
    pub if_id: IfIdState,
    #[serde(rename = "ID/EX")]
    pub id_ex: IdExState,
    #[serde(rename = "EX/MEM")]
    pub ex_mem: ExMemState,
    #[serde(rename = "MEM/WB")]
    pub mem_wb: MemWbState,
    #[serde(rename = "WB")]
    pub wb: WbState,
}

/// Fetch stage view.
#[derive(Clone, Debug, Serialize)]
pub struct FetchState {
    #[serde(rename = "PC")]
    pub pc: String,
    /// Fetch was frozen by a hazard this cycle.
    pub stalled: bool,
}

/// IF/ID latch view.
#[derive(Clone, Debug, Serialize)]
pub struct IfIdState {
    pub nop: bool,
    #[serde(rename = "IR")]
    pub ir: String,
    #[serde(rename = "NPC")]
    pub npc: String,
    #[serde(rename = "PC")]
    pub pc: String,
    pub raw: String,
}

/// ID/EX latch view.
#[derive(Clone, Debug, Serialize)]
pub struct IdExState {
    pub nop: bool,
    #[serde(rename = "IR")]
    pub ir: String,
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "IMM")]
    pub imm: String,
    #[serde(rename = "NPC")]
    pub npc: String,
    pub raw: String,
}

/// EX/MEM latch view.
#[derive(Clone, Debug, Serialize)]
pub struct ExMemState {
    pub nop: bool,
    #[serde(rename = "IR")]
    pub ir: String,
    #[serde(rename = "ALUOutput")]
    pub alu_output: String,
    #[serde(rename = "B")]
    pub b: String,
    pub cond: bool,
    pub raw: String,
}

/// MEM/WB latch view.
#[derive(Clone, Debug, Serialize)]
pub struct MemWbState {
    pub nop: bool,
    #[serde(rename = "IR")]
    pub ir: String,
    #[serde(rename = "LMD")]
    pub lmd: String,
    #[serde(rename = "ALUOutput")]
    pub alu_output: String,
    pub raw: String,
}

/// Writeback view: the register about to be written, or nulls when the
/// latched instruction writes nothing.
#[derive(Clone, Debug, Serialize)]
pub struct WbState {
    pub register_written: Option<String>,
    pub value_written: Option<String>,
}

impl StateSnapshot {
    /// Captures the observable state of the engine.
    pub fn capture(cpu: &Cpu) -> Self {
        let wb = match cpu.mem_wb.rd {
            Some(rd) if !cpu.mem_wb.bubble && cpu.mem_wb.reg_write && rd != 0 => {
                let value = if cpu.mem_wb.mem_to_reg {
                    cpu.mem_wb.lmd
                } else {
                    cpu.mem_wb.alu_output
                };
                WbState {
                    register_written: Some(format!("x{}", rd)),
                    value_written: Some(hex32(value)),
                }
            }
            _ => WbState {
                register_written: None,
                value_written: None,
            },
        };

        Self {
            pc: hex32(cpu.pc),
            registers: (0..32).map(|i| hex32(cpu.regs.read(i))).collect(),
            cycle: cpu.stats.cycles,
            halted: cpu.halted,
            stall_cycles: cpu.stats.stall_cycles,
            branch_count: cpu.stats.branch_count,
            flush_count: cpu.stats.flush_count,
            pipeline: PipelineState {
                fetch: FetchState {
                    pc: hex32(cpu.pc),
                    stalled: cpu.stall,
                },
                if_id: IfIdState {
                    nop: cpu.if_id.bubble,
                    ir: hex32(cpu.if_id.ir),
                    npc: hex32(cpu.if_id.npc),
                    pc: hex32(cpu.if_id.pc),
                    raw: cpu.if_id.raw.clone(),
                },
                id_ex: IdExState {
                    nop: cpu.id_ex.bubble,
                    ir: hex32(cpu.id_ex.ir),
                    a: hex32(cpu.id_ex.a),
                    b: hex32(cpu.id_ex.b),
                    imm: hex32(cpu.id_ex.imm),
                    npc: hex32(cpu.id_ex.npc),
                    raw: cpu.id_ex.raw.clone(),
                },
                ex_mem: ExMemState {
                    nop: cpu.ex_mem.bubble,
                    ir: hex32(cpu.ex_mem.ir),
                    alu_output: hex32(cpu.ex_mem.alu_output),
                    b: hex32(cpu.ex_mem.b),
                    cond: cpu.ex_mem.cond,
                    raw: cpu.ex_mem.raw.clone(),
                },
                mem_wb: MemWbState {
                    nop: cpu.mem_wb.bubble,
                    ir: hex32(cpu.mem_wb.ir),
                    lmd: hex32(cpu.mem_wb.lmd),
                    alu_output: hex32(cpu.mem_wb.alu_output),
                    raw: cpu.mem_wb.raw.clone(),
                },
                wb,
            },
        }
    }
}
