//! Pipeline engine state and the step/reset operations.

use crate::config::Config;
use crate::core::arch::Gpr;
use crate::core::memory::Memory;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::program::Program;
use crate::core::stages;
use crate::state::StateSnapshot;
use crate::stats::SimStats;

/// The five-stage pipeline engine.
///
/// Holds the architectural state (register file, flat memory, program
/// counter), the loaded program image, the four pipeline latches, and the
/// run counters. One `step` call advances every stage by one cycle; the
/// engine is strictly single-threaded and callers serialize access.
pub struct Cpu {
    /// General-purpose register file.
    pub regs: Gpr,
    /// Flat data/instruction memory.
    pub memory: Memory,
    /// Program counter.
    pub pc: u32,
    /// Loaded program image.
    pub program: Program,
    /// Fetch found no instruction at PC.
    pub halted: bool,
    /// A RAW hazard froze fetch this cycle.
    pub stall: bool,
    /// Emit per-stage trace lines.
    pub trace: bool,

    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,

    /// Run counters.
    pub stats: SimStats,

    program_start: u32,
}

impl Cpu {
    /// Creates a halted-empty engine from the configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            memory: Memory::new(config.machine.memory_size_val()),
            pc: config.machine.program_start_val(),
            program: Program::default(),
            halted: false,
            stall: false,
            trace: config.general.trace_execution,
            if_id: IfId::bubble(),
            id_ex: IdEx::bubble(),
            ex_mem: ExMem::bubble(),
            mem_wb: MemWb::bubble(),
            stats: SimStats::default(),
            program_start: config.machine.program_start_val(),
        }
    }

    /// First program address; instructions occupy `[program_start,
    /// program_start + 4 * n)`.
    pub fn program_start(&self) -> u32 {
        self.program_start
    }

    pub(crate) fn trace_enabled(&self) -> bool {
        self.trace || cfg!(feature = "always-trace")
    }

    /// Clears all architectural state, the program image, pipeline latches,
    /// and counters.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.memory.reset();
        self.pc = self.program_start;
        self.program.clear();
        self.halted = false;
        self.stall = false;
        self.if_id = IfId::bubble();
        self.id_ex = IdEx::bubble();
        self.ex_mem = ExMem::bubble();
        self.mem_wb = MemWb::bubble();
        self.stats = SimStats::default();
    }

    /// True once fetch has run off the program and every latch has drained.
    ///
    /// A quiescent engine no longer changes state on `step`.
    pub fn quiescent(&self) -> bool {
        self.halted
            && self.if_id.bubble
            && self.id_ex.bubble
            && self.ex_mem.bubble
            && self.mem_wb.bubble
    }

    /// Advances the pipeline by one cycle and returns the resulting
    /// snapshot.
    ///
    /// Hazard detection runs first against the latch state at cycle start;
    /// the stages then execute in reverse order (WB, MEM, EX, ID, IF) so
    /// each stage reads its upstream latch as it was when the cycle began.
    pub fn step(&mut self) -> StateSnapshot {
        if self.quiescent() {
            return self.state();
        }

        self.stall = hazards::raw_hazard(
            &self.program,
            &self.if_id,
            &self.id_ex,
            &self.ex_mem,
            &self.mem_wb,
        );
        if self.stall {
            self.stats.stall_cycles += 1;
        }

        stages::write_back::wb_stage(self);
        stages::memory_access::mem_stage(self);
        stages::execute::execute_stage(self);
        stages::decode::decode_stage(self);
        stages::fetch::fetch_stage(self);

        self.stats.cycles += 1;
        self.state()
    }

    /// Returns the current snapshot without advancing the pipeline.
    pub fn state(&self) -> StateSnapshot {
        StateSnapshot::capture(self)
    }

    /// Prints the program counter and register file to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#010x}", self.pc);
        self.regs.dump();
    }
}
