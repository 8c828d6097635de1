//! Data hazard detection tests.
//!
//! Verifies that `raw_hazard` stalls decode exactly when a register-writing
//! instruction in any downstream latch targets one of the sources of the
//! instruction sitting in IF/ID.

use rv32_pipeline::core::pipeline::hazards::raw_hazard;
use rv32_pipeline::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use rv32_pipeline::core::program::{InstructionRecord, Program};
use rv32_pipeline::isa::instruction::{BranchCond, Instruction, RegOp};

/// Helper: a program with one instruction at 0x80 plus a matching IF/ID
/// latch pointing at it.
fn consumer(inst: Instruction) -> (Program, IfId) {
    let mut program = Program::default();
    program.insert(
        0x80,
        InstructionRecord {
            line: 1,
            raw: String::new(),
            mnemonic: String::new(),
            operands: Vec::new(),
            inst,
            encoded: 0,
        },
    );
    let mut if_id = IfId::bubble();
    if_id.bubble = false;
    if_id.addr = 0x80;
    (program, if_id)
}

fn add(rd: usize, rs1: usize, rs2: usize) -> Instruction {
    Instruction::Reg {
        op: RegOp::Add,
        rd,
        rs1,
        rs2,
    }
}

/// Helper: an ID/EX entry writing `rd`.
fn writer_id_ex(rd: usize) -> IdEx {
    let mut lat = IdEx::bubble();
    lat.bubble = false;
    lat.rd = Some(rd);
    lat.ctrl.reg_write = true;
    lat
}

/// Helper: an EX/MEM entry writing `rd`.
fn writer_ex_mem(rd: usize) -> ExMem {
    let mut lat = ExMem::bubble();
    lat.bubble = false;
    lat.rd = Some(rd);
    lat.ctrl.reg_write = true;
    lat
}

/// Helper: a MEM/WB entry writing `rd`.
fn writer_mem_wb(rd: usize) -> MemWb {
    let mut lat = MemWb::bubble();
    lat.bubble = false;
    lat.rd = Some(rd);
    lat.reg_write = true;
    lat
}

// ══════════════════════════════════════════════════════════
// 1. A producer in any downstream latch stalls the consumer
// ══════════════════════════════════════════════════════════

#[test]
fn stall_against_producer_in_id_ex() {
    let (program, if_id) = consumer(add(3, 1, 2));
    assert!(raw_hazard(
        &program,
        &if_id,
        &writer_id_ex(1),
        &ExMem::bubble(),
        &MemWb::bubble(),
    ));
}

#[test]
fn stall_against_producer_in_ex_mem() {
    let (program, if_id) = consumer(add(3, 1, 2));
    assert!(raw_hazard(
        &program,
        &if_id,
        &IdEx::bubble(),
        &writer_ex_mem(2),
        &MemWb::bubble(),
    ));
}

#[test]
fn stall_against_producer_in_mem_wb() {
    let (program, if_id) = consumer(add(3, 1, 2));
    assert!(raw_hazard(
        &program,
        &if_id,
        &IdEx::bubble(),
        &ExMem::bubble(),
        &writer_mem_wb(1),
    ));
}

// ══════════════════════════════════════════════════════════
// 2. No stall cases
// ══════════════════════════════════════════════════════════

#[test]
fn no_stall_when_pipeline_is_empty() {
    let (program, if_id) = consumer(add(3, 1, 2));
    assert!(!raw_hazard(
        &program,
        &if_id,
        &IdEx::bubble(),
        &ExMem::bubble(),
        &MemWb::bubble(),
    ));
}

#[test]
fn no_stall_when_if_id_is_a_bubble() {
    let (program, _) = consumer(add(3, 1, 2));
    assert!(!raw_hazard(
        &program,
        &IfId::bubble(),
        &writer_id_ex(1),
        &ExMem::bubble(),
        &MemWb::bubble(),
    ));
}

#[test]
fn no_stall_on_unrelated_destination() {
    let (program, if_id) = consumer(add(3, 1, 2));
    assert!(!raw_hazard(
        &program,
        &if_id,
        &writer_id_ex(7),
        &writer_ex_mem(8),
        &writer_mem_wb(9),
    ));
}

#[test]
fn no_stall_when_producer_does_not_write() {
    // A store in flight has no destination register.
    let (program, if_id) = consumer(add(3, 1, 2));
    let mut store = writer_id_ex(1);
    store.ctrl.reg_write = false;
    store.ctrl.mem_write = true;
    assert!(!raw_hazard(
        &program,
        &if_id,
        &store,
        &ExMem::bubble(),
        &MemWb::bubble(),
    ));
}

#[test]
fn x0_sources_never_stall() {
    let (program, if_id) = consumer(add(3, 0, 0));
    assert!(!raw_hazard(
        &program,
        &if_id,
        &writer_id_ex(0),
        &ExMem::bubble(),
        &MemWb::bubble(),
    ));
}

// ══════════════════════════════════════════════════════════
// 3. Source enumeration per shape
// ══════════════════════════════════════════════════════════

#[test]
fn load_consumer_depends_on_base_register() {
    let (program, if_id) = consumer(Instruction::Load {
        rd: 2,
        rs1: 5,
        offset: 0,
    });
    assert!(raw_hazard(
        &program,
        &if_id,
        &writer_id_ex(5),
        &ExMem::bubble(),
        &MemWb::bubble(),
    ));
}

#[test]
fn store_consumer_depends_on_data_and_base() {
    let (program, if_id) = consumer(Instruction::Store {
        rs2: 4,
        rs1: 6,
        offset: 0,
    });
    assert!(raw_hazard(
        &program,
        &if_id,
        &writer_id_ex(4),
        &ExMem::bubble(),
        &MemWb::bubble(),
    ));
    assert!(raw_hazard(
        &program,
        &if_id,
        &writer_id_ex(6),
        &ExMem::bubble(),
        &MemWb::bubble(),
    ));
}

#[test]
fn branch_consumer_depends_on_both_sources() {
    let (program, if_id) = consumer(Instruction::Branch {
        cond: BranchCond::Eq,
        rs1: 1,
        rs2: 2,
        target: "L".to_string(),
    });
    assert!(raw_hazard(
        &program,
        &if_id,
        &IdEx::bubble(),
        &writer_ex_mem(2),
        &MemWb::bubble(),
    ));
}
