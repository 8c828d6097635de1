//! State snapshot schema tests.
//!
//! Verifies the wire format: hex string formatting, the per-stage pipeline
//! mapping, and the writeback view.

use rv32_pipeline::config::Config;
use rv32_pipeline::core::Cpu;
use rv32_pipeline::sim::loader::load_program;
use rv32_pipeline::state::hex32;

fn cpu() -> Cpu {
    Cpu::new(&Config::default())
}

fn load(cpu: &mut Cpu, source: &str) {
    let res = load_program(cpu, source, None, None);
    assert!(res.success, "program failed to assemble: {:?}", res.errors);
}

// ══════════════════════════════════════════════════════════
// 1. Hex formatting
// ══════════════════════════════════════════════════════════

#[test]
fn hex32_is_zero_padded_lowercase() {
    assert_eq!(hex32(0), "0x00000000");
    assert_eq!(hex32(0x80), "0x00000080");
    assert_eq!(hex32(0xdeadbeef), "0xdeadbeef");
    assert_eq!(hex32(u32::MAX), "0xffffffff");
}

#[test]
fn snapshot_numbers_use_hex_strings() {
    let mut cpu = cpu();
    load(&mut cpu, "ADDI x1, x0, 5");
    let state = cpu.state();
    assert_eq!(state.pc, "0x00000080");
    assert_eq!(state.registers.len(), 32);
    for reg in &state.registers {
        assert!(reg.starts_with("0x") && reg.len() == 10, "bad hex: {}", reg);
        assert!(reg[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

// ══════════════════════════════════════════════════════════
// 2. Schema shape
// ══════════════════════════════════════════════════════════

#[test]
fn pipeline_mapping_uses_stage_names() {
    let cpu = cpu();
    let json = serde_json::to_value(cpu.state()).expect("snapshot serializes");

    for key in ["IF", "IF/ID", "ID/EX", "EX/MEM", "MEM/WB", "WB"] {
        assert!(json["pipeline"].get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(json["pipeline"]["IF"]["stalled"], false);
    assert_eq!(json["pipeline"]["IF/ID"]["nop"], true);
    assert_eq!(json["pipeline"]["IF/ID"]["IR"], "0x00000000");
    assert_eq!(json["pipeline"]["ID/EX"]["A"], "0x00000000");
    assert_eq!(json["pipeline"]["ID/EX"]["IMM"], "0x00000000");
    assert_eq!(json["pipeline"]["EX/MEM"]["ALUOutput"], "0x00000000");
    assert_eq!(json["pipeline"]["EX/MEM"]["cond"], false);
    assert_eq!(json["pipeline"]["MEM/WB"]["LMD"], "0x00000000");
    assert!(json["pipeline"]["WB"]["register_written"].is_null());
    assert!(json["pipeline"]["WB"]["value_written"].is_null());
}

#[test]
fn fresh_engine_snapshot_is_empty() {
    let cpu = cpu();
    let state = cpu.state();
    assert_eq!(state.cycle, 0);
    assert!(!state.halted);
    assert_eq!(state.stall_cycles, 0);
    assert_eq!(state.branch_count, 0);
    assert_eq!(state.flush_count, 0);
    assert!(state.pipeline.if_id.nop);
    assert!(state.pipeline.id_ex.nop);
    assert!(state.pipeline.ex_mem.nop);
    assert!(state.pipeline.mem_wb.nop);
    assert!(state.registers.iter().all(|r| r == "0x00000000"));
}

// ══════════════════════════════════════════════════════════
// 3. Latch contents mid-run
// ══════════════════════════════════════════════════════════

#[test]
fn latches_fill_as_the_instruction_advances() {
    let mut cpu = cpu();
    load(&mut cpu, "ADDI x1, x0, 5");

    let s1 = cpu.step();
    assert!(!s1.pipeline.if_id.nop);
    assert_eq!(s1.pipeline.if_id.ir, "0x00500093");
    assert_eq!(s1.pipeline.if_id.pc, "0x00000080");
    assert_eq!(s1.pipeline.if_id.npc, "0x00000084");
    assert_eq!(s1.pipeline.if_id.raw, "ADDI x1, x0, 5");

    let s2 = cpu.step();
    assert!(!s2.pipeline.id_ex.nop);
    assert_eq!(s2.pipeline.id_ex.imm, "0x00000005");
    assert_eq!(s2.pipeline.id_ex.raw, "ADDI x1, x0, 5");

    let s3 = cpu.step();
    assert!(!s3.pipeline.ex_mem.nop);
    assert_eq!(s3.pipeline.ex_mem.alu_output, "0x00000005");

    let s4 = cpu.step();
    assert!(!s4.pipeline.mem_wb.nop);
    assert_eq!(s4.pipeline.mem_wb.alu_output, "0x00000005");
    // The writeback view names the register about to be written.
    assert_eq!(
        s4.pipeline.wb.register_written.as_deref(),
        Some("x1")
    );
    assert_eq!(
        s4.pipeline.wb.value_written.as_deref(),
        Some("0x00000005")
    );

    let s5 = cpu.step();
    assert_eq!(s5.registers[1], "0x00000005");
}

#[test]
fn stall_is_visible_in_the_fetch_view() {
    let mut cpu = cpu();
    load(&mut cpu, "ADDI x1, x0, 5\nADD x2, x1, x1");

    // Cycle 3 is the first with the dependent ADD sitting in IF/ID.
    let _ = cpu.step();
    let _ = cpu.step();
    let s3 = cpu.step();
    assert!(s3.pipeline.fetch.stalled);
    assert_eq!(s3.stall_cycles, 1);
    // The stalled instruction keeps its IF/ID slot.
    assert_eq!(s3.pipeline.if_id.raw, "ADD x2, x1, x1");
}

#[test]
fn store_never_populates_the_wb_view() {
    let mut cpu = cpu();
    load(&mut cpu, "SW x0, 0(x0)");
    for _ in 0..6 {
        let state = cpu.step();
        assert!(state.pipeline.wb.register_written.is_none());
        assert!(state.pipeline.wb.value_written.is_none());
    }
}
