use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId};
use crate::core::pipeline::signals::{AluOp, OpBSrc};
use crate::isa::rv32i::funct3;

fn alu(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Sll => a.wrapping_shl(b & 0x1f),
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
    }
}

pub fn execute_stage(cpu: &mut Cpu) {
    if cpu.id_ex.bubble {
        cpu.ex_mem = ExMem::bubble();
        return;
    }

    let id = cpu.id_ex.clone();

    let mut lat = ExMem::bubble();
    lat.bubble = false;
    lat.ir = id.ir;
    lat.addr = id.addr;
    lat.raw = id.raw.clone();
    lat.rd = id.rd;
    lat.b = id.b;
    lat.ctrl = id.ctrl;

    if id.ctrl.branch {
        // The comparison comes straight from the funct3 field of the IR.
        let taken = match (id.ir >> 12) & 0x7 {
            funct3::BEQ => id.a == id.b,
            funct3::BNE => id.a != id.b,
            funct3::BLT => (id.a as i32) < (id.b as i32),
            funct3::BGE => (id.a as i32) >= (id.b as i32),
            _ => false,
        };
        lat.cond = taken;

        // Predict-not-taken: a taken branch redirects fetch and discards
        // the sequential instructions already in IF/ID and ID/EX.
        if taken {
            cpu.pc = id.imm;
            cpu.if_id = IfId::bubble();
            cpu.id_ex = IdEx::bubble();
            cpu.stats.branch_count += 1;
            cpu.stats.flush_count += 1;
            if cpu.trace_enabled() {
                eprintln!("EX  pc={:#010x} branch taken -> {:#010x}", id.addr, id.imm);
            }
        }
    } else {
        let op_b = match id.ctrl.b_src {
            OpBSrc::Reg2 => id.b,
            OpBSrc::Imm => id.imm,
        };
        lat.alu_output = alu(id.ctrl.alu, id.a, op_b);
        if cpu.trace_enabled() {
            eprintln!("EX  pc={:#010x} alu={:#010x}", id.addr, lat.alu_output);
        }
    }

    cpu.ex_mem = lat;
}
