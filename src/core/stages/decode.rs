use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::IdEx;
use crate::core::pipeline::signals::{AluOp, OpBSrc};
use crate::isa::instruction::{ImmOp, Instruction, RegOp};

pub fn decode_stage(cpu: &mut Cpu) {
    if cpu.stall || cpu.if_id.bubble {
        // A stall inserts the bubble that delays the dependent consumer.
        cpu.id_ex = IdEx::bubble();
        return;
    }

    let record = match cpu.program.at(cpu.if_id.addr) {
        Some(record) => record.clone(),
        None => {
            cpu.id_ex = IdEx::bubble();
            return;
        }
    };

    let mut lat = IdEx::bubble();
    lat.bubble = false;
    lat.ir = cpu.if_id.ir;
    lat.npc = cpu.if_id.npc;
    lat.addr = cpu.if_id.addr;
    lat.raw = record.raw.clone();

    match &record.inst {
        Instruction::Reg { op, rd, rs1, rs2 } => {
            lat.rd = Some(*rd);
            lat.rs1 = Some(*rs1);
            lat.rs2 = Some(*rs2);
            lat.a = cpu.regs.read(*rs1);
            lat.b = cpu.regs.read(*rs2);
            lat.ctrl.alu = match op {
                RegOp::Add => AluOp::Add,
                RegOp::Sub => AluOp::Sub,
                RegOp::And => AluOp::And,
                RegOp::Or => AluOp::Or,
                RegOp::Sll => AluOp::Sll,
                RegOp::Slt => AluOp::Slt,
            };
            lat.ctrl.b_src = OpBSrc::Reg2;
            lat.ctrl.reg_write = true;
        }
        Instruction::ImmArith { op, rd, rs1, imm } => {
            lat.rd = Some(*rd);
            lat.rs1 = Some(*rs1);
            lat.a = cpu.regs.read(*rs1);
            lat.imm = *imm as u32;
            lat.ctrl.alu = match op {
                ImmOp::Addi => AluOp::Add,
                ImmOp::Ori => AluOp::Or,
            };
            lat.ctrl.b_src = OpBSrc::Imm;
            lat.ctrl.reg_write = true;
        }
        Instruction::ImmShift { rd, rs1, shamt } => {
            lat.rd = Some(*rd);
            lat.rs1 = Some(*rs1);
            lat.a = cpu.regs.read(*rs1);
            lat.imm = *shamt;
            lat.ctrl.alu = AluOp::Sll;
            lat.ctrl.b_src = OpBSrc::Imm;
            lat.ctrl.reg_write = true;
        }
        Instruction::Load { rd, rs1, offset } => {
            lat.rd = Some(*rd);
            lat.rs1 = Some(*rs1);
            lat.a = cpu.regs.read(*rs1);
            lat.imm = *offset as u32;
            lat.ctrl.alu = AluOp::Add;
            lat.ctrl.b_src = OpBSrc::Imm;
            lat.ctrl.mem_read = true;
            lat.ctrl.reg_write = true;
        }
        Instruction::Store { rs2, rs1, offset } => {
            lat.rs1 = Some(*rs1);
            lat.rs2 = Some(*rs2);
            lat.a = cpu.regs.read(*rs1);
            lat.b = cpu.regs.read(*rs2);
            lat.imm = *offset as u32;
            lat.ctrl.alu = AluOp::Add;
            lat.ctrl.b_src = OpBSrc::Imm;
            lat.ctrl.mem_write = true;
        }
        Instruction::Branch {
            rs1, rs2, target, ..
        } => {
            lat.rs1 = Some(*rs1);
            lat.rs2 = Some(*rs2);
            lat.a = cpu.regs.read(*rs1);
            lat.b = cpu.regs.read(*rs2);
            // The resolved target lives in the immediate field; an
            // undefined label falls back to the sequential next PC.
            lat.imm = cpu.program.label(target).unwrap_or(cpu.if_id.npc);
            lat.ctrl.b_src = OpBSrc::Reg2;
            lat.ctrl.branch = true;
        }
    }

    if cpu.trace_enabled() {
        eprintln!(
            "ID  pc={:#010x} a={:#010x} b={:#010x} imm={:#010x}",
            lat.addr, lat.a, lat.b, lat.imm
        );
    }

    cpu.id_ex = lat;
}
