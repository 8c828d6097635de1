//! Machine-word encoder for the supported RV32I subset.
//!
//! Packs validated instructions into their 32-bit encodings using the
//! standard R/I/S/B field layouts. Branch offsets are computed against the
//! completed label map; a branch whose label is never defined encodes with
//! an offset of zero so the program image stays well formed. Immediates
//! are masked to their field width; callers are responsible for range.

use std::collections::BTreeMap;

use super::instruction::{BranchCond, ImmOp, Instruction, RegOp};
use super::rv32i::{funct3, funct7, opcodes};

/// Canonical no-op encoding (`ADDI x0, x0, 0`).
pub const NOP: u32 = 0x0000_0013;

fn encode_r(rd: usize, f3: u32, rs1: usize, rs2: usize, f7: u32) -> u32 {
    (f7 << 25)
        | ((rs2 as u32) << 20)
        | ((rs1 as u32) << 15)
        | (f3 << 12)
        | ((rd as u32) << 7)
        | opcodes::OP_REG
}

fn encode_i(opcode: u32, rd: usize, f3: u32, rs1: usize, imm: u32) -> u32 {
    ((imm & 0xfff) << 20) | ((rs1 as u32) << 15) | (f3 << 12) | ((rd as u32) << 7) | opcode
}

fn encode_s(f3: u32, rs1: usize, rs2: usize, imm: u32) -> u32 {
    let imm = imm & 0xfff;
    ((imm >> 5) << 25)
        | ((rs2 as u32) << 20)
        | ((rs1 as u32) << 15)
        | (f3 << 12)
        | ((imm & 0x1f) << 7)
        | opcodes::OP_STORE
}

fn encode_b(f3: u32, rs1: usize, rs2: usize, offset: i32) -> u32 {
    // 13-bit signed offset in multiples of 2; bit 0 is implicit zero.
    let imm = (offset as u32) & 0x1fff;
    (((imm >> 12) & 0x1) << 31)
        | (((imm >> 5) & 0x3f) << 25)
        | ((rs2 as u32) << 20)
        | ((rs1 as u32) << 15)
        | (f3 << 12)
        | (((imm >> 1) & 0xf) << 8)
        | (((imm >> 11) & 0x1) << 7)
        | opcodes::OP_BRANCH
}

/// Encodes one instruction placed at `addr` against the completed label map.
pub fn encode(inst: &Instruction, addr: u32, labels: &BTreeMap<String, u32>) -> u32 {
    match inst {
        Instruction::Reg { op, rd, rs1, rs2 } => {
            let (f3, f7) = match op {
                RegOp::Add => (funct3::ADD_SUB, funct7::DEFAULT),
                RegOp::Sub => (funct3::ADD_SUB, funct7::SUB),
                RegOp::Sll => (funct3::SLL, funct7::DEFAULT),
                RegOp::Slt => (funct3::SLT, funct7::DEFAULT),
                RegOp::Or => (funct3::OR, funct7::DEFAULT),
                RegOp::And => (funct3::AND, funct7::DEFAULT),
            };
            encode_r(*rd, f3, *rs1, *rs2, f7)
        }
        Instruction::ImmArith { op, rd, rs1, imm } => {
            let f3 = match op {
                ImmOp::Addi => funct3::ADD_SUB,
                ImmOp::Ori => funct3::OR,
            };
            encode_i(opcodes::OP_IMM, *rd, f3, *rs1, *imm as u32)
        }
        Instruction::ImmShift { rd, rs1, shamt } => {
            let imm = (funct7::DEFAULT << 5) | (shamt & 0x1f);
            encode_i(opcodes::OP_IMM, *rd, funct3::SLL, *rs1, imm)
        }
        Instruction::Load { rd, rs1, offset } => {
            encode_i(opcodes::OP_LOAD, *rd, funct3::LW, *rs1, *offset as u32)
        }
        Instruction::Store { rs2, rs1, offset } => {
            encode_s(funct3::SW, *rs1, *rs2, *offset as u32)
        }
        Instruction::Branch {
            cond,
            rs1,
            rs2,
            target,
        } => {
            let f3 = match cond {
                BranchCond::Eq => funct3::BEQ,
                BranchCond::Ne => funct3::BNE,
                BranchCond::Lt => funct3::BLT,
                BranchCond::Ge => funct3::BGE,
            };
            // An undefined label encodes with offset zero; the word keeps
            // its branch opcode and funct3 so the execute stage still
            // evaluates the right condition.
            let offset = labels
                .get(target)
                .map(|target_addr| target_addr.wrapping_sub(addr) as i32)
                .unwrap_or(0);
            encode_b(f3, *rs1, *rs2, offset)
        }
    }
}
