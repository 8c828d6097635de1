use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::IfId;

pub fn fetch_stage(cpu: &mut Cpu) {
    if cpu.stall {
        // IF frozen: PC and IF/ID keep their contents.
        return;
    }

    let (encoded, raw) = match cpu.program.at(cpu.pc) {
        Some(record) => (record.encoded, record.raw.clone()),
        None => {
            cpu.if_id = IfId::bubble();
            cpu.halted = true;
            return;
        }
    };

    if cpu.trace_enabled() {
        eprintln!("IF  pc={:#010x} inst={:#010x}", cpu.pc, encoded);
    }

    cpu.if_id = IfId {
        bubble: false,
        ir: encoded,
        pc: cpu.pc,
        npc: cpu.pc.wrapping_add(4),
        addr: cpu.pc,
        raw,
    };
    cpu.halted = false;
    cpu.pc = cpu.if_id.npc;
}
