use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::MemWb;

pub fn mem_stage(cpu: &mut Cpu) {
    if cpu.ex_mem.bubble {
        cpu.mem_wb = MemWb::bubble();
        return;
    }

    let ex = cpu.ex_mem.clone();

    let mut lat = MemWb::bubble();
    lat.bubble = false;
    lat.ir = ex.ir;
    lat.addr = ex.addr;
    lat.raw = ex.raw.clone();
    lat.alu_output = ex.alu_output;
    lat.rd = ex.rd;
    lat.reg_write = ex.ctrl.reg_write;

    if ex.ctrl.mem_read {
        lat.lmd = cpu.memory.read_word(ex.alu_output);
        lat.mem_to_reg = true;
        if cpu.trace_enabled() {
            eprintln!(
                "MEM pc={:#010x} load addr={:#010x} data={:#010x}",
                ex.addr, ex.alu_output, lat.lmd
            );
        }
    } else if ex.ctrl.mem_write {
        cpu.memory.write_word(ex.alu_output, ex.b);
        if cpu.trace_enabled() {
            eprintln!(
                "MEM pc={:#010x} store addr={:#010x} data={:#010x}",
                ex.addr, ex.alu_output, ex.b
            );
        }
    }

    cpu.mem_wb = lat;
}
