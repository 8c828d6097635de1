use crate::core::cpu::Cpu;

pub fn wb_stage(cpu: &mut Cpu) {
    if cpu.mem_wb.bubble {
        return;
    }

    cpu.stats.instructions_retired += 1;

    if cpu.mem_wb.reg_write {
        if let Some(rd) = cpu.mem_wb.rd {
            let value = if cpu.mem_wb.mem_to_reg {
                cpu.mem_wb.lmd
            } else {
                cpu.mem_wb.alu_output
            };
            if cpu.trace_enabled() && rd != 0 {
                eprintln!("WB  pc={:#010x} x{} <= {:#010x}", cpu.mem_wb.addr, rd, value);
            }
            // Writes to register x0 are dropped by the register file.
            cpu.regs.write(rd, value);
        }
    }
}
