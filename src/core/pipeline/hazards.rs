//! Data hazard detection.
//!
//! Without forwarding paths, an instruction in decode must wait until every
//! in-flight producer of one of its source registers has drained through
//! write-back. Detection inspects the instruction sitting in IF/ID and the
//! destination register of each non-bubble latch downstream of it.

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::program::Program;

/// Checks whether the instruction in IF/ID must stall this cycle.
///
/// A stall is declared when any of ID/EX, EX/MEM, or MEM/WB carries a
/// register-writing instruction whose destination matches one of the IF/ID
/// instruction's source registers. Register x0 never causes a hazard.
pub fn raw_hazard(
    program: &Program,
    if_id: &IfId,
    id_ex: &IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
) -> bool {
    if if_id.bubble {
        return false;
    }
    let Some(record) = program.at(if_id.addr) else {
        return false;
    };

    for src in record.inst.source_regs().into_iter().flatten() {
        if src == 0 {
            continue;
        }
        if !id_ex.bubble && id_ex.ctrl.reg_write && id_ex.rd == Some(src) {
            return true;
        }
        if !ex_mem.bubble && ex_mem.ctrl.reg_write && ex_mem.rd == Some(src) {
            return true;
        }
        if !mem_wb.bubble && mem_wb.reg_write && mem_wb.rd == Some(src) {
            return true;
        }
    }
    false
}
