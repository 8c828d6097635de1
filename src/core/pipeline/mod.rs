//! Instruction pipeline support.
//!
//! This module contains the pipeline latches separating the five stages,
//! the control signals generated during decode, and the data hazard
//! detection logic.

/// Data hazard detection.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

pub use latches::{ExMem, IdEx, IfId, MemWb};
pub use signals::{AluOp, ControlSignals, OpBSrc};
