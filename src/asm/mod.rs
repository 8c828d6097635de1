//! Assembler front end.
//!
//! Splits source text into physical lines, strips comments, recognizes
//! `LABEL:` prefixes, and validates each instruction against its operand
//! shape. Problems are collected as per-line diagnostics rather than
//! aborting at the first failure; label resolution is deferred to the
//! loader.

/// Line parsing and per-shape operand validation.
pub mod parser;

pub use parser::{assemble, parse_program, AssembleResponse, Diagnostic, ParsedInstruction, Severity, Statement};
