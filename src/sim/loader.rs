//! Two-pass program loading and initial state overrides.
//!
//! Validates source through the assembler, resets the engine, applies the
//! optional initial register and memory overrides, then lays the program
//! out in two passes: the first assigns sequential 4-byte addresses and
//! collects labels, the second encodes each instruction against the
//! completed label map. On validation failure nothing is loaded and the
//! engine state is unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::asm::{self, Diagnostic};
use crate::core::program::InstructionRecord;
use crate::core::Cpu;
use crate::isa::encode;
use crate::state::hex32;

/// A 32-bit initialization value: a plain integer or a numeric string with
/// the base auto-detected from its prefix.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum InitValue {
    /// A plain integer; negative values wrap to their 32-bit pattern.
    Int(i64),
    /// Numeric text, e.g. `"42"`, `"0x2a"`, `"-0b101"`.
    Text(String),
}

impl InitValue {
    /// Resolves to a 32-bit word, or `None` when the text form does not
    /// parse.
    pub fn as_word(&self) -> Option<u32> {
        match self {
            InitValue::Int(v) => Some(*v as u32),
            InitValue::Text(s) => parse_int(s).map(|v| v as u32),
        }
    }
}

/// Initial register values keyed by register name (`"x1"`..`"x31"`).
/// `"x0"` and out-of-range names are ignored.
pub type RegisterInit = BTreeMap<String, InitValue>;

/// Initial memory words keyed by address text (base auto-detected).
/// Out-of-range entries are silently skipped.
pub type MemoryInit = BTreeMap<String, InitValue>;

/// One row of the load response program listing.
#[derive(Clone, Debug, Serialize)]
pub struct LoadedInstruction {
    /// Source line number (1-based).
    pub line: usize,
    /// Uppercased mnemonic.
    pub opcode: String,
    /// Instruction text.
    pub raw: String,
    /// Program address, hex formatted.
    pub address: String,
    /// Encoded machine word, hex formatted.
    pub hex: String,
}

/// Result of a `load` operation.
#[derive(Clone, Debug, Serialize)]
pub struct LoadResponse {
    /// True when the program validated and was loaded.
    pub success: bool,
    /// Program listing in address order.
    pub instructions: Vec<LoadedInstruction>,
    /// Label map, addresses hex formatted.
    pub labels: BTreeMap<String, String>,
    /// Collected assembly diagnostics; non-empty exactly when `success`
    /// is false.
    pub errors: Vec<Diagnostic>,
}

/// Validates and loads a program, entirely replacing any prior image.
pub fn load_program(
    cpu: &mut Cpu,
    source: &str,
    initial_registers: Option<&RegisterInit>,
    initial_memory: Option<&MemoryInit>,
) -> LoadResponse {
    let (statements, errors) = asm::parse_program(source);
    if !errors.is_empty() {
        return LoadResponse {
            success: false,
            instructions: Vec::new(),
            labels: BTreeMap::new(),
            errors,
        };
    }

    cpu.reset();

    if let Some(regs) = initial_registers {
        for (name, value) in regs {
            let Some(idx) = name.strip_prefix('x').and_then(|d| d.parse::<usize>().ok()) else {
                continue;
            };
            let Some(word) = value.as_word() else {
                continue;
            };
            // x0 stays hardwired to zero; out-of-range names are ignored.
            if idx > 0 && idx < 32 {
                cpu.regs.write(idx, word);
            }
        }
    }

    if let Some(mem) = initial_memory {
        for (key, value) in mem {
            let Some(addr) = parse_int(key) else {
                continue;
            };
            let Some(word) = value.as_word() else {
                continue;
            };
            if addr >= 0 && (addr as usize) + 4 <= cpu.memory.size() {
                cpu.memory.write_word(addr as u32, word);
            }
        }
    }

    // First pass: assign addresses and collect labels.
    let mut addr = cpu.program_start();
    let mut placed = Vec::new();
    for stmt in &statements {
        if let Some(label) = &stmt.label {
            cpu.program.define_label(label, addr);
        }
        if let Some(inst) = &stmt.inst {
            placed.push((addr, stmt.line, inst.clone()));
            addr = addr.wrapping_add(4);
        }
    }

    // Second pass: encode against the completed label map.
    let mut listing = Vec::with_capacity(placed.len());
    for (addr, line, parsed) in placed {
        let encoded = encode::encode(&parsed.inst, addr, cpu.program.labels());
        listing.push(LoadedInstruction {
            line,
            opcode: parsed.mnemonic.clone(),
            raw: parsed.raw.clone(),
            address: hex32(addr),
            hex: hex32(encoded),
        });
        cpu.program.insert(
            addr,
            InstructionRecord {
                line,
                raw: parsed.raw,
                mnemonic: parsed.mnemonic,
                operands: parsed.operands,
                inst: parsed.inst,
                encoded,
            },
        );
    }

    let labels = cpu
        .program
        .labels()
        .iter()
        .map(|(name, addr)| (name.clone(), hex32(*addr)))
        .collect();

    LoadResponse {
        success: true,
        instructions: listing,
        labels,
        errors: Vec::new(),
    }
}

/// Parses an integer with the base auto-detected from an optional
/// `0x`/`0o`/`0b` prefix, allowing a leading sign.
fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (neg, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = if let Some(d) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        (16, d)
    } else if let Some(d) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        (8, d)
    } else if let Some(d) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (2, d)
    } else {
        (10, body)
    };
    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if neg { -value } else { value })
}
