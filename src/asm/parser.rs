//! Line parsing and per-shape operand validation.

use serde::Serialize;

use crate::isa::instruction::{BranchCond, ImmOp, Instruction, RegOp};

/// Diagnostic severity. Assembly problems are always reported as errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The line is rejected and the program cannot be loaded.
    Error,
}

/// A per-line assembly problem.
#[derive(Clone, Debug, Serialize)]
pub struct Diagnostic {
    /// Source line number (1-based).
    pub line: usize,
    /// Human-readable description of the problem.
    pub message: String,
    /// Diagnostic severity.
    pub severity: Severity,
}

impl Diagnostic {
    fn error(line: usize, message: String) -> Self {
        Self {
            line,
            message,
            severity: Severity::Error,
        }
    }
}

/// A validated instruction together with its source form.
#[derive(Clone, Debug)]
pub struct ParsedInstruction {
    /// Uppercased mnemonic.
    pub mnemonic: String,
    /// Tokenized operand list (comma separators removed).
    pub operands: Vec<String>,
    /// Instruction text with any label prefix and comment removed.
    pub raw: String,
    /// The validated instruction.
    pub inst: Instruction,
}

/// One meaningful source line: an optional label definition and an optional
/// instruction. A bare label line carries no instruction.
#[derive(Clone, Debug)]
pub struct Statement {
    /// Source line number (1-based).
    pub line: usize,
    /// Label defined at this line, if any.
    pub label: Option<String>,
    /// Instruction on this line, if any.
    pub inst: Option<ParsedInstruction>,
}

/// One row of the assemble response listing.
#[derive(Clone, Debug, Serialize)]
pub struct ListedInstruction {
    /// Source line number (1-based).
    pub line: usize,
    /// Uppercased mnemonic.
    pub opcode: String,
    /// Instruction text.
    pub raw: String,
}

/// Result of the standalone `assemble` operation.
#[derive(Clone, Debug, Serialize)]
pub struct AssembleResponse {
    /// True when no line produced a diagnostic.
    pub success: bool,
    /// Instructions in source order.
    pub instructions: Vec<ListedInstruction>,
    /// Collected per-line diagnostics.
    pub errors: Vec<Diagnostic>,
}

/// Validates a program without loading it.
pub fn assemble(source: &str) -> AssembleResponse {
    let (statements, errors) = parse_program(source);
    let instructions = statements
        .iter()
        .filter_map(|s| {
            s.inst.as_ref().map(|i| ListedInstruction {
                line: s.line,
                opcode: i.mnemonic.clone(),
                raw: i.raw.clone(),
            })
        })
        .collect();
    AssembleResponse {
        success: errors.is_empty(),
        instructions,
        errors,
    }
}

/// Parses source text into statements, collecting diagnostics for every
/// bad line instead of stopping at the first.
pub fn parse_program(source: &str) -> (Vec<Statement>, Vec<Diagnostic>) {
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    for (idx, raw_line) in source.lines().enumerate() {
        let lineno = idx + 1;

        // Everything from '#' to end of line is a comment.
        let code = match raw_line.find('#') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };
        let mut text = code.trim();
        if text.is_empty() {
            continue;
        }

        let mut label = None;
        if let Some(colon) = text.find(':') {
            let name = text[..colon].trim();
            if is_valid_label(name) {
                label = Some(name.to_string());
                text = text[colon + 1..].trim();
            } else {
                errors.push(Diagnostic::error(
                    lineno,
                    format!("Invalid label name '{}'", name),
                ));
                continue;
            }
        }

        if text.chars().all(|c| c == ',' || c.is_whitespace()) {
            // Bare label line, or nothing but separators.
            statements.push(Statement {
                line: lineno,
                label,
                inst: None,
            });
            continue;
        }

        match parse_instruction(text) {
            Ok(inst) => statements.push(Statement {
                line: lineno,
                label,
                inst: Some(inst),
            }),
            Err(message) => errors.push(Diagnostic::error(lineno, message)),
        }
    }

    (statements, errors)
}

fn parse_instruction(text: &str) -> Result<ParsedInstruction, String> {
    // Operand separator commas are treated as whitespace.
    let cleaned = text.replace(',', " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let mnemonic = tokens[0].to_uppercase();
    let operands: Vec<String> = tokens[1..].iter().map(|t| t.to_string()).collect();

    let inst = match mnemonic.as_str() {
        "ADD" | "SUB" | "AND" | "OR" | "SLL" | "SLT" => {
            expect_arity(&mnemonic, &tokens, 4, "rd, rs1, rs2")?;
            let rd = parse_register(tokens[1])?;
            let rs1 = parse_register(tokens[2])?;
            let rs2 = parse_register(tokens[3])?;
            let op = match mnemonic.as_str() {
                "ADD" => RegOp::Add,
                "SUB" => RegOp::Sub,
                "AND" => RegOp::And,
                "OR" => RegOp::Or,
                "SLL" => RegOp::Sll,
                _ => RegOp::Slt,
            };
            Instruction::Reg { op, rd, rs1, rs2 }
        }
        "ADDI" | "ORI" => {
            expect_arity(&mnemonic, &tokens, 4, "rd, rs1, imm")?;
            let rd = parse_register(tokens[1])?;
            let rs1 = parse_register(tokens[2])?;
            let imm = tokens[3]
                .parse::<i64>()
                .map_err(|_| format!("Immediate '{}' must be an integer", tokens[3]))?;
            let op = if mnemonic == "ADDI" {
                ImmOp::Addi
            } else {
                ImmOp::Ori
            };
            Instruction::ImmArith {
                op,
                rd,
                rs1,
                imm: imm as i32,
            }
        }
        "SLLI" => {
            expect_arity(&mnemonic, &tokens, 4, "rd, rs1, shamt")?;
            let rd = parse_register(tokens[1])?;
            let rs1 = parse_register(tokens[2])?;
            let shamt = tokens[3]
                .parse::<i64>()
                .map_err(|_| format!("Immediate '{}' must be an integer", tokens[3]))?;
            Instruction::ImmShift {
                rd,
                rs1,
                shamt: (shamt as u32) & 0x1f,
            }
        }
        "LW" => {
            expect_arity(&mnemonic, &tokens, 3, "rd, offset(base)")?;
            let rd = parse_register(tokens[1])?;
            let (offset, rs1) = parse_mem_operand(tokens[2])?;
            Instruction::Load { rd, rs1, offset }
        }
        "SW" => {
            expect_arity(&mnemonic, &tokens, 3, "rs2, offset(base)")?;
            let rs2 = parse_register(tokens[1])?;
            let (offset, rs1) = parse_mem_operand(tokens[2])?;
            Instruction::Store { rs2, rs1, offset }
        }
        "BEQ" | "BNE" | "BLT" | "BGE" => {
            expect_arity(&mnemonic, &tokens, 4, "rs1, rs2, label")?;
            let rs1 = parse_register(tokens[1])?;
            let rs2 = parse_register(tokens[2])?;
            let target = tokens[3];
            if !is_valid_label(target) {
                return Err(format!("Invalid label name '{}'", target));
            }
            let cond = match mnemonic.as_str() {
                "BEQ" => BranchCond::Eq,
                "BNE" => BranchCond::Ne,
                "BLT" => BranchCond::Lt,
                _ => BranchCond::Ge,
            };
            Instruction::Branch {
                cond,
                rs1,
                rs2,
                target: target.to_string(),
            }
        }
        _ => return Err(format!("Invalid opcode '{}'", mnemonic)),
    };

    Ok(ParsedInstruction {
        mnemonic,
        operands,
        raw: text.to_string(),
        inst,
    })
}

fn expect_arity(
    mnemonic: &str,
    tokens: &[&str],
    expected: usize,
    shape: &str,
) -> Result<(), String> {
    if tokens.len() != expected {
        return Err(format!(
            "Wrong format for {}. Expected: {} {}",
            mnemonic, mnemonic, shape
        ));
    }
    Ok(())
}

fn parse_register(tok: &str) -> Result<usize, String> {
    register_index(tok).ok_or_else(|| format!("Invalid register '{}'", tok))
}

fn register_index(tok: &str) -> Option<usize> {
    let digits = tok.strip_prefix('x')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let idx: usize = digits.parse().ok()?;
    (idx <= 31).then_some(idx)
}

/// Parses an `offset(base)` memory operand into its byte offset and base
/// register index.
fn parse_mem_operand(tok: &str) -> Result<(i32, usize), String> {
    let open = tok
        .find('(')
        .filter(|_| tok.ends_with(')'))
        .ok_or_else(|| format!("Invalid memory format '{}'. Expected offset(base)", tok))?;
    let offset_str = &tok[..open];
    let base = &tok[open + 1..tok.len() - 1];

    let offset = offset_str
        .parse::<i64>()
        .map_err(|_| format!("Offset '{}' must be an integer", offset_str))?;
    let rs1 =
        register_index(base).ok_or_else(|| format!("Invalid base register '{}'", base))?;
    Ok((offset as i32, rs1))
}

fn is_valid_label(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
