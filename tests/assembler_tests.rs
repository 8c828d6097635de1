//! Assembler validation tests.
//!
//! Exercises tokenization, label handling, per-shape operand validation,
//! and diagnostic collection.

use rv32_pipeline::asm::{assemble, parse_program, Severity};

// ══════════════════════════════════════════════════════════
// 1. Well-formed programs
// ══════════════════════════════════════════════════════════

#[test]
fn every_supported_mnemonic_assembles() {
    let source = "\
ADD x1, x2, x3
SUB x1, x2, x3
AND x1, x2, x3
OR x1, x2, x3
SLL x1, x2, x3
SLT x1, x2, x3
ADDI x1, x2, 5
ORI x1, x2, 5
SLLI x1, x2, 3
LW x1, 0(x2)
SW x1, 0(x2)
BEQ x1, x2, done
BNE x1, x2, done
BLT x1, x2, done
BGE x1, x2, done
done:";
    let res = assemble(source);
    assert!(res.success, "unexpected errors: {:?}", res.errors);
    assert_eq!(res.instructions.len(), 15);
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let source = "# full-line comment\n\n  ADDI x1, x0, 1  # trailing comment\n\n";
    let res = assemble(source);
    assert!(res.success);
    assert_eq!(res.instructions.len(), 1);
    assert_eq!(res.instructions[0].line, 3);
    assert_eq!(res.instructions[0].opcode, "ADDI");
    assert_eq!(res.instructions[0].raw, "ADDI x1, x0, 1");
}

#[test]
fn commas_are_optional() {
    let res = assemble("ADD x1 x2 x3");
    assert!(res.success);
    assert_eq!(res.instructions[0].opcode, "ADD");
}

#[test]
fn mnemonics_are_case_insensitive() {
    let res = assemble("addi x1, x0, 5");
    assert!(res.success);
    assert_eq!(res.instructions[0].opcode, "ADDI");
}

#[test]
fn negative_immediates_parse() {
    let res = assemble("ADDI x1, x0, -1\nLW x2, -4(x1)");
    assert!(res.success, "unexpected errors: {:?}", res.errors);
}

#[test]
fn bare_label_line_carries_no_instruction() {
    let (statements, errors) = parse_program("loop:\nADDI x1, x0, 1");
    assert!(errors.is_empty());
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].label.as_deref(), Some("loop"));
    assert!(statements[0].inst.is_none());
    assert!(statements[1].inst.is_some());
}

#[test]
fn inline_label_keeps_its_instruction() {
    let (statements, errors) = parse_program("L: ADDI x6, x0, 42");
    assert!(errors.is_empty());
    assert_eq!(statements[0].label.as_deref(), Some("L"));
    let inst = statements[0].inst.as_ref().expect("instruction present");
    assert_eq!(inst.mnemonic, "ADDI");
    assert_eq!(inst.raw, "ADDI x6, x0, 42");
    assert_eq!(inst.operands, vec!["x6", "x0", "42"]);
}

#[test]
fn underscore_labels_are_valid() {
    let res = assemble("_start: ADDI x1, x0, 1\nBEQ x0, x0, _start");
    assert!(res.success, "unexpected errors: {:?}", res.errors);
}

// ══════════════════════════════════════════════════════════
// 2. Rejected programs
// ══════════════════════════════════════════════════════════

#[test]
fn unknown_mnemonic_is_rejected() {
    let res = assemble("MUL x1, x2, x3");
    assert!(!res.success);
    assert_eq!(res.errors.len(), 1);
    assert!(res.errors[0].message.contains("Invalid opcode 'MUL'"));
}

#[test]
fn wrong_arity_is_rejected() {
    let res = assemble("ADD x1, x2");
    assert!(!res.success);
    assert!(res.errors[0].message.contains("Wrong format for ADD"));
}

#[test]
fn register_out_of_range_is_rejected() {
    let res = assemble("ADD x1, x32, x3");
    assert!(!res.success);
    assert!(res.errors[0].message.contains("Invalid register 'x32'"));
}

#[test]
fn register_must_use_x_prefix() {
    let res = assemble("ADD x1, y2, x3");
    assert!(!res.success);
    assert!(res.errors[0].message.contains("Invalid register 'y2'"));
}

#[test]
fn non_integer_immediate_is_rejected() {
    let res = assemble("ADDI x1, x0, five");
    assert!(!res.success);
    assert!(res.errors[0].message.contains("must be an integer"));
}

#[test]
fn memory_operand_needs_parentheses() {
    let res = assemble("LW x1, 0x2");
    assert!(!res.success);
    assert!(res.errors[0].message.contains("Invalid memory format"));
}

#[test]
fn memory_operand_offset_must_be_integer() {
    let res = assemble("LW x1, q(x2)");
    assert!(!res.success);
    assert!(res.errors[0].message.contains("Offset 'q' must be an integer"));
}

#[test]
fn memory_operand_base_must_be_register() {
    let res = assemble("SW x1, 0(zero)");
    assert!(!res.success);
    assert!(res.errors[0].message.contains("Invalid base register 'zero'"));
}

#[test]
fn branch_target_must_be_identifier() {
    let res = assemble("BEQ x1, x2, 1loop");
    assert!(!res.success);
    assert!(res.errors[0].message.contains("Invalid label name '1loop'"));
}

#[test]
fn invalid_label_definition_is_rejected() {
    let res = assemble("9lives: ADDI x1, x0, 1");
    assert!(!res.success);
    assert!(res.errors[0].message.contains("Invalid label name '9lives'"));
}

// ══════════════════════════════════════════════════════════
// 3. Diagnostic collection
// ══════════════════════════════════════════════════════════

#[test]
fn all_bad_lines_are_reported() {
    let source = "ADDI x1, x0, 1\nBADOP x1\nADD x1, x2\nADDI x2, x0, 2\nLW x1, nope";
    let res = assemble(source);
    assert!(!res.success);
    assert_eq!(res.errors.len(), 3);
    let lines: Vec<usize> = res.errors.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![2, 3, 5]);
    // The good lines still appear in the listing.
    assert_eq!(res.instructions.len(), 2);
}

#[test]
fn diagnostics_carry_error_severity() {
    let res = assemble("NOPE");
    assert_eq!(res.errors[0].severity, Severity::Error);
    let json = serde_json::to_value(&res.errors[0]).expect("diagnostic serializes");
    assert_eq!(json["severity"], "error");
    assert_eq!(json["line"], 1);
}
