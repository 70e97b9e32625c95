//! # Single-Line Front End Tests

use rstest::rstest;
use rvasm_core::asm::line::{assemble_line, parse_int, parse_line};
use rvasm_core::isa::mnemonic::{Mnemonic, Operand};
use rvasm_core::EncodeError;

#[rstest]
#[case("add x1, x2, x3", 0x003100B3)]
#[case("addi x1, x2, 512", 0x20010093)]
#[case("ADDI ra, sp, 0x200", 0x20010093)]
#[case("addi sp, sp, -16", 0xFF010113)]
#[case("lw a0, 8(sp)", 0x00812503)]
#[case("lbu t0, (a0)", 0x00054283)]
#[case("sw a0, -8(sp)", 0xFEA12C23)]
#[case("jalr zero, 0(ra)", 0x00008067)]
#[case("beq x1, x2, 8", 0x00208463)]
#[case("lui ra, 0x12345", 0x123450B7)]
#[case("auipc t0, 0x12345", 0x12345297)]
#[case("jal ra, -4", 0xFFDFF0EF)]
#[case("  add x1,x2,x3   # trailing comment", 0x003100B3)]
fn assembles(#[case] line: &str, #[case] expected: u32) {
    assert_eq!(assemble_line(line), Ok(expected), "{line}");
}

#[test]
fn memory_operand_expands_base_then_offset() {
    let (mnemonic, operands) = parse_line("sw a0, -8(sp)").unwrap();
    assert_eq!(mnemonic, Mnemonic::Sw);
    assert_eq!(
        operands,
        vec![Operand::Reg(10), Operand::Reg(2), Operand::Imm(-8)]
    );
}

#[test]
fn unknown_mnemonic() {
    assert_eq!(
        assemble_line("mul x1, x2, x3"),
        Err(EncodeError::UnknownMnemonic("mul".to_owned()))
    );
    assert_eq!(
        assemble_line("   "),
        Err(EncodeError::UnknownMnemonic(String::new()))
    );
}

#[test]
fn bad_operand() {
    assert_eq!(
        assemble_line("add x1, x2, q7"),
        Err(EncodeError::InvalidOperand("q7".to_owned()))
    );
    assert_eq!(
        assemble_line("lw a0, 8(q7)"),
        Err(EncodeError::InvalidOperand("8(q7)".to_owned()))
    );
}

#[test]
fn range_errors_surface() {
    assert!(matches!(
        assemble_line("addi x1, x2, 4096"),
        Err(EncodeError::ImmediateOutOfRange { value: 4096, .. })
    ));
    assert_eq!(
        assemble_line("beq x1, x2, 3"),
        Err(EncodeError::MisalignedOffset { value: 3 })
    );
    assert_eq!(
        assemble_line("add x1, x2"),
        Err(EncodeError::OperandCount {
            mnemonic: "add",
            expected: 3,
            found: 2,
        })
    );
}

#[test]
fn integer_forms() {
    assert_eq!(parse_int("-2048"), Some(-2048));
    assert_eq!(parse_int("0X1f"), Some(31));
    assert_eq!(parse_int("0x-1"), None);
    assert_eq!(parse_int("0b102"), None);
    assert_eq!(parse_int("12a"), None);
}
