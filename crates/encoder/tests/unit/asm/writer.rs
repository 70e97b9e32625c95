//! # Stream Writer Tests
//!
//! Byte order, data directives and the checked emit paths of `ProgramWriter`.

use pretty_assertions::assert_eq;
use rvasm_core::isa::abi::{X1, X10, X2, X3, X5};
use rvasm_core::isa::mnemonic::{Mnemonic, Operand};
use rvasm_core::{EncodeError, ProgramWriter};

#[test]
fn words_are_little_endian() {
    let mut asm = ProgramWriter::new();
    asm.add(X1, X2, X3);
    assert_eq!(asm.as_bytes(), &[0xB3, 0x00, 0x31, 0x00]);
}

#[test]
fn mixed_format_stream() {
    let mut asm = ProgramWriter::new();
    asm.add(X1, X2, X3);
    asm.addi(X1, X2, 512);
    asm.auipc(X5, 0x12345);
    asm.jal(X10, 0x12344);
    asm.beq(X1, X2, 0x556);
    asm.sb(X2, X3, -0x555);

    let words: Vec<u32> = asm.words().collect();
    assert_eq!(
        words,
        vec![
            0x003100B3, 0x20010093, 0x12345297, 0x3441256F, 0x54208B63, 0xAA3105A3,
        ]
    );
    assert_eq!(asm.len(), 24);
}

#[test]
fn data_directives() {
    let mut asm = ProgramWriter::new();
    asm.db(&[0x01, 0x02]);
    asm.dh(&[0x0403]);
    asm.dw(&[0x0807_0605]);
    asm.dd(&[0x100F_0E0D_0C0B_0A09]);
    let expected: Vec<u8> = (1..=16).collect();
    assert_eq!(asm.into_bytes(), expected);
}

#[test]
fn words_skip_trailing_partial_word() {
    let mut asm = ProgramWriter::new();
    asm.word(0xDEAD_BEEF);
    asm.db(&[0xAA, 0xBB]);
    assert_eq!(asm.words().collect::<Vec<_>>(), vec![0xDEAD_BEEF]);
    assert_eq!(asm.len(), 6);
}

#[test]
fn empty_writer() {
    let asm = ProgramWriter::default();
    assert!(asm.is_empty());
    assert_eq!(asm.words().count(), 0);
}

#[test]
fn emit_checked() {
    let mut asm = ProgramWriter::new();
    assert_eq!(
        asm.emit(Mnemonic::Sub, &[Operand::Reg(1), Operand::Reg(2), Operand::Reg(3)]),
        Ok(0x403100B3)
    );
    assert_eq!(asm.emit_line("addi x1, x2, 512"), Ok(0x20010093));
    assert_eq!(
        asm.words().collect::<Vec<_>>(),
        vec![0x403100B3, 0x20010093]
    );
}

#[test]
fn failed_emit_writes_nothing() {
    let mut asm = ProgramWriter::new();
    assert_eq!(
        asm.emit_line("add x1, x2, x40"),
        Err(EncodeError::InvalidOperand("x40".to_owned()))
    );
    assert!(matches!(
        asm.emit(Mnemonic::Addi, &[Operand::Reg(1), Operand::Reg(2), Operand::Imm(5000)]),
        Err(EncodeError::ImmediateOutOfRange { .. })
    ));
    assert!(asm.is_empty());
}
