//! Mnemonic Table.
//!
//! Encodes one instance of each table row and compares it with the word a
//! reference assembler produces.

use rstest::rstest;
use rvasm_core::isa::mnemonic::{Format, Mnemonic, Operand};
use rvasm_core::EncodeError;

use Operand::{Imm, Reg};

#[rstest]
#[case(Mnemonic::Add, &[Reg(1), Reg(2), Reg(3)], 0x003100B3)]
#[case(Mnemonic::Sub, &[Reg(1), Reg(2), Reg(3)], 0x403100B3)]
#[case(Mnemonic::Sra, &[Reg(5), Reg(6), Reg(7)], 0x407352B3)]
#[case(Mnemonic::Xor, &[Reg(10), Reg(11), Reg(12)], 0x00C5C533)]
#[case(Mnemonic::Addi, &[Reg(1), Reg(2), Imm(512)], 0x20010093)]
#[case(Mnemonic::Slti, &[Reg(1), Reg(2), Imm(-1)], 0xFFF12093)]
#[case(Mnemonic::Andi, &[Reg(5), Reg(6), Imm(0xFF)], 0x0FF37293)]
#[case(Mnemonic::Lw, &[Reg(10), Reg(2), Imm(8)], 0x00812503)]
#[case(Mnemonic::Lbu, &[Reg(5), Reg(10), Imm(0)], 0x00054283)]
#[case(Mnemonic::Jalr, &[Reg(0), Reg(1), Imm(0)], 0x00008067)]
#[case(Mnemonic::Sw, &[Reg(10), Reg(2), Imm(-8)], 0xFEA12C23)]
#[case(Mnemonic::Sb, &[Reg(3), Reg(2), Imm(-0x555)], 0xAA3105A3)]
#[case(Mnemonic::Beq, &[Reg(1), Reg(2), Imm(8)], 0x00208463)]
#[case(Mnemonic::Bne, &[Reg(10), Reg(0), Imm(-8)], 0xFE051CE3)]
#[case(Mnemonic::Blt, &[Reg(1), Reg(2), Imm(4094)], 0x7E20CFE3)]
#[case(Mnemonic::Bgeu, &[Reg(5), Reg(6), Imm(-4096)], 0x8062F063)]
#[case(Mnemonic::Lui, &[Reg(1), Imm(0x12345)], 0x123450B7)]
#[case(Mnemonic::Auipc, &[Reg(1), Imm(-1)], 0xFFFFF097)]
#[case(Mnemonic::Jal, &[Reg(1), Imm(-4)], 0xFFDFF0EF)]
#[case(Mnemonic::Jal, &[Reg(0), Imm((1 << 20) - 2)], 0x7FFFF06F)]
fn encodes_reference_word(
    #[case] mnemonic: Mnemonic,
    #[case] operands: &[Operand],
    #[case] expected: u32,
) {
    assert_eq!(
        mnemonic.encode(operands),
        Ok(expected),
        "{mnemonic} {operands:?}"
    );
}

#[test]
fn every_name_resolves_to_itself() {
    for &m in Mnemonic::ALL {
        assert_eq!(Mnemonic::from_name(m.name()), Some(m));
        assert_eq!(Mnemonic::from_name(&m.name().to_uppercase()), Some(m));
    }
    assert_eq!(Mnemonic::from_name("mul"), None);
}

#[test]
fn format_matches_opcode() {
    for &m in Mnemonic::ALL {
        assert_eq!(Format::of_opcode(m.encoding().opcode), Some(m.format()), "{m}");
    }
}

#[test]
fn wrong_operand_count() {
    assert_eq!(
        Mnemonic::Add.encode(&[Reg(1), Reg(2)]),
        Err(EncodeError::OperandCount {
            mnemonic: "add",
            expected: 3,
            found: 2,
        })
    );
}

#[test]
fn register_where_immediate_expected() {
    assert_eq!(
        Mnemonic::Addi.encode(&[Reg(1), Reg(2), Reg(3)]),
        Err(EncodeError::InvalidOperand("x3".to_owned()))
    );
    assert_eq!(
        Mnemonic::Add.encode(&[Reg(1), Imm(2), Reg(3)]),
        Err(EncodeError::InvalidOperand("2".to_owned()))
    );
}
