//! Decode Round Trips.
//!
//! Every packer has an inverse in `InstructionBits`/`decode`: extracting the
//! fields of a packed word yields the masked inputs.

use proptest::prelude::*;
use rvasm_core::isa::encode::{encode_b, encode_i, encode_j, encode_r, encode_s, encode_u};
use rvasm_core::isa::instruction::{decode, sign_extend, Decoded, InstructionBits};
use rvasm_core::isa::opcodes;

#[test]
fn decode_add() {
    let d = decode(0x003100B3);
    assert_eq!(
        d,
        Decoded {
            raw: 0x003100B3,
            opcode: opcodes::OP_REG,
            rd: 1,
            rs1: 2,
            rs2: 3,
            funct3: 0,
            funct7: 0,
            imm: 0,
        }
    );
}

#[test]
fn decode_addi() {
    let d = decode(0x20010093);
    assert_eq!(d.opcode, opcodes::OP_IMM);
    assert_eq!(d.rd, 1);
    assert_eq!(d.rs1, 2);
    assert_eq!(d.imm, 512);
}

#[test]
fn decode_negative_immediates() {
    assert_eq!(decode(0xFF010113).imm, -16);
    assert_eq!(decode(0xFEA12C23).imm, -8);
    assert_eq!(decode(0xFE051CE3).imm, -8);
    assert_eq!(decode(0xFFDFF0EF).imm, -4);
}

#[test]
fn decode_upper_immediate_is_unshifted() {
    assert_eq!(decode(0x123450B7).imm, 0x12345);
}

#[test]
fn unknown_opcode_has_zero_immediate() {
    assert_eq!(decode(0xFFFF_FFFF).imm, 0);
}

#[test]
fn sign_extend_edges() {
    assert_eq!(sign_extend(0x800, 12), -2048);
    assert_eq!(sign_extend(0x7FF, 12), 2047);
    assert_eq!(sign_extend(0x1000, 13), -4096);
    assert_eq!(sign_extend(0xFFF, 12), -1);
}

#[test]
fn decoded_display_lists_fields() {
    assert_eq!(
        decode(0x003100B3).to_string(),
        "opcode=0x33 rd=x1 rs1=x2 rs2=x3 funct3=0 funct7=0x00 imm=0"
    );
}

proptest! {
    #[test]
    fn r_type_roundtrip(
        opcode in any::<u32>(),
        funct7 in any::<u32>(),
        funct3 in any::<u32>(),
        rd in any::<u32>(),
        rs1 in any::<u32>(),
        rs2 in any::<u32>(),
    ) {
        let w = encode_r(opcode, funct7, funct3, rd, rs1, rs2);
        prop_assert_eq!(w.opcode(), opcode & 0x7F);
        prop_assert_eq!(w.funct7(), funct7 & 0x7F);
        prop_assert_eq!(w.funct3(), funct3 & 0x7);
        prop_assert_eq!(w.rd(), rd & 0x1F);
        prop_assert_eq!(w.rs1(), rs1 & 0x1F);
        prop_assert_eq!(w.rs2(), rs2 & 0x1F);
    }

    #[test]
    fn i_type_roundtrip(rd in 0u32..32, rs1 in 0u32..32, imm in -2048i32..=2047) {
        let w = encode_i(opcodes::OP_IMM, 0, rd, rs1, imm as u32);
        prop_assert_eq!(w.imm_i(), imm);
        prop_assert_eq!(w.imm_i_bits(), (imm as u32) & 0xFFF);
        prop_assert_eq!(decode(w).imm, imm);
    }

    #[test]
    fn s_type_roundtrip(rs1 in 0u32..32, rs2 in 0u32..32, imm in -2048i32..=2047) {
        let w = encode_s(opcodes::OP_STORE, 0b010, rs1, rs2, imm as u32);
        prop_assert_eq!(w.rs1(), rs1);
        prop_assert_eq!(w.rs2(), rs2);
        prop_assert_eq!(w.imm_s(), imm);
    }

    #[test]
    fn b_type_roundtrip(rs1 in 0u32..32, rs2 in 0u32..32, half in -2048i32..=2047) {
        let offset = half * 2;
        let w = encode_b(opcodes::OP_BRANCH, 0, rs1, rs2, offset as u32);
        prop_assert_eq!(w.rs1(), rs1);
        prop_assert_eq!(w.rs2(), rs2);
        prop_assert_eq!(w.imm_b(), offset);
    }

    #[test]
    fn u_type_roundtrip(rd in 0u32..32, imm in 0u32..0x10_0000) {
        let w = encode_u(opcodes::OP_LUI, rd, imm);
        prop_assert_eq!(w.rd(), rd);
        prop_assert_eq!(w.imm_u(), imm);
    }

    #[test]
    fn j_type_roundtrip(rd in 0u32..32, half in -(1i32 << 19)..(1i32 << 19)) {
        let offset = half * 2;
        let w = encode_j(opcodes::OP_JAL, rd, offset as u32);
        prop_assert_eq!(w.rd(), rd);
        prop_assert_eq!(w.imm_j(), offset);
    }
}
