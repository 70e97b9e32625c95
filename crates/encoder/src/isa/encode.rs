//! RISC-V Instruction Encoder.
//!
//! Packs instruction fields into 32-bit words for all base formats
//! (R, I, S, B, U, J).
//!
//! The raw packers (`encode_*`) are total: each field is masked to its width
//! and shifted into place, so out-of-range inputs keep their low bits and
//! negative immediates are stored as their two's-complement low bits. Callers
//! must not rely on that truncation for validation; the `checked_encode_*`
//! variants reject out-of-range operands with an [`EncodeError`] instead.

use tracing::debug;

use crate::common::error::EncodeError;
use crate::isa::abi::REG_COUNT;
use crate::isa::instruction::{
    FUNCT3_MASK, FUNCT3_SHIFT, FUNCT7_MASK, FUNCT7_SHIFT, I_IMM_SHIFT, IMM12_MASK, IMM20_MASK,
    OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS1_SHIFT, RS2_SHIFT, U_IMM_SHIFT,
};
use crate::isa::{funct3, funct7, opcodes};

/// Places the fields shared by every format that has them.
#[inline(always)]
const fn base(opcode: u32, funct3: u32, rd: u32, rs1: u32) -> u32 {
    ((rs1 & REG_MASK) << RS1_SHIFT)
        | ((funct3 & FUNCT3_MASK) << FUNCT3_SHIFT)
        | ((rd & REG_MASK) << RD_SHIFT)
        | ((opcode & OPCODE_MASK) << OPCODE_SHIFT)
}

/// Encodes an R-type instruction.
///
/// Layout: `funct7[31:25] | rs2[24:20] | rs1[19:15] | funct3[14:12] | rd[11:7] | opcode[6:0]`.
///
/// # Arguments
///
/// * `opcode` - Major opcode (7 bits).
/// * `funct7` - Secondary function code (7 bits).
/// * `funct3` - Function code (3 bits).
/// * `rd`, `rs1`, `rs2` - Register indices (5 bits each).
#[inline]
pub const fn encode_r(opcode: u32, funct7: u32, funct3: u32, rd: u32, rs1: u32, rs2: u32) -> u32 {
    ((funct7 & FUNCT7_MASK) << FUNCT7_SHIFT)
        | ((rs2 & REG_MASK) << RS2_SHIFT)
        | base(opcode, funct3, rd, rs1)
}

/// Encodes an I-type instruction.
///
/// Layout: `imm[11:0] at [31:20] | rs1 | funct3 | rd | opcode`. The sign of
/// the immediate lives in bit 31; pass a negative `i32` as `imm as u32`.
#[inline]
pub const fn encode_i(opcode: u32, funct3: u32, rd: u32, rs1: u32, imm12: u32) -> u32 {
    ((imm12 & IMM12_MASK) << I_IMM_SHIFT) | base(opcode, funct3, rd, rs1)
}

/// Encodes an S-type instruction.
///
/// Layout: `imm[11:5] at [31:25] | rs2 | rs1 | funct3 | imm[4:0] at [11:7] | opcode`.
#[inline]
pub const fn encode_s(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm12: u32) -> u32 {
    let imm = imm12 & IMM12_MASK;
    ((imm >> 5) << 25)
        | ((rs2 & REG_MASK) << RS2_SHIFT)
        | ((imm & 0x1F) << 7)
        | base(opcode, funct3, 0, rs1)
}

/// Encodes a B-type instruction from a byte offset.
///
/// Layout: `imm[12] at 31 | imm[10:5] at [30:25] | rs2 | rs1 | funct3 |
/// imm[4:1] at [11:8] | imm[11] at 7 | opcode`. Bit 0 of the offset is not
/// encodable and is dropped.
#[inline]
pub const fn encode_b(opcode: u32, funct3: u32, rs1: u32, rs2: u32, offset: u32) -> u32 {
    let bit12 = (offset >> 12) & 1;
    let bits10_5 = (offset >> 5) & 0x3F;
    let bits4_1 = (offset >> 1) & 0xF;
    let bit11 = (offset >> 11) & 1;
    (bit12 << 31)
        | (bits10_5 << 25)
        | ((rs2 & REG_MASK) << RS2_SHIFT)
        | (bits4_1 << 8)
        | (bit11 << 7)
        | base(opcode, funct3, 0, rs1)
}

/// Encodes a U-type instruction.
///
/// `imm20` is the upper immediate itself, not the shifted value: `lui x1, 0x12345`
/// loads `0x12345000`.
#[inline]
pub const fn encode_u(opcode: u32, rd: u32, imm20: u32) -> u32 {
    ((imm20 & IMM20_MASK) << U_IMM_SHIFT) | base(opcode, 0, rd, 0)
}

/// Encodes a J-type instruction from a byte offset.
///
/// Layout: `imm[20] at 31 | imm[10:1] at [30:21] | imm[11] at 20 |
/// imm[19:12] at [19:12] | rd | opcode`. Bit 0 of the offset is dropped.
#[inline]
pub const fn encode_j(opcode: u32, rd: u32, offset: u32) -> u32 {
    let bit20 = (offset >> 20) & 1;
    let bits10_1 = (offset >> 1) & 0x3FF;
    let bit11 = (offset >> 11) & 1;
    let bits19_12 = (offset >> 12) & 0xFF;
    (bit20 << 31) | (bits10_1 << 21) | (bit11 << 20) | (bits19_12 << 12) | base(opcode, 0, rd, 0)
}

/// `add rd, rs1, rs2`
#[inline]
pub const fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    encode_r(opcodes::OP_REG, funct7::DEFAULT, funct3::ADD_SUB, rd, rs1, rs2)
}

/// `sub rd, rs1, rs2`
#[inline]
pub const fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    encode_r(opcodes::OP_REG, funct7::SUB, funct3::ADD_SUB, rd, rs1, rs2)
}

/// `addi rd, rs1, imm12`
#[inline]
pub const fn addi(rd: u32, rs1: u32, imm12: i32) -> u32 {
    encode_i(opcodes::OP_IMM, funct3::ADD_SUB, rd, rs1, imm12 as u32)
}

/// `jalr rd, imm12(rs1)`
#[inline]
pub const fn jalr(rd: u32, rs1: u32, imm12: i32) -> u32 {
    encode_i(opcodes::OP_JALR, funct3::JALR, rd, rs1, imm12 as u32)
}

/// `lui rd, imm20`
#[inline]
pub const fn lui(rd: u32, imm20: u32) -> u32 {
    encode_u(opcodes::OP_LUI, rd, imm20)
}

/// `auipc rd, imm20`
#[inline]
pub const fn auipc(rd: u32, imm20: u32) -> u32 {
    encode_u(opcodes::OP_AUIPC, rd, imm20)
}

/// `jal rd, offset`
#[inline]
pub const fn jal(rd: u32, offset: i32) -> u32 {
    encode_j(opcodes::OP_JAL, rd, offset as u32)
}

/// `beq rs1, rs2, offset`
#[inline]
pub const fn beq(rs1: u32, rs2: u32, offset: i32) -> u32 {
    encode_b(opcodes::OP_BRANCH, funct3::BEQ, rs1, rs2, offset as u32)
}

/// `sb rs2, imm12(rs1)`
#[inline]
pub const fn sb(rs1: u32, rs2: u32, imm12: i32) -> u32 {
    encode_s(opcodes::OP_STORE, funct3::SB, rs1, rs2, imm12 as u32)
}

/// Validates a register index.
///
/// # Errors
///
/// [`EncodeError::RegisterOutOfRange`] when `index` is 32 or above.
pub fn check_reg(index: u32) -> Result<u32, EncodeError> {
    if index < REG_COUNT {
        Ok(index)
    } else {
        debug!(index, "rejecting register index");
        Err(EncodeError::RegisterOutOfRange { index })
    }
}

/// Bounds of a `bits`-wide two's-complement field. Widths are clamped to
/// `1..=63`.
const fn signed_range(bits: u32) -> (u32, i64, i64) {
    let bits = if bits == 0 {
        1
    } else if bits > 63 {
        63
    } else {
        bits
    };
    let half = 1_i64 << (bits - 1);
    (bits, -half, half - 1)
}

/// Validates a signed immediate against a `bits`-wide two's-complement field.
///
/// # Errors
///
/// [`EncodeError::ImmediateOutOfRange`] when `value` does not fit.
pub(crate) fn check_signed(value: i64, bits: u32) -> Result<u32, EncodeError> {
    let (bits, min, max) = signed_range(bits);
    if (min..=max).contains(&value) {
        Ok(value as u32)
    } else {
        debug!(value, bits, "rejecting immediate");
        Err(EncodeError::ImmediateOutOfRange { value, bits, min, max })
    }
}

/// Validates a branch or jump byte offset: even and within `bits` signed bits.
///
/// # Errors
///
/// [`EncodeError::MisalignedOffset`] for odd offsets, otherwise as
/// [`check_signed`].
pub(crate) fn check_offset(value: i64, bits: u32) -> Result<u32, EncodeError> {
    if value % 2 != 0 {
        debug!(value, "rejecting odd offset");
        return Err(EncodeError::MisalignedOffset { value });
    }
    check_signed(value, bits)
}

/// Validates a U-type immediate.
///
/// Both the unsigned view (`0..=0xFFFFF`) and the signed view
/// (`-0x80000..=0x7FFFF`) of the 20-bit field are accepted.
///
/// # Errors
///
/// [`EncodeError::ImmediateOutOfRange`] outside `-0x80000..=0xFFFFF`.
pub fn check_upper(value: i64) -> Result<u32, EncodeError> {
    if (-(1_i64 << 19)..(1_i64 << 20)).contains(&value) {
        Ok((value as u32) & IMM20_MASK)
    } else {
        debug!(value, "rejecting upper immediate");
        Err(EncodeError::ImmediateOutOfRange {
            value,
            bits: 20,
            min: -(1_i64 << 19),
            max: (1_i64 << 20) - 1,
        })
    }
}

/// [`encode_r`] with register validation.
///
/// # Errors
///
/// [`EncodeError::RegisterOutOfRange`] for a register index above 31.
pub fn checked_encode_r(
    opcode: u32,
    funct7: u32,
    funct3: u32,
    rd: u32,
    rs1: u32,
    rs2: u32,
) -> Result<u32, EncodeError> {
    Ok(encode_r(
        opcode,
        funct7,
        funct3,
        check_reg(rd)?,
        check_reg(rs1)?,
        check_reg(rs2)?,
    ))
}

/// [`encode_i`] with register validation and `imm` in `-2048..=2047`.
///
/// # Errors
///
/// [`EncodeError::RegisterOutOfRange`] for a register index above 31, [`EncodeError::ImmediateOutOfRange`] for `imm`.
pub fn checked_encode_i(
    opcode: u32,
    funct3: u32,
    rd: u32,
    rs1: u32,
    imm: i64,
) -> Result<u32, EncodeError> {
    Ok(encode_i(
        opcode,
        funct3,
        check_reg(rd)?,
        check_reg(rs1)?,
        check_signed(imm, 12)?,
    ))
}

/// [`encode_s`] with register validation and `imm` in `-2048..=2047`.
///
/// # Errors
///
/// [`EncodeError::RegisterOutOfRange`] for a register index above 31, [`EncodeError::ImmediateOutOfRange`] for `imm`.
pub fn checked_encode_s(
    opcode: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    imm: i64,
) -> Result<u32, EncodeError> {
    Ok(encode_s(
        opcode,
        funct3,
        check_reg(rs1)?,
        check_reg(rs2)?,
        check_signed(imm, 12)?,
    ))
}

/// [`encode_b`] with register validation and an even offset in `-4096..=4094`.
///
/// # Errors
///
/// [`EncodeError::RegisterOutOfRange`] for a register index above 31, [`EncodeError::MisalignedOffset`] or
/// [`EncodeError::ImmediateOutOfRange`] for `offset`.
pub fn checked_encode_b(
    opcode: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    offset: i64,
) -> Result<u32, EncodeError> {
    Ok(encode_b(
        opcode,
        funct3,
        check_reg(rs1)?,
        check_reg(rs2)?,
        check_offset(offset, 13)?,
    ))
}

/// [`encode_u`] with register validation and a 20-bit immediate.
///
/// # Errors
///
/// [`EncodeError::RegisterOutOfRange`] for a register index above 31, [`EncodeError::ImmediateOutOfRange`] for `imm`.
pub fn checked_encode_u(opcode: u32, rd: u32, imm: i64) -> Result<u32, EncodeError> {
    Ok(encode_u(opcode, check_reg(rd)?, check_upper(imm)?))
}

/// [`encode_j`] with register validation and an even offset in `-2^20..=2^20-2`.
///
/// # Errors
///
/// [`EncodeError::RegisterOutOfRange`] for a register index above 31, [`EncodeError::MisalignedOffset`] or
/// [`EncodeError::ImmediateOutOfRange`] for `offset`.
pub fn checked_encode_j(opcode: u32, rd: u32, offset: i64) -> Result<u32, EncodeError> {
    Ok(encode_j(opcode, check_reg(rd)?, check_offset(offset, 21)?))
}
