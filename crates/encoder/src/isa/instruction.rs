//! Instruction field layout and extraction utilities.
//!
//! Provides the mask and shift of every field of a 32-bit RISC-V instruction
//! word, the [`InstructionBits`] extraction trait, and [`decode`], the inverse
//! of the packers in [`crate::isa::encode`].

use std::fmt;

use crate::isa::opcodes;

/// Bit mask for the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a register index field (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for a 12-bit immediate (I-type and S-type).
pub const IMM12_MASK: u32 = 0xFFF;
/// Bit mask for a 20-bit immediate (U-type).
pub const IMM20_MASK: u32 = 0xF_FFFF;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 0;
/// Bit position of the destination register field.
pub const RD_SHIFT: u32 = 7;
/// Bit position of the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit position of the first source register field.
pub const RS1_SHIFT: u32 = 15;
/// Bit position of the second source register field.
pub const RS2_SHIFT: u32 = 20;
/// Bit position of the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;
/// Bit position of the I-type immediate (bits 20-31).
pub const I_IMM_SHIFT: u32 = 20;
/// Bit position of the U-type immediate (bits 12-31).
pub const U_IMM_SHIFT: u32 = 12;

/// Sign-extends the low `bits` bits of `value`.
#[inline(always)]
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}

/// Trait for extracting instruction fields from encoded instructions.
///
/// Register accessors return the 5-bit index. Immediate accessors return the
/// value the corresponding packer was given, after masking: sign-extended for
/// the I, S, B and J formats and the raw 20 bits for U.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> u32;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> u32;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> u32;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the raw 12-bit I-type immediate (bits 20-31).
    fn imm_i_bits(&self) -> u32;

    /// Extracts the I-type immediate, sign-extended from bit 11.
    fn imm_i(&self) -> i32;

    /// Extracts the S-type immediate (`imm[11:5]` at 25-31, `imm[4:0]` at 7-11).
    fn imm_s(&self) -> i32;

    /// Extracts the B-type byte offset (13 bits, always even).
    fn imm_b(&self) -> i32;

    /// Extracts the U-type 20-bit upper immediate (bits 12-31), unshifted.
    fn imm_u(&self) -> u32;

    /// Extracts the J-type byte offset (21 bits, always even).
    fn imm_j(&self) -> i32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u32 {
        (self >> RD_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn rs1(&self) -> u32 {
        (self >> RS1_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn rs2(&self) -> u32 {
        (self >> RS2_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }

    #[inline(always)]
    fn imm_i_bits(&self) -> u32 {
        (self >> I_IMM_SHIFT) & IMM12_MASK
    }

    #[inline(always)]
    fn imm_i(&self) -> i32 {
        sign_extend(self.imm_i_bits(), 12)
    }

    #[inline(always)]
    fn imm_s(&self) -> i32 {
        let hi = (self >> 25) & 0x7F;
        let lo = (self >> 7) & 0x1F;
        sign_extend((hi << 5) | lo, 12)
    }

    /// Reassembles `imm[12|10:5]` (bits 31, 30-25) and `imm[4:1|11]` (bits 11-8, 7).
    #[inline(always)]
    fn imm_b(&self) -> i32 {
        let bit12 = (self >> 31) & 1;
        let bit11 = (self >> 7) & 1;
        let bits10_5 = (self >> 25) & 0x3F;
        let bits4_1 = (self >> 8) & 0xF;
        sign_extend(
            (bit12 << 12) | (bit11 << 11) | (bits10_5 << 5) | (bits4_1 << 1),
            13,
        )
    }

    #[inline(always)]
    fn imm_u(&self) -> u32 {
        (self >> U_IMM_SHIFT) & IMM20_MASK
    }

    /// Reassembles `imm[20|10:1|11|19:12]` from bits 31, 30-21, 20 and 19-12.
    #[inline(always)]
    fn imm_j(&self) -> i32 {
        let bit20 = (self >> 31) & 1;
        let bits10_1 = (self >> 21) & 0x3FF;
        let bit11 = (self >> 20) & 1;
        let bits19_12 = (self >> 12) & 0xFF;
        sign_extend(
            (bit20 << 20) | (bits19_12 << 12) | (bit11 << 11) | (bits10_1 << 1),
            21,
        )
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Register and funct fields are always extracted from their fixed positions.
/// `imm` holds the immediate for the format implied by the opcode (0 for
/// R-type and unknown opcodes); U-type immediates are the raw 20 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: u32,
    /// First source register index.
    pub rs1: u32,
    /// Second source register index.
    pub rs2: u32,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Immediate value, interpreted per the opcode's format.
    pub imm: i32,
}

/// Decodes a 32-bit instruction word into its component fields.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let imm = match opcode {
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => inst.imm_i(),
        opcodes::OP_STORE => inst.imm_s(),
        opcodes::OP_BRANCH => inst.imm_b(),
        opcodes::OP_LUI | opcodes::OP_AUIPC => inst.imm_u() as i32,
        opcodes::OP_JAL => inst.imm_j(),
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm,
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "opcode={:#04x} rd=x{} rs1=x{} rs2=x{} funct3={} funct7={:#04x} imm={}",
            self.opcode, self.rd, self.rs1, self.rs2, self.funct3, self.funct7, self.imm
        )
    }
}
