//! Named instruction table.
//!
//! Each [`Mnemonic`] maps to a fixed [`Encoding`]: its format plus the
//! opcode/funct3/funct7 values the format packer needs. Adding an instruction
//! means adding a row here, not a new function.

use std::fmt;

use crate::common::error::EncodeError;
use crate::isa::encode::{
    checked_encode_b, checked_encode_i, checked_encode_j, checked_encode_r, checked_encode_s,
    checked_encode_u,
};
use crate::isa::{funct3, funct7, opcodes};

/// Base instruction encoding formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register.
    R,
    /// Register-immediate, loads and `jalr`.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// Upper immediate.
    U,
    /// Unconditional jump.
    J,
}

impl Format {
    /// Format implied by a major opcode, if it is one this crate encodes.
    pub const fn of_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_REG => Some(Self::R),
            opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => Some(Self::I),
            opcodes::OP_STORE => Some(Self::S),
            opcodes::OP_BRANCH => Some(Self::B),
            opcodes::OP_LUI | opcodes::OP_AUIPC => Some(Self::U),
            opcodes::OP_JAL => Some(Self::J),
            _ => None,
        }
    }

    /// Number of operands an instruction of this format takes.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::R | Self::I | Self::S | Self::B => 3,
            Self::U | Self::J => 2,
        }
    }

    /// Short tag used in listings, e.g. `"R-type"`.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::R => "R-type",
            Self::I => "I-type",
            Self::S => "S-type",
            Self::B => "B-type",
            Self::U => "U-type",
            Self::J => "J-type",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fixed encoding parameters of one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoding {
    /// Instruction format.
    pub format: Format,
    /// Major opcode.
    pub opcode: u32,
    /// funct3 (0 for U and J formats).
    pub funct3: u32,
    /// funct7 (R-type only, 0 otherwise).
    pub funct7: u32,
}

impl Encoding {
    const fn new(format: Format, opcode: u32, funct3: u32, funct7: u32) -> Self {
        Self {
            format,
            opcode,
            funct3,
            funct7,
        }
    }
}

/// An instruction operand: a register index or an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Register index.
    Reg(u32),
    /// Immediate or byte offset.
    Imm(i64),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reg(idx) => write!(f, "x{idx}"),
            Self::Imm(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! mnemonics {
    ($($variant:ident => $name:literal, $format:ident, $opcode:expr, $f3:expr, $f7:expr;)*) => {
        /// RV32I instructions known to the encoder.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Mnemonic {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl Mnemonic {
            /// Every mnemonic in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Assembly name, lowercase.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Fixed encoding parameters.
            pub const fn encoding(self) -> Encoding {
                match self {
                    $(Self::$variant => Encoding::new(Format::$format, $opcode, $f3, $f7),)*
                }
            }
        }
    };
}

mnemonics! {
    Add   => "add",   R, opcodes::OP_REG, funct3::ADD_SUB, funct7::DEFAULT;
    Sub   => "sub",   R, opcodes::OP_REG, funct3::ADD_SUB, funct7::SUB;
    Sll   => "sll",   R, opcodes::OP_REG, funct3::SLL,     funct7::DEFAULT;
    Slt   => "slt",   R, opcodes::OP_REG, funct3::SLT,     funct7::DEFAULT;
    Sltu  => "sltu",  R, opcodes::OP_REG, funct3::SLTU,    funct7::DEFAULT;
    Xor   => "xor",   R, opcodes::OP_REG, funct3::XOR,     funct7::DEFAULT;
    Srl   => "srl",   R, opcodes::OP_REG, funct3::SRL_SRA, funct7::DEFAULT;
    Sra   => "sra",   R, opcodes::OP_REG, funct3::SRL_SRA, funct7::SRA;
    Or    => "or",    R, opcodes::OP_REG, funct3::OR,      funct7::DEFAULT;
    And   => "and",   R, opcodes::OP_REG, funct3::AND,     funct7::DEFAULT;
    Addi  => "addi",  I, opcodes::OP_IMM, funct3::ADD_SUB, 0;
    Slti  => "slti",  I, opcodes::OP_IMM, funct3::SLT,     0;
    Sltiu => "sltiu", I, opcodes::OP_IMM, funct3::SLTU,    0;
    Xori  => "xori",  I, opcodes::OP_IMM, funct3::XOR,     0;
    Ori   => "ori",   I, opcodes::OP_IMM, funct3::OR,      0;
    Andi  => "andi",  I, opcodes::OP_IMM, funct3::AND,     0;
    Lb    => "lb",    I, opcodes::OP_LOAD, funct3::LB,     0;
    Lh    => "lh",    I, opcodes::OP_LOAD, funct3::LH,     0;
    Lw    => "lw",    I, opcodes::OP_LOAD, funct3::LW,     0;
    Lbu   => "lbu",   I, opcodes::OP_LOAD, funct3::LBU,    0;
    Lhu   => "lhu",   I, opcodes::OP_LOAD, funct3::LHU,    0;
    Jalr  => "jalr",  I, opcodes::OP_JALR, funct3::JALR,   0;
    Sb    => "sb",    S, opcodes::OP_STORE, funct3::SB,    0;
    Sh    => "sh",    S, opcodes::OP_STORE, funct3::SH,    0;
    Sw    => "sw",    S, opcodes::OP_STORE, funct3::SW,    0;
    Beq   => "beq",   B, opcodes::OP_BRANCH, funct3::BEQ,  0;
    Bne   => "bne",   B, opcodes::OP_BRANCH, funct3::BNE,  0;
    Blt   => "blt",   B, opcodes::OP_BRANCH, funct3::BLT,  0;
    Bge   => "bge",   B, opcodes::OP_BRANCH, funct3::BGE,  0;
    Bltu  => "bltu",  B, opcodes::OP_BRANCH, funct3::BLTU, 0;
    Bgeu  => "bgeu",  B, opcodes::OP_BRANCH, funct3::BGEU, 0;
    Lui   => "lui",   U, opcodes::OP_LUI, 0, 0;
    Auipc => "auipc", U, opcodes::OP_AUIPC, 0, 0;
    Jal   => "jal",   J, opcodes::OP_JAL, 0, 0;
}

impl Mnemonic {
    /// Looks up a mnemonic by its assembly name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// Instruction format.
    pub const fn format(self) -> Format {
        self.encoding().format
    }

    /// Encodes this instruction with range-checked operands.
    ///
    /// Operands are given in assembly order:
    ///
    /// | Format | Operands |
    /// |--------|----------|
    /// | R | `rd, rs1, rs2` |
    /// | I | `rd, rs1, imm` |
    /// | S | `rs2, rs1, imm` |
    /// | B | `rs1, rs2, offset` |
    /// | U | `rd, imm` |
    /// | J | `rd, offset` |
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::OperandCount`] for the wrong number of operands,
    /// [`EncodeError::InvalidOperand`] when a register and an integer are
    /// swapped, and the range errors of the checked packers.
    pub fn encode(self, operands: &[Operand]) -> Result<u32, EncodeError> {
        let enc = self.encoding();
        let expected = enc.format.operand_count();
        if operands.len() != expected {
            return Err(EncodeError::OperandCount {
                mnemonic: self.name(),
                expected,
                found: operands.len(),
            });
        }

        match enc.format {
            Format::R => checked_encode_r(
                enc.opcode,
                enc.funct7,
                enc.funct3,
                reg(&operands[0])?,
                reg(&operands[1])?,
                reg(&operands[2])?,
            ),
            Format::I => checked_encode_i(
                enc.opcode,
                enc.funct3,
                reg(&operands[0])?,
                reg(&operands[1])?,
                imm(&operands[2])?,
            ),
            Format::S => checked_encode_s(
                enc.opcode,
                enc.funct3,
                reg(&operands[1])?,
                reg(&operands[0])?,
                imm(&operands[2])?,
            ),
            Format::B => checked_encode_b(
                enc.opcode,
                enc.funct3,
                reg(&operands[0])?,
                reg(&operands[1])?,
                imm(&operands[2])?,
            ),
            Format::U => checked_encode_u(enc.opcode, reg(&operands[0])?, imm(&operands[1])?),
            Format::J => checked_encode_j(enc.opcode, reg(&operands[0])?, imm(&operands[1])?),
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn reg(op: &Operand) -> Result<u32, EncodeError> {
    match *op {
        Operand::Reg(idx) => Ok(idx),
        Operand::Imm(_) => Err(EncodeError::InvalidOperand(op.to_string())),
    }
}

fn imm(op: &Operand) -> Result<i64, EncodeError> {
    match *op {
        Operand::Imm(value) => Ok(value),
        Operand::Reg(_) => Err(EncodeError::InvalidOperand(op.to_string())),
    }
}
