//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the constants, field layouts and packing logic for the RISC-V base
//! integer instruction set.
//!
//! # Formats
//!
//! * R-type: `funct7 | rs2 | rs1 | funct3 | rd | opcode`
//! * I-type: `imm[11:0] | rs1 | funct3 | rd | opcode`
//! * S-type: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
//! * B-type: `imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode`
//! * U-type: `imm[31:12] | rd | opcode`
//! * J-type: `imm[20|10:1|11|19:12] | rd | opcode`

/// Application Binary Interface (ABI) register indices and names.
pub mod abi;

/// Field packing for every base instruction format, raw and checked.
pub mod encode;

/// Field masks, shifts and bit extraction utilities.
pub mod instruction;

/// Table of named instructions and their fixed encoding parameters.
pub mod mnemonic;

/// RV32I opcode, funct3 and funct7 values.
pub mod rv32i;

pub use rv32i::{funct3, funct7, opcodes};
