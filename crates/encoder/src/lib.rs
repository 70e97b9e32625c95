//! RISC-V instruction word encoder.
//!
//! This crate packs RISC-V instruction fields into 32-bit machine words:
//! 1. **ISA:** Opcode/funct constants, ABI register names, field extraction and packing
//!    for the R, I, S, B, U and J formats.
//! 2. **Checked encoding:** Range-validated variants of the raw packers, reporting
//!    [`EncodeError`] instead of silently truncating.
//! 3. **Assembly helpers:** A mnemonic table, a single-line operand front end and a
//!    little-endian instruction stream writer.
//! 4. **Configuration:** Output formatting options shared by the CLI.
//!
//! The raw packers in [`isa::encode`] are total: every field is masked to its width
//! before it is placed, so out-of-range inputs keep their low bits.
//!
//! ```
//! use rvasm_core::isa::abi::{X1, X2, X3};
//! use rvasm_core::isa::encode::{add, addi};
//!
//! assert_eq!(add(X1, X2, X3), 0x003100B3);
//! assert_eq!(addi(X1, X2, 512), 0x20010093);
//! ```

/// Instruction stream writer, mnemonic table and single-line front end.
pub mod asm;
/// Error types shared across the crate.
pub mod common;
/// Output configuration (defaults and JSON loading).
pub mod config;
/// Instruction set (opcodes, function codes, registers, encode/decode).
pub mod isa;

/// Error returned by the checked encoders and the line front end.
pub use crate::common::error::EncodeError;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Little-endian instruction stream writer.
pub use crate::asm::writer::ProgramWriter;
