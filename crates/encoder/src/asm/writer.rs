//! Instruction stream writer.
//!
//! `ProgramWriter` appends instruction words and raw data to a byte buffer in
//! little-endian order, the byte order RISC-V fetches instructions in. The
//! named emitters (`add`, `addi`, ...) use the raw, truncating packers; use
//! [`ProgramWriter::emit`] or [`ProgramWriter::emit_line`] for range-checked
//! operands.

use tracing::trace;

use crate::asm::line::assemble_line;
use crate::common::error::EncodeError;
use crate::isa::encode;
use crate::isa::mnemonic::{Mnemonic, Operand};

/// Accumulates an instruction stream as little-endian bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramWriter {
    output: Vec<u8>,
}

impl ProgramWriter {
    /// Creates an empty writer.
    pub const fn new() -> Self {
        Self { output: Vec::new() }
    }

    /// Appends bytes.
    pub fn db(&mut self, values: &[u8]) {
        self.output.extend_from_slice(values);
    }

    /// Appends 16-bit halfwords.
    pub fn dh(&mut self, values: &[u16]) {
        for v in values {
            self.output.extend_from_slice(&v.to_le_bytes());
        }
    }

    /// Appends 32-bit words.
    pub fn dw(&mut self, values: &[u32]) {
        for v in values {
            trace!(offset = self.output.len(), word = *v, "emit word");
            self.output.extend_from_slice(&v.to_le_bytes());
        }
    }

    /// Appends 64-bit doublewords.
    pub fn dd(&mut self, values: &[u64]) {
        for v in values {
            self.output.extend_from_slice(&v.to_le_bytes());
        }
    }

    /// Appends one instruction word.
    #[inline]
    pub fn word(&mut self, inst: u32) {
        self.dw(&[inst]);
    }

    /// `add rd, rs1, rs2`
    pub fn add(&mut self, rd: u32, rs1: u32, rs2: u32) {
        self.word(encode::add(rd, rs1, rs2));
    }

    /// `sub rd, rs1, rs2`
    pub fn sub(&mut self, rd: u32, rs1: u32, rs2: u32) {
        self.word(encode::sub(rd, rs1, rs2));
    }

    /// `addi rd, rs1, imm12`
    pub fn addi(&mut self, rd: u32, rs1: u32, imm12: i32) {
        self.word(encode::addi(rd, rs1, imm12));
    }

    /// `jalr rd, imm12(rs1)`
    pub fn jalr(&mut self, rd: u32, rs1: u32, imm12: i32) {
        self.word(encode::jalr(rd, rs1, imm12));
    }

    /// `lui rd, imm20`
    pub fn lui(&mut self, rd: u32, imm20: u32) {
        self.word(encode::lui(rd, imm20));
    }

    /// `auipc rd, imm20`
    pub fn auipc(&mut self, rd: u32, imm20: u32) {
        self.word(encode::auipc(rd, imm20));
    }

    /// `jal rd, offset`
    pub fn jal(&mut self, rd: u32, offset: i32) {
        self.word(encode::jal(rd, offset));
    }

    /// `beq rs1, rs2, offset`
    pub fn beq(&mut self, rs1: u32, rs2: u32, offset: i32) {
        self.word(encode::beq(rs1, rs2, offset));
    }

    /// `sb rs2, imm12(rs1)`
    pub fn sb(&mut self, rs1: u32, rs2: u32, imm12: i32) {
        self.word(encode::sb(rs1, rs2, imm12));
    }

    /// Encodes `mnemonic` with checked operands and appends it.
    ///
    /// Nothing is written when encoding fails.
    ///
    /// # Errors
    ///
    /// Any error from [`Mnemonic::encode`].
    pub fn emit(&mut self, mnemonic: Mnemonic, operands: &[Operand]) -> Result<u32, EncodeError> {
        let inst = mnemonic.encode(operands)?;
        self.word(inst);
        Ok(inst)
    }

    /// Assembles one line of text and appends it.
    ///
    /// # Errors
    ///
    /// Any error from [`assemble_line`].
    pub fn emit_line(&mut self, line: &str) -> Result<u32, EncodeError> {
        let inst = assemble_line(line)?;
        self.word(inst);
        Ok(inst)
    }

    /// The bytes written so far.
    pub const fn as_bytes(&self) -> &[u8] {
        self.output.as_slice()
    }

    /// Consumes the writer, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.output
    }

    /// Number of bytes written.
    pub const fn len(&self) -> usize {
        self.output.len()
    }

    /// Whether nothing has been written.
    pub const fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Iterates the buffer as little-endian 32-bit words.
    ///
    /// Trailing bytes that do not fill a whole word are skipped.
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.output.chunks_exact(4).map(|chunk| {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(chunk);
            u32::from_le_bytes(bytes)
        })
    }
}
