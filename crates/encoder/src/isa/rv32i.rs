//! RV32I base integer encodings.
//!
//! Major opcodes select the format and instruction family; `funct3` and
//! `funct7` pick the operation inside a family. Values are listed unshifted,
//! exactly as they are passed to the packers in [`crate::isa::encode`].

/// Major opcodes, bits `[6:0]`.
pub mod opcodes {
    /// `OP`: register-register ALU.
    pub const OP_REG: u32 = 0x33;
    /// `OP-IMM`: register-immediate ALU.
    pub const OP_IMM: u32 = 0x13;
    /// `LOAD`.
    pub const OP_LOAD: u32 = 0x03;
    /// `STORE`.
    pub const OP_STORE: u32 = 0x23;
    /// `BRANCH`: conditional branches.
    pub const OP_BRANCH: u32 = 0x63;
    /// `JALR`.
    pub const OP_JALR: u32 = 0x67;
    /// `JAL`.
    pub const OP_JAL: u32 = 0x6F;
    /// `LUI`.
    pub const OP_LUI: u32 = 0x37;
    /// `AUIPC`.
    pub const OP_AUIPC: u32 = 0x17;
}

/// `funct3` values, bits `[14:12]`. Names are shared across opcodes where
/// the value coincides (e.g. `ADD_SUB` is also `addi`).
pub mod funct3 {
    /// `add`/`sub`/`addi`.
    pub const ADD_SUB: u32 = 0x0;
    /// `sll`.
    pub const SLL: u32 = 0x1;
    /// `slt`/`slti`.
    pub const SLT: u32 = 0x2;
    /// `sltu`/`sltiu`.
    pub const SLTU: u32 = 0x3;
    /// `xor`/`xori`.
    pub const XOR: u32 = 0x4;
    /// `srl`/`sra`.
    pub const SRL_SRA: u32 = 0x5;
    /// `or`/`ori`.
    pub const OR: u32 = 0x6;
    /// `and`/`andi`.
    pub const AND: u32 = 0x7;

    /// `lb`.
    pub const LB: u32 = 0x0;
    /// `lh`.
    pub const LH: u32 = 0x1;
    /// `lw`.
    pub const LW: u32 = 0x2;
    /// `lbu`.
    pub const LBU: u32 = 0x4;
    /// `lhu`.
    pub const LHU: u32 = 0x5;

    /// `sb`.
    pub const SB: u32 = 0x0;
    /// `sh`.
    pub const SH: u32 = 0x1;
    /// `sw`.
    pub const SW: u32 = 0x2;

    /// `beq`.
    pub const BEQ: u32 = 0x0;
    /// `bne`.
    pub const BNE: u32 = 0x1;
    /// `blt`.
    pub const BLT: u32 = 0x4;
    /// `bge`.
    pub const BGE: u32 = 0x5;
    /// `bltu`.
    pub const BLTU: u32 = 0x6;
    /// `bgeu`.
    pub const BGEU: u32 = 0x7;

    /// `jalr`.
    pub const JALR: u32 = 0x0;
}

/// `funct7` values, bits `[31:25]`, R-type only.
pub mod funct7 {
    /// Every R-type operation without an alternate form.
    pub const DEFAULT: u32 = 0x00;
    /// `sub` (alternate of `add`).
    pub const SUB: u32 = 0x20;
    /// `sra` (alternate of `srl`).
    pub const SRA: u32 = 0x20;
}
