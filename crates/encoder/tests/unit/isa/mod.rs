//! # ISA Unit Tests

/// Register indices, ABI names and operand parsing.
pub mod abi;

/// Decode of packed words back into their fields.
pub mod decode_roundtrip;



/// Mnemonic table against reference encodings.
pub mod mnemonic_table;
