//! Encoding and configuration errors.
//!
//! The raw packers never fail. These errors come from the checked layer,
//! which validates operands before packing them, and from the single-line
//! front end and configuration loader built on top of it.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a checked encode or a line of assembly is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A register index outside `0..32`.
    #[error("register index {index} out of range (expected 0..=31)")]
    RegisterOutOfRange {
        /// The rejected index.
        index: u32,
    },

    /// An immediate that does not fit the format's field.
    #[error("immediate {value} does not fit in {bits} bits (expected {min}..={max})")]
    ImmediateOutOfRange {
        /// The rejected value.
        value: i64,
        /// Width of the immediate field.
        bits: u32,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A branch or jump offset that is not a multiple of 2.
    #[error("offset {value} is not a multiple of 2")]
    MisalignedOffset {
        /// The rejected offset.
        value: i64,
    },

    /// A mnemonic with no entry in the instruction table.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// Wrong number of operands for a mnemonic.
    #[error("`{mnemonic}` takes {expected} operands, found {found}")]
    OperandCount {
        /// The instruction being assembled.
        mnemonic: &'static str,
        /// Operands the format requires.
        expected: usize,
        /// Operands supplied.
        found: usize,
    },

    /// An operand that is neither a register nor an integer where one is required.
    #[error("invalid operand `{0}`")]
    InvalidOperand(String),
}

/// Failures while loading a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
