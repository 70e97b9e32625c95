//! Assembly helpers built on the field packers.
//!
//! * `line`: encodes one line of assembly text, e.g. `addi x1, x2, 512`.
//! * `writer`: accumulates instruction words and data as little-endian bytes.

/// Single-line assembly front end.
pub mod line;

/// Little-endian instruction stream writer.
pub mod writer;

pub use line::{assemble_line, parse_line};
pub use writer::ProgramWriter;
