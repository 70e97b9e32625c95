//! RISC-V general-purpose register indices and ABI names.
//!
//! A register reference is a plain index in `0..32`. The ABI names below are
//! aliases for fixed indices, not a separate type.

/// Number of general-purpose integer registers.
pub const REG_COUNT: u32 = 32;

/// Register x0.
pub const X0: u32 = 0;
/// Register x1.
pub const X1: u32 = 1;
/// Register x2.
pub const X2: u32 = 2;
/// Register x3.
pub const X3: u32 = 3;
/// Register x4.
pub const X4: u32 = 4;
/// Register x5.
pub const X5: u32 = 5;
/// Register x6.
pub const X6: u32 = 6;
/// Register x7.
pub const X7: u32 = 7;
/// Register x8.
pub const X8: u32 = 8;
/// Register x9.
pub const X9: u32 = 9;
/// Register x10.
pub const X10: u32 = 10;
/// Register x11.
pub const X11: u32 = 11;
/// Register x12.
pub const X12: u32 = 12;
/// Register x13.
pub const X13: u32 = 13;
/// Register x14.
pub const X14: u32 = 14;
/// Register x15.
pub const X15: u32 = 15;
/// Register x16.
pub const X16: u32 = 16;
/// Register x17.
pub const X17: u32 = 17;
/// Register x18.
pub const X18: u32 = 18;
/// Register x19.
pub const X19: u32 = 19;
/// Register x20.
pub const X20: u32 = 20;
/// Register x21.
pub const X21: u32 = 21;
/// Register x22.
pub const X22: u32 = 22;
/// Register x23.
pub const X23: u32 = 23;
/// Register x24.
pub const X24: u32 = 24;
/// Register x25.
pub const X25: u32 = 25;
/// Register x26.
pub const X26: u32 = 26;
/// Register x27.
pub const X27: u32 = 27;
/// Register x28.
pub const X28: u32 = 28;
/// Register x29.
pub const X29: u32 = 29;
/// Register x30.
pub const X30: u32 = 30;
/// Register x31.
pub const X31: u32 = 31;

/// Hardwired zero (x0).
pub const ZERO: u32 = X0;
/// Return address (x1).
pub const RA: u32 = X1;
/// Stack pointer (x2).
pub const SP: u32 = X2;
/// Global pointer (x3).
pub const GP: u32 = X3;
/// Thread pointer (x4).
pub const TP: u32 = X4;
/// Temporary t0 (x5).
pub const T0: u32 = X5;
/// Temporary t1 (x6).
pub const T1: u32 = X6;
/// Temporary t2 (x7).
pub const T2: u32 = X7;
/// Saved register s0 (x8).
pub const S0: u32 = X8;
/// Frame pointer, same register as s0 (x8).
pub const FP: u32 = X8;
/// Saved register s1 (x9).
pub const S1: u32 = X9;
/// Argument / return value a0 (x10).
pub const A0: u32 = X10;
/// Argument / return value a1 (x11).
pub const A1: u32 = X11;
/// Argument a2 (x12).
pub const A2: u32 = X12;
/// Argument a3 (x13).
pub const A3: u32 = X13;
/// Argument a4 (x14).
pub const A4: u32 = X14;
/// Argument a5 (x15).
pub const A5: u32 = X15;
/// Argument a6 (x16).
pub const A6: u32 = X16;
/// Argument a7 (x17).
pub const A7: u32 = X17;
/// Saved register s2 (x18).
pub const S2: u32 = X18;
/// Saved register s3 (x19).
pub const S3: u32 = X19;
/// Saved register s4 (x20).
pub const S4: u32 = X20;
/// Saved register s5 (x21).
pub const S5: u32 = X21;
/// Saved register s6 (x22).
pub const S6: u32 = X22;
/// Saved register s7 (x23).
pub const S7: u32 = X23;
/// Saved register s8 (x24).
pub const S8: u32 = X24;
/// Saved register s9 (x25).
pub const S9: u32 = X25;
/// Saved register s10 (x26).
pub const S10: u32 = X26;
/// Saved register s11 (x27).
pub const S11: u32 = X27;
/// Temporary t3 (x28).
pub const T3: u32 = X28;
/// Temporary t4 (x29).
pub const T4: u32 = X29;
/// Temporary t5 (x30).
pub const T5: u32 = X30;
/// Temporary t6 (x31).
pub const T6: u32 = X31;

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index, or `"x??"` when the
/// index does not name a register.
#[inline]
pub fn reg_name(idx: u32) -> &'static str {
    REG_NAMES.get(idx as usize).copied().unwrap_or("x??")
}

/// Parses a register operand.
///
/// Accepts the numeric form (`x0`..`x31`), every ABI name and the `fp` alias.
/// Returns `None` for anything else, including `x32` and above.
pub fn parse_reg(name: &str) -> Option<u32> {
    let name = name.trim();
    if name == "fp" {
        return Some(FP);
    }
    if let Some(digits) = name.strip_prefix('x') {
        // Reject signs and leading '+' that `parse` would accept.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        return digits.parse::<u32>().ok().filter(|&idx| idx < REG_COUNT);
    }
    REG_NAMES.iter().position(|&n| n == name).map(|idx| idx as u32)
}
