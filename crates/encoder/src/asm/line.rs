//! Single-line assembly front end.
//!
//! Parses one instruction such as `addi x1, x2, 512` or `sw a0, -8(sp)` and
//! encodes it through the checked path. There are no labels, directives or
//! multi-line programs: each line stands alone.

use crate::common::error::EncodeError;
use crate::isa::abi::parse_reg;
use crate::isa::mnemonic::{Mnemonic, Operand};

/// Parses a line into its mnemonic and operands in assembly order.
///
/// A memory operand `imm(rs1)` expands to `rs1, imm`, so `lw rd, 4(sp)` yields
/// `rd, sp, 4` and `sw rs2, 4(sp)` yields `rs2, sp, 4`. Anything after `#` is
/// a comment.
///
/// # Errors
///
/// [`EncodeError::UnknownMnemonic`] for an unknown or missing mnemonic,
/// [`EncodeError::InvalidOperand`] for an operand that is neither a register
/// nor an integer.
pub fn parse_line(line: &str) -> Result<(Mnemonic, Vec<Operand>), EncodeError> {
    let text = line.split('#').next().unwrap_or_default().trim();
    let (name, rest) = text
        .split_once(char::is_whitespace)
        .unwrap_or((text, ""));

    let mnemonic =
        Mnemonic::from_name(name).ok_or_else(|| EncodeError::UnknownMnemonic(name.to_owned()))?;

    let mut operands = Vec::with_capacity(mnemonic.format().operand_count());
    let rest = rest.trim();
    if !rest.is_empty() {
        for token in rest.split(',').map(str::trim) {
            parse_operand(token, &mut operands)?;
        }
    }
    Ok((mnemonic, operands))
}

/// Parses and encodes a single line.
///
/// # Errors
///
/// Any parse error from [`parse_line`] and any encoding error from
/// [`Mnemonic::encode`].
pub fn assemble_line(line: &str) -> Result<u32, EncodeError> {
    let (mnemonic, operands) = parse_line(line)?;
    mnemonic.encode(&operands)
}

fn parse_operand(token: &str, out: &mut Vec<Operand>) -> Result<(), EncodeError> {
    if let Some((offset, base)) = token
        .strip_suffix(')')
        .and_then(|t| t.split_once('('))
    {
        let base = parse_reg(base).ok_or_else(|| EncodeError::InvalidOperand(token.to_owned()))?;
        let offset = match offset.trim() {
            "" => 0,
            text => parse_int(text).ok_or_else(|| EncodeError::InvalidOperand(token.to_owned()))?,
        };
        out.push(Operand::Reg(base));
        out.push(Operand::Imm(offset));
        return Ok(());
    }

    if let Some(idx) = parse_reg(token) {
        out.push(Operand::Reg(idx));
    } else if let Some(value) = parse_int(token) {
        out.push(Operand::Imm(value));
    } else {
        return Err(EncodeError::InvalidOperand(token.to_owned()));
    }
    Ok(())
}

/// Parses a decimal, `0x` hex or `0b` binary integer with an optional sign.
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        if !bin.bytes().all(|b| b == b'0' || b == b'1') {
            return None;
        }
        i64::from_str_radix(bin, 2).ok()?
    } else {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<i64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}
