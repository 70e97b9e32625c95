//! # Register Name Tests

use rstest::rstest;
use rvasm_core::isa::abi::{self, parse_reg, reg_name};

#[test]
fn aliases_match_indices() {
    assert_eq!(abi::ZERO, 0);
    assert_eq!(abi::RA, 1);
    assert_eq!(abi::SP, abi::X2);
    assert_eq!(abi::FP, abi::S0);
    assert_eq!(abi::A0, 10);
    assert_eq!(abi::T6, abi::X31);
}

#[rstest]
#[case("zero", 0)]
#[case("ra", 1)]
#[case("sp", 2)]
#[case("fp", 8)]
#[case("s0", 8)]
#[case("a7", 17)]
#[case("s11", 27)]
#[case("t6", 31)]
#[case("x0", 0)]
#[case("x31", 31)]
#[case(" a0 ", 10)]
fn parses_register_names(#[case] name: &str, #[case] index: u32) {
    assert_eq!(parse_reg(name), Some(index));
}

#[rstest]
#[case("x32")]
#[case("x")]
#[case("x-1")]
#[case("x+1")]
#[case("a8")]
#[case("")]
#[case("RA")]
fn rejects_non_registers(#[case] name: &str) {
    assert_eq!(parse_reg(name), None);
}

#[test]
fn names_roundtrip_through_parse() {
    for idx in 0..abi::REG_COUNT {
        assert_eq!(parse_reg(reg_name(idx)), Some(idx), "x{idx}");
        assert_eq!(parse_reg(&format!("x{idx}")), Some(idx));
    }
}

#[test]
fn out_of_range_name() {
    assert_eq!(reg_name(32), "x??");
}
