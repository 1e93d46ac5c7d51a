//! Boundary cases of the checked narrowing.
//!
//! The expected outcomes are written out by hand from the ranges of the
//! integer kinds, they are the oracle the range check is compared against.

use crate::Case;
use narrow_cast::IntKind::*;
use narrow_cast::Outcome::*;
use narrow_cast::Value::*;

#[rustfmt::skip]
pub static CASES: &[Case] = &[
    Case::new("i8_one", I8, Signed(1), Ok),
    Case::new("i8_zero", I8, Signed(0), Ok),
    Case::new("i8_minus_one", I8, Signed(-1), Ok),
    Case::new("i8_min", I8, Signed(-128), Ok),
    Case::new("i8_max", I8, Signed(127), Ok),
    Case::new("i8_min_minus_one", I8, Signed(-129), Overflow),
    Case::new("i8_max_plus_one", I8, Signed(128), Overflow),

    Case::new("u8_one", U8, Unsigned(1), Ok),
    Case::new("u8_zero", U8, Unsigned(0), Ok),
    Case::new("u8_min", U8, Unsigned(0), Ok),
    Case::new("u8_max", U8, Unsigned(255), Ok),
    Case::new("u8_min_minus_one", U8, Signed(-1), Overflow),
    Case::new("u8_max_plus_one", U8, Unsigned(256), Overflow),

    Case::new("i16_one", I16, Signed(1), Ok),
    Case::new("i16_zero", I16, Signed(0), Ok),
    Case::new("i16_minus_one", I16, Signed(-1), Ok),
    Case::new("i16_min", I16, Signed(-32768), Ok),
    Case::new("i16_max", I16, Signed(32767), Ok),
    Case::new("i16_min_minus_one", I16, Signed(-32769), Overflow),
    Case::new("i16_max_plus_one", I16, Signed(32768), Overflow),

    Case::new("u16_one", U16, Unsigned(1), Ok),
    Case::new("u16_zero", U16, Unsigned(0), Ok),
    Case::new("u16_min", U16, Unsigned(0), Ok),
    Case::new("u16_max", U16, Unsigned(65535), Ok),
    Case::new("u16_min_minus_one", U16, Signed(-1), Overflow),
    Case::new("u16_max_plus_one", U16, Unsigned(65536), Overflow),

    Case::new("i32_one", I32, Signed(1), Ok),
    Case::new("i32_zero", I32, Signed(0), Ok),
    Case::new("i32_minus_one", I32, Signed(-1), Ok),
    Case::new("i32_min", I32, Signed(i32::MIN as i64), Ok),
    Case::new("i32_max", I32, Signed(i32::MAX as i64), Ok),
    Case::new("i32_min_minus_one", I32, Signed(i32::MIN as i64 - 1), Overflow),
    Case::new("i32_max_plus_one", I32, Signed(i32::MAX as i64 + 1), Overflow),

    Case::new("u32_one", U32, Unsigned(1), Ok),
    Case::new("u32_zero", U32, Unsigned(0), Ok),
    Case::new("u32_min", U32, Unsigned(0), Ok),
    Case::new("u32_max", U32, Unsigned(u32::MAX as u64), Ok),
    Case::new("u32_min_minus_one", U32, Signed(-1), Overflow),
    Case::new("u32_max_plus_one", U32, Unsigned(u32::MAX as u64 + 1), Overflow),

    Case::new("i64_one", I64, Signed(1), Ok),
    Case::new("i64_zero", I64, Signed(0), Ok),
    Case::new("i64_minus_one", I64, Signed(-1), Ok),
    Case::new("i64_min", I64, Signed(i64::MIN), Ok),
    Case::new("i64_max", I64, Signed(i64::MAX), Ok),
    Case::new("i64_min_minus_one", I64, Wide(i64::MIN as i128 - 1), Overflow),
    Case::new("i64_max_plus_one", I64, Unsigned(i64::MAX as u64 + 1), Overflow),

    Case::new("u64_one", U64, Unsigned(1), Ok),
    Case::new("u64_zero", U64, Unsigned(0), Ok),
    Case::new("u64_min", U64, Unsigned(0), Ok),
    Case::new("u64_max", U64, Unsigned(u64::MAX), Ok),
    Case::new("u64_min_minus_one", U64, Signed(-1), Overflow),
    Case::new("u64_max_plus_one", U64, Wide(u64::MAX as i128 + 1), Overflow),
];

pub fn find(name: &str) -> Option<&'static Case> {
    CASES.iter().find(|c| c.name == name)
}
