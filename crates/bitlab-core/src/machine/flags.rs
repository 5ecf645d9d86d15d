//! Status-flag recipes applied after committed results.
//!
//! The recipes model a 16-bit nominal ALU width: carry compares the
//! unsigned sum against 65535, overflow compares the signed result against
//! the 16-bit range, parity is taken over the low byte of the magnitude,
//! and auxiliary carry watches the low nibbles.

use super::BinaryOp;

/// The six status flags of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Flags {
    /// `ZF`: the result was zero.
    pub zero: bool,
    /// `CF`: unsigned overflow (addition) or borrow (subtraction).
    pub carry: bool,
    /// `SF`: the result was negative.
    pub sign: bool,
    /// `OF`: the result left the signed 16-bit range.
    pub overflow: bool,
    /// `PF`: the low byte of the result's magnitude has an even number of
    /// ones.
    pub parity: bool,
    /// `AF`: carry or borrow between the low nibbles of the operands.
    pub auxiliary: bool,
}

impl Flags {
    /// Computes the flag image for a committed result.
    ///
    /// `op` is `None` for plain data movement (push/pop), where only the
    /// result-derived flags are meaningful and `CF`/`AF` clear.
    #[must_use]
    pub fn for_result(result: i64, lhs: i64, rhs: i64, op: Option<BinaryOp>) -> Self {
        let low_byte = result.unsigned_abs() & 0xFF;
        Self {
            zero: result == 0,
            sign: result < 0,
            parity: low_byte.count_ones() % 2 == 0,
            carry: match op {
                Some(BinaryOp::Add) => lhs.saturating_add(rhs) > 65_535,
                Some(BinaryOp::Sub) => lhs < rhs,
                _ => false,
            },
            overflow: !(-32_768..=32_767).contains(&result),
            auxiliary: match op {
                Some(BinaryOp::Add) => (lhs & 0xF) + (rhs & 0xF) > 0xF,
                Some(BinaryOp::Sub) => (lhs & 0xF) - (rhs & 0xF) < 0,
                _ => false,
            },
        }
    }
}
