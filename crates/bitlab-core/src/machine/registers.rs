//! 8086-style register block for the operand stack machine.

/// General and stack-pointer registers surfaced to the host layer.
///
/// The general registers are latches over committed operations rather than
/// an addressable register file: `DX` holds the last pushed value, `AX` the
/// last popped value or arithmetic result, and `BX`/`CX` the operands of
/// the last arithmetic operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Registers {
    /// Accumulator.
    pub ax: i64,
    /// Base register; left operand of the last arithmetic operation.
    pub bx: i64,
    /// Counter register; right operand of the last arithmetic operation.
    pub cx: i64,
    /// Data register; most recently pushed value.
    pub dx: i64,
    /// Stack pointer: always `max_stack_size - depth`.
    pub sp: usize,
}

impl Registers {
    /// Registers at reset: everything zero, `SP` at the stack ceiling.
    #[must_use]
    pub const fn at_reset(max_stack_size: usize) -> Self {
        Self {
            ax: 0,
            bx: 0,
            cx: 0,
            dx: 0,
            sp: max_stack_size,
        }
    }
}
