use thiserror::Error;

/// Error classes used for diagnostics grouping and caller policy decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ErrorClass {
    /// Malformed digit, base, bit-group, or out-of-range operand.
    Input,
    /// Wrong bit-string length or unparsable literal.
    Format,
    /// Operand-stack capacity violation.
    Stack,
    /// Arithmetic rejected before any state mutation.
    Arithmetic,
    /// Memory address or byte-value violation.
    Memory,
}

/// Stable error taxonomy for the core components.
///
/// Every variant is recoverable: the failing operation leaves all component
/// state exactly as it was before the call, and the caller may retry with
/// corrected input. There is no fatal tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum CoreError {
    /// Digit outside the first `base` symbols of the `0-9A-Z` alphabet.
    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The base the digit was validated against.
        base: u32,
    },
    /// Radix outside the supported `2..=36` range.
    #[error("base {base} is outside the supported range 2..=36")]
    InvalidBase {
        /// The rejected base.
        base: u32,
    },
    /// Input contained characters other than `0` and `1`.
    #[error("input must be a non-empty string of 0s and 1s")]
    NonBinary,
    /// Bit-string length is not a multiple of the 4-bit group size.
    #[error("bit string of length {len} is not divisible into 4-bit groups")]
    BadGroupLength {
        /// Length of the rejected bit string.
        len: usize,
    },
    /// A 4-bit group does not decode to a decimal digit.
    #[error("4-bit group {group} is not a BCD digit")]
    InvalidBcdGroup {
        /// The offending 4-bit group.
        group: String,
    },
    /// A 4-bit group falls outside the Excess-3 code range.
    #[error("4-bit group {group} is outside the excess-3 code range")]
    InvalidExcess3Group {
        /// The offending 4-bit group.
        group: String,
    },
    /// Operand does not fit the declared representation.
    #[error("value {value} is outside the representable range {min}..={max}")]
    ValueOutOfRange {
        /// The rejected value.
        value: i64,
        /// Smallest representable value.
        min: i64,
        /// Largest representable value.
        max: i64,
    },
    /// Wrong bit-string length or an unparsable numeric literal.
    #[error("format error: {reason}")]
    Format {
        /// Human-readable description of the mismatch.
        reason: String,
    },
    /// Push attempted on a full operand stack; state is unchanged.
    #[error("stack overflow: the operand stack is limited to {limit} entries")]
    StackOverflow {
        /// Configured stack capacity.
        limit: usize,
    },
    /// Pop/peek/operation attempted without enough operands; state is
    /// unchanged.
    #[error("stack underflow: {needed} operand(s) required, {available} available")]
    StackUnderflow {
        /// Operands the operation requires.
        needed: usize,
        /// Operands actually on the stack.
        available: usize,
    },
    /// DIV or MOD with a zero right operand; both popped operands are
    /// restored before this is returned.
    #[error("division by zero")]
    DivisionByZero,
    /// Address outside the flat address space.
    #[error("address {addr:#07X} is outside the address space")]
    AddressOutOfRange {
        /// The rejected address.
        addr: usize,
    },
    /// Parsed value does not fit in a byte.
    #[error("value {value} does not fit in a byte (0..=255)")]
    InvalidByteValue {
        /// The rejected value.
        value: i64,
    },
}

impl CoreError {
    /// Returns the diagnostics class for this error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidDigit { .. }
            | Self::InvalidBase { .. }
            | Self::NonBinary
            | Self::BadGroupLength { .. }
            | Self::InvalidBcdGroup { .. }
            | Self::InvalidExcess3Group { .. }
            | Self::ValueOutOfRange { .. } => ErrorClass::Input,
            Self::Format { .. } => ErrorClass::Format,
            Self::StackOverflow { .. } | Self::StackUnderflow { .. } => ErrorClass::Stack,
            Self::DivisionByZero => ErrorClass::Arithmetic,
            Self::AddressOutOfRange { .. } | Self::InvalidByteValue { .. } => ErrorClass::Memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreError, ErrorClass};

    #[test]
    fn class_mapping_matches_taxonomy() {
        assert_eq!(
            CoreError::InvalidDigit {
                digit: 'G',
                base: 16
            }
            .class(),
            ErrorClass::Input
        );
        assert_eq!(CoreError::NonBinary.class(), ErrorClass::Input);
        assert_eq!(
            CoreError::Format {
                reason: "x".into()
            }
            .class(),
            ErrorClass::Format
        );
        assert_eq!(
            CoreError::StackOverflow { limit: 50 }.class(),
            ErrorClass::Stack
        );
        assert_eq!(
            CoreError::StackUnderflow {
                needed: 2,
                available: 1
            }
            .class(),
            ErrorClass::Stack
        );
        assert_eq!(CoreError::DivisionByZero.class(), ErrorClass::Arithmetic);
        assert_eq!(
            CoreError::AddressOutOfRange { addr: 0x10_0000 }.class(),
            ErrorClass::Memory
        );
        assert_eq!(
            CoreError::InvalidByteValue { value: 256 }.class(),
            ErrorClass::Memory
        );
    }

    #[test]
    fn display_names_the_offending_input() {
        let err = CoreError::InvalidDigit {
            digit: '2',
            base: 2,
        };
        assert_eq!(err.to_string(), "invalid digit '2' for base 2");

        let err = CoreError::AddressOutOfRange { addr: 0x10_0000 };
        assert!(err.to_string().contains("0x100000"));
    }
}
