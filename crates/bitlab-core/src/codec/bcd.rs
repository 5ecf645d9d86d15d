//! BCD and Excess-3 group codecs, plus BCD arithmetic through decimal.
//!
//! All four codecs work on 4-bit groups; inputs whose length is not a
//! multiple of four are rejected before any group is examined.

use super::ensure_binary;
use crate::error::CoreError;

fn groups_of_four(bits: &str) -> Result<impl Iterator<Item = &str>, CoreError> {
    ensure_binary(bits)?;
    if bits.len() % 4 != 0 {
        return Err(CoreError::BadGroupLength { len: bits.len() });
    }
    Ok(bits.as_bytes().chunks(4).map(|chunk| {
        // Chunks of an ASCII bit string are valid UTF-8.
        core::str::from_utf8(chunk).unwrap_or_default()
    }))
}

fn nibble_value(group: &str) -> u8 {
    group
        .bytes()
        .fold(0, |acc, b| (acc << 1) | (b - b'0'))
}

/// Decodes a BCD bit string into its decimal digit string.
///
/// # Errors
///
/// [`CoreError::NonBinary`], [`CoreError::BadGroupLength`], or
/// [`CoreError::InvalidBcdGroup`] when a group exceeds 9.
pub fn bcd_to_decimal(bcd: &str) -> Result<String, CoreError> {
    let mut decimal = String::with_capacity(bcd.len() / 4);
    for group in groups_of_four(bcd)? {
        let digit = nibble_value(group);
        if digit > 9 {
            return Err(CoreError::InvalidBcdGroup {
                group: group.to_owned(),
            });
        }
        decimal.push(char::from(b'0' + digit));
    }
    Ok(decimal)
}

/// Encodes a decimal digit string as BCD, one 4-bit group per digit.
///
/// # Errors
///
/// [`CoreError::InvalidDigit`] when `decimal` contains a non-digit.
pub fn decimal_to_bcd(decimal: &str) -> Result<String, CoreError> {
    if decimal.is_empty() {
        return Err(CoreError::Format {
            reason: "empty decimal string".to_owned(),
        });
    }
    let mut bcd = String::with_capacity(decimal.len() * 4);
    for c in decimal.chars() {
        let digit = c.to_digit(10).ok_or(CoreError::InvalidDigit {
            digit: c,
            base: 10,
        })?;
        bcd.push_str(&format!("{digit:04b}"));
    }
    Ok(bcd)
}

/// Decodes an Excess-3 bit string into plain BCD binary (each group − 3).
///
/// # Errors
///
/// [`CoreError::NonBinary`], [`CoreError::BadGroupLength`], or
/// [`CoreError::InvalidExcess3Group`] when a group decodes outside `0..=9`.
pub fn excess3_to_binary(excess3: &str) -> Result<String, CoreError> {
    let mut binary = String::with_capacity(excess3.len());
    for group in groups_of_four(excess3)? {
        let biased = nibble_value(group);
        if !(3..=12).contains(&biased) {
            return Err(CoreError::InvalidExcess3Group {
                group: group.to_owned(),
            });
        }
        let digit = biased - 3;
        binary.push_str(&format!("{digit:04b}"));
    }
    Ok(binary)
}

/// Encodes plain BCD binary as Excess-3 (each group + 3).
///
/// # Errors
///
/// [`CoreError::NonBinary`], [`CoreError::BadGroupLength`], or
/// [`CoreError::InvalidExcess3Group`] when a biased group would exceed a
/// nibble.
pub fn binary_to_excess3(binary: &str) -> Result<String, CoreError> {
    let mut excess3 = String::with_capacity(binary.len());
    for group in groups_of_four(binary)? {
        let digit = nibble_value(group);
        let biased = digit + 3;
        if biased > 15 {
            return Err(CoreError::InvalidExcess3Group {
                group: group.to_owned(),
            });
        }
        excess3.push_str(&format!("{biased:04b}"));
    }
    Ok(excess3)
}

fn bcd_operand(bits: &str) -> Result<u64, CoreError> {
    bcd_to_decimal(bits)?.parse().map_err(|_| CoreError::Format {
        reason: "BCD operand exceeds the supported range".to_owned(),
    })
}

/// Adds two BCD numbers, returning the BCD sum.
///
/// # Errors
///
/// Any decode error of the operands.
pub fn bcd_add(lhs: &str, rhs: &str) -> Result<String, CoreError> {
    let sum = bcd_operand(lhs)? + bcd_operand(rhs)?;
    decimal_to_bcd(&sum.to_string())
}

/// Subtracts the second BCD number from the first, returning the BCD
/// difference.
///
/// # Errors
///
/// Any decode error of the operands, or [`CoreError::ValueOutOfRange`] when
/// the result would be negative (BCD carries no sign).
pub fn bcd_sub(lhs: &str, rhs: &str) -> Result<String, CoreError> {
    let a = bcd_operand(lhs)?;
    let b = bcd_operand(rhs)?;
    let diff = a.checked_sub(b).ok_or(CoreError::ValueOutOfRange {
        value: 0,
        min: 0,
        max: i64::MAX,
    })?;
    decimal_to_bcd(&diff.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        bcd_add, bcd_sub, bcd_to_decimal, binary_to_excess3, decimal_to_bcd, excess3_to_binary,
    };
    use crate::CoreError;

    #[test]
    fn bcd_round_trip() {
        assert_eq!(decimal_to_bcd("942").expect("valid"), "100101000010");
        assert_eq!(bcd_to_decimal("100101000010").expect("valid"), "942");
    }

    #[test]
    fn bcd_group_above_nine_is_rejected() {
        assert_eq!(
            bcd_to_decimal("1010"),
            Err(CoreError::InvalidBcdGroup {
                group: "1010".to_owned()
            })
        );
    }

    #[test]
    fn bcd_length_must_be_multiple_of_four() {
        assert_eq!(
            bcd_to_decimal("101"),
            Err(CoreError::BadGroupLength { len: 3 })
        );
    }

    #[test]
    fn excess3_biases_each_group_by_three() {
        assert_eq!(binary_to_excess3("0000").expect("valid"), "0011");
        assert_eq!(binary_to_excess3("1001").expect("valid"), "1100");
        assert_eq!(excess3_to_binary("0011").expect("valid"), "0000");
        assert_eq!(excess3_to_binary("1100").expect("valid"), "1001");
    }

    #[test]
    fn excess3_rejects_groups_outside_code_range() {
        // 0010 (2) would decode to -1.
        assert_eq!(
            excess3_to_binary("0010"),
            Err(CoreError::InvalidExcess3Group {
                group: "0010".to_owned()
            })
        );
        // 1101 (13) would encode to 16.
        assert_eq!(
            binary_to_excess3("1101"),
            Err(CoreError::InvalidExcess3Group {
                group: "1101".to_owned()
            })
        );
    }

    #[test]
    fn bcd_arithmetic_routes_through_decimal() {
        // 7 + 5 = 12
        assert_eq!(bcd_add("0111", "0101").expect("valid"), "00010010");
        // 12 - 7 = 5
        assert_eq!(bcd_sub("00010010", "0111").expect("valid"), "0101");
    }

    #[test]
    fn negative_bcd_difference_is_rejected() {
        assert!(matches!(
            bcd_sub("0101", "0111"),
            Err(CoreError::ValueOutOfRange { .. })
        ));
    }
}
