//! Radix conversion between bases 2..=36 with a step-by-step working trace.
//!
//! Conversion always routes through decimal: positional-value summation
//! (`digit × base^position`, least-significant digit first) followed by
//! repeated division with remainder, remainders read lowest-computed-first
//! as the least-significant digit of the target representation.

use crate::error::CoreError;

/// Digit alphabet shared by every radix codec: `0-9` then `A-Z`.
pub const DIGIT_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Result of a base conversion: canonical digits plus the working trace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Conversion {
    /// Digits of the converted value in the target base, without leading
    /// zeros (`"0"` for zero).
    pub result: String,
    /// Plain-text working: one line for the positional expansion, one per
    /// division/remainder pair, and the remainder read-out line.
    pub steps: Vec<String>,
}

/// Converts `digits` from `from_base` to `to_base`.
///
/// Lowercase digits are accepted; a leading `0b`/`0o`/`0x` prefix is
/// stripped before validation.
///
/// # Errors
///
/// [`CoreError::InvalidBase`] for a base outside `2..=36`,
/// [`CoreError::InvalidDigit`] for a digit not valid in `from_base`, and
/// [`CoreError::Format`] for an empty digit string or a value too large for
/// the internal 128-bit accumulator.
pub fn convert_base(digits: &str, from_base: u32, to_base: u32) -> Result<Conversion, CoreError> {
    validate_base(from_base)?;
    validate_base(to_base)?;

    let clean = strip_radix_prefix(digits.trim()).to_ascii_uppercase();
    if clean.is_empty() {
        return Err(CoreError::Format {
            reason: "empty digit string".to_owned(),
        });
    }
    for c in clean.chars() {
        if digit_value(c, from_base).is_none() {
            return Err(CoreError::InvalidDigit {
                digit: c,
                base: from_base,
            });
        }
    }

    let mut steps = Vec::new();
    let decimal = to_decimal(&clean, from_base, &mut steps)?;

    if to_base == 10 {
        return Ok(Conversion {
            result: decimal.to_string(),
            steps,
        });
    }

    let mut remainders: Vec<char> = Vec::new();
    let mut quotient = decimal;
    while quotient > 0 {
        let rem = quotient % u128::from(to_base);
        let next = quotient / u128::from(to_base);
        let digit = digit_char(rem);
        steps.push(format!(
            "{quotient} ÷ {to_base} = {next}, remainder {rem} ({digit})"
        ));
        remainders.push(digit);
        quotient = next;
    }
    remainders.reverse();
    let result: String = if remainders.is_empty() {
        "0".to_owned()
    } else {
        remainders.iter().collect()
    };
    steps.push(format!("Read remainders from bottom to top: {result}"));

    Ok(Conversion { result, steps })
}

/// Returns the numeric value of `c` in `base`, or `None` when invalid.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    let upper = c.to_ascii_uppercase();
    DIGIT_ALPHABET[..base as usize]
        .iter()
        .position(|&d| d == upper as u8)
        .and_then(|pos| u32::try_from(pos).ok())
}

fn digit_char(value: u128) -> char {
    // Safe: callers only pass remainders below 36.
    char::from(DIGIT_ALPHABET[usize::try_from(value).unwrap_or(0)])
}

fn validate_base(base: u32) -> Result<(), CoreError> {
    if (2..=36).contains(&base) {
        Ok(())
    } else {
        Err(CoreError::InvalidBase { base })
    }
}

fn strip_radix_prefix(digits: &str) -> &str {
    let bytes = digits.as_bytes();
    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        &digits[2..]
    } else {
        digits
    }
}

fn too_large() -> CoreError {
    CoreError::Format {
        reason: "value exceeds the supported 128-bit range".to_owned(),
    }
}

fn to_decimal(clean: &str, from_base: u32, steps: &mut Vec<String>) -> Result<u128, CoreError> {
    if from_base == 10 {
        let decimal: u128 = clean.parse().map_err(|_| too_large())?;
        steps.push(format!("Input is already decimal: {decimal}"));
        return Ok(decimal);
    }

    let mut decimal: u128 = 0;
    let mut parts = Vec::new();
    for (position, c) in clean.chars().rev().enumerate() {
        let digit = u128::from(digit_value(c, from_base).unwrap_or(0));
        let weight = u128::from(from_base)
            .checked_pow(u32::try_from(position).map_err(|_| too_large())?)
            .ok_or_else(too_large)?;
        let term = digit.checked_mul(weight).ok_or_else(too_large)?;
        parts.push(format!("{c} × {from_base}^{position} = {term}"));
        decimal = decimal.checked_add(term).ok_or_else(too_large)?;
    }
    steps.push(format!("To decimal: {} = {decimal}", parts.join(" + ")));
    Ok(decimal)
}

#[cfg(test)]
mod tests {
    use super::{convert_base, digit_value};
    use crate::CoreError;

    #[test]
    fn hex_to_decimal_records_positional_expansion() {
        let conversion = convert_base("FF", 16, 10).expect("valid conversion");
        assert_eq!(conversion.result, "255");
        assert_eq!(
            conversion.steps,
            vec!["To decimal: F × 16^0 = 15 + F × 16^1 = 240 = 255".to_owned()]
        );
    }

    #[test]
    fn decimal_to_binary_records_division_chain() {
        let conversion = convert_base("5", 10, 2).expect("valid conversion");
        assert_eq!(conversion.result, "101");
        assert_eq!(
            conversion.steps,
            vec![
                "Input is already decimal: 5".to_owned(),
                "5 ÷ 2 = 2, remainder 1 (1)".to_owned(),
                "2 ÷ 2 = 1, remainder 0 (0)".to_owned(),
                "1 ÷ 2 = 0, remainder 1 (1)".to_owned(),
                "Read remainders from bottom to top: 101".to_owned(),
            ]
        );
    }

    #[test]
    fn zero_converts_to_zero_in_any_base() {
        for to_base in 2..=36 {
            let conversion = convert_base("0", 10, to_base).expect("valid conversion");
            assert_eq!(conversion.result, "0", "to base {to_base}");
        }
    }

    #[test]
    fn leading_zeros_canonicalize_away() {
        let conversion = convert_base("00FF", 16, 16).expect("valid conversion");
        assert_eq!(conversion.result, "FF");
    }

    #[test]
    fn lowercase_digits_and_radix_prefixes_are_accepted() {
        assert_eq!(convert_base("0xff", 16, 10).expect("valid").result, "255");
        assert_eq!(convert_base("0b101", 2, 10).expect("valid").result, "5");
    }

    #[test]
    fn invalid_digit_names_the_character_and_base() {
        assert_eq!(
            convert_base("102", 2, 10),
            Err(CoreError::InvalidDigit {
                digit: '2',
                base: 2
            })
        );
        assert_eq!(
            convert_base("G", 16, 10),
            Err(CoreError::InvalidDigit {
                digit: 'G',
                base: 16
            })
        );
    }

    #[test]
    fn bases_outside_two_to_thirty_six_are_rejected() {
        assert_eq!(
            convert_base("1", 1, 10),
            Err(CoreError::InvalidBase { base: 1 })
        );
        assert_eq!(
            convert_base("1", 10, 37),
            Err(CoreError::InvalidBase { base: 37 })
        );
    }

    #[test]
    fn empty_input_is_a_format_error() {
        assert!(matches!(
            convert_base("", 10, 2),
            Err(CoreError::Format { .. })
        ));
        assert!(matches!(
            convert_base("0x", 16, 2),
            Err(CoreError::Format { .. })
        ));
    }

    #[test]
    fn digit_value_respects_base_cutoff() {
        assert_eq!(digit_value('F', 16), Some(15));
        assert_eq!(digit_value('f', 16), Some(15));
        assert_eq!(digit_value('F', 15), None);
        assert_eq!(digit_value('Z', 36), Some(35));
    }

    #[test]
    fn base36_round_trip() {
        let to = convert_base("BITLAB", 36, 10).expect("valid conversion");
        let back = convert_base(&to.result, 10, 36).expect("valid conversion");
        assert_eq!(back.result, "BITLAB");
    }
}
