//! Fixed-width (8-bit) signed representations.
//!
//! Three encodings with distinct zero and range policies:
//!
//! - sign-magnitude: range `-127..=127`, dual zero (`00000000`/`10000000`);
//! - one's complement: range `-127..=127`, dual zero (`00000000`/`11111111`);
//! - two's complement: range `-128..=127`, single zero, `-128` representable.

use crate::error::CoreError;

const WIDTH: usize = 8;

fn ensure_eight_bits(bits: &str) -> Result<u8, CoreError> {
    if bits.len() != WIDTH || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CoreError::Format {
            reason: format!("expected exactly {WIDTH} binary digits"),
        });
    }
    u8::from_str_radix(bits, 2).map_err(|_| CoreError::Format {
        reason: format!("expected exactly {WIDTH} binary digits"),
    })
}

fn ensure_range(value: i64, min: i64, max: i64) -> Result<(), CoreError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::ValueOutOfRange { value, min, max })
    }
}

fn magnitude(value: i64) -> u8 {
    u8::try_from(value.unsigned_abs()).unwrap_or(u8::MAX)
}

/// Encodes a decimal value as 8-bit sign-magnitude.
///
/// # Errors
///
/// [`CoreError::ValueOutOfRange`] outside `-127..=127`.
pub fn to_sign_magnitude(value: i64) -> Result<String, CoreError> {
    ensure_range(value, -127, 127)?;
    let sign = u8::from(value < 0);
    Ok(format!("{sign}{:07b}", magnitude(value)))
}

/// Decodes an 8-bit sign-magnitude string. `-0` decodes to `0`.
///
/// # Errors
///
/// [`CoreError::Format`] unless the input is exactly 8 binary digits.
pub fn from_sign_magnitude(bits: &str) -> Result<i64, CoreError> {
    let raw = ensure_eight_bits(bits)?;
    let mag = i64::from(raw & 0x7F);
    Ok(if raw & 0x80 == 0 { mag } else { -mag })
}

/// Encodes a decimal value as 8-bit one's complement.
///
/// # Errors
///
/// [`CoreError::ValueOutOfRange`] outside `-127..=127`.
pub fn to_ones_complement(value: i64) -> Result<String, CoreError> {
    ensure_range(value, -127, 127)?;
    let bits = if value < 0 {
        !magnitude(value)
    } else {
        magnitude(value)
    };
    Ok(format!("{bits:08b}"))
}

/// Decodes an 8-bit one's-complement string. `-0` decodes to `0`.
///
/// # Errors
///
/// [`CoreError::Format`] unless the input is exactly 8 binary digits.
pub fn from_ones_complement(bits: &str) -> Result<i64, CoreError> {
    let raw = ensure_eight_bits(bits)?;
    Ok(if raw & 0x80 == 0 {
        i64::from(raw)
    } else {
        -i64::from(!raw)
    })
}

/// Encodes a decimal value as 8-bit two's complement.
///
/// # Errors
///
/// [`CoreError::ValueOutOfRange`] outside `-128..=127`.
pub fn to_twos_complement(value: i64) -> Result<String, CoreError> {
    ensure_range(value, -128, 127)?;
    let byte = i8::try_from(value).map_err(|_| CoreError::ValueOutOfRange {
        value,
        min: -128,
        max: 127,
    })?;
    Ok(format!("{:08b}", byte.to_be_bytes()[0]))
}

/// Decodes an 8-bit two's-complement string.
///
/// # Errors
///
/// [`CoreError::Format`] unless the input is exactly 8 binary digits.
pub fn from_twos_complement(bits: &str) -> Result<i64, CoreError> {
    let raw = ensure_eight_bits(bits)?;
    Ok(i64::from(i8::from_be_bytes([raw])))
}

#[cfg(test)]
mod tests {
    use super::{
        from_ones_complement, from_sign_magnitude, from_twos_complement, to_ones_complement,
        to_sign_magnitude, to_twos_complement,
    };
    use crate::CoreError;

    #[test]
    fn sign_magnitude_uses_a_sign_bit_over_seven_magnitude_bits() {
        assert_eq!(to_sign_magnitude(5).expect("valid"), "00000101");
        assert_eq!(to_sign_magnitude(-5).expect("valid"), "10000101");
        assert_eq!(from_sign_magnitude("10000101").expect("valid"), -5);
    }

    #[test]
    fn sign_magnitude_has_dual_zero() {
        assert_eq!(from_sign_magnitude("00000000").expect("valid"), 0);
        assert_eq!(from_sign_magnitude("10000000").expect("valid"), 0);
        assert_eq!(to_sign_magnitude(0).expect("valid"), "00000000");
    }

    #[test]
    fn ones_complement_inverts_negative_magnitudes() {
        assert_eq!(to_ones_complement(5).expect("valid"), "00000101");
        assert_eq!(to_ones_complement(-5).expect("valid"), "11111010");
        assert_eq!(from_ones_complement("11111010").expect("valid"), -5);
    }

    #[test]
    fn ones_complement_has_dual_zero() {
        assert_eq!(from_ones_complement("00000000").expect("valid"), 0);
        assert_eq!(from_ones_complement("11111111").expect("valid"), 0);
    }

    #[test]
    fn twos_complement_covers_the_asymmetric_range() {
        assert_eq!(to_twos_complement(-5).expect("valid"), "11111011");
        assert_eq!(from_twos_complement("11111011").expect("valid"), -5);
        assert_eq!(to_twos_complement(-128).expect("valid"), "10000000");
        assert_eq!(from_twos_complement("10000000").expect("valid"), -128);
        assert_eq!(to_twos_complement(127).expect("valid"), "01111111");
    }

    #[test]
    fn range_policies_differ_per_encoding() {
        assert!(matches!(
            to_sign_magnitude(-128),
            Err(CoreError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            to_ones_complement(-128),
            Err(CoreError::ValueOutOfRange { .. })
        ));
        assert!(to_twos_complement(-128).is_ok());
        assert!(matches!(
            to_twos_complement(128),
            Err(CoreError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn decoders_demand_exactly_eight_bits() {
        for bad in ["0101", "010101010", "0101010a", ""] {
            assert!(matches!(
                from_sign_magnitude(bad),
                Err(CoreError::Format { .. })
            ));
            assert!(matches!(
                from_ones_complement(bad),
                Err(CoreError::Format { .. })
            ));
            assert!(matches!(
                from_twos_complement(bad),
                Err(CoreError::Format { .. })
            ));
        }
    }

    #[test]
    fn encode_decode_round_trip_over_full_ranges() {
        for value in -127_i64..=127 {
            assert_eq!(
                from_sign_magnitude(&to_sign_magnitude(value).expect("valid")).expect("valid"),
                value
            );
            assert_eq!(
                from_ones_complement(&to_ones_complement(value).expect("valid")).expect("valid"),
                value
            );
        }
        for value in -128_i64..=127 {
            assert_eq!(
                from_twos_complement(&to_twos_complement(value).expect("valid")).expect("valid"),
                value
            );
        }
    }
}
