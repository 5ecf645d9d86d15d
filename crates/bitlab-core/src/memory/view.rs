//! Display-format conversions between bytes and strings.
//!
//! `parse_value` is the single gate for turning user text into a byte: it
//! rejects unparsable input and out-of-range values instead of clamping.

use crate::error::CoreError;

/// Display format for memory bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ViewMode {
    /// Two-digit uppercase hexadecimal.
    #[default]
    Hex,
    /// Decimal, space-padded to three characters.
    Dec,
    /// Eight-digit binary.
    Bin,
    /// Printable character, `.` for non-printable bytes.
    Ascii,
}

/// True for bytes in the printable-ASCII range `32..=126`.
#[must_use]
pub const fn is_printable(byte: u8) -> bool {
    byte >= 32 && byte <= 126
}

/// Formats one byte in the given view mode.
#[must_use]
pub fn format_value(byte: u8, mode: ViewMode) -> String {
    match mode {
        ViewMode::Hex => format!("{byte:02X}"),
        ViewMode::Dec => format!("{byte:>3}"),
        ViewMode::Bin => format!("{byte:08b}"),
        ViewMode::Ascii => {
            if is_printable(byte) {
                char::from(byte).to_string()
            } else {
                ".".to_owned()
            }
        }
    }
}

/// Parses user text back into a byte according to the view mode.
///
/// Hex accepts an optional `0x` prefix, binary an optional `0b` prefix. In
/// ASCII mode the first character's code point is taken (empty text parses
/// as 0, matching the empty-cell convention).
///
/// # Errors
///
/// [`CoreError::Format`] for unparsable text and
/// [`CoreError::InvalidByteValue`] for parsable values outside `0..=255`.
pub fn parse_value(text: &str, mode: ViewMode) -> Result<u8, CoreError> {
    let trimmed = text.trim();
    let value: i64 = match mode {
        ViewMode::Hex => {
            let digits = trimmed
                .strip_prefix("0x")
                .or_else(|| trimmed.strip_prefix("0X"))
                .unwrap_or(trimmed);
            i64::from_str_radix(digits, 16).map_err(|_| unparsable(trimmed, "hex"))?
        }
        ViewMode::Dec => trimmed.parse().map_err(|_| unparsable(trimmed, "decimal"))?,
        ViewMode::Bin => {
            let digits = trimmed
                .strip_prefix("0b")
                .or_else(|| trimmed.strip_prefix("0B"))
                .unwrap_or(trimmed);
            i64::from_str_radix(digits, 2).map_err(|_| unparsable(trimmed, "binary"))?
        }
        ViewMode::Ascii => trimmed.chars().next().map_or(0, |c| i64::from(u32::from(c))),
    };
    u8::try_from(value).map_err(|_| CoreError::InvalidByteValue { value })
}

fn unparsable(text: &str, mode: &str) -> CoreError {
    CoreError::Format {
        reason: format!("'{text}' is not a valid {mode} byte"),
    }
}
