//! Text/code-point conversions and the printable-ASCII reference table.

use crate::error::CoreError;

/// One row of the printable-ASCII reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AsciiRow {
    /// The printable character.
    pub character: char,
    /// Decimal code.
    pub code: u32,
    /// Two-digit uppercase hexadecimal form.
    pub hex: String,
    /// Seven-digit binary form.
    pub binary: String,
}

/// Maps each character of `text` to its decimal code point, space
/// separated.
#[must_use]
pub fn text_to_ascii_codes(text: &str) -> String {
    text.chars()
        .map(|c| u32::from(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maps whitespace-separated decimal code points back to text.
///
/// # Errors
///
/// [`CoreError::Format`] when a token is not a decimal number or not a
/// valid code point.
pub fn ascii_codes_to_text(codes: &str) -> Result<String, CoreError> {
    let mut text = String::new();
    for token in codes.split_whitespace() {
        let code: u32 = token.parse().map_err(|_| CoreError::Format {
            reason: format!("'{token}' is not a decimal character code"),
        })?;
        let c = char::from_u32(code).ok_or_else(|| CoreError::Format {
            reason: format!("{code} is not a valid code point"),
        })?;
        text.push(c);
    }
    Ok(text)
}

/// Returns the printable-ASCII reference rows for codes `32..=126`.
#[must_use]
pub fn ascii_table() -> Vec<AsciiRow> {
    (32_u32..=126)
        .map(|code| AsciiRow {
            character: char::from_u32(code).unwrap_or('.'),
            code,
            hex: format!("{code:02X}"),
            binary: format!("{code:07b}"),
        })
        .collect()
}
