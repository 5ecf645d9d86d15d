//! Parity-bit computation over bit strings.

use super::ensure_binary;
use crate::error::CoreError;

/// Parity discipline for [`compute_parity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ParityKind {
    /// Parity bit makes the total number of ones even.
    Even,
    /// Parity bit makes the total number of ones odd.
    Odd,
}

/// Computes the parity bit (`0` or `1`) for `bits`.
///
/// # Errors
///
/// [`CoreError::NonBinary`] when `bits` is empty or not a bit string.
pub fn compute_parity(bits: &str, kind: ParityKind) -> Result<u8, CoreError> {
    ensure_binary(bits)?;
    let ones = bits.bytes().filter(|&b| b == b'1').count();
    let bit = match kind {
        ParityKind::Even => ones % 2,
        ParityKind::Odd => (ones + 1) % 2,
    };
    Ok(u8::try_from(bit).unwrap_or(0))
}

/// Returns `bits` with its parity bit appended.
///
/// # Errors
///
/// [`CoreError::NonBinary`] when `bits` is empty or not a bit string.
pub fn append_parity(bits: &str, kind: ParityKind) -> Result<String, CoreError> {
    let parity = compute_parity(bits, kind)?;
    Ok(format!("{bits}{parity}"))
}
