//! Stateless server-side mirrors of the conversion operations.
//!
//! These delegate to `bitlab-core` and only reshape the results into the
//! response records the endpoints return. The arithmetic mirror carries
//! none of the stack machine's stack/flag side effects.

use bitlab_core::{binary_arithmetic as core_arithmetic, convert_base, ArithmeticOp};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Intermediate working reported by the conversion mirror.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionSteps {
    /// The digits as received.
    pub input: String,
    /// Source base.
    pub from_base: u32,
    /// Target base.
    pub to_base: u32,
    /// Value after the to-decimal pass.
    pub decimal_intermediate: u128,
    /// Digits in the target base.
    pub final_result: String,
}

/// Response of the conversion mirror.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    /// Digits in the target base.
    pub result: String,
    /// Decimal value of the input.
    pub decimal: u128,
    /// Intermediate working.
    pub steps: ConversionSteps,
}

/// Response of the binary-arithmetic mirror.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryArithmeticResponse {
    /// Result in binary, `-` prefixed when negative.
    pub result: String,
    /// Result as a decimal value.
    pub decimal: i128,
    /// Decimal value of the first operand.
    pub operand1_decimal: u64,
    /// Decimal value of the second operand.
    pub operand2_decimal: u64,
}

/// Converts `number` between bases, reporting the decimal intermediate.
///
/// # Errors
///
/// [`StoreError::InvalidRequest`] for an empty number, otherwise any
/// [`bitlab_core::CoreError`] from the conversion.
pub fn convert(number: &str, from_base: u32, to_base: u32) -> Result<ConvertResponse, StoreError> {
    if number.trim().is_empty() {
        return Err(StoreError::InvalidRequest {
            reason: "number is required".to_owned(),
        });
    }

    let conversion = convert_base(number, from_base, to_base)?;
    let decimal: u128 = convert_base(number, from_base, 10)?
        .result
        .parse()
        .map_err(|_| StoreError::InvalidRequest {
            reason: "number exceeds the supported range".to_owned(),
        })?;

    Ok(ConvertResponse {
        decimal,
        steps: ConversionSteps {
            input: number.to_owned(),
            from_base,
            to_base,
            decimal_intermediate: decimal,
            final_result: conversion.result.clone(),
        },
        result: conversion.result,
    })
}

/// Applies a named arithmetic operation to two binary operands.
///
/// # Errors
///
/// Any [`bitlab_core::CoreError`] from the operand parse or the operation.
pub fn binary_arithmetic(
    operand1: &str,
    operand2: &str,
    op: ArithmeticOp,
) -> Result<BinaryArithmeticResponse, StoreError> {
    let outcome = core_arithmetic(operand1, operand2, op)?;
    Ok(BinaryArithmeticResponse {
        result: outcome.result,
        decimal: outcome.decimal,
        operand1_decimal: outcome.lhs,
        operand2_decimal: outcome.rhs,
    })
}

/// Maps the wire operation names onto [`ArithmeticOp`].
///
/// # Errors
///
/// [`StoreError::InvalidRequest`] for an unknown operation name.
pub fn parse_operation(name: &str) -> Result<ArithmeticOp, StoreError> {
    match name {
        "add" => Ok(ArithmeticOp::Add),
        "subtract" => Ok(ArithmeticOp::Sub),
        "multiply" => Ok(ArithmeticOp::Mul),
        "divide" => Ok(ArithmeticOp::Div),
        other => Err(StoreError::InvalidRequest {
            reason: format!("unknown operation '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{binary_arithmetic, convert, parse_operation};
    use crate::errors::StoreError;
    use bitlab_core::ArithmeticOp;

    #[test]
    fn convert_reports_decimal_intermediate_and_steps() {
        let response = convert("FF", 16, 2).expect("valid conversion");
        assert_eq!(response.result, "11111111");
        assert_eq!(response.decimal, 255);
        assert_eq!(response.steps.decimal_intermediate, 255);
        assert_eq!(response.steps.final_result, "11111111");
        assert_eq!(response.steps.from_base, 16);
    }

    #[test]
    fn convert_rejects_empty_numbers() {
        assert!(matches!(
            convert("  ", 10, 2),
            Err(StoreError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn convert_surfaces_core_errors() {
        assert!(matches!(convert("2", 2, 10), Err(StoreError::Core(_))));
    }

    #[test]
    fn arithmetic_mirror_reshapes_the_core_result() {
        let response = binary_arithmetic("101", "11", ArithmeticOp::Add).expect("valid");
        assert_eq!(response.result, "1000");
        assert_eq!(response.decimal, 8);
        assert_eq!(response.operand1_decimal, 5);
        assert_eq!(response.operand2_decimal, 3);
    }

    #[test]
    fn operation_names_match_the_wire_contract() {
        assert_eq!(parse_operation("add").expect("known"), ArithmeticOp::Add);
        assert_eq!(
            parse_operation("subtract").expect("known"),
            ArithmeticOp::Sub
        );
        assert_eq!(
            parse_operation("multiply").expect("known"),
            ArithmeticOp::Mul
        );
        assert_eq!(parse_operation("divide").expect("known"), ArithmeticOp::Div);
        assert!(matches!(
            parse_operation("modulo"),
            Err(StoreError::InvalidRequest { .. })
        ));
    }
}
