//! Operand sizing strategies.
//!
//! Two ways to bound operand magnitude, picked by the active [`SizingSpec`]:
//!
//! - **Digit count**: exactly two operands, each with a fixed number of
//!   decimal digits (`digits = 3` draws from `100..=999`).
//! - **Max value**: every operand drawn from `1..=max`. More than two
//!   operands is only allowed for plain [`Operation::Add`].
//!
//! For ordered operations (subtraction, division) both strategies return the
//! larger operand first.

use rand::Rng;
use crate::drill_engine::{
    error::{DrillError, DrillResult},
    models::{Operation, SizingSpec, MAX_DIGITS},
    ordering::order_pair,
    random::uniform_int,
};

/// Inclusive range of the numbers with exactly `digits` decimal digits.
pub fn digit_range(digits: u32) -> DrillResult<(u64, u64)> {
    if digits == 0 || digits > MAX_DIGITS {
        return Err(DrillError::config(format!(
            "digit count must be in 1..={MAX_DIGITS}, got {digits}"
        )));
    }
    Ok((10u64.pow(digits - 1), 10u64.pow(digits) - 1))
}

fn ordered(op: Operation, n1: u64, n2: u64) -> Vec<u64> {
    if op.is_ordered() {
        let (hi, lo) = order_pair(n1, n2);
        vec![hi, lo]
    } else {
        vec![n1, n2]
    }
}

/// Draw two operands with `digits1` and `digits2` digits.
pub fn by_digit_count<R: Rng + ?Sized>(
    rng: &mut R,
    op: Operation,
    digits1: u32,
    digits2: u32,
) -> DrillResult<Vec<u64>> {
    if op.is_ordered() && digits1 < digits2 {
        return Err(DrillError::config(format!(
            "{op} needs digits1 >= digits2, got {digits1} < {digits2}"
        )));
    }
    let (lo1, hi1) = digit_range(digits1)?;
    let (lo2, hi2) = digit_range(digits2)?;

    let n1 = uniform_int(rng, lo1, hi1)?;
    let n2 = uniform_int(rng, lo2, hi2)?;
    Ok(ordered(op, n1, n2))
}

/// Draw `operand_count` operands from `1..=max`.
pub fn by_max_value<R: Rng + ?Sized>(
    rng: &mut R,
    op: Operation,
    max: u64,
    operand_count: usize,
) -> DrillResult<Vec<u64>> {
    let count_ok = operand_count == 2 || (op == Operation::Add && operand_count >= 2);
    if !count_ok {
        return Err(DrillError::config(format!(
            "{op} with a max value takes exactly 2 operands, got {operand_count}"
        )));
    }
    if max <= 1 {
        return Err(DrillError::config(format!("max must be greater than 1, got {max}")));
    }

    let operands = (0..operand_count)
        .map(|_| uniform_int(rng, 1, max))
        .collect::<DrillResult<Vec<u64>>>()?;

    if op.is_ordered() {
        // count_ok guarantees a pair here
        return Ok(ordered(op, operands[0], operands[1]));
    }
    Ok(operands)
}

/// Dispatch on the sizing mode.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    op: Operation,
    sizing: SizingSpec,
    operand_count: usize,
) -> DrillResult<Vec<u64>> {
    match sizing {
        SizingSpec::DigitCount { digits1, digits2 } => {
            if operand_count != 2 {
                return Err(DrillError::config(format!(
                    "digit-count sizing takes exactly 2 operands, got {operand_count}"
                )));
            }
            by_digit_count(rng, op, digits1, digits2)
        }
        SizingSpec::MaxValue { max } => by_max_value(rng, op, max, operand_count),
    }
}
