//! Up-front request checks.
//!
//! Runs before any sampling so that a bad request fails immediately instead of
//! spinning in the rejection loop. Besides the per-strategy preconditions it
//! rejects combinations where no candidate could ever pass the filter.

use crate::drill_engine::{
    error::{DrillError, DrillResult},
    inline_mul::MIN_FACTOR,
    models::{DrillRequest, Operation, SizingSpec, MAX_DIGITS},
};

/// Smallest max value that admits an accepted subtraction (`5 - 3`).
pub const MIN_SUBTRACTION_MAX: u64 = 5;

pub fn validate(request: &DrillRequest) -> DrillResult<()> {
    let op = request.operation;

    if request.count == 0 {
        return Err(DrillError::config("count must be at least 1"));
    }
    if request.operand_count < 2 {
        return Err(DrillError::config(format!(
            "a problem needs at least 2 operands, got {}",
            request.operand_count
        )));
    }
    if request.limits.max_attempts == 0 {
        return Err(DrillError::config("max_attempts must be at least 1"));
    }

    if op == Operation::MultiplyInline {
        return validate_tables(request);
    }

    let Some(sizing) = request.sizing else {
        return Err(DrillError::config(format!("{op} needs a sizing mode")));
    };

    match sizing {
        SizingSpec::DigitCount { digits1, digits2 } => {
            if request.operand_count != 2 {
                return Err(DrillError::config(format!(
                    "digit-count sizing takes exactly 2 operands, got {}",
                    request.operand_count
                )));
            }
            for d in [digits1, digits2] {
                if d == 0 || d > MAX_DIGITS {
                    return Err(DrillError::config(format!(
                        "digit count must be in 1..={MAX_DIGITS}, got {d}"
                    )));
                }
            }
            if op.is_ordered() && digits1 < digits2 {
                return Err(DrillError::config(format!(
                    "{op} needs digits1 >= digits2, got {digits1} < {digits2}"
                )));
            }
        }
        SizingSpec::MaxValue { max } => {
            if request.operand_count != 2 && op != Operation::Add {
                return Err(DrillError::config(format!(
                    "{op} with a max value takes exactly 2 operands, got {}",
                    request.operand_count
                )));
            }
            if max <= 1 {
                return Err(DrillError::config(format!("max must be greater than 1, got {max}")));
            }
            let subtraction = matches!(op, Operation::Subtract | Operation::SubtractInline);
            if subtraction && max < MIN_SUBTRACTION_MAX {
                return Err(DrillError::config(format!(
                    "{op} with max {max} can never produce an accepted problem \
                     (needs max >= {MIN_SUBTRACTION_MAX})"
                )));
            }
        }
    }
    Ok(())
}

fn validate_tables(request: &DrillRequest) -> DrillResult<()> {
    if request.operand_count != 2 {
        return Err(DrillError::config(format!(
            "in-line multiplication takes exactly 2 operands, got {}",
            request.operand_count
        )));
    }
    if request.tables.is_empty() {
        return Err(DrillError::input("in-line multiplication needs at least one table"));
    }
    if let Some(&t) = request.tables.iter().find(|&&t| t < MIN_FACTOR) {
        return Err(DrillError::input(format!("table {t} is below {MIN_FACTOR}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(op: Operation, d1: u32, d2: u32) -> DrillRequest {
        DrillRequest::new(op, SizingSpec::DigitCount { digits1: d1, digits2: d2 })
    }

    fn max(op: Operation, max: u64) -> DrillRequest {
        DrillRequest::new(op, SizingSpec::MaxValue { max })
    }

    #[test]
    fn accepts_reasonable_requests() {
        for op in Operation::ALL {
            if op == Operation::MultiplyInline {
                continue;
            }
            assert!(validate(&digits(op, 2, 1)).is_ok(), "{op:?}");
            assert!(validate(&max(op, 20)).is_ok(), "{op:?}");
        }
        assert!(validate(&DrillRequest::tables_drill([7, 8])).is_ok());
        assert!(validate(&max(Operation::Add, 9).with_operand_count(5)).is_ok());
    }

    #[test]
    fn rejects_zero_count_and_single_operand() {
        let req = digits(Operation::Add, 2, 2).with_count(0);
        assert!(matches!(validate(&req), Err(DrillError::InvalidConfiguration(_))));
        let req = max(Operation::Add, 9).with_operand_count(1);
        assert!(matches!(validate(&req), Err(DrillError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_missing_sizing() {
        let req = DrillRequest::new(Operation::Divide, None);
        assert!(matches!(validate(&req), Err(DrillError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_bad_digit_counts() {
        assert!(validate(&digits(Operation::Add, 0, 1)).is_err());
        assert!(validate(&digits(Operation::Add, 1, MAX_DIGITS + 1)).is_err());
        assert!(validate(&digits(Operation::Subtract, 1, 2)).is_err());
        assert!(validate(&digits(Operation::Divide, 2, 3)).is_err());
        assert!(validate(&digits(Operation::Multiply, 1, 2)).is_ok());
        assert!(validate(&digits(Operation::Add, 2, 2).with_operand_count(3)).is_err());
    }

    #[test]
    fn rejects_operand_count_mismatch_for_max_value() {
        for op in [Operation::AddInline, Operation::Subtract, Operation::Multiply, Operation::Divide] {
            let req = max(op, 20).with_operand_count(3);
            assert!(matches!(validate(&req), Err(DrillError::InvalidConfiguration(_))), "{op:?}");
        }
    }

    #[test]
    fn rejects_infeasible_subtraction_max() {
        for op in [Operation::Subtract, Operation::SubtractInline] {
            assert!(validate(&max(op, 4)).is_err(), "{op:?}");
            assert!(validate(&max(op, MIN_SUBTRACTION_MAX)).is_ok(), "{op:?}");
        }
        assert!(validate(&max(Operation::Add, 1)).is_err());
        assert!(validate(&max(Operation::Divide, 2)).is_ok());
    }

    #[test]
    fn rejects_bad_tables() {
        let req = DrillRequest::tables_drill(Vec::<u64>::new());
        assert!(matches!(validate(&req), Err(DrillError::InvalidInput(_))));
        let req = DrillRequest::tables_drill([1, 7]);
        assert!(matches!(validate(&req), Err(DrillError::InvalidInput(_))));
        let req = DrillRequest::tables_drill([7]).with_operand_count(3);
        assert!(matches!(validate(&req), Err(DrillError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_zero_attempt_budget() {
        let req = max(Operation::Add, 9).with_max_attempts(0);
        assert!(validate(&req).is_err());
    }
}
