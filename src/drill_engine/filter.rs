use crate::drill_engine::models::Operation;

/// Does this candidate make an interesting problem?
///
/// | Operation | Kept when |
/// |-----------|-----------|
/// | Subtract, SubtractInline | subtrahend > 2 and difference > 1 |
/// | Multiply, MultiplyInline | both factors > 1 |
/// | Divide | integer quotient > 1 |
/// | Add, AddInline | every operand > 0 |
///
/// Candidates with fewer than two operands are never accepted.
pub fn accepts(op: Operation, operands: &[u64]) -> bool {
    if operands.len() < 2 {
        return false;
    }
    let (a, b) = (operands[0], operands[1]);
    match op {
        Operation::Subtract | Operation::SubtractInline =>
            b > 2 && a > b && a - b > 1,
        Operation::Multiply | Operation::MultiplyInline =>
            a > 1 && b > 1,
        Operation::Divide =>
            b > 0 && a / b > 1,
        Operation::Add | Operation::AddInline =>
            operands.iter().all(|&n| n > 0),
    }
}
