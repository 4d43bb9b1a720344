use rand::{rngs::StdRng, Rng, SeedableRng};
use rand::RngCore;

use crate::drill_engine::{
    error::{DrillError, DrillResult},
    filter::accepts,
    inline_mul,
    models::{DrillBatch, DrillRequest, Operation, Problem, SizingSpec, TablesSet},
    sizing,
    validate::validate,
};

/// Generate a batch ID from the operation code and the RNG.
fn make_batch_id(op: Operation, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", op.code(), rng.next_u32())
}

/// Draw one candidate, before filtering. `tables` is the request's table set
/// flattened once per batch.
pub fn candidate<R: Rng + ?Sized>(
    rng: &mut R,
    request: &DrillRequest,
    tables: &[u64],
) -> DrillResult<Vec<u64>> {
    if request.operation == Operation::MultiplyInline {
        return inline_mul::generate(rng, tables);
    }
    let sizing = request.sizing.ok_or_else(|| {
        DrillError::config(format!("{} needs a sizing mode", request.operation))
    })?;
    sizing::generate(rng, request.operation, sizing, request.operand_count)
}

/// Rejection-sample until `request.count` problems pass the filter or one slot
/// sees `max_attempts` rejected draws in a row. Returns the problems and the
/// total number of draws.
pub fn fill_batch<R: Rng + ?Sized>(
    rng: &mut R,
    request: &DrillRequest,
) -> DrillResult<(Vec<Problem>, u64)> {
    let op = request.operation;
    let mut problems = Vec::with_capacity(request.count);
    let tables: Vec<u64> = request.tables.iter().copied().collect();
    let mut attempts = 0u64;
    // draws since the last accepted problem
    let mut streak = 0u64;

    while problems.len() < request.count {
        if streak >= request.limits.max_attempts {
            tracing::warn!(
                operation = ?op,
                requested = request.count,
                accepted = problems.len(),
                streak,
                "attempt budget exhausted"
            );
            return Err(DrillError::GenerationExhausted {
                requested: request.count,
                accepted: problems.len(),
                attempts: streak,
            });
        }
        attempts += 1;
        streak += 1;

        let operands = candidate(rng, request, &tables)?;
        if accepts(op, &operands) {
            problems.push(Problem::new(op, operands));
            streak = 0;
        } else {
            tracing::trace!(operation = ?op, ?operands, "rejected candidate");
        }
    }
    Ok((problems, attempts))
}

/// Validate the request, seed the RNG and fill a batch.
pub fn generate_drill(request: &DrillRequest) -> DrillResult<DrillBatch> {
    validate(request)?;

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    tracing::debug!(
        operation = ?request.operation,
        count = request.count,
        seeded = request.rng_seed.is_some(),
        "generating batch"
    );

    let batch_id = make_batch_id(request.operation, &mut rng);
    let (problems, attempts) = fill_batch(&mut rng, request)?;
    tracing::info!(%batch_id, count = problems.len(), attempts, "batch generated");

    Ok(DrillBatch {
        batch_id,
        operation: request.operation,
        problems,
        attempts,
    })
}

/// Produce `count` accepted problems from entropy with the default attempt
/// budget. `sizing` is ignored for [`Operation::MultiplyInline`] and `tables`
/// is ignored for everything else.
pub fn generate_batch(
    count: usize,
    operation: Operation,
    sizing: Option<SizingSpec>,
    operand_count: usize,
    tables: &TablesSet,
) -> DrillResult<Vec<Problem>> {
    let request = DrillRequest {
        count,
        sizing,
        operand_count,
        tables: tables.clone(),
        ..DrillRequest::new(operation, None)
    };
    generate_drill(&request).map(|batch| batch.problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_batches_repeat() {
        let req = DrillRequest::new(Operation::Subtract, SizingSpec::DigitCount { digits1: 3, digits2: 2 })
            .with_count(20)
            .with_seed(12345);
        let a = generate_drill(&req).unwrap();
        let b = generate_drill(&req).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_id_carries_operation_code() {
        let req = DrillRequest::tables_drill([6]).with_seed(1);
        let batch = generate_drill(&req).unwrap();
        assert!(batch.batch_id.starts_with("MI-"), "{}", batch.batch_id);
        assert_eq!(batch.batch_id.len(), "MI-".len() + 8);
    }

    #[test]
    fn attempts_count_rejections() {
        let req = DrillRequest::new(Operation::Subtract, SizingSpec::MaxValue { max: 5 })
            .with_count(5)
            .with_seed(3);
        let batch = generate_drill(&req).unwrap();
        assert_eq!(batch.problems.len(), 5);
        // only (5, 3) passes out of 25 pairs, so some draws must be rejected
        assert!(batch.attempts > 5);
        assert!(batch.problems.iter().all(|p| p.operands == vec![5, 3]));
    }

    #[test]
    fn tiny_budget_exhausts() {
        let req = DrillRequest::new(Operation::Subtract, SizingSpec::MaxValue { max: 5 })
            .with_count(50)
            .with_seed(9)
            .with_max_attempts(10);
        let err = generate_drill(&req).unwrap_err();
        match err {
            DrillError::GenerationExhausted { requested, accepted, attempts } => {
                assert_eq!(requested, 50);
                assert_eq!(attempts, 10);
                assert!(accepted < 50);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn budget_restarts_after_each_accepted_problem() {
        // 1 in 25 draws passes, so 200 problems take ~5000 draws in total,
        // far beyond a 400-draw budget that never restarted
        let req = DrillRequest::new(Operation::Subtract, SizingSpec::MaxValue { max: 5 })
            .with_count(200)
            .with_seed(21)
            .with_max_attempts(400);
        let batch = generate_drill(&req).unwrap();
        assert_eq!(batch.problems.len(), 200);
        assert!(batch.attempts > 400, "took only {} draws", batch.attempts);
    }

    #[test]
    fn candidate_without_sizing_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let req = DrillRequest::new(Operation::Add, None);
        assert!(matches!(candidate(&mut rng, &req, &[]), Err(DrillError::InvalidConfiguration(_))));
    }

    #[test]
    fn generate_batch_returns_exact_count() {
        let problems = generate_batch(
            7,
            Operation::Add,
            Some(SizingSpec::MaxValue { max: 30 }),
            3,
            &TablesSet::new(),
        )
        .unwrap();
        assert_eq!(problems.len(), 7);
        assert!(problems.iter().all(|p| p.operands.len() == 3));
    }
}
