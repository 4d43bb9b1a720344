//! Demo of every drill operation.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `arith_drill_gen` works end to end:
//!
//! 1. **All seven operations** — one seeded batch per operation, so the output
//!    is deterministic and reproducible.
//!
//! 2. **Errors** — an infeasible request and an exhausted attempt budget, to
//!    show which failures are worth retrying.
//!
//! 3. **JSON** — a request parsed from JSON and exported as a client payload.

use arith_drill_gen::{
    generate_drill, to_client_payload, DrillRequest, Operation, SizingSpec,
};

/// Generate and pretty-print one batch.
fn print_batch(request: DrillRequest) {
    let batch = match generate_drill(&request) {
        Ok(batch) => batch,
        Err(err) => {
            println!("  {} failed: {err}", request.operation);
            return;
        }
    };
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  ID: {}  Draws: {}", batch.operation, batch.batch_id, batch.attempts);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, problem) in batch.problems.iter().enumerate() {
        println!("  {:>2}. {} =", i + 1, problem);
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let two_by_one = SizingSpec::DigitCount { digits1: 2, digits2: 1 };

    print_batch(DrillRequest::new(Operation::Add, SizingSpec::MaxValue { max: 50 })
        .with_operand_count(4).with_count(5).with_seed(1));
    print_batch(DrillRequest::new(Operation::AddInline, SizingSpec::DigitCount { digits1: 2, digits2: 2 })
        .with_count(5).with_seed(2));
    print_batch(DrillRequest::new(Operation::Subtract, SizingSpec::DigitCount { digits1: 3, digits2: 2 })
        .with_count(5).with_seed(3));
    print_batch(DrillRequest::new(Operation::SubtractInline, two_by_one).with_count(5).with_seed(4));
    print_batch(DrillRequest::new(Operation::Multiply, two_by_one).with_count(5).with_seed(5));
    print_batch(DrillRequest::tables_drill([7, 8]).with_count(5).with_seed(6));
    print_batch(DrillRequest::new(Operation::Divide, SizingSpec::DigitCount { digits1: 3, digits2: 1 })
        .with_count(5).with_seed(7));

    // Subtraction cannot be non-trivial when every operand is at most 4.
    print_batch(DrillRequest::new(Operation::Subtract, SizingSpec::MaxValue { max: 4 }));

    // Feasible but starved: only 5 - 3 passes, so 3 draws per slot will not
    // fill 20 slots.
    let starved = DrillRequest::new(Operation::Subtract, SizingSpec::MaxValue { max: 5 })
        .with_count(20)
        .with_max_attempts(3);
    if let Err(err) = generate_drill(&starved) {
        println!("  retryable={}  {err}", err.is_retryable());
        println!();
    }

    let json = r#"{"count":3,"operation":"MultiplyInline","tables":[9],"rng_seed":42}"#;
    match DrillRequest::from_json(json).and_then(|req| generate_drill(&req)) {
        Ok(batch) => match serde_json::to_string_pretty(&to_client_payload(&batch)) {
            Ok(s) => println!("{s}"),
            Err(err) => println!("  could not render payload: {err}"),
        },
        Err(err) => println!("  request failed: {err}"),
    }
}
