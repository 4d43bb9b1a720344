//! # arith_drill_gen
//!
//! A randomised arithmetic exercise generator for mental-math and column
//! drilling.
//!
//! This library produces batches of addition, subtraction, multiplication and
//! division problems (plus in-line variants of the first three). Operands are
//! sized by digit count or by a shared maximum, ordered so that subtraction and
//! division stay in the positive integers, and filtered so that trivial
//! problems (subtracting 1, multiplying by 1, a quotient of 1) never appear.
//!
//! ## How it works
//!
//! 1. Build a [`DrillRequest`] with an operation, a [`SizingSpec`] (or a set of
//!    tables for in-line multiplication), a count, and an optional RNG seed.
//! 2. Call [`generate_drill`] — the engine validates the request, then draws
//!    candidates and keeps the ones that pass the operation's filter until the
//!    batch is full or the attempt budget runs out.
//! 3. The returned [`DrillBatch`] holds the problems; [`to_client_payload`]
//!    turns it into JSON for a renderer.
//!
//! ## Quick start
//!
//! ```rust
//! use arith_drill_gen::{generate_drill, DrillRequest, Operation, SizingSpec};
//!
//! // Five two-digit minus one-digit subtractions, reproducible with seed 42.
//! let request = DrillRequest::new(
//!     Operation::Subtract,
//!     SizingSpec::DigitCount { digits1: 2, digits2: 1 },
//! )
//! .with_count(5)
//! .with_seed(42);
//!
//! let batch = generate_drill(&request).unwrap();
//! for problem in &batch.problems {
//!     println!("{problem} =");
//! }
//!
//! // Times tables 7 and 8 only:
//! let tables = generate_drill(&DrillRequest::tables_drill([7, 8]).with_count(3)).unwrap();
//! assert_eq!(tables.problems.len(), 3);
//! ```

pub mod drill_engine;

// Convenience re-exports so callers can use `arith_drill_gen::generate_drill`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    generate_batch, generate_drill, to_client_payload, validate, DrillBatch, DrillError,
    DrillRequest, DrillResult, GeneratorLimits, Operation, Problem, SizingSpec, TablesSet,
};
