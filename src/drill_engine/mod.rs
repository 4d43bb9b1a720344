//! Core drill engine — operand sizing, filtering, and batch generation.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: operations, sizing modes, problems, request/response structs |
//! | `error`      | `DrillError` taxonomy and the `DrillResult` alias |
//! | `random`     | Uniform integer and uniform choice primitives |
//! | `ordering`   | Larger-first ordering for subtraction and division pairs |
//! | `sizing`     | Digit-count and max-value operand strategies |
//! | `inline_mul` | Times-table draws for in-line multiplication |
//! | `filter`     | Per-operation rejection of trivial problems |
//! | `validate`   | Request checks run before sampling |
//! | `generator`  | Entry points `generate_drill()` and `generate_batch()` |
//! | `export`     | JSON payload for client renderers |

pub mod error;
pub mod export;
pub mod filter;
pub mod generator;
pub mod inline_mul;
pub mod models;
pub mod ordering;
pub mod random;
pub mod sizing;
pub mod validate;

// Re-export the public API surface so callers can use
// `drill_engine::generate_drill` without reaching into sub-modules.
pub use error::{DrillError, DrillResult};
pub use export::to_client_payload;
pub use generator::{generate_batch, generate_drill};
pub use models::{
    DrillBatch, DrillRequest, GeneratorLimits, Operation, Problem, SizingSpec, TablesSet,
    MAX_DIGITS,
};
pub use validate::validate;
