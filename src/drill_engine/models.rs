use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::drill_engine::error::{DrillError, DrillResult};

/// Largest digit count accepted by the digit-count sizing mode.
/// `10^18 - 1` is the widest all-nines value that still fits a `u64`.
pub const MAX_DIGITS: u32 = 18;

// ---------------------------------------------------------------------------
// Operation catalog
// ---------------------------------------------------------------------------

/// The seven drill kinds. "Inline" variants are mental-math problems written
/// on one line instead of in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    AddInline,
    Subtract,
    SubtractInline,
    Multiply,
    MultiplyInline,
    Divide,
}

impl Operation {
    /// Every operation in canonical order.
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::AddInline,
        Operation::Subtract,
        Operation::SubtractInline,
        Operation::Multiply,
        Operation::MultiplyInline,
        Operation::Divide,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add | Operation::AddInline           => "+",
            Operation::Subtract | Operation::SubtractInline => "-",
            Operation::Multiply | Operation::MultiplyInline => "×",
            Operation::Divide                               => "÷",
        }
    }

    /// Two-letter prefix used in batch ids.
    pub fn code(self) -> &'static str {
        match self {
            Operation::Add            => "AD",
            Operation::AddInline      => "AI",
            Operation::Subtract       => "SU",
            Operation::SubtractInline => "SI",
            Operation::Multiply       => "MU",
            Operation::MultiplyInline => "MI",
            Operation::Divide         => "DV",
        }
    }

    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Operation::AddInline | Operation::SubtractInline | Operation::MultiplyInline
        )
    }

    /// Operations whose first operand must be the larger one.
    pub fn is_ordered(self) -> bool {
        matches!(
            self,
            Operation::Subtract | Operation::SubtractInline | Operation::Divide
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Add            => "Addition",
            Operation::AddInline      => "In-line Addition",
            Operation::Subtract       => "Subtraction",
            Operation::SubtractInline => "In-line Subtraction",
            Operation::Multiply       => "Multiplication",
            Operation::MultiplyInline => "In-line Multiplication",
            Operation::Divide         => "Division",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Sizing
// ---------------------------------------------------------------------------

/// How operand magnitude is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SizingSpec {
    /// Exactly two operands with a fixed number of decimal digits each.
    DigitCount { digits1: u32, digits2: u32 },
    /// Every operand drawn from `1..=max`.
    MaxValue { max: u64 },
}

/// Multiplication tables to drill in [`Operation::MultiplyInline`].
pub type TablesSet = BTreeSet<u64>;

// ---------------------------------------------------------------------------
// Problems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub operation: Operation,
    pub operands: Vec<u64>,
}

impl Problem {
    pub fn new(operation: Operation, operands: Vec<u64>) -> Self {
        Problem { operation, operands }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = format!(" {} ", self.operation.symbol());
        let parts: Vec<String> = self.operands.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(&sep))
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Safety limits for the rejection-sampling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorLimits {
    /// Consecutive rejected draws allowed while filling one slot. The count
    /// restarts after every accepted problem, so the budget grows with the
    /// batch size.
    pub max_attempts: u64,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        GeneratorLimits { max_attempts: 10_000 }
    }
}

fn default_count() -> usize {
    10
}

fn default_operand_count() -> usize {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillRequest {
    #[serde(default = "default_count")]
    pub count: usize,
    pub operation: Operation,
    /// Ignored for [`Operation::MultiplyInline`], required otherwise.
    #[serde(default)]
    pub sizing: Option<SizingSpec>,
    #[serde(default = "default_operand_count")]
    pub operand_count: usize,
    /// Only read for [`Operation::MultiplyInline`].
    #[serde(default)]
    pub tables: TablesSet,
    /// `Some` makes the batch reproducible; `None` draws from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub limits: GeneratorLimits,
}

impl DrillRequest {
    /// Request ten two-operand problems from entropy with default limits.
    pub fn new(operation: Operation, sizing: impl Into<Option<SizingSpec>>) -> Self {
        DrillRequest {
            count: default_count(),
            operation,
            sizing: sizing.into(),
            operand_count: default_operand_count(),
            tables: TablesSet::new(),
            rng_seed: None,
            limits: GeneratorLimits::default(),
        }
    }

    /// Shorthand for an in-line multiplication request over `tables`.
    pub fn tables_drill(tables: impl IntoIterator<Item = u64>) -> Self {
        DrillRequest::new(Operation::MultiplyInline, None).with_tables(tables)
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_operand_count(mut self, operand_count: usize) -> Self {
        self.operand_count = operand_count;
        self
    }

    pub fn with_tables(mut self, tables: impl IntoIterator<Item = u64>) -> Self {
        self.tables = tables.into_iter().collect();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.limits.max_attempts = max_attempts;
        self
    }

    /// Parse a request from JSON. Omitted fields take their defaults.
    pub fn from_json(s: &str) -> DrillResult<Self> {
        serde_json::from_str(s).map_err(|e| DrillError::InvalidRequest(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillBatch {
    pub batch_id: String,
    pub operation: Operation,
    pub problems: Vec<Problem>,
    /// Candidate draws it took to fill the batch, rejected ones included.
    pub attempts: u64,
}
