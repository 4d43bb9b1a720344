use thiserror::Error;

pub type DrillResult<T> = Result<T, DrillError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrillError {
    /// A caller-supplied value set is unusable (empty choice set, bad tables).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The operation, sizing and operand count do not fit together.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The request document could not be parsed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// `attempts` counts the consecutive draws that failed to fill one slot.
    #[error("generation exhausted after {attempts} draws without an accepted problem: accepted {accepted} of {requested} problems")]
    GenerationExhausted {
        requested: usize,
        accepted: usize,
        attempts: u64,
    },
}

impl DrillError {
    /// Only exhaustion can succeed on a second try (with a larger budget or a
    /// different seed). Everything else needs the input fixed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DrillError::GenerationExhausted { .. })
    }

    pub(crate) fn input(msg: impl Into<String>) -> Self {
        DrillError::InvalidInput(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        DrillError::InvalidConfiguration(msg.into())
    }
}
