use crate::history::MAX_HISTORY_LIMIT;

/// Broad classification of a [`CalcError`], used by transports to pick a
/// status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied value failed validation. Never retried.
    InvalidArgument,
}

/// All errors the calculator can return.
///
/// Every variant is an expected input-validation outcome, not a fault.
/// The `Display` text is the human-readable message surfaced to callers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// Division with a divisor of exactly zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// An operator symbol outside `+`, `-`, `*`, `/`.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A history page size outside `1..=MAX_HISTORY_LIMIT`.
    #[error("limit must be 1..{}", MAX_HISTORY_LIMIT)]
    LimitOutOfRange(i64),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::DivisionByZero
            | CalcError::UnsupportedOperation(_)
            | CalcError::LimitOutOfRange(_) => ErrorKind::InvalidArgument,
        }
    }
}
