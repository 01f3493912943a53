//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the conversion contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cannot format {0}: value must be greater than zero")]
    NonPositive(i32),

    #[error("cannot format {0}: value must not be greater than 3000")]
    ExceedsRange(i32),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
