use thiserror::Error;

/// Faults raised when a construction-time invariant is violated.
///
/// None of these are reachable from a well-formed command stream against a
/// validated machine. User-facing outcomes such as `OUT-OF-STOCK` are
/// [`Reply`](crate::domain::reply::Reply) values, not errors.
#[derive(Error, Debug)]
pub enum VendingError {
    #[error("Coin denomination not found: {0}")]
    UnknownDenomination(String),
    #[error("Item not found: {0}")]
    UnknownItem(String),
    #[error("Duplicate coin denomination: {0}")]
    DuplicateDenomination(String),
    #[error("Duplicate item: {0}")]
    DuplicateItem(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VendingError>;
