//! Crate error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A roll policy asked for zero dice-pairs; a turn always rolls at least one.
    #[error("roll policy yielded {pairs} dice-pairs (must be >= 1)")]
    InvalidPolicy { pairs: u32 },
    #[error("{field} must be > 0 (got {value})")]
    NonZero { field: &'static str, value: usize },
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("unknown roll policy: {value}")]
    UnknownPolicy { value: String },
    #[error("prompt i/o failed")]
    Io(#[from] std::io::Error),
}

/// `Err(NonZero)` when `value == 0`.
pub(crate) fn non_zero(field: &'static str, value: usize) -> Result<usize> {
    if value == 0 { Err(Error::NonZero { field, value }) } else { Ok(value) }
}
