use thiserror::Error;

/// Failure modes of a product lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The ID was not a positive integer.
    #[error("Product ID must be a positive integer")]
    InvalidInput,
    /// The ID was well-formed but no product carries it.
    #[error("Product not found")]
    NotFound(i64),
}

impl LookupError {
    /// Stable machine-readable code reported in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::InvalidInput => "INVALID_INPUT",
            LookupError::NotFound(_) => "NOT_FOUND",
        }
    }
}
