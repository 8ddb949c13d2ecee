use thiserror::Error;

/// Precondition violations raised by the vector algebra and search driver.
///
/// Both variants are programmer errors: the caller handed the engine an
/// argument outside its domain. Neither is recovered internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThurberError {
    /// `thurber` was called on a vector whose components sum to zero —
    /// there is no addition chain to search for.
    #[error("target vector has sum 0; no addition chain exists")]
    OutOfSpace,

    /// Two vectors of differing dimension were added.
    #[error("dimension mismatch: {lhs} vs {rhs}")]
    DimensionMismatch {
        /// Dimension of the left-hand operand.
        lhs: usize,
        /// Dimension of the right-hand operand.
        rhs: usize,
    },
}

pub type Result<T> = std::result::Result<T, ThurberError>;
