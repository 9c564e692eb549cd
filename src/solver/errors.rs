use thiserror::Error;

/// Error code carried by [`SolverError::InvalidPrecision`].
pub const ERROR_INVALID_PRECISION: u32 = 67701;

/// Errors that can occur when configuring the solver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid precision {precision}: must be zero or a positive integer")]
    InvalidPrecision { precision: i32 },
}

impl SolverError {
    /// Stable numeric code identifying the error kind.
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidPrecision { .. } => ERROR_INVALID_PRECISION,
        }
    }
}
