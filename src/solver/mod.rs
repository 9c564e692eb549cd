mod core;
mod errors;

pub use self::core::{Match, SubsetSum};
pub use self::errors::{SolverError, ERROR_INVALID_PRECISION};
