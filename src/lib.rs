//! Subset-sum - A library for finding combinations of numbers that sum up to a target value
//!
//! Given a target number and a stack of candidate numbers, the solver
//! enumerates every combination of numbers from the stack whose sum equals
//! the target, under a configurable decimal precision and rounding mode.

pub mod rounding;
pub mod solver;

use rust_decimal::Decimal;

// Re-export the main public API
pub use rounding::RoundMode;
pub use solver::{Match, SolverError, SubsetSum};

/// Find every combination from the stack that sums up to the target value
///
/// This is a convenience function that creates a solver with the default
/// precision of two decimals and half-up rounding, and returns all matches.
///
/// # Arguments
///
/// * `target` - The number to search for
/// * `stack` - The stack of numbers to search in
///
/// # Returns
///
/// All matching combinations in discovery order, each sorted ascending.
/// The list is empty if no combination sums up to the target.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use subset_sum::find_matches;
///
/// let stack: Vec<Decimal> = [5, 10, 7, 3, 20].iter().map(|&n| Decimal::from(n)).collect();
/// let matches = find_matches(Decimal::from(25), &stack);
///
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[1], vec![Decimal::from(5), Decimal::from(20)]);
/// ```
pub fn find_matches(target: Decimal, stack: &[Decimal]) -> Vec<Match> {
    let mut subset = SubsetSum::new(target, stack);
    subset.matches().to_vec()
}
