use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::rounding::RoundMode;
use crate::solver::errors::SolverError;

/// A single discovered combination, sorted ascending.
pub type Match = Vec<Decimal>;

/// Searches a stack of numbers for every combination that sums up to a
/// target number.
///
/// The stack is normalized at construction time: zero entries are dropped
/// and negative entries are replaced by their absolute value. Rounding to
/// the configured precision happens when the search runs, so changing the
/// precision or rounding mode re-rounds the original numbers.
///
/// Matches are calculated lazily on the first query and cached until the
/// precision or rounding mode changes.
pub struct SubsetSum {
    target: Decimal,
    stack: Vec<Decimal>,
    precision: u32,
    round_mode: RoundMode,
    matches: Vec<Match>,
    calculated: bool,
}

impl SubsetSum {
    /// Default amount of decimals used for rounding and comparison.
    pub const DEFAULT_PRECISION: u32 = 2;

    /// Creates a solver for the given target and stack of numbers.
    ///
    /// Construction only normalizes the stack; no search is run until one
    /// of the query methods is called.
    pub fn new(target: Decimal, stack: &[Decimal]) -> Self {
        Self {
            target,
            stack: filter_stack(stack),
            precision: Self::DEFAULT_PRECISION,
            round_mode: RoundMode::HalfUp,
            matches: Vec::new(),
            calculated: false,
        }
    }

    /// Sets the amount of decimals to use in the calculations. Numbers are
    /// rounded to the specified amount of decimals using the rounding mode,
    /// and any previously calculated matches are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidPrecision`] if the precision is negative.
    pub fn set_precision(
        &mut self,
        precision: i32,
        round_mode: RoundMode,
    ) -> Result<(), SolverError> {
        if precision < 0 {
            warn!("Rejecting negative precision: {}", precision);
            return Err(SolverError::InvalidPrecision { precision });
        }

        self.precision = precision as u32;
        self.round_mode = round_mode;

        // ensure that the calculations are run anew after this
        self.reset_calculation();

        Ok(())
    }

    /// Sets the precision to integers.
    ///
    /// # Errors
    ///
    /// Never fails; kept fallible to match [`SubsetSum::set_precision`].
    pub fn make_integer(&mut self, round_mode: RoundMode) -> Result<(), SolverError> {
        self.set_precision(0, round_mode)
    }

    /// The target number, rounded to the configured precision.
    pub fn sum(&self) -> Decimal {
        self.convert(self.target)
    }

    /// The configured amount of decimals.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// The configured rounding mode.
    pub fn round_mode(&self) -> RoundMode {
        self.round_mode
    }

    /// Retrieves all matches that were found, in discovery order.
    pub fn matches(&mut self) -> &[Match] {
        self.calculate();

        &self.matches
    }

    /// Checks whether any matches were found.
    pub fn has_matches(&mut self) -> bool {
        self.calculate();

        !self.matches.is_empty()
    }

    /// Retrieves the match with the least amount of numbers, or `None` if
    /// there were no matches. Ties go to the match discovered first.
    pub fn shortest_match(&mut self) -> Option<&Match> {
        self.calculate();

        let mut best: Option<&Match> = None;

        for found in &self.matches {
            if best.map_or(true, |b| found.len() < b.len()) {
                best = Some(found);
            }
        }

        best
    }

    /// Retrieves the match with the highest amount of numbers, or `None` if
    /// there were no matches. Ties go to the match discovered first.
    pub fn longest_match(&mut self) -> Option<&Match> {
        self.calculate();

        let mut best: Option<&Match> = None;

        for found in &self.matches {
            if best.map_or(true, |b| found.len() > b.len()) {
                best = Some(found);
            }
        }

        best
    }

    fn calculate(&mut self) {
        if self.calculated {
            return;
        }

        self.calculated = true;
        self.matches.clear();

        let target = self.sum();

        // only try to find a subset if it makes sense: the stack holds
        // positive numbers only, so a non-positive target cannot be reached.
        if target <= Decimal::ZERO || self.stack.is_empty() {
            debug!(
                "Skipping search: target {} with {} numbers in the stack",
                target,
                self.stack.len()
            );
            return;
        }

        let numbers: Vec<Decimal> = self.stack.iter().map(|n| self.convert(*n)).collect();

        info!(
            "Searching {} numbers for combinations summing up to {}",
            numbers.len(),
            target
        );

        search_recursive(&numbers, &[], target, &mut self.matches);

        info!("Found {} matches", self.matches.len());
    }

    fn reset_calculation(&mut self) {
        self.calculated = false;
    }

    /// Rounds the number to the configured precision.
    fn convert(&self, number: Decimal) -> Decimal {
        self.round_mode.round(number, self.precision)
    }
}

/// Filters the stack of numbers to ensure they are all positive. Negative
/// numbers are converted to positive, zero values are pruned out.
fn filter_stack(stack: &[Decimal]) -> Vec<Decimal> {
    stack
        .iter()
        .filter(|number| !number.is_zero())
        .map(|number| number.abs())
        .collect()
}

/// Depth-first enumeration over the remaining numbers. Each step only
/// recurses into the suffix after the chosen index, so numbers already
/// considered at a level are never revisited and every match reflects a
/// combination rather than a permutation of stack positions.
///
/// The numbers were rounded to the target precision up front, so the
/// partial sums are exact decimals and the equality test needs no epsilon.
fn search_recursive(
    numbers: &[Decimal],
    current: &[Decimal],
    target: Decimal,
    matches: &mut Vec<Match>,
) {
    let sum: Decimal = current.iter().copied().sum();

    // we have found a match!
    if sum == target {
        let mut found = current.to_vec();
        found.sort(); // ensure the numbers are always sorted

        matches.push(found);
        return;
    }

    // gone too far: the numbers are all positive, so the sum can only grow
    if sum >= target {
        return;
    }

    for (idx, number) in numbers.iter().enumerate() {
        let mut next = current.to_vec();
        next.push(*number);

        // recursively try to match this new stack of numbers
        search_recursive(&numbers[idx + 1..], &next, target, matches);
    }
}
