use rust_decimal::{Decimal, RoundingStrategy};

/// Tie-breaking rule applied when rounding a number to a target precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundMode {
    /// Round halfway cases away from zero.
    #[default]
    HalfUp,
    /// Round halfway cases towards zero.
    HalfDown,
    /// Round halfway cases to the neighbour with an even final digit.
    HalfEven,
    /// Round halfway cases to the neighbour with an odd final digit.
    HalfOdd,
}

impl RoundMode {
    /// Rounds the number to the given amount of decimals.
    pub fn round(self, number: Decimal, precision: u32) -> Decimal {
        match self {
            RoundMode::HalfUp => {
                number.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
            }
            RoundMode::HalfDown => {
                number.round_dp_with_strategy(precision, RoundingStrategy::MidpointTowardZero)
            }
            RoundMode::HalfEven => {
                number.round_dp_with_strategy(precision, RoundingStrategy::MidpointNearestEven)
            }
            RoundMode::HalfOdd => round_half_odd(number, precision),
        }
    }
}

/// There is no odd-midpoint strategy upstream. Rounding towards and away
/// from zero only disagree on an exact midpoint, in which case the
/// neighbour whose final digit is odd wins.
fn round_half_odd(number: Decimal, precision: u32) -> Decimal {
    let away = number.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let toward = number.round_dp_with_strategy(precision, RoundingStrategy::MidpointTowardZero);

    if away == toward {
        return away;
    }

    let mut scaled = away;
    scaled.rescale(precision);

    if scaled.mantissa() % 2 == 0 {
        toward
    } else {
        away
    }
}
