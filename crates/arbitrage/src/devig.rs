//! Proportional vig removal.
//!
//! A bookmaker's complementary implied probabilities sum above 1 by the
//! overround. Rescaling both by their sum recovers a fair pair summing to
//! exactly 1 while preserving the home/away ratio.

use rust_decimal::Decimal;

use crate::error::{ArbitrageError, Result};
use crate::pricing::validate_probability;
use crate::types::ImpliedProbabilityPair;

/// Removes the overround from a raw probability pair proportionally.
///
/// Both outputs remain in (0, 1) and sum to 1; the home/away ratio is
/// unchanged.
///
/// # Errors
///
/// `InvalidProbability` when either input lies outside (0, 1] or the
/// denominator is not positive.
pub fn devig(p_home_raw: Decimal, p_away_raw: Decimal) -> Result<(Decimal, Decimal)> {
    let home = validate_probability(p_home_raw)?;
    let away = validate_probability(p_away_raw)?;

    let r = home + away;
    if r <= Decimal::ZERO {
        return Err(ArbitrageError::invalid_probability(r));
    }

    Ok((home / r, away / r))
}

/// Devigs a raw pair, returning the fair pair.
///
/// # Errors
///
/// Propagates [`devig`]'s validation failures.
pub fn devig_pair(raw: ImpliedProbabilityPair) -> Result<ImpliedProbabilityPair> {
    let (home, away) = devig(raw.home, raw.away)?;
    Ok(ImpliedProbabilityPair::new(home, away))
}
