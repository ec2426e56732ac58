//! Price normalization across venue conventions.
//!
//! Converts venue-native prices into implied probabilities: decimal moneyline
//! odds invert to `1 / odds`, and probability-denominated contract asks take
//! the venue fee as a multiplicative cost inflation. One fee function serves
//! both call sites that need it: comparing against a "price to beat" and
//! producing a single inflated-probability number.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use oddscross_core::config::PriceConvention;

use crate::error::{ArbitrageError, Result};

/// Converts decimal odds to an implied probability.
///
/// # Errors
///
/// `InvalidOdds` when `odds <= 1`; such a price carries no payout.
pub fn implied_from_decimal_odds(odds: Decimal) -> Result<Decimal> {
    if odds <= Decimal::ONE {
        return Err(ArbitrageError::invalid_odds(odds));
    }
    Ok(Decimal::ONE / odds)
}

/// Validates that a value is a usable probability in (0, 1].
///
/// # Errors
///
/// `InvalidProbability` when the value lies outside (0, 1].
pub fn validate_probability(value: Decimal) -> Result<Decimal> {
    if value <= Decimal::ZERO || value > Decimal::ONE {
        return Err(ArbitrageError::invalid_probability(value));
    }
    Ok(value)
}

/// Applies a venue fee to a contract ask as a multiplicative cost inflation.
///
/// Returns `ask * (1 + fee_rate)`, the effective fee-inclusive price of
/// acquiring the contract. Fee-rate bounds are the configuration's concern;
/// the ask itself must be a probability.
///
/// # Errors
///
/// `InvalidProbability` when the ask lies outside (0, 1].
pub fn effective_cost(ask: Decimal, fee_rate: Decimal) -> Result<Decimal> {
    let ask = validate_probability(ask)?;
    Ok(ask * (Decimal::ONE + fee_rate))
}

/// Normalizes a venue-native price into a probability-denominated cost.
///
/// Dispatches on the venue's pricing convention: decimal odds invert (the
/// book's margin already lives in its vig, so no fee applies), asks inflate
/// by the fee.
///
/// # Errors
///
/// `InvalidOdds` or `InvalidProbability` per the convention's validation.
pub fn normalize_price(
    price: Decimal,
    convention: PriceConvention,
    fee_rate: Decimal,
) -> Result<Decimal> {
    match convention {
        PriceConvention::DecimalOdds => implied_from_decimal_odds(price),
        PriceConvention::ProbabilityAsk => effective_cost(price, fee_rate),
    }
}

/// Converts raw decimal odds arriving as `f64` from a feed boundary.
///
/// # Errors
///
/// `InvalidOdds` when the value is non-finite or unrepresentable.
pub fn odds_from_f64(odds: f64) -> Result<Decimal> {
    if !odds.is_finite() {
        return Err(ArbitrageError::invalid_odds(odds));
    }
    Decimal::from_f64(odds).ok_or_else(|| ArbitrageError::invalid_odds(odds))
}

/// Converts a raw probability arriving as `f64` from a feed boundary.
///
/// # Errors
///
/// `InvalidProbability` when the value is non-finite or unrepresentable.
pub fn probability_from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(ArbitrageError::invalid_probability(value));
    }
    Decimal::from_f64(value).ok_or_else(|| ArbitrageError::invalid_probability(value))
}
