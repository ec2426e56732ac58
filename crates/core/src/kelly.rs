//! Fractional-Kelly stake sizing for binary outcome positions.
//!
//! Positions here are priced as probabilities (a contract costing `c` pays 1
//! on a win), so the sizer first converts the acquisition cost to its
//! decimal-odds equivalent `b = 1 / c`, then applies the classical Kelly
//! formula:
//!
//! ```text
//! f* = (b * p - 1) / (b - 1)
//! ```
//!
//! The full Kelly fraction is scaled by a fixed shrinkage multiplier and
//! floored at zero, so a position with no edge sizes to a zero stake.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, EngineConfig};

/// Fractional-Kelly stake sizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KellySizer {
    /// Fraction of full Kelly to stake (0.2 = one-fifth Kelly).
    shrinkage: Decimal,
}

impl Default for KellySizer {
    fn default() -> Self {
        Self {
            shrinkage: Decimal::new(2, 1), // 0.2 (one-fifth Kelly)
        }
    }
}

/// A sized position recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeRecommendation {
    /// Fraction of bankroll to stake; never negative.
    pub stake_fraction: Decimal,
    /// `stake_fraction * bankroll`.
    pub stake_amount: Decimal,
    /// `stake_amount * edge`.
    pub expected_profit: Decimal,
}

impl KellySizer {
    /// Creates a sizer with the given shrinkage multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShrinkage`] unless `shrinkage` lies in
    /// (0, 1].
    pub fn new(shrinkage: Decimal) -> Result<Self, ConfigError> {
        if shrinkage <= Decimal::ZERO || shrinkage > Decimal::ONE {
            return Err(ConfigError::InvalidShrinkage { value: shrinkage });
        }
        Ok(Self { shrinkage })
    }

    /// Creates a sizer from an engine configuration's shrinkage knob.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShrinkage`] when the configured value is
    /// out of range.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config.kelly_shrinkage)
    }

    /// Returns the shrinkage multiplier.
    #[must_use]
    pub fn shrinkage(&self) -> Decimal {
        self.shrinkage
    }

    /// Computes the shrunk Kelly fraction for a position bought at
    /// probability-denominated cost `price` with true win probability
    /// `p_true`.
    ///
    /// A cost of 1 has odds equivalent `b == 1` and pays nothing; that case
    /// (and any cost above 1, which tolerance-widened detection can admit)
    /// sizes to zero rather than dividing by a degenerate denominator.
    /// Negative raw Kelly (no edge) is floored at zero.
    #[must_use]
    pub fn stake_fraction(&self, p_true: Decimal, price: Decimal) -> Decimal {
        if price <= Decimal::ZERO || price >= Decimal::ONE {
            return Decimal::ZERO;
        }
        let b = Decimal::ONE / price;
        let kelly = (b * p_true - Decimal::ONE) / (b - Decimal::ONE);
        (self.shrinkage * kelly).max(Decimal::ZERO)
    }

    /// Sizes a position against a bankroll.
    #[must_use]
    pub fn recommend(
        &self,
        p_true: Decimal,
        price: Decimal,
        bankroll: Decimal,
        edge: Decimal,
    ) -> StakeRecommendation {
        let stake_fraction = self.stake_fraction(p_true, price);
        let stake_amount = stake_fraction * bankroll;
        StakeRecommendation {
            stake_fraction,
            stake_amount,
            expected_profit: stake_amount * edge,
        }
    }
}
