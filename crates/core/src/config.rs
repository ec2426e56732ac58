//! Engine configuration for cross-venue arbitrage evaluation.
//!
//! All knobs that the original deployment kept as module-level constants
//! (venue fees, bankroll, Kelly shrinkage) live here as an explicit,
//! validated configuration object passed into the evaluation call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Errors produced when validating engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Tolerance is negative.
    #[error("tolerance must be non-negative, got {value}")]
    InvalidTolerance {
        /// The rejected value.
        value: Decimal,
    },

    /// Bankroll is zero or negative.
    #[error("bankroll must be positive, got {value}")]
    InvalidBankroll {
        /// The rejected value.
        value: Decimal,
    },

    /// Kelly shrinkage outside (0, 1].
    #[error("kelly shrinkage must be in (0, 1], got {value}")]
    InvalidShrinkage {
        /// The rejected value.
        value: Decimal,
    },

    /// A venue fee rate is negative.
    #[error("{venue} fee rate must be non-negative, got {value}")]
    InvalidFeeRate {
        /// Which venue carried the bad rate.
        venue: String,
        /// The rejected value.
        value: Decimal,
    },
}

// =============================================================================
// Venue Configuration
// =============================================================================

/// How a venue denominates its prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceConvention {
    /// Probability-denominated contract ask in (0, 1].
    ProbabilityAsk,
    /// Decimal (moneyline) odds; implied probability is `1 / odds`.
    DecimalOdds,
}

impl PriceConvention {
    /// Returns the display string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProbabilityAsk => "probability_ask",
            Self::DecimalOdds => "decimal_odds",
        }
    }
}

impl std::fmt::Display for PriceConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pricing convention and fee schedule for one venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueConfig {
    /// How the venue's raw prices are to be read.
    pub convention: PriceConvention,

    /// Fractional fee rate (0.035 for 3.5%). Applied as a multiplicative
    /// cost inflation on probability-denominated asks; a decimal-odds
    /// venue's margin lives in its vig instead.
    pub fee_rate: Decimal,
}

impl VenueConfig {
    /// Creates a venue configuration.
    #[must_use]
    pub fn new(convention: PriceConvention, fee_rate: Decimal) -> Self {
        Self {
            convention,
            fee_rate,
        }
    }
}

// =============================================================================
// Engine Configuration
// =============================================================================

/// Configuration for the arbitrage engine.
///
/// Defaults mirror the reference deployment: 0.3% exchange fee, a 10,000
/// bankroll, one-fifth Kelly, zero tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Widens the combined-book acceptance boundary: arbitrage is flagged
    /// when the combined cost is below `1 + tolerance`. Must be >= 0.
    pub tolerance: Decimal,

    /// Bankroll the stake recommendation is sized against. Must be > 0.
    pub bankroll: Decimal,

    /// Fractional-Kelly multiplier in (0, 1]. A risk-reduction knob, not
    /// the Kelly criterion's own edge/odds ratio.
    pub kelly_shrinkage: Decimal,

    /// The venue whose contracts are acquired (probability asks).
    pub exchange: VenueConfig,

    /// The reference venue supplying fair odds (devigged).
    pub sportsbook: VenueConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: Decimal::ZERO,
            bankroll: Decimal::new(10_000, 0),
            kelly_shrinkage: Decimal::new(2, 1),
            exchange: VenueConfig::new(PriceConvention::ProbabilityAsk, Decimal::new(3, 3)),
            sportsbook: VenueConfig::new(PriceConvention::DecimalOdds, Decimal::ZERO),
        }
    }
}

impl EngineConfig {
    /// Sets the detection tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the bankroll.
    #[must_use]
    pub fn with_bankroll(mut self, bankroll: Decimal) -> Self {
        self.bankroll = bankroll;
        self
    }

    /// Sets the fractional-Kelly shrinkage.
    #[must_use]
    pub fn with_kelly_shrinkage(mut self, shrinkage: Decimal) -> Self {
        self.kelly_shrinkage = shrinkage;
        self
    }

    /// Sets the exchange fee rate.
    #[must_use]
    pub fn with_exchange_fee(mut self, fee_rate: Decimal) -> Self {
        self.exchange.fee_rate = fee_rate;
        self
    }

    /// Sets the sportsbook fee rate.
    #[must_use]
    pub fn with_sportsbook_fee(mut self, fee_rate: Decimal) -> Self {
        self.sportsbook.fee_rate = fee_rate;
        self
    }

    /// Checks every configured bound.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tolerance < Decimal::ZERO {
            return Err(ConfigError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        if self.bankroll <= Decimal::ZERO {
            return Err(ConfigError::InvalidBankroll {
                value: self.bankroll,
            });
        }
        if self.kelly_shrinkage <= Decimal::ZERO || self.kelly_shrinkage > Decimal::ONE {
            return Err(ConfigError::InvalidShrinkage {
                value: self.kelly_shrinkage,
            });
        }
        if self.exchange.fee_rate < Decimal::ZERO {
            return Err(ConfigError::InvalidFeeRate {
                venue: "exchange".to_string(),
                value: self.exchange.fee_rate,
            });
        }
        if self.sportsbook.fee_rate < Decimal::ZERO {
            return Err(ConfigError::InvalidFeeRate {
                venue: "sportsbook".to_string(),
                value: self.sportsbook.fee_rate,
            });
        }
        Ok(())
    }
}
