//! Error types for price normalization and arbitrage evaluation.
//!
//! Every variant is a local validation failure on malformed input; the core
//! performs no I/O, so nothing here is transient or retryable. Callers decide
//! whether a malformed upstream quote should be skipped, logged, or refetched.

use thiserror::Error;

/// Errors that can occur while normalizing prices and evaluating events.
#[derive(Debug, Error)]
pub enum ArbitrageError {
    /// Decimal odds at or below 1 (no payout), or a non-finite raw value.
    #[error("invalid decimal odds: {repr}")]
    InvalidOdds {
        /// The rejected price as supplied.
        repr: String,
    },

    /// Probability outside (0, 1], non-finite, or a devig denominator at or
    /// below zero.
    #[error("invalid probability: {repr}")]
    InvalidProbability {
        /// The rejected value as supplied.
        repr: String,
    },

    /// An event was missing a quote for a venue or side, or carried a
    /// duplicate.
    #[error("unmatched event {event_key}: {reason}")]
    UnmatchedEvent {
        /// The event's join key.
        event_key: String,
        /// What was missing or duplicated.
        reason: String,
    },
}

impl ArbitrageError {
    /// Creates an invalid odds error.
    pub fn invalid_odds(odds: impl std::fmt::Display) -> Self {
        Self::InvalidOdds {
            repr: odds.to_string(),
        }
    }

    /// Creates an invalid probability error.
    pub fn invalid_probability(value: impl std::fmt::Display) -> Self {
        Self::InvalidProbability {
            repr: value.to_string(),
        }
    }

    /// Creates an unmatched event error.
    pub fn unmatched_event(event_key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnmatchedEvent {
            event_key: event_key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for arbitrage operations.
pub type Result<T> = std::result::Result<T, ArbitrageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn invalid_odds_display() {
        let err = ArbitrageError::invalid_odds(dec!(0.95));
        assert!(err.to_string().contains("invalid decimal odds"));
        assert!(err.to_string().contains("0.95"));
    }

    #[test]
    fn invalid_odds_from_f64() {
        let err = ArbitrageError::invalid_odds(f64::NAN);
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn invalid_probability_display() {
        let err = ArbitrageError::invalid_probability(dec!(-0.2));
        assert!(err.to_string().contains("-0.2"));
    }

    #[test]
    fn unmatched_event_display() {
        let err = ArbitrageError::unmatched_event(
            "Chicago Bears at Green Bay Packers",
            "missing sportsbook away quote",
        );
        let display = err.to_string();
        assert!(display.contains("Chicago Bears at Green Bay Packers"));
        assert!(display.contains("missing sportsbook away quote"));
    }
}
