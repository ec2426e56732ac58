//! Cross-venue odds arbitrage detection and sizing.
//!
//! This crate compares two venues' prices for the same binary sports event
//! (a contract exchange quoting probability-denominated asks, and a reference
//! sportsbook quoting decimal moneyline odds) and flags profitable
//! crossings.
//!
//! # Overview
//!
//! When the venues disagree about the same matchup, a crossing can lock in
//! profit or positive expectation:
//!
//! ```text
//! Exchange:   away contract ask $0.45 (0.3% fee -> $0.4514 effective)
//! Sportsbook: home 2.10, away 1.85  ->  implied 0.476 / 0.541
//!             devigged fair:           0.468 / 0.532
//!
//! Single-sided crossing on away:
//!   cost 0.4514 < fair 0.532  ->  edge 0.080 per contract
//! ```
//!
//! # Modules
//!
//! - [`types`]: quotes, events, opportunities, scan summaries
//! - [`pricing`]: venue-native price normalization and fee inflation
//! - [`devig`]: proportional overround removal
//! - [`matcher`]: team-name normalization and snapshot joining
//! - [`evaluator`]: the two detection rules, tie-break, and sizing hook
//!
//! # Example
//!
//! ```
//! use oddscross_arbitrage::{
//!     ArbitrageEvaluator, DetectionRule, EventQuotes,
//! };
//! use oddscross_core::config::EngineConfig;
//! use rust_decimal::Decimal;
//!
//! let evaluator = ArbitrageEvaluator::with_config(
//!     EngineConfig::default().with_exchange_fee(Decimal::ZERO),
//! );
//!
//! // Exchange asks 0.60 / 0.45; sportsbook odds 2.10 / 1.60.
//! let event = EventQuotes::new(
//!     "Chicago Bears at Green Bay Packers",
//!     Decimal::new(60, 2),
//!     Decimal::new(45, 2),
//!     Decimal::new(210, 2),
//!     Decimal::new(160, 2),
//! );
//!
//! let opportunity = evaluator
//!     .evaluate(&event, DetectionRule::SingleSided)
//!     .unwrap();
//! assert!(opportunity.is_some());
//! ```
//!
//! The evaluation core performs no I/O: quote feeds, persistence, and
//! presentation belong to external collaborators that call into it.

pub mod devig;
pub mod error;
pub mod evaluator;
pub mod matcher;
pub mod pricing;
pub mod types;

// Re-export main types for convenience
pub use devig::{devig, devig_pair};
pub use error::{ArbitrageError, Result};
pub use evaluator::ArbitrageEvaluator;
pub use matcher::{join_snapshot, TeamNameMap};
pub use pricing::{
    effective_cost, implied_from_decimal_odds, normalize_price, odds_from_f64,
    probability_from_f64,
};
pub use types::{
    ArbitrageOpportunity, DetectionRule, EventQuotes, ImpliedProbabilityPair, OpportunitySummary,
    Quote, ScanReport, ScanSummary, Side, Venue,
};

#[cfg(test)]
mod tests {
    use super::*;
    use oddscross_core::config::EngineConfig;
    use oddscross_core::kelly::KellySizer;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn public_api_exports() {
        let _ = ArbitrageEvaluator::new();
        let _ = EngineConfig::default();
        let _ = TeamNameMap::nfl();
        let _ = KellySizer::default();
        let _ = DetectionRule::CombinedBook;
        let _ = DetectionRule::SingleSided;
    }

    #[test]
    fn end_to_end_snapshot_evaluation() {
        let map = TeamNameMap::nfl();
        let key = map.event_key("Chicago", "Green Bay");

        let quotes = vec![
            Quote::new(key.as_str(), Side::Home, Venue::Exchange, dec!(0.62)),
            Quote::new(key.as_str(), Side::Away, Venue::Exchange, dec!(0.30)),
            Quote::new(key.as_str(), Side::Home, Venue::Sportsbook, dec!(1.55)),
            Quote::new(key.as_str(), Side::Away, Venue::Sportsbook, dec!(2.70)),
        ];

        let evaluator = ArbitrageEvaluator::with_config(
            EngineConfig::default().with_exchange_fee(Decimal::ZERO),
        )
        .with_sizing()
        .unwrap();

        let report = evaluator
            .evaluate_snapshot(&quotes, DetectionRule::SingleSided)
            .unwrap();

        // Sportsbook implied 0.645 / 0.370; away fair ~0.365 is above the
        // 0.30 ask, so the away side crosses.
        assert_eq!(report.opportunities.len(), 1);
        let opp = &report.opportunities[0];
        assert_eq!(opp.event_key, "Chicago Bears at Green Bay Packers");
        assert_eq!(opp.side, Side::Away);
        assert!(opp.is_profitable());
        assert!(opp.sizing.is_some());
    }
}
