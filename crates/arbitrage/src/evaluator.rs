//! Cross-venue arbitrage evaluation.
//!
//! Compares an exchange's fee-inclusive contract costs against a reference
//! sportsbook's probabilities for the same binary event, under one of two
//! named detection rules:
//!
//! - [`DetectionRule::CombinedBook`]: buy a side at the exchange and the
//!   complementary side at the sportsbook; arbitrage exists when the combined
//!   cost sums below `1 + tolerance`, and the edge is the profit fraction
//!   `1 - combined_cost`.
//! - [`DetectionRule::SingleSided`]: flag a side whose exchange cost sits
//!   below the sportsbook's devigged probability for that same side; the
//!   edge is `fair - cost`.
//!
//! Each evaluation is a pure function over one matched event. When both
//! sides fire, only the larger-edge side is returned; acting on both sides
//! of the same event simultaneously is a distinct strategy this evaluator
//! does not implement.

use rust_decimal::Decimal;
use tracing::{debug, info, trace};

use oddscross_core::config::{EngineConfig, PriceConvention};
use oddscross_core::kelly::KellySizer;

use crate::devig::devig_pair;
use crate::error::Result;
use crate::matcher::join_snapshot;
use crate::pricing::{implied_from_decimal_odds, normalize_price, validate_probability};
use crate::types::{
    ArbitrageOpportunity, DetectionRule, EventQuotes, ImpliedProbabilityPair, Quote, ScanReport,
    ScanSummary, Side,
};

/// Evaluates matched events for cross-venue arbitrage.
#[derive(Debug, Clone)]
pub struct ArbitrageEvaluator {
    config: EngineConfig,
    sizer: Option<KellySizer>,
}

impl ArbitrageEvaluator {
    /// Creates an evaluator with default configuration and no sizing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            sizer: None,
        }
    }

    /// Creates an evaluator with custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            sizer: None,
        }
    }

    /// Attaches a stake sizer; subsequent opportunities carry a
    /// recommendation sized against the configured bankroll.
    #[must_use]
    pub fn with_sizer(mut self, sizer: KellySizer) -> Self {
        self.sizer = Some(sizer);
        self
    }

    /// Attaches a stake sizer built from the configured shrinkage knob.
    ///
    /// # Errors
    ///
    /// Returns the configuration error when the shrinkage is out of range.
    pub fn with_sizing(self) -> std::result::Result<Self, oddscross_core::config::ConfigError> {
        let sizer = KellySizer::from_config(&self.config)?;
        Ok(self.with_sizer(sizer))
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluates one matched event under the selected rule.
    ///
    /// Returns `Ok(None)` when no crossing exists; that is a normal result,
    /// not an error. When both sides fire, the strictly larger edge wins;
    /// equal edges resolve to home.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidOdds`/`InvalidProbability` from the normalization
    /// and devig stages; the evaluation itself introduces no error kinds.
    pub fn evaluate(
        &self,
        event: &EventQuotes,
        rule: DetectionRule,
    ) -> Result<Option<ArbitrageOpportunity>> {
        let costs = self.exchange_costs(event)?;
        let raw = self.sportsbook_implied(event)?;
        let fair = devig_pair(raw)?;

        let home = self.evaluate_side(event, Side::Home, &costs, &raw, &fair, rule);
        let away = self.evaluate_side(event, Side::Away, &costs, &raw, &fair, rule);

        let best = match (home, away) {
            (Some(h), Some(a)) => {
                if a.edge > h.edge {
                    Some(a)
                } else {
                    Some(h)
                }
            }
            (Some(o), None) | (None, Some(o)) => Some(o),
            (None, None) => None,
        };

        if let Some(ref opp) = best {
            info!(
                event_key = %opp.event_key,
                side = %opp.side,
                rule = %opp.rule,
                cost = %opp.cost,
                fair_probability = %opp.fair_probability,
                edge = %opp.edge,
                "arbitrage opportunity detected"
            );
        }

        Ok(best)
    }

    /// Joins a snapshot of raw quotes and evaluates every event.
    ///
    /// Events are processed independently; output order follows the
    /// snapshot's event order, with no ranking applied.
    ///
    /// # Errors
    ///
    /// Propagates `UnmatchedEvent` from the join and validation failures
    /// from the per-event evaluation.
    pub fn evaluate_snapshot(&self, quotes: &[Quote], rule: DetectionRule) -> Result<ScanReport> {
        let events = join_snapshot(quotes)?;

        let mut opportunities = Vec::new();
        for event in &events {
            if let Some(opportunity) = self.evaluate(event, rule)? {
                opportunities.push(opportunity);
            }
        }

        let summary = ScanSummary::from_scan(events.len(), &opportunities);
        debug!(
            events = summary.events_scanned,
            opportunities = summary.opportunities_found,
            rule = %rule,
            "snapshot scan complete"
        );

        Ok(ScanReport {
            opportunities,
            summary,
        })
    }

    /// Fee-inclusive acquisition costs for both sides at the exchange.
    fn exchange_costs(&self, event: &EventQuotes) -> Result<ImpliedProbabilityPair> {
        let venue = &self.config.exchange;
        Ok(ImpliedProbabilityPair::new(
            normalize_price(event.exchange_home, venue.convention, venue.fee_rate)?,
            normalize_price(event.exchange_away, venue.convention, venue.fee_rate)?,
        ))
    }

    /// Raw implied probabilities at the sportsbook. No fee applies here:
    /// these are reference probabilities, not acquisition costs, and a
    /// decimal-odds book's margin already lives in its vig.
    fn sportsbook_implied(&self, event: &EventQuotes) -> Result<ImpliedProbabilityPair> {
        match self.config.sportsbook.convention {
            PriceConvention::DecimalOdds => Ok(ImpliedProbabilityPair::new(
                implied_from_decimal_odds(event.sportsbook_home)?,
                implied_from_decimal_odds(event.sportsbook_away)?,
            )),
            PriceConvention::ProbabilityAsk => Ok(ImpliedProbabilityPair::new(
                validate_probability(event.sportsbook_home)?,
                validate_probability(event.sportsbook_away)?,
            )),
        }
    }

    fn evaluate_side(
        &self,
        event: &EventQuotes,
        side: Side,
        costs: &ImpliedProbabilityPair,
        raw: &ImpliedProbabilityPair,
        fair: &ImpliedProbabilityPair,
        rule: DetectionRule,
    ) -> Option<ArbitrageOpportunity> {
        let cost = costs.side(side);
        let fair_probability = fair.side(side);

        let edge = match rule {
            DetectionRule::SingleSided => {
                if cost >= fair_probability {
                    trace!(
                        event_key = %event.event_key,
                        side = %side,
                        cost = %cost,
                        fair_probability = %fair_probability,
                        "no crossing - cost at or above fair"
                    );
                    return None;
                }
                fair_probability - cost
            }
            DetectionRule::CombinedBook => {
                let counter_cost = raw.side(side.opposite());
                let combined = cost + counter_cost;
                if combined >= Decimal::ONE + self.config.tolerance {
                    trace!(
                        event_key = %event.event_key,
                        side = %side,
                        combined = %combined,
                        tolerance = %self.config.tolerance,
                        "no crossing - combined cost at or above boundary"
                    );
                    return None;
                }
                Decimal::ONE - combined
            }
        };

        let sizing = self
            .sizer
            .as_ref()
            .map(|sizer| sizer.recommend(fair_probability, cost, self.config.bankroll, edge));

        Some(ArbitrageOpportunity {
            event_key: event.event_key.clone(),
            side,
            rule,
            cost,
            fair_probability,
            edge,
            sizing,
        })
    }
}

impl Default for ArbitrageEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
