//! Core types for cross-venue odds arbitrage.
//!
//! Defines the quote and event shapes fed in by external data collaborators
//! and the opportunity/summary shapes handed back to callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use oddscross_core::kelly::StakeRecommendation;

// =============================================================================
// Side and Venue
// =============================================================================

/// One of the two mutually exclusive outcomes of a binary event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The home team wins.
    Home,
    /// The away team wins.
    Away,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }

    /// Returns the display string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies which venue priced a quote, and with it the pricing convention
/// and fee schedule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    /// The contract exchange whose asks are acquired.
    Exchange,
    /// The reference sportsbook supplying fair odds.
    Sportsbook,
}

impl Venue {
    /// Returns the display string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exchange => "exchange",
            Self::Sportsbook => "sportsbook",
        }
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Quotes
// =============================================================================

/// One venue's priced view of one side of a binary event.
///
/// For a given event key there is exactly one quote per (venue, side) pair
/// per snapshot; the matcher enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Join key identifying the real-world matchup.
    pub event_key: String,
    /// Which outcome this price is for.
    pub side: Side,
    /// Which venue priced it.
    pub venue: Venue,
    /// Venue-native price: decimal odds for a sportsbook, a contract ask in
    /// (0, 1] for an exchange.
    pub price: Decimal,
}

impl Quote {
    /// Creates a quote.
    #[must_use]
    pub fn new(event_key: impl Into<String>, side: Side, venue: Venue, price: Decimal) -> Self {
        Self {
            event_key: event_key.into(),
            side,
            venue,
            price,
        }
    }
}

/// The joined view of one event: both sides priced at both venues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventQuotes {
    /// Join key identifying the real-world matchup.
    pub event_key: String,
    /// Exchange ask for the home side.
    pub exchange_home: Decimal,
    /// Exchange ask for the away side.
    pub exchange_away: Decimal,
    /// Sportsbook price for the home side.
    pub sportsbook_home: Decimal,
    /// Sportsbook price for the away side.
    pub sportsbook_away: Decimal,
}

impl EventQuotes {
    /// Creates a joined event view.
    #[must_use]
    pub fn new(
        event_key: impl Into<String>,
        exchange_home: Decimal,
        exchange_away: Decimal,
        sportsbook_home: Decimal,
        sportsbook_away: Decimal,
    ) -> Self {
        Self {
            event_key: event_key.into(),
            exchange_home,
            exchange_away,
            sportsbook_home,
            sportsbook_away,
        }
    }

    /// Returns the exchange price for a side.
    #[must_use]
    pub fn exchange_price(&self, side: Side) -> Decimal {
        match side {
            Side::Home => self.exchange_home,
            Side::Away => self.exchange_away,
        }
    }

    /// Returns the sportsbook price for a side.
    #[must_use]
    pub fn sportsbook_price(&self, side: Side) -> Decimal {
        match side {
            Side::Home => self.sportsbook_home,
            Side::Away => self.sportsbook_away,
        }
    }
}

// =============================================================================
// Implied Probabilities
// =============================================================================

/// Implied probabilities for both sides of one event at one venue.
///
/// Raw pairs sum above 1 by the bookmaker's overround; a devigged pair sums
/// to 1. Computed fresh per snapshot and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedProbabilityPair {
    /// Implied probability of the home side.
    pub home: Decimal,
    /// Implied probability of the away side.
    pub away: Decimal,
}

impl ImpliedProbabilityPair {
    /// Creates a pair.
    #[must_use]
    pub fn new(home: Decimal, away: Decimal) -> Self {
        Self { home, away }
    }

    /// Returns the probability for a side.
    #[must_use]
    pub fn side(&self, side: Side) -> Decimal {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Total implied probability; the excess above 1 is the overround.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.home + self.away
    }

    /// True when the pair sums to 1 within `epsilon`.
    #[must_use]
    pub fn is_fair(&self, epsilon: Decimal) -> bool {
        (self.total() - Decimal::ONE).abs() <= epsilon
    }
}

// =============================================================================
// Detection Rules
// =============================================================================

/// Named arbitrage detection rules; callers select one per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionRule {
    /// Strict combined-book arbitrage: the cross-venue cost of both
    /// complementary outcomes must sum below `1 + tolerance`.
    CombinedBook,
    /// Single-sided mispricing: the exchange's fee-inclusive cost for a side
    /// sits below the sportsbook's devigged probability for that same side.
    SingleSided,
}

impl DetectionRule {
    /// Returns the display string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CombinedBook => "combined_book",
            Self::SingleSided => "single_sided",
        }
    }
}

impl std::fmt::Display for DetectionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Opportunities
// =============================================================================

/// A detected arbitrage opportunity for one event and side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageOpportunity {
    /// Join key identifying the event.
    pub event_key: String,
    /// The side acquired at the exchange.
    pub side: Side,
    /// Which detection rule fired.
    pub rule: DetectionRule,
    /// Fee-inclusive cost of acquiring `side` at the exchange.
    pub cost: Decimal,
    /// The sportsbook's devigged probability for the same side.
    pub fair_probability: Decimal,
    /// `fair_probability - cost` under [`DetectionRule::SingleSided`]; the
    /// combined-payout profit fraction under [`DetectionRule::CombinedBook`].
    pub edge: Decimal,
    /// Populated only when sizing was requested.
    pub sizing: Option<StakeRecommendation>,
}

impl ArbitrageOpportunity {
    /// True when the edge is strictly positive.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.edge > Decimal::ZERO
    }
}

/// Condensed view of one opportunity for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunitySummary {
    /// Join key identifying the event.
    pub event_key: String,
    /// The flagged side.
    pub side: Side,
    /// The opportunity's edge.
    pub edge: Decimal,
}

impl From<&ArbitrageOpportunity> for OpportunitySummary {
    fn from(opp: &ArbitrageOpportunity) -> Self {
        Self {
            event_key: opp.event_key.clone(),
            side: opp.side,
            edge: opp.edge,
        }
    }
}

// =============================================================================
// Scan Results
// =============================================================================

/// Aggregate results of one snapshot scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Matched events evaluated.
    pub events_scanned: usize,
    /// Events where the selected rule fired.
    pub opportunities_found: usize,
    /// Mean edge across flagged opportunities; zero when none fired.
    pub average_edge: Decimal,
    /// Sum of sized expected profits; zero when sizing was not requested.
    pub total_expected_profit: Decimal,
    /// The largest-edge opportunity, if any fired.
    pub best_opportunity: Option<OpportunitySummary>,
}

impl ScanSummary {
    /// Builds a summary from a scan's flagged opportunities.
    #[must_use]
    pub fn from_scan(events_scanned: usize, opportunities: &[ArbitrageOpportunity]) -> Self {
        let found = opportunities.len();
        let average_edge = if found == 0 {
            Decimal::ZERO
        } else {
            opportunities.iter().map(|o| o.edge).sum::<Decimal>() / Decimal::from(found as u64)
        };
        let total_expected_profit = opportunities
            .iter()
            .filter_map(|o| o.sizing.as_ref().map(|s| s.expected_profit))
            .sum();
        let best_opportunity = opportunities
            .iter()
            .max_by(|a, b| a.edge.cmp(&b.edge))
            .map(OpportunitySummary::from);

        Self {
            events_scanned,
            opportunities_found: found,
            average_edge,
            total_expected_profit,
            best_opportunity,
        }
    }
}

/// The opportunities and summary produced by one snapshot scan.
///
/// Opportunity order follows the snapshot's event order; callers sort by
/// edge magnitude for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// One opportunity per event where the rule fired.
    pub opportunities: Vec<ArbitrageOpportunity>,
    /// Aggregate statistics for the scan.
    pub summary: ScanSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn opportunity(event_key: &str, side: Side, edge: Decimal) -> ArbitrageOpportunity {
        ArbitrageOpportunity {
            event_key: event_key.to_string(),
            side,
            rule: DetectionRule::SingleSided,
            cost: dec!(0.45),
            fair_probability: dec!(0.52),
            edge,
            sizing: None,
        }
    }

    // ==================== Side and Venue Tests ====================

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Home.opposite(), Side::Away);
        assert_eq!(Side::Away.opposite(), Side::Home);
    }

    #[test]
    fn side_display() {
        assert_eq!(format!("{}", Side::Home), "home");
        assert_eq!(format!("{}", Side::Away), "away");
    }

    #[test]
    fn venue_display() {
        assert_eq!(format!("{}", Venue::Exchange), "exchange");
        assert_eq!(format!("{}", Venue::Sportsbook), "sportsbook");
    }

    #[test]
    fn rule_display() {
        assert_eq!(format!("{}", DetectionRule::CombinedBook), "combined_book");
        assert_eq!(format!("{}", DetectionRule::SingleSided), "single_sided");
    }

    // ==================== EventQuotes Tests ====================

    #[test]
    fn event_quotes_side_accessors() {
        let event = EventQuotes::new("a at b", dec!(0.45), dec!(0.57), dec!(2.1), dec!(1.85));

        assert_eq!(event.exchange_price(Side::Home), dec!(0.45));
        assert_eq!(event.exchange_price(Side::Away), dec!(0.57));
        assert_eq!(event.sportsbook_price(Side::Home), dec!(2.1));
        assert_eq!(event.sportsbook_price(Side::Away), dec!(1.85));
    }

    // ==================== ImpliedProbabilityPair Tests ====================

    #[test]
    fn pair_total_and_overround() {
        let raw = ImpliedProbabilityPair::new(dec!(0.55), dec!(0.50));
        assert_eq!(raw.total(), dec!(1.05));
        assert!(!raw.is_fair(dec!(0.000000001)));
    }

    #[test]
    fn fair_pair_within_epsilon() {
        let fair = ImpliedProbabilityPair::new(dec!(0.52), dec!(0.48));
        assert!(fair.is_fair(dec!(0.000000001)));
    }

    #[test]
    fn pair_side_accessor() {
        let pair = ImpliedProbabilityPair::new(dec!(0.6), dec!(0.4));
        assert_eq!(pair.side(Side::Home), dec!(0.6));
        assert_eq!(pair.side(Side::Away), dec!(0.4));
    }

    // ==================== Opportunity Tests ====================

    #[test]
    fn positive_edge_is_profitable() {
        assert!(opportunity("e", Side::Away, dec!(0.07)).is_profitable());
        assert!(!opportunity("e", Side::Away, Decimal::ZERO).is_profitable());
        assert!(!opportunity("e", Side::Away, dec!(-0.01)).is_profitable());
    }

    // ==================== ScanSummary Tests ====================

    #[test]
    fn summary_of_empty_scan() {
        let summary = ScanSummary::from_scan(4, &[]);

        assert_eq!(summary.events_scanned, 4);
        assert_eq!(summary.opportunities_found, 0);
        assert_eq!(summary.average_edge, Decimal::ZERO);
        assert_eq!(summary.total_expected_profit, Decimal::ZERO);
        assert!(summary.best_opportunity.is_none());
    }

    #[test]
    fn summary_averages_edges_and_picks_best() {
        let opps = vec![
            opportunity("first", Side::Home, dec!(0.02)),
            opportunity("second", Side::Away, dec!(0.06)),
        ];
        let summary = ScanSummary::from_scan(5, &opps);

        assert_eq!(summary.opportunities_found, 2);
        assert_eq!(summary.average_edge, dec!(0.04));
        let best = summary.best_opportunity.unwrap();
        assert_eq!(best.event_key, "second");
        assert_eq!(best.edge, dec!(0.06));
    }

    #[test]
    fn summary_totals_sized_profits() {
        let mut sized = opportunity("e", Side::Home, dec!(0.05));
        sized.sizing = Some(oddscross_core::kelly::StakeRecommendation {
            stake_fraction: dec!(0.02),
            stake_amount: dec!(200),
            expected_profit: dec!(10),
        });
        let summary = ScanSummary::from_scan(1, &[sized]);

        assert_eq!(summary.total_expected_profit, dec!(10));
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn quote_round_trips_through_json() {
        let quote = Quote::new("a at b", Side::Away, Venue::Exchange, dec!(0.45));
        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();

        assert_eq!(back.event_key, "a at b");
        assert_eq!(back.side, Side::Away);
        assert_eq!(back.venue, Venue::Exchange);
        assert_eq!(back.price, dec!(0.45));
    }

    #[test]
    fn opportunity_round_trips_through_json() {
        let opp = opportunity("a at b", Side::Home, dec!(0.03));
        let json = serde_json::to_string(&opp).unwrap();
        let back: ArbitrageOpportunity = serde_json::from_str(&json).unwrap();

        assert_eq!(back.side, Side::Home);
        assert_eq!(back.rule, DetectionRule::SingleSided);
        assert_eq!(back.edge, dec!(0.03));
        assert!(back.sizing.is_none());
    }
}
