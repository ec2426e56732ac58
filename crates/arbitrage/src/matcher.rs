//! Event matching across venues.
//!
//! Venues title the same matchup differently, so the join is a static
//! lookup-table substitution applied at the system boundary, followed by
//! grouping the snapshot's quotes per event. The table is injected; the
//! evaluator never sees venue-native names.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ArbitrageError, Result};
use crate::types::{EventQuotes, Quote, Side, Venue};

// =============================================================================
// Team Name Normalization
// =============================================================================

/// Canonical team-name lookup injected at the system boundary.
///
/// Unknown names pass through unchanged, so a partially populated table
/// degrades to identity rather than failing.
#[derive(Debug, Clone, Default)]
pub struct TeamNameMap {
    aliases: HashMap<String, String>,
}

impl TeamNameMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The NFL alias table: short market titles to full franchise names.
    #[must_use]
    pub fn nfl() -> Self {
        let mut map = Self::new();
        for (alias, canonical) in [
            ("Arizona", "Arizona Cardinals"),
            ("Atlanta", "Atlanta Falcons"),
            ("Baltimore", "Baltimore Ravens"),
            ("Buffalo", "Buffalo Bills"),
            ("Carolina", "Carolina Panthers"),
            ("Chicago", "Chicago Bears"),
            ("Chicago B", "Chicago Bears"),
            ("Cincinnati", "Cincinnati Bengals"),
            ("Cleveland", "Cleveland Browns"),
            ("Dallas", "Dallas Cowboys"),
            ("Denver", "Denver Broncos"),
            ("Detroit", "Detroit Lions"),
            ("Green Bay", "Green Bay Packers"),
            ("Houston", "Houston Texans"),
            ("Indianapolis", "Indianapolis Colts"),
            ("Jacksonville", "Jacksonville Jaguars"),
            ("Kansas City", "Kansas City Chiefs"),
            ("Las Vegas", "Las Vegas Raiders"),
            ("Los Angeles C", "Los Angeles Chargers"),
            ("Los Angeles R", "Los Angeles Rams"),
            ("Miami", "Miami Dolphins"),
            ("Minnesota", "Minnesota Vikings"),
            ("New England", "New England Patriots"),
            ("New Orleans", "New Orleans Saints"),
            ("New York G", "New York Giants"),
            ("New York J", "New York Jets"),
            ("Philadelphia", "Philadelphia Eagles"),
            ("Pittsburgh", "Pittsburgh Steelers"),
            ("San Francisco", "San Francisco 49ers"),
            ("Seattle", "Seattle Seahawks"),
            ("Tampa Bay", "Tampa Bay Buccaneers"),
            ("Tennessee", "Tennessee Titans"),
            ("Washington", "Washington Commanders"),
        ] {
            map.insert(alias, canonical);
        }
        map
    }

    /// Adds an alias.
    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.insert(alias.into(), canonical.into());
    }

    /// Resolves a venue-native team name to its canonical form.
    #[must_use]
    pub fn normalize<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }

    /// Builds the canonical event key for a matchup.
    #[must_use]
    pub fn event_key(&self, away: &str, home: &str) -> String {
        format!("{} at {}", self.normalize(away), self.normalize(home))
    }
}

// =============================================================================
// Snapshot Join
// =============================================================================

fn slot_index(venue: Venue, side: Side) -> usize {
    match (venue, side) {
        (Venue::Exchange, Side::Home) => 0,
        (Venue::Exchange, Side::Away) => 1,
        (Venue::Sportsbook, Side::Home) => 2,
        (Venue::Sportsbook, Side::Away) => 3,
    }
}

const SLOT_NAMES: [(Venue, Side); 4] = [
    (Venue::Exchange, Side::Home),
    (Venue::Exchange, Side::Away),
    (Venue::Sportsbook, Side::Home),
    (Venue::Sportsbook, Side::Away),
];

/// Groups a snapshot's quotes into per-event joined views.
///
/// Every event must carry exactly one quote per (venue, side) combination;
/// the whole join fails on the first incomplete or duplicated event, and the
/// caller decides whether to repair or drop the offending upstream data.
/// Output preserves first-seen event order.
///
/// # Errors
///
/// `UnmatchedEvent` when an event is missing a quote or carries a duplicate.
pub fn join_snapshot(quotes: &[Quote]) -> Result<Vec<EventQuotes>> {
    let mut order: Vec<String> = Vec::new();
    let mut slots: HashMap<String, [Option<Decimal>; 4]> = HashMap::new();

    for quote in quotes {
        let entry = slots.entry(quote.event_key.clone()).or_insert_with(|| {
            order.push(quote.event_key.clone());
            [None; 4]
        });
        let slot = &mut entry[slot_index(quote.venue, quote.side)];
        if slot.is_some() {
            return Err(ArbitrageError::unmatched_event(
                quote.event_key.as_str(),
                format!("duplicate {} {} quote", quote.venue, quote.side),
            ));
        }
        *slot = Some(quote.price);
    }

    let mut joined = Vec::with_capacity(order.len());
    for event_key in order {
        let Some(slot) = slots.remove(&event_key) else {
            continue;
        };
        match slot {
            [Some(exchange_home), Some(exchange_away), Some(sportsbook_home), Some(sportsbook_away)] => {
                joined.push(EventQuotes::new(
                    event_key,
                    exchange_home,
                    exchange_away,
                    sportsbook_home,
                    sportsbook_away,
                ));
            }
            _ => {
                let missing = SLOT_NAMES
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| slot[*i].is_none())
                    .map(|(_, (venue, side))| format!("{venue} {side}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(ArbitrageError::unmatched_event(
                    event_key,
                    format!("missing quotes: {missing}"),
                ));
            }
        }
    }

    debug!(
        quotes = quotes.len(),
        events = joined.len(),
        "joined snapshot"
    );
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn event_quotes(key: &str) -> Vec<Quote> {
        vec![
            Quote::new(key, Side::Home, Venue::Exchange, dec!(0.55)),
            Quote::new(key, Side::Away, Venue::Exchange, dec!(0.47)),
            Quote::new(key, Side::Home, Venue::Sportsbook, dec!(1.85)),
            Quote::new(key, Side::Away, Venue::Sportsbook, dec!(2.10)),
        ]
    }

    // ==================== TeamNameMap Tests ====================

    #[test]
    fn nfl_aliases_resolve() {
        let map = TeamNameMap::nfl();
        assert_eq!(map.normalize("Kansas City"), "Kansas City Chiefs");
        assert_eq!(map.normalize("New York G"), "New York Giants");
        assert_eq!(map.normalize("Chicago B"), "Chicago Bears");
    }

    #[test]
    fn unknown_names_pass_through() {
        let map = TeamNameMap::nfl();
        assert_eq!(map.normalize("London Monarchs"), "London Monarchs");
    }

    #[test]
    fn event_key_normalizes_both_teams() {
        let map = TeamNameMap::nfl();
        assert_eq!(
            map.event_key("Chicago", "Green Bay"),
            "Chicago Bears at Green Bay Packers"
        );
    }

    #[test]
    fn injected_aliases_take_effect() {
        let mut map = TeamNameMap::new();
        map.insert("GB", "Green Bay Packers");
        assert_eq!(map.normalize("GB"), "Green Bay Packers");
    }

    // ==================== Join Tests ====================

    #[test]
    fn complete_event_joins() {
        let joined = join_snapshot(&event_quotes("a at b")).unwrap();

        assert_eq!(joined.len(), 1);
        let event = &joined[0];
        assert_eq!(event.event_key, "a at b");
        assert_eq!(event.exchange_home, dec!(0.55));
        assert_eq!(event.exchange_away, dec!(0.47));
        assert_eq!(event.sportsbook_home, dec!(1.85));
        assert_eq!(event.sportsbook_away, dec!(2.10));
    }

    #[test]
    fn join_preserves_first_seen_order() {
        let mut quotes = event_quotes("second at third");
        let mut first = event_quotes("first at fourth");
        first.append(&mut quotes);
        let joined = join_snapshot(&first).unwrap();

        assert_eq!(joined[0].event_key, "first at fourth");
        assert_eq!(joined[1].event_key, "second at third");
    }

    #[test]
    fn missing_quote_is_unmatched() {
        let mut quotes = event_quotes("a at b");
        quotes.pop();
        let err = join_snapshot(&quotes).unwrap_err();

        assert!(matches!(err, ArbitrageError::UnmatchedEvent { .. }));
        assert!(err.to_string().contains("sportsbook away"));
    }

    #[test]
    fn single_venue_event_is_unmatched() {
        let quotes = vec![
            Quote::new("a at b", Side::Home, Venue::Exchange, dec!(0.55)),
            Quote::new("a at b", Side::Away, Venue::Exchange, dec!(0.47)),
        ];
        assert!(join_snapshot(&quotes).is_err());
    }

    #[test]
    fn duplicate_quote_is_unmatched() {
        let mut quotes = event_quotes("a at b");
        quotes.push(Quote::new("a at b", Side::Home, Venue::Exchange, dec!(0.56)));
        let err = join_snapshot(&quotes).unwrap_err();

        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn empty_snapshot_joins_to_nothing() {
        assert!(join_snapshot(&[]).unwrap().is_empty());
    }
}
