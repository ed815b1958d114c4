//! Property-based tests for suggestions, sparklines and the dashboard store.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stocker_core::{DashboardStore, JitterSparkline, Quote, WatchlistConfig};

// =============================================================================
// Generators
// =============================================================================

fn arb_symbol() -> impl Strategy<Value = String> {
    "[A-Z]{1,5}"
}

fn arb_watchlist() -> impl Strategy<Value = WatchlistConfig> {
    proptest::collection::vec(arb_symbol(), 1..12).prop_map(WatchlistConfig::new)
}

fn quote(symbol: &str, price: f64) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        current_price: price,
        change: 0.0,
        change_percent: 0.0,
        high: price,
        low: price,
        sparkline: vec![price; 10],
    }
}

#[derive(Clone, Debug)]
enum Command {
    Replace(Vec<String>),
    Prepend(String),
    BeginRefresh,
    FinishRefresh(bool),
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        proptest::collection::vec(arb_symbol(), 0..6).prop_map(Command::Replace),
        arb_symbol().prop_map(Command::Prepend),
        Just(Command::BeginRefresh),
        any::<bool>().prop_map(Command::FinishRefresh),
    ]
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Suggestions are exactly the entries containing the query, ignoring
    /// case, in watchlist order.
    #[test]
    fn prop_suggestions_are_ordered_substring_matches(
        watchlist in arb_watchlist(),
        query in "[a-zA-Z]{1,3}"
    ) {
        let suggestions = watchlist.suggestions(&query);

        let expected: Vec<String> = watchlist
            .symbols()
            .iter()
            .filter(|s| s.to_lowercase().contains(&query.to_lowercase()))
            .cloned()
            .collect();

        prop_assert_eq!(suggestions, expected);
    }

    #[test]
    fn prop_empty_query_suggests_nothing(watchlist in arb_watchlist()) {
        prop_assert!(watchlist.suggestions("").is_empty());
    }

    /// Every sample sits in `[price, price + 5)`.
    #[test]
    fn prop_sparkline_stays_within_spread(
        price in 0.01f64..10_000.0,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = JitterSparkline::default().synthesize(price, &mut rng);

        prop_assert_eq!(samples.len(), 10);
        for sample in samples {
            prop_assert!(sample >= price && sample < price + 5.0, "{} outside [{}, {})", sample, price, price + 5.0);
        }
    }

    /// Every store command bumps the version, and prepends never leave two
    /// entries with the same symbol.
    #[test]
    fn prop_store_versions_increase_and_prepends_coalesce(
        commands in proptest::collection::vec(arb_command(), 1..30)
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        runtime.block_on(async {
            let store = DashboardStore::new();
            let mut last = store.version().await;

            for command in commands {
                let version = match command {
                    Command::Replace(symbols) => {
                        let unique = WatchlistConfig::new(symbols);
                        let quotes = unique.symbols().iter().map(|s| quote(s, 1.0)).collect();
                        store.replace_quotes(quotes).await
                    }
                    Command::Prepend(symbol) => {
                        let version = store.prepend_quote(quote(&symbol, 2.0)).await;
                        let snapshot = store.snapshot().await;
                        assert_eq!(snapshot.quotes[0].symbol, symbol);
                        version
                    }
                    Command::BeginRefresh => store.begin_refresh().await,
                    Command::FinishRefresh(failed) => store.finish_refresh(failed).await,
                };
                assert!(version > last, "version {} did not increase past {}", version, last);
                last = version;

                let snapshot = store.snapshot().await;
                let mut seen = std::collections::HashSet::new();
                for q in &snapshot.quotes {
                    assert!(seen.insert(q.symbol.clone()), "duplicate {}", q.symbol);
                }
            }
        });
    }
}
