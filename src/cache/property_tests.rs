//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check round-trip, expiry and statistics behaviour over
//! arbitrary keys, timestamps and operation sequences.

use proptest::prelude::*;

use crate::cache::{CacheKey, DrawCache};
use crate::models::{DrawPayload, DrawRecord, GameType, ThreeDigitDraw};

// == Test Configuration ==
const TTL_SECS: u64 = 300;
const TTL_MS: u64 = TTL_SECS * 1000;
const T0: u64 = 1_700_000_000_000;

// == Strategies ==
fn game_strategy() -> impl Strategy<Value = GameType> {
    prop_oneof![Just(GameType::ThreeDigit), Just(GameType::SixPlusOne)]
}

fn key_strategy() -> impl Strategy<Value = CacheKey> {
    (game_strategy(), 1usize..1000).prop_map(|(game, limit)| CacheKey::new(game, limit))
}

fn payload_strategy() -> impl Strategy<Value = DrawPayload> {
    ("[0-9]{7}", "[0-9]{3}").prop_map(|(period, number)| {
        DrawPayload::new(
            vec![DrawRecord::ThreeDigit(ThreeDigitDraw {
                period,
                date: "2024-01-01".to_string(),
                number,
                sum: 0,
                span: 0,
                odd_count: 0,
                even_count: 3,
                big_count: 0,
                small_count: 3,
            })],
            "prop",
        )
    })
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: CacheKey, payload: DrawPayload },
    Get { key: CacheKey },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), payload_strategy())
            .prop_map(|(key, payload)| CacheOp::Put { key, payload }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // put(k, v) followed by get(k) within the TTL returns v.
    #[test]
    fn prop_roundtrip_within_ttl(
        key in key_strategy(),
        payload in payload_strategy(),
        elapsed in 0u64..TTL_MS
    ) {
        let mut cache = DrawCache::new(TTL_SECS);
        cache.put_at(key, payload.clone(), T0);

        prop_assert_eq!(cache.get_at(&key, T0 + elapsed), Some(payload));
    }

    // Once the TTL has elapsed the entry is absent.
    #[test]
    fn prop_miss_after_ttl(
        key in key_strategy(),
        payload in payload_strategy(),
        extra in 0u64..10_000_000
    ) {
        let mut cache = DrawCache::new(TTL_SECS);
        cache.put_at(key, payload, T0);

        prop_assert!(cache.get_at(&key, T0 + TTL_MS + extra).is_none());
    }

    // A storage time ahead of the clock is a miss, never a hit.
    #[test]
    fn prop_future_entries_fail_open(
        key in key_strategy(),
        payload in payload_strategy(),
        skew in 1u64..1_000_000
    ) {
        let mut cache = DrawCache::new(TTL_SECS);
        cache.put_at(key, payload, T0 + skew);

        prop_assert!(cache.get_at(&key, T0).is_none());
    }

    // Hit and miss counters match what the caller observed, and the entry
    // count matches a model map.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut cache = DrawCache::new(TTL_SECS);
        let mut model = std::collections::HashMap::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Put { key, payload } => {
                    cache.put_at(key, payload.clone(), T0);
                    model.insert(key, payload);
                }
                CacheOp::Get { key } => {
                    let got = cache.get_at(&key, T0);
                    prop_assert_eq!(got.as_ref(), model.get(&key));
                    match got {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.clear();
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }
}
