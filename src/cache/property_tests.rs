//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify cache correctness properties over arbitrary
//! keys and JSON payloads.

use proptest::prelude::*;
use serde_json::{json, Value};

use crate::cache::{cache_key, ResponseCache};

// == Test Configuration ==
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
/// Generates cache keys in the shape real call sites produce
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|s| s)
}

/// Generates small arbitrary JSON payloads (the cache treats them as opaque)
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,32}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,8}", inner, 0..4)
                .prop_map(|m| json!(m)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any key and JSON payload, storing and retrieving before expiry
    // returns the exact value that was stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut cache = ResponseCache::new(TEST_DEFAULT_TTL);

        cache.set(key.clone(), value.clone(), None);

        let retrieved = cache.get(&key);
        prop_assert_eq!(retrieved, Some(value), "Round-trip value mismatch");
    }

    // For any key, storing V1 and then V2 under the same key returns V2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
    ) {
        let mut cache = ResponseCache::new(TEST_DEFAULT_TTL);

        cache.set(key.clone(), v1, None);
        cache.set(key.clone(), v2.clone(), None);

        prop_assert_eq!(cache.get(&key), Some(v2));
        prop_assert_eq!(cache.len(), 1, "Overwrite must not grow the cache");
    }

    // A miss never mutates the cache.
    #[test]
    fn prop_miss_has_no_side_effect(
        stored in key_strategy(),
        probed in key_strategy(),
        value in value_strategy(),
    ) {
        let mut cache = ResponseCache::new(TEST_DEFAULT_TTL);
        cache.set(stored.clone(), value, None);

        let len_before = cache.len();
        let _ = cache.get(&probed);
        prop_assert_eq!(cache.len(), len_before);
    }

    // Key construction is deterministic and keeps distinct operations and
    // distinct parameter lists apart.
    #[test]
    fn prop_cache_key_separation(
        op_a in "[a-z_]{1,16}",
        op_b in "[a-z_]{1,16}",
        param in "[a-zA-Z0-9]{1,16}",
    ) {
        prop_assert_eq!(
            cache_key(&op_a, &[&param]),
            cache_key(&op_a, &[&param]),
            "Key construction must be deterministic"
        );
        if op_a != op_b {
            prop_assert_ne!(cache_key(&op_a, &[&param]), cache_key(&op_b, &[&param]));
        }
        prop_assert_ne!(
            cache_key(&op_a, &[&param]),
            cache_key(&op_a, &[]),
            "Parameterized and bare keys must differ"
        );
    }
}
