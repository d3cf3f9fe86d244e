//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export canonical fixtures from siftmetric::testing
pub use siftmetric::testing::{mutate_term, KNOWN_PAIRS};

// ============================================================================
// ORACLES
// ============================================================================

/// Independent Levenshtein implementation (strsim) counting chars.
pub fn oracle_levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Float comparison for similarity values built from small integer ratios.
pub fn approx_eq(x: f64, y: f64) -> bool {
    (x - y).abs() < 1e-9
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a small alphabet, so random pairs share characters often.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-f]{0,16}").unwrap()
}

/// Words with diacritics and multi-byte scripts mixed in.
pub fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'é', 'ē', 'ṣ', 'త', 'ె', '日']),
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Optional word: `None` about a fifth of the time.
pub fn optional_word_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.8, word_strategy())
}
