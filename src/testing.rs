// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

/// Pairs with a known exact edit distance: `(a, b, levenshtein)`.
pub const KNOWN_PAIRS: &[(&str, &str, usize)] = &[
    ("", "", 0),
    ("", "abc", 3),
    ("abc", "", 3),
    ("a", "a", 0),
    ("kitten", "sitting", 3),
    ("flaw", "lawn", 2),
    ("saturday", "sunday", 3),
    ("hello", "hallo", 1),
    ("photography", "phptography", 1),
    ("abcdef", "xabcdef", 1),
    ("ab", "ba", 2),
    ("cafe", "café", 1),
    ("intention", "execution", 5),
];

/// Substitute the first character, producing a term at edit distance 1.
pub fn mutate_term(term: &str) -> String {
    let mut chars: Vec<char> = term.chars().collect();
    if let Some(first) = chars.first_mut() {
        *first = if *first == 'x' { 'y' } else { 'x' };
    }
    chars.into_iter().collect()
}

/// Deterministic pseudo-words for benches: `count` words of `len` chars.
pub fn word_corpus(count: usize, len: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"etaoinshrdlucmfwypvbgkjqxz";
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| {
                    // xorshift64
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    ALPHABET[(state % ALPHABET.len() as u64) as usize] as char
                })
                .collect()
        })
        .collect()
}
