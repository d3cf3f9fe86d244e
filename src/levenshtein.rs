// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact edit distance.
//!
//! Two entry points with different jobs:
//! - [`levenshtein_distance`] fills the full `(n + 1) × (m + 1)` table and returns
//!   the exact distance. This is the last, most expensive stage of the cascades.
//! - [`levenshtein_within`] only answers "is it at most `max`?". It walks a band of
//!   width `2·max + 1` around the diagonal and gives up as soon as a row is over.
//!
//! Both count insertions, deletions and substitutions at cost 1.
//!
//! The key property the cascades lean on: `|len(a) - len(b)|` is a lower bound on
//! edit distance. If two sequences differ in length by at least the threshold, the
//! table never needs to be built.

use crate::contracts::check_length_lower_bound;

/// Exact Levenshtein distance over two sequences.
///
/// Dense table, no rolling-row trick: memory is `(len(a) + 1) × (len(b) + 1)` words.
/// The cascades exist so that long dissimilar pairs never reach this function.
pub fn levenshtein_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = a.len();
    let m = b.len();
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let width = m + 1;
    let mut distance = vec![0usize; (n + 1) * width];
    for i in 0..=n {
        distance[i * width] = i;
    }
    for j in 0..=m {
        distance[j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let deletion = distance[(i - 1) * width + j] + 1;
            let insertion = distance[i * width + j - 1] + 1;
            let substitution = distance[(i - 1) * width + j - 1] + cost;
            distance[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }

    let result = distance[n * width + m];
    check_length_lower_bound(result, n, m);
    result
}

/// [`levenshtein_distance`] over the chars of two strings.
pub fn str_levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_distance(&a, &b)
}

/// Is `levenshtein_distance(a, b) <= max`?
///
/// Banded DP over two rows: only cells with `|i - j| <= max` are computed,
/// everything outside the band is pinned at `max + 1`. Stops at the first row
/// whose minimum exceeds `max`, since row minima never decrease.
pub fn levenshtein_within<T: PartialEq>(a: &[T], b: &[T], max: usize) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (n, m) = (short.len(), long.len());
    if m - n > max {
        return false;
    }

    let over = max.saturating_add(1);
    let mut prev: Vec<usize> = (0..=n).map(|j| j.min(over)).collect();
    let mut curr = vec![over; n + 1];

    for i in 1..=m {
        // m - n <= max keeps lo <= n
        let lo = i.saturating_sub(max);
        let hi = i.saturating_add(max).min(n);
        curr.fill(over);
        if lo == 0 {
            curr[0] = i.min(over);
        }
        let mut row_min = curr[lo];

        for j in lo.max(1)..=hi {
            let cost = usize::from(long[i - 1] != short[j - 1]);
            let cell = prev[j]
                .saturating_add(1)
                .min(curr[j - 1].saturating_add(1))
                .min(prev[j - 1].saturating_add(cost))
                .min(over);
            curr[j] = cell;
            row_min = row_min.min(cell);
        }

        if row_min > max {
            return false;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n] <= max
}
