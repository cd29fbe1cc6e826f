//! Pure reductions over (filtered) collections.
//!
//! Every function is total: empty input yields the zero default, a zero
//! denominator yields `0.0`. Currency sums stay in integer arithmetic.

use std::collections::HashMap;
use std::hash::Hash;

/// Cardinality of the subset satisfying `pred`.
pub fn count_matching<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| pred(item)).count()
}

/// Partition counts by a categorical key, in first-seen key order.
pub fn count_by<T, K>(items: &[T], key: impl Fn(&T) -> K) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
{
    let mut order: Vec<K> = Vec::new();
    let mut counts: HashMap<K, usize> = HashMap::new();
    for item in items {
        let k = key(item);
        if !counts.contains_key(&k) {
            order.push(k.clone());
        }
        *counts.entry(k).or_insert(0) += 1;
    }
    order
        .into_iter()
        .map(|k| {
            let n = counts[&k];
            (k, n)
        })
        .collect()
}

/// Exact integer sum of a numeric field (whole-unit currency).
pub fn sum<T>(items: &[T], f: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(f).sum()
}

/// Ratio of two counts as a percentage. Zero denominator yields 0.
pub fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Percentage change between two period metrics:
/// `(current - previous) / previous * 100`. Zero previous yields 0.
pub fn growth(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    (current - previous) as f64 / previous as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_defaults() {
        let empty: Vec<i64> = vec![];
        assert_eq!(count_matching(&empty, |_| true), 0);
        assert_eq!(sum(&empty, |n| *n), 0);
        assert!(count_by(&empty, |n| *n).is_empty());
        assert_eq!(rate(0, 0), 0.0);
        assert_eq!(growth(0, 0), 0.0);
    }

    #[test]
    fn test_count_by_preserves_first_seen_order() {
        let statuses = ["pending", "delivered", "pending", "shipped", "delivered"];
        let counts = count_by(&statuses, |s| *s);
        assert_eq!(
            counts,
            vec![("pending", 2), ("delivered", 2), ("shipped", 1)]
        );
    }

    #[test]
    fn test_sum_is_exact_integer_arithmetic() {
        // repeated aggregation of large FCFA amounts must not drift
        let amounts = vec![11_700_000_i64; 1000];
        assert_eq!(sum(&amounts, |n| *n), 11_700_000_000);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let mut amounts = vec![125_000_i64, 48_500, 2_300_000, 760];
        let forward = sum(&amounts, |n| *n);
        amounts.reverse();
        assert_eq!(sum(&amounts, |n| *n), forward);
    }

    #[test]
    fn test_rate_premium_clients() {
        // 1 premium out of 4 clients
        assert_eq!(rate(1, 4), 25.0);
    }

    #[test]
    fn test_rate_zero_denominator_yields_zero() {
        assert_eq!(rate(5, 0), 0.0);
    }

    #[test]
    fn test_growth_between_periods() {
        let g = growth(13_300_000, 11_700_000);
        assert!((g - 13.675213675213676).abs() < 1e-9);
    }

    #[test]
    fn test_growth_zero_previous_yields_zero() {
        assert_eq!(growth(13_300_000, 0), 0.0);
    }

    #[test]
    fn test_growth_can_be_negative() {
        assert!(growth(9_000_000, 10_000_000) < 0.0);
    }
}
